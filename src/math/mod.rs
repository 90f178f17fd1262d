mod codec;
pub mod element;
mod tuple;

pub use codec::{FORMAT_VERSION, HEADER_LEN, MAGIC};
pub use element::{is_exactly_equal, is_integral, Element};
pub use tuple::{abs, lexicographic_gt, lexicographic_lt, Tuple};

use crate::Float;

pub type Tuple2f = Tuple<2, Float>;
pub type Tuple3f = Tuple<3, Float>;
pub type Tuple4f = Tuple<4, Float>;
pub type Tuple2i = Tuple<2, i32>;
pub type Tuple3i = Tuple<3, i32>;
pub type Tuple4i = Tuple<4, i32>;
