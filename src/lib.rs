pub mod math;
pub mod util;

pub use math::Tuple;
pub use util::error::CodecError;

// Choice of representation of floats
#[cfg(feature = "use-f64")]
pub type Float = f64;

#[cfg(not(feature = "use-f64"))]
pub type Float = f32;
