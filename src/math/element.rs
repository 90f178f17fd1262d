use std::fmt::{Debug, Display};

use bytemuck::Pod;
use num_traits::Zero;

/// Returns true if `a` and `b` compare equal with no tolerance.
///
/// Unlike an approximate comparison, `0.1 + 0.2` is not exactly equal to `0.3`.
#[inline(always)]
pub fn is_exactly_equal<A, B>(a: &A, b: &B) -> bool
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    a == b
}

/// Returns true if `T` is one of the integer element types.
#[inline(always)]
pub const fn is_integral<T: Element>() -> bool {
    T::IS_INTEGRAL
}

/// A scalar that can be stored in a [`Tuple`](super::Tuple).
///
/// Implemented for the primitive integer and floating point types.
/// The integer and float impls pick their own absolute value routine,
/// so the choice costs nothing at runtime.
pub trait Element: Pod + Zero + PartialOrd + Default + Debug + Display + Send + Sync {
    /// Whether this is an integer type.
    const IS_INTEGRAL: bool;
    /// Identifies the type in the portable encoding.
    const TAG: u8;
    const NAME: &'static str;

    /// The absolute value of `self`.
    ///
    /// Signed integers wrap on `MIN`, unsigned integers are returned unchanged.
    fn abs_val(self) -> Self;

    /// Always false for integer types.
    fn is_nan(self) -> bool;

    /// Append the little-endian bytes of `self` to `out`.
    fn extend_le(self, out: &mut Vec<u8>);

    /// Read a value from exactly `size_of::<Self>()` little-endian bytes.
    ///
    /// # Panics
    /// If `bytes` has the wrong length.
    fn from_le_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_element {
    (@bytes $t:ty) => {
        #[inline]
        fn extend_le(self, out: &mut Vec<u8>) {
            out.extend_from_slice(&self.to_le_bytes());
        }

        #[inline]
        fn from_le_slice(bytes: &[u8]) -> Self {
            let mut buf = [0u8; std::mem::size_of::<$t>()];
            buf.copy_from_slice(bytes);
            <$t>::from_le_bytes(buf)
        }
    };
    (signed: $($t:ty => $tag:expr),* $(,)?) => {
        $(
            impl Element for $t {
                const IS_INTEGRAL: bool = true;
                const TAG: u8 = $tag;
                const NAME: &'static str = stringify!($t);

                #[inline]
                fn abs_val(self) -> Self {
                    self.wrapping_abs()
                }

                #[inline]
                fn is_nan(self) -> bool {
                    false
                }

                impl_element!(@bytes $t);
            }
        )*
    };
    (unsigned: $($t:ty => $tag:expr),* $(,)?) => {
        $(
            impl Element for $t {
                const IS_INTEGRAL: bool = true;
                const TAG: u8 = $tag;
                const NAME: &'static str = stringify!($t);

                #[inline]
                fn abs_val(self) -> Self {
                    self
                }

                #[inline]
                fn is_nan(self) -> bool {
                    false
                }

                impl_element!(@bytes $t);
            }
        )*
    };
    (float: $($t:ty => $tag:expr),* $(,)?) => {
        $(
            impl Element for $t {
                const IS_INTEGRAL: bool = false;
                const TAG: u8 = $tag;
                const NAME: &'static str = stringify!($t);

                #[inline]
                fn abs_val(self) -> Self {
                    self.abs()
                }

                #[inline]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }

                impl_element!(@bytes $t);
            }
        )*
    };
}

impl_element!(signed: i8 => 1, i16 => 2, i32 => 3, i64 => 4);
impl_element!(unsigned: u8 => 5, u16 => 6, u32 => 7, u64 => 8);
impl_element!(float: f32 => 9, f64 => 10);

/// Name of the element type with the given tag, if any.
pub fn element_name(tag: u8) -> Option<&'static str> {
    let name = match tag {
        i8::TAG => i8::NAME,
        i16::TAG => i16::NAME,
        i32::TAG => i32::NAME,
        i64::TAG => i64::NAME,
        u8::TAG => u8::NAME,
        u16::TAG => u16::NAME,
        u32::TAG => u32::NAME,
        u64::TAG => u64::NAME,
        f32::TAG => f32::NAME,
        f64::TAG => f64::NAME,
        _ => return None,
    };
    Some(name)
}
