use std::{
    cmp::Ordering,
    fmt,
    io::{self, Read, Write},
};

use itertools::Itertools;
use num_traits::{AsPrimitive, NumCast, ToPrimitive, Zero};

use super::element::{is_exactly_equal, Element};

/// A fixed-size, homogeneous sequence of `N` values of `T`,
/// used as the base representation of small vectors.
///
/// Indexing with `[]` is bounds-checked and panics on an out-of-range index.
/// See [`Tuple::get`] for a non-panicking variant and
/// [`Tuple::get_unchecked`] for the unchecked fast path.
///
/// `N` must be at least 1; constructing a `Tuple<0, T>` fails to compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Index, derive_more::IndexMut)]
#[repr(transparent)]
pub struct Tuple<const N: usize, T>([T; N]);

impl<const N: usize, T> Tuple<N, T> {
    /// The number of elements.
    pub const SIZE: usize = N;

    pub(crate) const NONEMPTY: () = assert!(N > 0, "a tuple must hold at least one element");

    /// Construct a tuple holding `vals`, in order.
    #[inline]
    pub const fn new(vals: [T; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONEMPTY;
        Self(vals)
    }

    /// Construct a tuple with every element set to `val`.
    #[inline]
    pub fn splat(val: T) -> Self
    where
        T: Copy,
    {
        Self::new([val; N])
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always false, a tuple holds at least one element.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns the element at `index` mutably, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `N`. Checked by a debug assertion only.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N, "index {} out of bounds for Tuple<{}, _>", index, N);
        // SAFETY: caller guarantees index < N
        unsafe { self.0.get_unchecked(index) }
    }

    /// Returns the element at `index` mutably, without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `N`. Checked by a debug assertion only.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N, "index {} out of bounds for Tuple<{}, _>", index, N);
        // SAFETY: caller guarantees index < N
        unsafe { self.0.get_unchecked_mut(index) }
    }

    /// The backing storage, `N` elements long.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// The backing storage, mutably.
    /// Writes through the slice are the same as writes by index.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Copy every element into the front of `dst`, converting each
    /// with `as`-cast semantics.
    ///
    /// # Panics
    /// If `dst` is shorter than `N`.
    pub fn copy_to_slice<S>(&self, dst: &mut [S])
    where
        T: AsPrimitive<S>,
        S: Copy + 'static,
    {
        assert!(
            dst.len() >= N,
            "destination holds {} elements, tuple has {}",
            dst.len(),
            N
        );
        for (d, &v) in dst.iter_mut().zip(&self.0) {
            *d = v.as_();
        }
    }
}

impl<const N: usize, T: Copy + Zero + 'static> Tuple<N, T> {
    /// Convert a tuple of any size and element type into this one.
    ///
    /// The first `min(N, M)` elements are converted with `as`-cast semantics.
    /// Converting from a larger tuple truncates, and converting from a
    /// smaller one sets the extra elements to zero.
    pub fn convert_from<const M: usize, U>(src: &Tuple<M, U>) -> Self
    where
        U: AsPrimitive<T>,
    {
        let copy_end = N.min(M);
        Self::new(std::array::from_fn(|i| {
            if i < copy_end {
                src.0[i].as_()
            } else {
                T::zero()
            }
        }))
    }

    /// Like [`Tuple::convert_from`], but returns `None` if a copied element
    /// can't be represented in `T`.
    pub fn try_convert_from<const M: usize, U>(src: &Tuple<M, U>) -> Option<Self>
    where
        T: NumCast,
        U: ToPrimitive + Copy,
    {
        let mut vals = [T::zero(); N];
        for (dst, &v) in vals.iter_mut().zip(&src.0) {
            *dst = <T as NumCast>::from(v)?;
        }
        Some(Self::new(vals))
    }

    pub fn zero() -> Self {
        Self::splat(T::zero())
    }
}

impl<const N: usize, T: Element> Tuple<N, T> {
    /// Returns a tuple of the absolute values of the elements.
    #[inline]
    pub fn abs(mut self) -> Self {
        for v in &mut self.0 {
            *v = v.abs_val();
        }
        self
    }

    /// Returns true if any element is NaN.
    #[inline]
    pub fn has_nan(&self) -> bool {
        self.0.iter().any(|v| v.is_nan())
    }

    /// Number of bytes written by [`Tuple::write_raw`].
    pub const RAW_LEN: usize = N * std::mem::size_of::<T>();

    /// Write the elements as one block of native-endian bytes.
    ///
    /// The output has no header and is only readable on a platform with the
    /// same byte order. Use [`Tuple::encode`] for anything that's persisted.
    pub fn write_raw<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(bytemuck::cast_slice(&self.0[..]))
    }

    /// Overwrite every element from a block written by [`Tuple::write_raw`].
    ///
    /// Fails with [`io::ErrorKind::UnexpectedEof`] if the reader runs out
    /// early, in which case the element values are unspecified.
    pub fn read_raw<R: Read>(&mut self, mut reader: R) -> io::Result<()> {
        reader.read_exact(bytemuck::cast_slice_mut(&mut self.0[..]))
    }
}

impl<const N: usize, T: Default> Default for Tuple<N, T> {
    /// All elements are `T::default()`, zero for the numeric types.
    fn default() -> Self {
        Self::new(std::array::from_fn(|_| T::default()))
    }
}

impl<const N: usize, T> From<[T; N]> for Tuple<N, T> {
    fn from(vals: [T; N]) -> Self {
        Self::new(vals)
    }
}

impl<const N: usize, T> From<Tuple<N, T>> for [T; N] {
    fn from(tuple: Tuple<N, T>) -> Self {
        tuple.0
    }
}

impl<const N: usize, T> AsRef<[T]> for Tuple<N, T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<const N: usize, T> AsMut<[T]> for Tuple<N, T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<const N: usize, T> IntoIterator for Tuple<N, T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, const N: usize, T> IntoIterator for &'a Tuple<N, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, const N: usize, T> IntoIterator for &'a mut Tuple<N, T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl<const N: usize, T: fmt::Display> fmt::Display for Tuple<N, T> {
    /// Formats as `[e0, e1, ...]`. Flags such as precision apply to each element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        fmt::Display::fmt(&self.0.iter().format(", "), f)?;
        f.write_str("]")
    }
}

// Ordering is lexicographic, but only the leading elements are tested
// with exact equality. The last element is always decided by the scalar
// comparison. `lexicographic_lt`/`lexicographic_gt` and the operators
// must agree for every input, NaN included.

impl<const N: usize, T: PartialOrd> PartialOrd for Tuple<N, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONEMPTY;
        for i in 0..N - 1 {
            if !is_exactly_equal(&self.0[i], &other.0[i]) {
                return self.0[i].partial_cmp(&other.0[i]);
            }
        }
        self.0[N - 1].partial_cmp(&other.0[N - 1])
    }
}

/// Returns true if `t0 < t1`, comparing elements in order of significance.
///
/// Elements `0..N-1` are scanned; the first one that isn't exactly equal
/// decides the result. If all of those match, the last element's `<` decides.
pub fn lexicographic_lt<const N: usize, T0, T1>(t0: &Tuple<N, T0>, t1: &Tuple<N, T1>) -> bool
where
    T0: PartialOrd<T1>,
{
    #[allow(clippy::let_unit_value)]
    let () = Tuple::<N, T0>::NONEMPTY;
    for i in 0..N - 1 {
        if !is_exactly_equal(&t0.0[i], &t1.0[i]) {
            return t0.0[i] < t1.0[i];
        }
    }
    t0.0[N - 1] < t1.0[N - 1]
}

/// Returns true if `t0 > t1`, comparing elements in order of significance.
///
/// Mirror image of [`lexicographic_lt`].
pub fn lexicographic_gt<const N: usize, T0, T1>(t0: &Tuple<N, T0>, t1: &Tuple<N, T1>) -> bool
where
    T0: PartialOrd<T1>,
{
    #[allow(clippy::let_unit_value)]
    let () = Tuple::<N, T0>::NONEMPTY;
    for i in 0..N - 1 {
        if !is_exactly_equal(&t0.0[i], &t1.0[i]) {
            return t0.0[i] > t1.0[i];
        }
    }
    t0.0[N - 1] > t1.0[N - 1]
}

/// Returns the element-wise absolute value of `t`.
#[inline]
pub fn abs<const N: usize, T: Element>(t: &Tuple<N, T>) -> Tuple<N, T> {
    t.abs()
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_set_then_get() {
        for i in 0..4 {
            let mut t = Tuple::new([10, 20, 30, 40]);
            let before = t;
            t[i] = -7;
            assert_eq!(-7, t[i]);
            for j in (0..4).filter(|&j| j != i) {
                assert_eq!(before[j], t[j]);
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let t = Tuple::new([1.0, 2.0, 3.0]);
        let past_end = t.len();
        let _ = t[past_end];
    }

    #[test]
    fn test_checked_access() {
        let mut t = Tuple::new([1u8, 2]);
        assert_eq!(Some(&2), t.get(1));
        assert_eq!(None, t.get(2));
        *t.get_mut(0).unwrap() = 9;
        assert!(t.get_mut(5).is_none());
        assert_eq!([9, 2], t.into_array());
    }

    #[test]
    fn test_unchecked_access() {
        let mut t = Tuple::new([4i64, 5, 6]);
        unsafe {
            *t.get_unchecked_mut(2) = 60;
            assert_eq!(5, *t.get_unchecked(1));
        }
        assert_eq!(60, t[2]);
    }

    #[test]
    fn test_default_and_zero() {
        assert_eq!(Tuple::new([0.0f32; 3]), Tuple::default());
        assert_eq!(Tuple::new([0i32; 4]), Tuple::zero());
        assert_eq!(Tuple::new([2u16, 2]), Tuple::splat(2));
        assert_eq!(4, Tuple::<4, i8>::SIZE);
        assert_eq!(4, Tuple::<4, i8>::zero().len());
    }

    #[test]
    fn test_convert_truncates() {
        let src = Tuple::new([1, 2, 3, 4, 5]);
        let dst = Tuple::<3, i32>::convert_from(&src);
        assert_eq!(Tuple::new([1, 2, 3]), dst);
    }

    #[test]
    fn test_convert_zero_extends() {
        let src = Tuple::new([7, 8]);
        let dst = Tuple::<4, i32>::convert_from(&src);
        assert_eq!(Tuple::new([7, 8, 0, 0]), dst);
    }

    #[test]
    fn test_convert_changes_type() {
        let src = Tuple::new([1.9f64, -2.5, 300.0]);
        let dst = Tuple::<4, i32>::convert_from(&src);
        assert_eq!(Tuple::new([1, -2, 300, 0]), dst);

        // Same as `as` casts
        let bytes = Tuple::<2, u8>::convert_from(&Tuple::new([300i32, -1]));
        assert_eq!(Tuple::new([44, 255]), bytes);

        let widened = Tuple::<3, f64>::convert_from(&Tuple::new([1i16, -4]));
        assert_eq!(Tuple::new([1.0, -4.0, 0.0]), widened);
    }

    #[test]
    fn test_try_convert() {
        let src = Tuple::new([1i64, 2, 3]);
        assert_eq!(
            Some(Tuple::new([1u8, 2, 3, 0])),
            Tuple::<4, u8>::try_convert_from(&src)
        );
        assert_eq!(
            Some(Tuple::new([1u8])),
            Tuple::<1, u8>::try_convert_from(&src)
        );

        let out_of_range = Tuple::new([1i64, 256]);
        assert_eq!(None, Tuple::<2, u8>::try_convert_from(&out_of_range));
        // Dropped elements aren't checked
        assert_eq!(
            Some(Tuple::new([1u8])),
            Tuple::<1, u8>::try_convert_from(&out_of_range)
        );
        assert_eq!(
            None,
            Tuple::<2, i32>::try_convert_from(&Tuple::new([0.0f32, f32::NAN]))
        );
    }

    #[test]
    fn test_copy_to_slice() {
        let t = Tuple::new([1i32, 2, 3]);
        let mut buf = [0.0f64; 5];
        t.copy_to_slice(&mut buf);
        assert_eq!([1.0, 2.0, 3.0, 0.0, 0.0], buf);
    }

    #[test]
    #[should_panic]
    fn test_copy_to_short_slice() {
        let t = Tuple::new([1i32, 2, 3]);
        let mut buf = [0i32; 2];
        t.copy_to_slice(&mut buf);
    }

    #[test]
    fn test_slice_aliases_elements() {
        let mut t = Tuple::new([1, 2, 3]);
        assert_eq!(&[1, 2, 3], t.as_slice());
        t.as_mut_slice()[1] = 20;
        assert_eq!(20, t[1]);
        t[2] = 30;
        assert_eq!(&[1, 20, 30], t.as_ref());
        assert_eq!(3, t.as_slice().len());
    }

    #[test]
    fn test_iterators() {
        let mut t = Tuple::new([1, 2, 3]);
        for v in &mut t {
            *v *= 2;
        }
        assert_eq!(12, t.iter().sum::<i32>());
        assert_eq!(vec![2, 4, 6], t.into_iter().collect::<Vec<_>>());
        let arr: [i32; 3] = t.into();
        assert_eq!([2, 4, 6], arr);
    }

    #[test]
    fn test_display() {
        assert_eq!("[1, 2, 3]", Tuple::new([1, 2, 3]).to_string());
        assert_eq!("[-4]", Tuple::new([-4]).to_string());
        assert_eq!("[1.5, -0.25]", Tuple::new([1.5, -0.25]).to_string());
        assert_eq!("[1.50, 2.00]", format!("{:.2}", Tuple::new([1.5, 2.0])));
    }

    #[test]
    fn test_raw_round_trip() {
        let t = Tuple::new([1.25f64, -3.5, f64::MAX, 0.0]);
        let mut buf = Vec::new();
        t.write_raw(&mut buf).unwrap();
        assert_eq!(Tuple::<4, f64>::RAW_LEN, buf.len());
        assert_eq!(32, buf.len());

        let mut read = Tuple::<4, f64>::default();
        read.read_raw(Cursor::new(&buf)).unwrap();
        assert_eq!(t, read);
    }

    #[test]
    fn test_raw_layout_is_native() {
        let t = Tuple::new([0x0102u16, 0x0304]);
        let mut buf = Vec::new();
        t.write_raw(&mut buf).unwrap();
        let mut expected = Vec::new();
        expected.extend_from_slice(&0x0102u16.to_ne_bytes());
        expected.extend_from_slice(&0x0304u16.to_ne_bytes());
        assert_eq!(expected, buf);
    }

    #[test]
    fn test_raw_short_read() {
        let mut t = Tuple::<3, i32>::zero();
        let err = t.read_raw(Cursor::new(vec![0u8; 11])).unwrap_err();
        assert_eq!(io::ErrorKind::UnexpectedEof, err.kind());
    }

    #[test]
    fn test_ordering_examples() {
        let a = Tuple::new([1, 5]);
        let b = Tuple::new([1, 3]);
        assert!(lexicographic_gt(&a, &b));
        assert!(!lexicographic_lt(&a, &b));
        assert!(a > b);

        let a = Tuple::new([2, 0]);
        let b = Tuple::new([1, 9]);
        assert!(lexicographic_gt(&a, &b));
        assert!(lexicographic_lt(&b, &a));
        assert!(b < a);
    }

    #[test]
    fn test_ordering_equal() {
        let a = Tuple::new([3.0, 4.0, 5.0]);
        assert!(!lexicographic_lt(&a, &a));
        assert!(!lexicographic_gt(&a, &a));
        assert_eq!(Some(Ordering::Equal), a.partial_cmp(&a));
    }

    #[test]
    fn test_ordering_single_element() {
        let a = Tuple::new([1u32]);
        let b = Tuple::new([2u32]);
        assert!(lexicographic_lt(&a, &b));
        assert!(lexicographic_gt(&b, &a));
        assert!(a < b);
    }

    #[test]
    fn test_ordering_signed_zero() {
        // -0.0 and 0.0 are exactly equal, so the next element decides
        let a = Tuple::new([-0.0, 2.0]);
        let b = Tuple::new([0.0, 1.0]);
        assert!(lexicographic_gt(&a, &b));
        assert!(a > b);
    }

    #[test]
    fn test_ordering_nan() {
        let a = Tuple::new([f64::NAN, 0.0]);
        let b = Tuple::new([1.0, 0.0]);
        assert!(a.has_nan());
        assert!(!b.has_nan());
        assert!(!lexicographic_lt(&a, &b));
        assert!(!lexicographic_gt(&a, &b));
        assert_eq!(None, a.partial_cmp(&b));
        assert!(!(a < b) && !(a > b));

        let c = Tuple::new([1.0, f64::NAN]);
        assert!(!lexicographic_lt(&b, &c));
        assert!(!lexicographic_gt(&b, &c));
        assert!(!(b < c) && !(b > c));
    }

    #[test]
    fn test_ordering_matches_operators() {
        let tuples = [
            Tuple::new([0, 0, 0]),
            Tuple::new([0, 0, 1]),
            Tuple::new([0, 1, -1]),
            Tuple::new([1, -5, 0]),
            Tuple::new([-1, 9, 9]),
        ];
        for a in &tuples {
            for b in &tuples {
                assert_eq!(lexicographic_lt(a, b), a < b);
                assert_eq!(lexicographic_gt(a, b), a > b);
            }
        }
    }

    #[test]
    fn test_abs() {
        assert_eq!(Tuple::new([1, 2, 3]), abs(&Tuple::new([-1, 2, -3])));

        let t = abs(&Tuple::new([-1.5f64, 2.5]));
        assert_relative_eq!(1.5, t[0]);
        assert_relative_eq!(2.5, t[1]);

        assert_eq!(Tuple::new([3u8, 0]), Tuple::new([3u8, 0]).abs());
    }
}
