use num_complex::{Complex32, Complex64};
use crate::frame::{Buf, Store};

//

/// Element type of an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumType
{
    /// Real single precision (`f32`).
    F32,
    /// Real double precision (`f64`).
    F64,
    /// Complex single precision ([`Complex32`]).
    C32,
    /// Complex double precision ([`Complex64`]).
    C64,
    /// Integer (`i64`), used for index/stride bookkeeping only.
    /// Never a computational type.
    Int,
}

impl NumType
{
    /// Checks if a real floating-point type.
    pub fn is_real(&self) -> bool
    {
        match self {
            NumType::F32 | NumType::F64 => true,
            _ => false,
        }
    }

    /// Checks if a complex floating-point type.
    pub fn is_complex(&self) -> bool
    {
        match self {
            NumType::C32 | NumType::C64 => true,
            _ => false,
        }
    }

    /// Checks if the integer bookkeeping type.
    pub fn is_integer(&self) -> bool
    {
        *self == NumType::Int
    }

    /// Component precision in bits.
    pub fn precision(&self) -> usize
    {
        match self {
            NumType::F32 | NumType::C32 => 32,
            NumType::F64 | NumType::C64 | NumType::Int => 64,
        }
    }

    /// Checks if a scalar of this type may multiply elements of `target`.
    ///
    /// Returns `true` for an exact match, and for the documented
    /// mixed-precision set: a real scalar of equal or lower component
    /// precision widens onto any computational target with zero imaginary
    /// part. Narrowing is never implicit, and the integer type never takes
    /// part.
    pub fn widens_to(&self, target: NumType) -> bool
    {
        if self.is_integer() || target.is_integer() {
            false
        }
        else if *self == target {
            true
        }
        else {
            self.is_real() && self.precision() <= target.precision()
        }
    }
}

impl core::fmt::Display for NumType
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{}", match self {
            NumType::F32 => "f32",
            NumType::F64 => "f64",
            NumType::C32 => "c32",
            NumType::C64 => "c64",
            NumType::Int => "int",
        })
    }
}

//

/// Supported element storage types.
///
/// Implemented for exactly `f32`, `f64`, [`Complex32`], [`Complex64`] and
/// `i64`, the closed family behind [`NumType`]. Converts elements to and
/// from canonical `f64` component pairs and wraps slices into the typed
/// [`Store`] of an object.
pub trait Element: Copy + 'static
{
    /// Element type tag.
    const NUM: NumType;

    /// Makes an element from canonical `f64` components.
    ///
    /// Returns the element; the imaginary component is dropped for real and
    /// integer types, and components narrow to the element's own precision.
    /// * `re` is the real component.
    /// * `im` is the imaginary component.
    fn from_parts(re: f64, im: f64) -> Self;

    /// Canonical `f64` components of an element.
    ///
    /// Returns a (real, imaginary) pair; the imaginary component is zero for
    /// real and integer types.
    fn parts(&self) -> (f64, f64);

    /// Wraps a shared slice into a typed store.
    fn store(buf: &[Self]) -> Store<'_>;

    /// Wraps a mutable slice into a typed store.
    fn store_mut(buf: &mut[Self]) -> Store<'_>;
}

impl Element for f32
{
    const NUM: NumType = NumType::F32;

    fn from_parts(re: f64, _im: f64) -> Self
    {
        re as f32
    }

    fn parts(&self) -> (f64, f64)
    {
        (f64::from(*self), 0.)
    }

    fn store(buf: &[Self]) -> Store<'_>
    {
        Store::F32(Buf::Ref(buf))
    }

    fn store_mut(buf: &mut[Self]) -> Store<'_>
    {
        Store::F32(Buf::Mut(buf))
    }
}

impl Element for f64
{
    const NUM: NumType = NumType::F64;

    fn from_parts(re: f64, _im: f64) -> Self
    {
        re
    }

    fn parts(&self) -> (f64, f64)
    {
        (*self, 0.)
    }

    fn store(buf: &[Self]) -> Store<'_>
    {
        Store::F64(Buf::Ref(buf))
    }

    fn store_mut(buf: &mut[Self]) -> Store<'_>
    {
        Store::F64(Buf::Mut(buf))
    }
}

impl Element for Complex32
{
    const NUM: NumType = NumType::C32;

    fn from_parts(re: f64, im: f64) -> Self
    {
        Complex32::new(re as f32, im as f32)
    }

    fn parts(&self) -> (f64, f64)
    {
        (f64::from(self.re), f64::from(self.im))
    }

    fn store(buf: &[Self]) -> Store<'_>
    {
        Store::C32(Buf::Ref(buf))
    }

    fn store_mut(buf: &mut[Self]) -> Store<'_>
    {
        Store::C32(Buf::Mut(buf))
    }
}

impl Element for Complex64
{
    const NUM: NumType = NumType::C64;

    fn from_parts(re: f64, im: f64) -> Self
    {
        Complex64::new(re, im)
    }

    fn parts(&self) -> (f64, f64)
    {
        (self.re, self.im)
    }

    fn store(buf: &[Self]) -> Store<'_>
    {
        Store::C64(Buf::Ref(buf))
    }

    fn store_mut(buf: &mut[Self]) -> Store<'_>
    {
        Store::C64(Buf::Mut(buf))
    }
}

impl Element for i64
{
    const NUM: NumType = NumType::Int;

    fn from_parts(re: f64, _im: f64) -> Self
    {
        re as i64
    }

    fn parts(&self) -> (f64, f64)
    {
        (*self as f64, 0.)
    }

    fn store(buf: &[Self]) -> Store<'_>
    {
        Store::Int(Buf::Ref(buf))
    }

    fn store_mut(buf: &mut[Self]) -> Store<'_>
    {
        Store::Int(Buf::Mut(buf))
    }
}

//

#[test]
fn test_num1()
{
    assert!(NumType::F32.is_real());
    assert!(!NumType::F32.is_complex());
    assert!(NumType::C64.is_complex());
    assert!(NumType::Int.is_integer());
    assert_eq!(NumType::C32.precision(), 32);
    assert_eq!(NumType::C64.precision(), 64);
}

#[test]
fn test_num2()
{
    // exact matches
    assert!(NumType::F32.widens_to(NumType::F32));
    assert!(NumType::C64.widens_to(NumType::C64));

    // real scalars widen
    assert!(NumType::F32.widens_to(NumType::F64));
    assert!(NumType::F32.widens_to(NumType::C32));
    assert!(NumType::F32.widens_to(NumType::C64));
    assert!(NumType::F64.widens_to(NumType::C64));

    // narrowing and complex-to-mismatched are rejected
    assert!(!NumType::F64.widens_to(NumType::F32));
    assert!(!NumType::F64.widens_to(NumType::C32));
    assert!(!NumType::C32.widens_to(NumType::C64));
    assert!(!NumType::C64.widens_to(NumType::F64));

    // the integer type never takes part
    assert!(!NumType::Int.widens_to(NumType::F64));
    assert!(!NumType::Int.widens_to(NumType::Int));
    assert!(!NumType::F64.widens_to(NumType::Int));
}

#[test]
fn test_num3()
{
    let e = Complex64::from_parts(1.5, -2.5);
    assert_eq!(e.parts(), (1.5, -2.5));

    let e = f32::from_parts(0.25, 9.);
    assert_eq!(e.parts(), (0.25, 0.));

    let e = i64::from_parts(-3.7, 1.);
    assert_eq!(e, -3);
}
