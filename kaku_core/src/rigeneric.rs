use num_traits::{Float, Signed};
use num_complex::Complex;
use core::marker::PhantomData;
use crate::frame::{Conj, Kernel};

/// `num::Float`-generic [`Kernel`] implementation over the real domain
///
/// Each element is a single `F` and the imaginary lane is carried as zero.
/// All component arithmetic is written in pure Rust.
#[derive(Clone)]
pub struct RealGeneric<F>
{
    ph_f: PhantomData<F>,
}

impl<F: Float + Signed> Kernel for RealGeneric<F>
{
    type R = F;
    type E = F;

    fn pack(re: F, _im: F) -> F
    {
        re
    }

    fn unpack(e: F) -> (F, F)
    {
        (e, F::zero())
    }

    fn scal(ar: F, _ai: F, xr: F, xi: F) -> (F, F)
    {
        (ar * xr, ar * xi)
    }

    fn scalcj(_conj: Conj, ar: F, ai: F, xr: F, xi: F) -> (F, F)
    {
        Self::scal(ar, ai, xr, xi)
    }

    fn axpy(ar: F, _ai: F, xr: F, xi: F, yr: F, yi: F) -> (F, F)
    {
        (ar * xr + yr, ar * xi + yi)
    }

    fn conj(xr: F, xi: F) -> (F, F)
    {
        (xr, xi)
    }
}

//

/// `num::Float`-generic [`Kernel`] implementation over the complex domain
///
/// Elements are `num::Complex<F>` pairs split into explicit real and
/// imaginary components. All component arithmetic is written in pure Rust.
#[derive(Clone)]
pub struct ComplexGeneric<F>
{
    ph_f: PhantomData<F>,
}

impl<F: Float + Signed> Kernel for ComplexGeneric<F>
{
    type R = F;
    type E = Complex<F>;

    fn pack(re: F, im: F) -> Complex<F>
    {
        Complex::new(re, im)
    }

    fn unpack(e: Complex<F>) -> (F, F)
    {
        (e.re, e.im)
    }

    fn scal(ar: F, ai: F, xr: F, xi: F) -> (F, F)
    {
        (ar * xr - ai * xi, ar * xi + ai * xr)
    }

    fn scalcj(conj: Conj, ar: F, ai: F, xr: F, xi: F) -> (F, F)
    {
        if conj.is_conj() {
            Self::scal(ar, ai, xr, -xi)
        }
        else {
            Self::scal(ar, ai, xr, xi)
        }
    }

    fn axpy(ar: F, ai: F, xr: F, xi: F, yr: F, yi: F) -> (F, F)
    {
        (ar * xr - ai * xi + yr, ar * xi + ai * xr + yi)
    }

    fn conj(xr: F, xi: F) -> (F, F)
    {
        (xr, -xi)
    }
}

//

/// Integer [`Kernel`] implementation for the bookkeeping element type
///
/// Conjugation over integers is the identity, so `scalcj` and `conj` never
/// touch either component regardless of the requested flag.
#[derive(Clone)]
pub struct IndexGeneric;

impl Kernel for IndexGeneric
{
    type R = i64;
    type E = i64;

    fn pack(re: i64, _im: i64) -> i64
    {
        re
    }

    fn unpack(e: i64) -> (i64, i64)
    {
        (e, 0)
    }

    fn scal(ar: i64, _ai: i64, xr: i64, xi: i64) -> (i64, i64)
    {
        (ar * xr, ar * xi)
    }

    fn scalcj(_conj: Conj, ar: i64, ai: i64, xr: i64, xi: i64) -> (i64, i64)
    {
        Self::scal(ar, ai, xr, xi)
    }

    fn axpy(ar: i64, _ai: i64, xr: i64, xi: i64, yr: i64, yi: i64) -> (i64, i64)
    {
        (ar * xr + yr, ar * xi + yi)
    }

    fn conj(xr: i64, xi: i64) -> (i64, i64)
    {
        (xr, xi)
    }
}

//

#[test]
fn test_rigeneric1()
{
    type K = RealGeneric<f64>;
    type KS = RealGeneric<f32>;

    // the real domain ignores the conjugation flag entirely
    assert_eq!(K::scalcj(Conj::NoConjugate, 2., 0., 3., 0.), K::scal(2., 0., 3., 0.));
    assert_eq!(K::scalcj(Conj::Conjugate, 2., 0., 3., 0.), K::scal(2., 0., 3., 0.));
    assert_eq!(K::scal(2., 0., 3., 0.), (6., 0.));
    assert_eq!(K::axpy(2., 0., 3., 0., 10., 0.), (16., 0.));

    assert_eq!(KS::scalcj(Conj::NoConjugate, 2., 0., 3., 0.), KS::scal(2., 0., 3., 0.));
    assert_eq!(KS::scalcj(Conj::Conjugate, 2., 0., 3., 0.), KS::scal(2., 0., 3., 0.));
    assert_eq!(KS::scal(2., 0., 3., 0.), (6., 0.));
}

#[test]
fn test_rigeneric2()
{
    use float_eq::assert_float_eq;

    type K = ComplexGeneric<f64>;

    // (2+i)*(3+4i) = 2+11i
    let (r, i) = K::scalcj(Conj::NoConjugate, 2., 1., 3., 4.);
    assert_float_eq!([r, i], [2., 11.], abs_all <= 1e-12);

    // (2+i)*conj(3+4i) = 10-5i; conjugating the scalar instead would
    // give 10+5i
    let (r, i) = K::scalcj(Conj::Conjugate, 2., 1., 3., 4.);
    assert_float_eq!([r, i], [10., -5.], abs_all <= 1e-12);
}

#[test]
fn test_rigeneric3()
{
    use float_eq::assert_float_eq;

    type K = ComplexGeneric<f64>;
    type KC = ComplexGeneric<f32>;

    let (xr, xi) = (0.125, -3.75);
    let (cr, ci) = K::conj(xr, xi);
    assert_float_eq!([cr, ci], [0.125, 3.75], abs_all <= 1e-12);
    let (rr, ri) = K::conj(cr, ci);
    assert_float_eq!([rr, ri], [xr, xi], abs_all <= 1e-12);

    let (cr, ci) = KC::conj(0.125_f32, -3.75);
    assert_eq!(KC::conj(cr, ci), (0.125, -3.75));
}

#[test]
fn test_rigeneric4()
{
    type K = IndexGeneric;

    // integer conjugated scaling must leave both components alone
    assert_eq!(K::scalcj(Conj::NoConjugate, 2, 0, 3, 7), K::scal(2, 0, 3, 7));
    assert_eq!(K::scalcj(Conj::Conjugate, 2, 0, 3, 7), K::scal(2, 0, 3, 7));
    assert_eq!(K::scalcj(Conj::Conjugate, 2, 0, 3, 7), (6, 14));
    assert_eq!(K::conj(3, 7), (3, 7));
}

#[test]
fn test_rigeneric5()
{
    use float_eq::assert_float_eq;

    type K = ComplexGeneric<f64>;

    // (1+2i)*(3+4i) + (10+20i) = 5+30i
    let (r, i) = K::axpy(1., 2., 3., 4., 10., 20.);
    assert_float_eq!([r, i], [5., 30.], abs_all <= 1e-12);
}
