use crate::frame::{check_axpyv, scalar_f32, scalar_f64, Conj, Error, Kernel, Obj, Store};
use crate::{ComplexGeneric, RealGeneric};

/// Performs the vector update \\(y \leftarrow \alpha \mathrm{conj?}(x) + y\\).
///
/// <script src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js" async></script>
///
/// Validates the operands, resolves the element type and runs the typed
/// kernel loop. The conjugation applied to `x` is its conjugation flag with
/// the conjugate bit of its transposition flag folded in.
///
/// Returns `Ok` on success, otherwise an [`Error`] and `y` is untouched.
/// * `alpha` is a 1x1 scalar \\(\alpha\\), of the element type of `y` or of
///   a real type that widens onto it.
/// * `x` is the input vector \\(x\\).
/// * `y` is the updated vector \\(y\\); it shall be writable.
pub fn axpyv(alpha: &Obj, x: &Obj, y: &mut Obj) -> Result<(), Error>
{
    let nt = check_axpyv(alpha, x, y)?;

    let n = x.vector_len();
    let incx = x.vector_inc();
    let incy = y.vector_inc();
    let conjx = x.conj_after_trans();

    log::trace!("axpyv: {} n={} incx={} incy={}", nt, n, incx, incy);

    match (x.store(), y.store_mut()) {
        (Store::F32(bx), Store::F32(by)) => {
            axpyv_unb::<RealGeneric<f32>>(conjx, n, scalar_f32(alpha), bx.get_ref(), incx, by.get_mut(), incy)
        },
        (Store::F64(bx), Store::F64(by)) => {
            axpyv_unb::<RealGeneric<f64>>(conjx, n, scalar_f64(alpha), bx.get_ref(), incx, by.get_mut(), incy)
        },
        (Store::C32(bx), Store::C32(by)) => {
            axpyv_unb::<ComplexGeneric<f32>>(conjx, n, scalar_f32(alpha), bx.get_ref(), incx, by.get_mut(), incy)
        },
        (Store::C64(bx), Store::C64(by)) => {
            axpyv_unb::<ComplexGeneric<f64>>(conjx, n, scalar_f64(alpha), bx.get_ref(), incx, by.get_mut(), incy)
        },
        _ => unreachable!(),
    }

    Ok(())
}

//

/// Typed unblocked loop of [`axpyv`], usable directly with a chosen
/// [`Kernel`].
///
/// * `conjx` selects conjugation of the `x` elements.
/// * `n` is the logical vector length.
/// * `alpha` is the scalar as components of `K`'s component type.
/// * `x`, `incx` are the input vector and its element stride.
///   A negative stride traverses backwards, addressed from the high end of
/// the slice span, and `x[0.. (n-1)*|incx|]` shall be covered.
/// * `y`, `incy` are the updated vector and its element stride, covered
///   likewise.
pub fn axpyv_unb<K: Kernel>(conjx: Conj, n: usize, alpha: (K::R, K::R), x: &[K::E], incx: isize, y: &mut[K::E], incy: isize)
{
    if n == 0 {
        return;
    }

    assert!((n - 1) * incx.unsigned_abs() < x.len());
    assert!((n - 1) * incy.unsigned_abs() < y.len());

    let (ar, ai) = alpha;
    let mut ix = if incx >= 0 {0} else {(n - 1) as isize * -incx};
    let mut iy = if incy >= 0 {0} else {(n - 1) as isize * -incy};

    for _ in 0.. n {
        let (xr, xi) = K::unpack(x[ix as usize]);
        let (xr, xi) = K::copycj(conjx, xr, xi);
        let (yr, yi) = K::unpack(y[iy as usize]);
        let (zr, zi) = K::axpy(ar, ai, xr, xi, yr, yi);
        y[iy as usize] = K::pack(zr, zi);

        ix += incx;
        iy += incy;
    }
}

//

#[test]
fn test_axpyv1()
{
    use float_eq::assert_float_eq;

    let al = [2.];
    let x = [1., 2., 3., 4., 5.];
    let mut y = [0.; 5];

    axpyv(&Obj::scalar(al.as_ref()), &Obj::vector(5, 1, x.as_ref()), &mut Obj::vector_mut(5, 1, y.as_mut())).unwrap();
    assert_float_eq!(y.as_ref(), [2., 4., 6., 8., 10.].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_axpyv2()
{
    use float_eq::assert_float_eq;

    let al = [1.];
    let x = [1., 2., 3.];
    let mut y = [0.; 3];

    // inc -1 reads x reversed
    axpyv(&Obj::scalar(al.as_ref()), &Obj::vector(3, -1, x.as_ref()), &mut Obj::vector_mut(3, 1, y.as_mut())).unwrap();
    assert_float_eq!(y.as_ref(), [3., 2., 1.].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_axpyv3()
{
    use num_complex::Complex64;

    let al = [1.];
    let x = [Complex64::new(1., 2.), Complex64::new(3., 4.)];
    let mut y = [Complex64::new(0., 0.); 2];

    // real alpha widens onto the complex operands; the flag conjugates x
    let mut xo = Obj::vector(2, 1, x.as_ref());
    xo.set_conj(Conj::Conjugate);
    axpyv(&Obj::scalar(al.as_ref()), &xo, &mut Obj::vector_mut(2, 1, y.as_mut())).unwrap();
    assert_eq!(y[0], Complex64::new(1., -2.));
    assert_eq!(y[1], Complex64::new(3., -4.));
}

#[test]
fn test_axpyv4()
{
    use float_eq::assert_float_eq;

    let x = [1., 9., 2., 9., 3.];
    let mut y = [10., 20., 30.];

    axpyv_unb::<RealGeneric<f64>>(Conj::NoConjugate, 3, (2., 0.), x.as_ref(), 2, y.as_mut(), 1);
    assert_float_eq!(y.as_ref(), [12., 24., 36.].as_ref(), abs_all <= 1e-12);
}
