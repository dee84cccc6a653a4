use float_eq::assert_float_eq;
use kaku::prelude::*;
use kaku::*;

type DObjBuild = ObjBuild<f64>;
type ZObjBuild = ObjBuild<Complex64>;

//

fn ref_entry_d(alpha: f64, a: &DObjBuild, b: &DObjBuild, beta: f64, c0: f64, r: usize, j: usize, k: usize) -> f64
{
    let mut s = beta * c0;
    for l in 0.. k {
        s += alpha * (a[(r, l)] * b[(j, l)] + b[(r, l)] * a[(j, l)]);
    }

    s
}

fn ref_entry_z(alpha: Complex64, a: &ZObjBuild, b: &ZObjBuild, beta: Complex64, c0: Complex64, r: usize, j: usize, k: usize) -> Complex64
{
    let mut s = beta * c0;
    for l in 0.. k {
        s += alpha * a[(r, l)] * b[(j, l)].conj() + alpha.conj() * b[(r, l)] * a[(j, l)].conj();
    }

    s
}

//

#[test]
fn test_her2k1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 3;
    let k = 2;
    let alpha = 1.5;
    let beta = 0.5;

    let a = DObjBuild::new(n, k).unwrap()
            .by_fn(|r, c| (2 * r + c) as f64 - 1.25);
    let b = DObjBuild::new(n, k).unwrap()
            .by_fn(|r, c| 0.5 * (r as f64) - (c as f64) + 0.75);

    // lower triangle holds data, the strict upper holds sentinels
    let mut c = DObjBuild::new(n, n).unwrap()
                .by_fn(|r, j| if r >= j {(r + 10 * j) as f64} else {99.})
                .struc(Struc::Hermitian).unwrap();
    let c0 = c.clone();

    let al = DObjBuild::scalar(alpha, 0.).unwrap();
    let be = DObjBuild::scalar(beta, 0.).unwrap();
    her2k(&al.as_obj(), &a.as_obj(), &b.as_obj(), &be.as_obj(), &mut c.as_obj_mut()).unwrap();

    for j in 0.. n {
        for r in 0.. n {
            if r >= j {
                let e = ref_entry_d(alpha, &a, &b, beta, c0[(r, j)], r, j, k);
                assert_float_eq!(c[(r, j)], e, abs <= 1e-12);
            }
            else {
                assert_eq!(c[(r, j)], 99.);
            }
        }
    }
}

#[test]
fn test_her2k2()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 3;
    let k = 2;
    let alpha = Complex64::new(0.5, -1.);
    let beta = Complex64::new(2., 0.5);

    let a = ZObjBuild::new(n, k).unwrap()
            .by_fn(|r, c| Complex64::new((r + c) as f64 - 1.5, 0.5 * (r as f64) - (c as f64)));
    let b = ZObjBuild::new(n, k).unwrap()
            .by_fn(|r, c| Complex64::new(0.25 * (c as f64) + (r as f64), (r * 2 + c) as f64 - 2.));

    // upper triangle holds data with a real diagonal, the strict lower
    // holds sentinels
    let mut c = ZObjBuild::new(n, n).unwrap()
                .by_fn(|r, j| {
                    if r < j {Complex64::new((r + j) as f64, 1.)}
                    else if r == j {Complex64::new(r as f64 + 3., 0.)}
                    else {Complex64::new(99., 99.)}
                })
                .struc(Struc::Hermitian).unwrap()
                .uplo(Uplo::Upper);
    let c0 = c.clone();

    let al = ZObjBuild::scalar(alpha.re, alpha.im).unwrap();
    let be = ZObjBuild::scalar(beta.re, beta.im).unwrap();
    her2k(&al.as_obj(), &a.as_obj(), &b.as_obj(), &be.as_obj(), &mut c.as_obj_mut()).unwrap();

    for j in 0.. n {
        for r in 0.. n {
            if r < j {
                let e = ref_entry_z(alpha, &a, &b, beta, c0[(r, j)], r, j, k);
                assert_float_eq!([c[(r, j)].re, c[(r, j)].im], [e.re, e.im], abs_all <= 1e-12);
            }
            else if r == j {
                let e = ref_entry_z(alpha, &a, &b, beta, c0[(r, j)], r, j, k);
                assert_float_eq!(c[(r, j)].re, e.re, abs <= 1e-12);
                // the diagonal comes out exactly real
                assert_eq!(c[(r, j)].im, 0.);
            }
            else {
                assert_eq!(c[(r, j)], Complex64::new(99., 99.));
            }
        }
    }
}

#[test]
fn test_her2k3()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 3;
    let k = 2;

    let a = ZObjBuild::new(n, k).unwrap()
            .by_fn(|r, c| Complex64::new((3 * r + c) as f64 * 0.5 - 1., (r as f64) - 0.5 * (c as f64)));
    let b = ZObjBuild::new(n, k).unwrap()
            .by_fn(|r, c| Complex64::new((r + 2 * c) as f64 * 0.25, 1. - (r as f64) * (c as f64)));

    // the same operand stored conjugate-transposed as k x n
    let mut ah = ZObjBuild::new(k, n).unwrap().trans(Trans::ConjTranspose);
    for r in 0.. n {
        for l in 0.. k {
            ah[(l, r)] = a[(r, l)].conj();
        }
    }

    let al = ZObjBuild::scalar(1., 2.).unwrap();
    let be = ZObjBuild::scalar(0., 0.).unwrap();

    let mut c1 = ZObjBuild::new(n, n).unwrap().struc(Struc::Hermitian).unwrap();
    let mut c2 = c1.clone();
    her2k(&al.as_obj(), &a.as_obj(), &b.as_obj(), &be.as_obj(), &mut c1.as_obj_mut()).unwrap();
    her2k(&al.as_obj(), &ah.as_obj(), &b.as_obj(), &be.as_obj(), &mut c2.as_obj_mut()).unwrap();

    // stride-induced transposition agrees exactly
    assert_eq!(c1.as_ref(), c2.as_ref());
}

#[test]
fn test_her2k4()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let al = DObjBuild::scalar(1., 0.).unwrap();
    let be = DObjBuild::scalar(1., 0.).unwrap();
    let a = DObjBuild::new(3, 2).unwrap()
            .by_fn(|r, c| (r + c) as f64);
    let b = DObjBuild::new(3, 2).unwrap()
            .by_fn(|r, c| (r * 2 + c) as f64);

    // c not tagged hermitian, and untouched on failure
    let mut c = DObjBuild::new(3, 3).unwrap()
                .by_fn(|_, _| 7.);
    let r = her2k(&al.as_obj(), &a.as_obj(), &b.as_obj(), &be.as_obj(), &mut c.as_obj_mut());
    assert_eq!(r, Err(Error::InvalidStructureForShape {operand: Some(4), struc: Struc::General, nrow: 3, ncol: 3}));
    assert_eq!(format!("{}", r.unwrap_err()), "operand 4: general structure is not valid for this operation (3x3)");
    assert_float_eq!(c.as_ref(), [7.; 9].as_ref(), abs_all <= 1e-15);

    // b disagreeing with a's effective shape
    let b4 = DObjBuild::new(4, 2).unwrap();
    let mut ch = DObjBuild::new(3, 3).unwrap().struc(Struc::Hermitian).unwrap();
    let r = her2k(&al.as_obj(), &a.as_obj(), &b4.as_obj(), &be.as_obj(), &mut ch.as_obj_mut());
    assert_eq!(r, Err(Error::DimensionMismatch {operand: 2, expect_nrow: 3, expect_ncol: 2, nrow: 4, ncol: 2}));

    // a complex scalar never narrows onto real operands
    let alz = ZObjBuild::scalar(1., 1.).unwrap();
    let r = her2k(&alz.as_obj(), &a.as_obj(), &b.as_obj(), &be.as_obj(), &mut ch.as_obj_mut());
    assert_eq!(r, Err(Error::UnsupportedMixedPrecision {operand: 0, num: NumType::C64, other: NumType::F64}));
}

#[test]
fn test_her2k5()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let al = [2.];
    let be = [-1.];
    let a = [1., 2.];
    let b = [3., 4.];

    // under rs=1, cs=-2 the logical lower entries live at buffer 2, 3, 1
    let mut c = [9., 5., 1., 2.];

    let mut co = Obj::new_mut(2, 2, 1, -2, c.as_mut());
    co.set_struc(Struc::Hermitian).unwrap();
    her2k(&Obj::scalar(al.as_ref()), &Obj::new(2, 1, 1, 2, a.as_ref()), &Obj::new(2, 1, 1, 2, b.as_ref()), &Obj::scalar(be.as_ref()), &mut co).unwrap();

    assert_float_eq!(c.as_ref(), [9., 27., 11., 18.].as_ref(), abs_all <= 1e-12);
}
