use float_eq::assert_float_eq;
use kaku::prelude::*;
use kaku::*;

type DObjBuild = ObjBuild<f64>;
type ZObjBuild = ObjBuild<Complex64>;

//

#[test]
fn test_axpyv1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 5;

    let alpha = DObjBuild::scalar(2., 0.).unwrap();
    let x = DObjBuild::new(n, 1).unwrap()
            .by_fn(|r, _| (r + 1) as f64);
    let mut y = DObjBuild::new(n, 1).unwrap();

    axpyv(&alpha.as_obj(), &x.as_obj(), &mut y.as_obj_mut()).unwrap();

    assert_float_eq!(y.as_ref(), [2., 4., 6., 8., 10.].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_axpyv2()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // a conjugated row vector updates a column vector
    let alpha = ZObjBuild::scalar(1., 0.).unwrap();
    let mut x = ZObjBuild::new(1, 2).unwrap().conj(Conj::Conjugate);
    x[(0, 0)] = Complex64::new(1., 2.);
    x[(0, 1)] = Complex64::new(3., 4.);
    let mut y = ZObjBuild::new(2, 1).unwrap();

    axpyv(&alpha.as_obj(), &x.as_obj(), &mut y.as_obj_mut()).unwrap();

    assert_eq!(y.as_ref(), [Complex64::new(1., -2.), Complex64::new(3., -4.)].as_ref());
}

#[test]
fn test_axpyv3()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let x = DObjBuild::new(4, 1).unwrap()
            .by_fn(|r, _| 0.25 * (r as f64) - 1.5);
    let mut y0 = DObjBuild::new(4, 1).unwrap()
                 .by_fn(|r, _| r as f64);
    let mut y1 = y0.clone();

    // a single-precision scalar widens onto double operands and agrees
    // with the double scalar of the same value
    let al_s = ObjBuild::<f32>::scalar(2.5, 0.).unwrap();
    let al_d = DObjBuild::scalar(2.5, 0.).unwrap();
    axpyv(&al_s.as_obj(), &x.as_obj(), &mut y0.as_obj_mut()).unwrap();
    axpyv(&al_d.as_obj(), &x.as_obj(), &mut y1.as_obj_mut()).unwrap();

    assert_float_eq!(y0.as_ref(), y1.as_ref(), abs_all <= 1e-15);

    // the same scalar widens onto double-complex operands and agrees with
    // the double-complex scalar of the same value
    let xz = ZObjBuild::new(3, 1).unwrap()
             .by_fn(|r, _| Complex64::new(r as f64 + 0.5, -(r as f64)));
    let mut z0 = ZObjBuild::new(3, 1).unwrap()
                 .by_fn(|r, _| Complex64::new(-(r as f64), 2. * r as f64));
    let mut z1 = z0.clone();

    let al_z = ZObjBuild::scalar(2.5, 0.).unwrap();
    axpyv(&al_s.as_obj(), &xz.as_obj(), &mut z0.as_obj_mut()).unwrap();
    axpyv(&al_z.as_obj(), &xz.as_obj(), &mut z1.as_obj_mut()).unwrap();

    assert_eq!(z0.as_ref(), z1.as_ref());
}

#[test]
fn test_axpyv4()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let al = DObjBuild::scalar(1., 0.).unwrap();
    let x = DObjBuild::new(3, 1).unwrap()
            .by_fn(|r, _| (r + 1) as f64);
    let mut y = DObjBuild::new(4, 1).unwrap();

    let r = axpyv(&al.as_obj(), &x.as_obj(), &mut y.as_obj_mut());
    assert_eq!(r, Err(Error::DimensionMismatch {operand: 2, expect_nrow: 3, expect_ncol: 1, nrow: 4, ncol: 1}));
    assert_eq!(format!("{}", r.unwrap_err()), "operand 2: dimensions 4x1 where 3x1 is required");

    // y stays untouched on failure
    assert_float_eq!(y.as_ref(), [0.; 4].as_ref(), abs_all <= 1e-15);

    let xi = ObjBuild::<i64>::new(3, 1).unwrap();
    let mut yd = DObjBuild::new(3, 1).unwrap();
    let r = axpyv(&al.as_obj(), &xi.as_obj(), &mut yd.as_obj_mut());
    assert_eq!(r, Err(Error::NumTypeMismatch {operand: 1, actual: NumType::Int}));
    assert_eq!(format!("{}", r.unwrap_err()), "operand 1: element type int is not computational");

    let xs = ObjBuild::<f32>::new(2, 1).unwrap();
    let mut yz = ZObjBuild::new(2, 1).unwrap();
    let r = axpyv(&al.as_obj(), &xs.as_obj(), &mut yz.as_obj_mut());
    assert_eq!(r, Err(Error::UnsupportedMixedPrecision {operand: 1, num: NumType::F32, other: NumType::C64}));
    assert_eq!(format!("{}", r.unwrap_err()), "operand 1: element type f32 paired with c64 is outside the supported mixed-precision set");
}

#[test]
#[should_panic]
fn test_axpyv5()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let al = [1.];
    let x = [1., 2., 3.];
    let y = [0.; 3];

    // writing through a read-only view panics
    let mut yo = Obj::vector(3, 1, y.as_ref());
    let _ = axpyv(&Obj::scalar(al.as_ref()), &Obj::vector(3, 1, x.as_ref()), &mut yo);
}
