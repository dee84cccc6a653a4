use crate::frame::{Error, NumType, Obj, Struc};

//

/// Operation identifier, used in validation and log messages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Op
{
    Axpyv,
    Her2k,
}

impl core::fmt::Display for Op
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{}", match self {
            Op::Axpyv => "axpyv",
            Op::Her2k => "her2k",
        })
    }
}

//

fn check_computational(op: Op, idx: usize, o: &Obj) -> Result<(), Error>
{
    let nt = o.num_type();

    if nt.is_integer() {
        log::error!("{}: operand {}: element type {} is not computational", op, idx, nt);
        return Err(Error::NumTypeMismatch {operand: idx, actual: nt});
    }

    Ok(())
}

fn check_same_num(op: Op, idx: usize, o: &Obj, nt: NumType) -> Result<(), Error>
{
    if o.num_type() != nt {
        log::error!("{}: operand {}: element type {} paired with {}", op, idx, o.num_type(), nt);
        return Err(Error::UnsupportedMixedPrecision {operand: idx, num: o.num_type(), other: nt});
    }

    Ok(())
}

fn check_scalar_num(op: Op, idx: usize, s: &Obj, target: NumType) -> Result<(), Error>
{
    let nt = s.num_type();

    if nt.is_integer() {
        log::error!("{}: operand {}: element type {} is not computational", op, idx, nt);
        return Err(Error::NumTypeMismatch {operand: idx, actual: nt});
    }
    if !nt.widens_to(target) {
        log::error!("{}: operand {}: scalar type {} does not widen to {}", op, idx, nt, target);
        return Err(Error::UnsupportedMixedPrecision {operand: idx, num: nt, other: target});
    }

    Ok(())
}

fn check_scalar_shape(op: Op, idx: usize, s: &Obj) -> Result<(), Error>
{
    if !s.is_scalar() {
        log::error!("{}: operand {}: {}x{} where a 1x1 scalar is required", op, idx, s.nrow(), s.ncol());
        return Err(Error::DimensionMismatch {operand: idx, expect_nrow: 1, expect_ncol: 1, nrow: s.nrow(), ncol: s.ncol()});
    }

    Ok(())
}

fn check_vector_shape(op: Op, idx: usize, v: &Obj) -> Result<(), Error>
{
    if !v.is_vector() {
        log::error!("{}: operand {}: {}x{} where a vector is required", op, idx, v.nrow(), v.ncol());
        return Err(Error::DimensionMismatch {operand: idx, expect_nrow: v.nrow(), expect_ncol: 1, nrow: v.nrow(), ncol: v.ncol()});
    }

    Ok(())
}

//

/// Validates the operands of [`crate::axpyv`].
///
/// Returns the resolved computational element type, performing in order the
/// element-type compatibility check (exact matches between `x` and `y`, the
/// documented mixed-precision set for `alpha`) and the shape compatibility
/// check. Fails before any output buffer is touched and performs no
/// computation itself.
/// * `alpha` is a 1x1 scalar.
/// * `x` is the input vector.
/// * `y` is the updated vector.
pub fn check_axpyv(alpha: &Obj, x: &Obj, y: &Obj) -> Result<NumType, Error>
{
    let op = Op::Axpyv;

    // element-type compatibility
    check_computational(op, 1, x)?;
    check_computational(op, 2, y)?;
    let nt = y.num_type();
    check_same_num(op, 1, x, nt)?;
    check_scalar_num(op, 0, alpha, nt)?;

    // shape compatibility
    check_scalar_shape(op, 0, alpha)?;
    check_vector_shape(op, 1, x)?;
    check_vector_shape(op, 2, y)?;
    if x.vector_len() != y.vector_len() {
        log::error!("{}: operand 2: vector length {} where {} is required", op, y.vector_len(), x.vector_len());
        return Err(Error::DimensionMismatch {
            operand: 2,
            expect_nrow: x.vector_len(),
            expect_ncol: 1,
            nrow: y.nrow(),
            ncol: y.ncol(),
        });
    }

    Ok(nt)
}

/// Validates the operands of [`crate::her2k`].
///
/// Returns the resolved computational element type, performing in order the
/// element-type compatibility check (exact matches between `a`, `b` and `c`,
/// the documented mixed-precision set for `alpha` and `beta`) and the
/// structure/shape compatibility check (`c` tagged Hermitian, dimension
/// agreement after transposition flags). Fails before any output buffer is
/// touched and performs no computation itself.
/// * `alpha`, `beta` are 1x1 scalars.
/// * `a`, `b` are the n x k rank-2k operands (after their transposition
///   flags).
/// * `c` is the updated n x n Hermitian matrix.
pub fn check_her2k(alpha: &Obj, a: &Obj, b: &Obj, beta: &Obj, c: &Obj) -> Result<NumType, Error>
{
    let op = Op::Her2k;

    // element-type compatibility
    check_computational(op, 1, a)?;
    check_computational(op, 2, b)?;
    check_computational(op, 4, c)?;
    let nt = c.num_type();
    check_same_num(op, 1, a, nt)?;
    check_same_num(op, 2, b, nt)?;
    check_scalar_num(op, 0, alpha, nt)?;
    check_scalar_num(op, 3, beta, nt)?;

    // structure/shape compatibility
    check_scalar_shape(op, 0, alpha)?;
    check_scalar_shape(op, 3, beta)?;
    if c.struc() != Struc::Hermitian {
        log::error!("{}: operand 4: {} structure where hermitian is required", op, c.struc());
        return Err(Error::InvalidStructureForShape {
            operand: Some(4),
            struc: c.struc(),
            nrow: c.nrow(),
            ncol: c.ncol(),
        });
    }
    let n = a.length_after_trans();
    let k = a.width_after_trans();
    if b.length_after_trans() != n || b.width_after_trans() != k {
        log::error!("{}: operand 2: {}x{} where {}x{} is required", op, b.length_after_trans(), b.width_after_trans(), n, k);
        return Err(Error::DimensionMismatch {
            operand: 2,
            expect_nrow: n,
            expect_ncol: k,
            nrow: b.length_after_trans(),
            ncol: b.width_after_trans(),
        });
    }
    if c.nrow() != n || c.ncol() != n {
        log::error!("{}: operand 4: {}x{} where {}x{} is required", op, c.nrow(), c.ncol(), n, n);
        return Err(Error::DimensionMismatch {
            operand: 4,
            expect_nrow: n,
            expect_ncol: n,
            nrow: c.nrow(),
            ncol: c.ncol(),
        });
    }

    Ok(nt)
}

//

// scalar components in the target precision; the checks above have already
// constrained the source type

pub(crate) fn scalar_f32(s: &Obj) -> (f32, f32)
{
    let (re, im) = s.get_elem(0, 0);
    (re as f32, im as f32)
}

pub(crate) fn scalar_f64(s: &Obj) -> (f64, f64)
{
    s.get_elem(0, 0)
}

//

#[test]
fn test_dispatch1()
{
    use num_complex::Complex64;

    let al = [2.];
    let x = [1., 2., 3.];
    let y = [0., 0., 0.];
    let nt = check_axpyv(&Obj::scalar(al.as_ref()), &Obj::vector(3, 1, x.as_ref()), &Obj::vector(3, 1, y.as_ref()));
    assert_eq!(nt, Ok(NumType::F64));

    // a real-single scalar widens onto a complex-double operand
    let al = [2_f32];
    let x = [Complex64::new(1., 1.); 3];
    let y = [Complex64::new(0., 0.); 3];
    let nt = check_axpyv(&Obj::scalar(al.as_ref()), &Obj::vector(3, 1, x.as_ref()), &Obj::vector(3, 1, y.as_ref()));
    assert_eq!(nt, Ok(NumType::C64));
}

#[test]
fn test_dispatch2()
{
    use num_complex::Complex64;

    let al = [2.];
    let xi = [1_i64, 2, 3];
    let y = [0.; 3];

    // the integer bookkeeping type is never a computational operand
    let r = check_axpyv(&Obj::scalar(al.as_ref()), &Obj::vector(3, 1, xi.as_ref()), &Obj::vector(3, 1, y.as_ref()));
    assert_eq!(r, Err(Error::NumTypeMismatch {operand: 1, actual: NumType::Int}));

    // real-single with complex-double operands is outside the documented set
    let xs = [1_f32, 2., 3.];
    let yz = [Complex64::new(0., 0.); 3];
    let r = check_axpyv(&Obj::scalar(al.as_ref()), &Obj::vector(3, 1, xs.as_ref()), &Obj::vector(3, 1, yz.as_ref()));
    assert_eq!(r, Err(Error::UnsupportedMixedPrecision {operand: 1, num: NumType::F32, other: NumType::C64}));

    // a complex-double scalar never narrows onto real-single vectors
    let az = [Complex64::new(2., 0.)];
    let ys = [0_f32; 3];
    let r = check_axpyv(&Obj::scalar(az.as_ref()), &Obj::vector(3, 1, xs.as_ref()), &Obj::vector(3, 1, ys.as_ref()));
    assert_eq!(r, Err(Error::UnsupportedMixedPrecision {operand: 0, num: NumType::C64, other: NumType::F32}));

    // alpha must be 1x1
    let am = [2.; 4];
    let x = [1.; 3];
    let r = check_axpyv(&Obj::new(2, 2, 1, 2, am.as_ref()), &Obj::vector(3, 1, x.as_ref()), &Obj::vector(3, 1, y.as_ref()));
    assert_eq!(r, Err(Error::DimensionMismatch {operand: 0, expect_nrow: 1, expect_ncol: 1, nrow: 2, ncol: 2}));

    // vector lengths must agree
    let y4 = [0.; 4];
    let r = check_axpyv(&Obj::scalar(al.as_ref()), &Obj::vector(3, 1, x.as_ref()), &Obj::vector(4, 1, y4.as_ref()));
    assert_eq!(r, Err(Error::DimensionMismatch {operand: 2, expect_nrow: 3, expect_ncol: 1, nrow: 4, ncol: 1}));
}

#[test]
fn test_dispatch3()
{
    use crate::frame::Trans;

    let al = [2.];
    let be = [1.];
    let a = [1.; 6];
    let b = [1.; 6];
    let c = [1.; 9];

    // c must be tagged hermitian
    let r = check_her2k(&Obj::scalar(al.as_ref()), &Obj::new(3, 2, 1, 3, a.as_ref()), &Obj::new(3, 2, 1, 3, b.as_ref()), &Obj::scalar(be.as_ref()), &Obj::new(3, 3, 1, 3, c.as_ref()));
    assert_eq!(r, Err(Error::InvalidStructureForShape {operand: Some(4), struc: Struc::General, nrow: 3, ncol: 3}));

    let mut co = Obj::new(3, 3, 1, 3, c.as_ref());
    co.set_struc(Struc::Hermitian).unwrap();

    // happy path, and with a transposed to the same effective shape
    let r = check_her2k(&Obj::scalar(al.as_ref()), &Obj::new(3, 2, 1, 3, a.as_ref()), &Obj::new(3, 2, 1, 3, b.as_ref()), &Obj::scalar(be.as_ref()), &co);
    assert_eq!(r, Ok(NumType::F64));
    let mut at = Obj::new(2, 3, 1, 2, a.as_ref());
    at.set_trans(Trans::Transpose);
    let r = check_her2k(&Obj::scalar(al.as_ref()), &at, &Obj::new(3, 2, 1, 3, b.as_ref()), &Obj::scalar(be.as_ref()), &co);
    assert_eq!(r, Ok(NumType::F64));

    // b disagreeing with a's effective shape
    let r = check_her2k(&Obj::scalar(al.as_ref()), &Obj::new(3, 2, 1, 3, a.as_ref()), &Obj::new(2, 3, 1, 2, b.as_ref()), &Obj::scalar(be.as_ref()), &co);
    assert_eq!(r, Err(Error::DimensionMismatch {operand: 2, expect_nrow: 3, expect_ncol: 2, nrow: 2, ncol: 3}));
}
