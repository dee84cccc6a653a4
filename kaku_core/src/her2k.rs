use num_traits::Zero;
use crate::frame::{check_her2k, scalar_f32, scalar_f64, span, Conj, Error, Kernel, Obj, Store, Uplo};
use crate::{ComplexGeneric, RealGeneric};

/// Performs the Hermitian rank-2k update \\(C \leftarrow \alpha \mathrm{op}(A) \mathrm{op}(B)^H + \bar \alpha \mathrm{op}(B) \mathrm{op}(A)^H + \beta C\\).
///
/// <script src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js" async></script>
///
/// Validates the operands, resolves the element type and runs the typed
/// kernel loops. \\(\mathrm{op}(\cdot)\\) is the identity, transposition or
/// conjugate transposition selected by each operand's flags; transposition
/// is induced by swapping strides, never by copying. Only the triangle of
/// `c` selected by its stored-triangle flag is read and written, and its
/// diagonal is left with exactly zero imaginary components.
///
/// Returns `Ok` on success, otherwise an [`Error`] and `c` is untouched.
/// * `alpha` is a 1x1 scalar \\(\alpha\\), of the element type of `c` or of
///   a real type that widens onto it.
/// * `a`, `b` are the n x k operands \\(A\\), \\(B\\) after their flags.
/// * `beta` is a 1x1 scalar \\(\beta\\), constrained like `alpha`. It
///   multiplies the stored `c` content literally, imaginary components
///   included.
/// * `c` is the updated n x n matrix \\(C\\); it shall be tagged Hermitian
///   and writable.
pub fn her2k(alpha: &Obj, a: &Obj, b: &Obj, beta: &Obj, c: &mut Obj) -> Result<(), Error>
{
    let nt = check_her2k(alpha, a, b, beta, c)?;

    let n = a.length_after_trans();
    let k = a.width_after_trans();
    let uplo = c.uplo();

    log::trace!("her2k: {} n={} k={}", nt, n, k);

    let (rs_a, cs_a) = if a.trans().has_trans() {(a.col_stride(), a.row_stride())} else {(a.row_stride(), a.col_stride())};
    let conja = a.conj_after_trans();
    let (rs_b, cs_b) = if b.trans().has_trans() {(b.col_stride(), b.row_stride())} else {(b.row_stride(), b.col_stride())};
    let conjb = b.conj_after_trans();
    let (rs_c, cs_c) = (c.row_stride(), c.col_stride());

    match (a.store(), b.store(), c.store_mut()) {
        (Store::F32(ba), Store::F32(bb), Store::F32(bc)) => {
            her2k_unb::<RealGeneric<f32>>(uplo, n, k, scalar_f32(alpha), conja, ba.get_ref(), rs_a, cs_a, conjb, bb.get_ref(), rs_b, cs_b, scalar_f32(beta), bc.get_mut(), rs_c, cs_c)
        },
        (Store::F64(ba), Store::F64(bb), Store::F64(bc)) => {
            her2k_unb::<RealGeneric<f64>>(uplo, n, k, scalar_f64(alpha), conja, ba.get_ref(), rs_a, cs_a, conjb, bb.get_ref(), rs_b, cs_b, scalar_f64(beta), bc.get_mut(), rs_c, cs_c)
        },
        (Store::C32(ba), Store::C32(bb), Store::C32(bc)) => {
            her2k_unb::<ComplexGeneric<f32>>(uplo, n, k, scalar_f32(alpha), conja, ba.get_ref(), rs_a, cs_a, conjb, bb.get_ref(), rs_b, cs_b, scalar_f32(beta), bc.get_mut(), rs_c, cs_c)
        },
        (Store::C64(ba), Store::C64(bb), Store::C64(bc)) => {
            her2k_unb::<ComplexGeneric<f64>>(uplo, n, k, scalar_f64(alpha), conja, ba.get_ref(), rs_a, cs_a, conjb, bb.get_ref(), rs_b, cs_b, scalar_f64(beta), bc.get_mut(), rs_c, cs_c)
        },
        _ => unreachable!(),
    }

    Ok(())
}

//

struct MatIdx
{
    base: isize,
    rs: isize,
    cs: isize,
}

impl MatIdx
{
    fn new(nrow: usize, ncol: usize, rs: isize, cs: isize) -> Self
    {
        let mut base = 0;
        if rs < 0 {
            base += nrow.saturating_sub(1) as isize * -rs;
        }
        if cs < 0 {
            base += ncol.saturating_sub(1) as isize * -cs;
        }

        MatIdx {base, rs, cs}
    }

    fn idx(&self, r: usize, c: usize) -> usize
    {
        (self.base + r as isize * self.rs + c as isize * self.cs) as usize
    }
}

fn row_range(uplo: Uplo, j: usize, n: usize) -> (usize, usize)
{
    match uplo {
        Uplo::Lower => (j, n),
        Uplo::Upper => (0, j + 1),
    }
}

//

/// Typed unblocked loops of [`her2k`], usable directly with a chosen
/// [`Kernel`].
///
/// * `uplo` selects the stored triangle of `c`.
/// * `n`, `k` are the update order and rank.
/// * `alpha`, `beta` are the scalars as components of `K`'s component type.
/// * `conja`, `a`, `rs_a`, `cs_a` are the element conjugation, buffer and
///   strides of the first n x k operand; negative strides are addressed
///   from the high end of their dimension's span.
/// * `conjb`, `b`, `rs_b`, `cs_b` are the same for the second operand.
/// * `c`, `rs_c`, `cs_c` are the buffer and strides of the updated n x n
///   matrix.
pub fn her2k_unb<K: Kernel>(uplo: Uplo, n: usize, k: usize, alpha: (K::R, K::R), conja: Conj, a: &[K::E], rs_a: isize, cs_a: isize, conjb: Conj, b: &[K::E], rs_b: isize, cs_b: isize, beta: (K::R, K::R), c: &mut[K::E], rs_c: isize, cs_c: isize)
{
    if n == 0 {
        return;
    }

    assert!(span(n, k, rs_a, cs_a) <= a.len());
    assert!(span(n, k, rs_b, cs_b) <= b.len());
    assert!(span(n, n, rs_c, cs_c) <= c.len());

    let mat_a = MatIdx::new(n, k, rs_a, cs_a);
    let mat_b = MatIdx::new(n, k, rs_b, cs_b);
    let mat_c = MatIdx::new(n, n, rs_c, cs_c);

    let (ar, ai) = alpha;
    let (br, bi) = beta;
    // the second product term carries the conjugated scalar, and the
    // conjugate transpositions of a and b toggle their element conjugations
    let (car, cai) = K::conj(ar, ai);
    let conjah = conja.toggled();
    let conjbh = conjb.toggled();

    // c := beta * c over the stored triangle
    for j in 0.. n {
        let (r0, r1) = row_range(uplo, j, n);
        for r in r0.. r1 {
            let i = mat_c.idx(r, j);
            let (cr, ci) = K::unpack(c[i]);
            let (cr, ci) = K::scal(br, bi, cr, ci);
            c[i] = K::pack(cr, ci);
        }
    }

    // c := alpha * a * b^H + conj(alpha) * b * a^H + c over the stored
    // triangle
    for j in 0.. n {
        let (r0, r1) = row_range(uplo, j, n);
        for r in r0.. r1 {
            let i = mat_c.idx(r, j);
            let (mut sr, mut si) = K::unpack(c[i]);

            for l in 0.. k {
                let (xr, xi) = K::unpack(a[mat_a.idx(r, l)]);
                let (xr, xi) = K::copycj(conja, xr, xi);
                let (ur, ui) = K::unpack(b[mat_b.idx(j, l)]);
                let (ur, ui) = K::copycj(conjbh, ur, ui);
                let (tr, ti) = K::scal(ar, ai, xr, xi);
                (sr, si) = K::axpy(tr, ti, ur, ui, sr, si);

                let (xr, xi) = K::unpack(b[mat_b.idx(r, l)]);
                let (xr, xi) = K::copycj(conjb, xr, xi);
                let (ur, ui) = K::unpack(a[mat_a.idx(j, l)]);
                let (ur, ui) = K::copycj(conjah, ur, ui);
                let (tr, ti) = K::scal(car, cai, xr, xi);
                (sr, si) = K::axpy(tr, ti, ur, ui, sr, si);
            }

            c[i] = K::pack(sr, si);
        }
    }

    // the diagonal of a Hermitian update is real
    for j in 0.. n {
        let i = mat_c.idx(j, j);
        let (dr, _) = K::unpack(c[i]);
        c[i] = K::pack(dr, <K::R as Zero>::zero());
    }
}

//

#[test]
fn test_her2k1()
{
    use float_eq::assert_float_eq;
    use crate::frame::Struc;

    let al = [2.];
    let be = [-1.];
    let a = [1., 2.];
    let b = [3., 4.];
    // column-major 2x2; the (0,1) slot is outside the lower triangle
    let mut c = [1., 2., 9., 5.];

    let mut co = Obj::new_mut(2, 2, 1, 2, c.as_mut());
    co.set_struc(Struc::Hermitian).unwrap();
    her2k(&Obj::scalar(al.as_ref()), &Obj::new(2, 1, 1, 2, a.as_ref()), &Obj::new(2, 1, 1, 2, b.as_ref()), &Obj::scalar(be.as_ref()), &mut co).unwrap();

    // 2*(a*b^T + b*a^T) - c, lower triangle only
    assert_float_eq!(c.as_ref(), [11., 18., 9., 27.].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_her2k2()
{
    use num_complex::Complex64;
    use crate::frame::Struc;

    let al = [Complex64::new(0., 1.)];
    let be = [Complex64::new(0., 0.)];
    let a = [Complex64::new(1., 2.), Complex64::new(3., -1.)];
    let b = [Complex64::new(2., -1.), Complex64::new(1., 1.)];
    let mut c = [Complex64::new(7., 7.); 4];

    let mut co = Obj::new_mut(2, 2, 1, 2, c.as_mut());
    co.set_struc(Struc::Hermitian).unwrap();
    her2k(&Obj::scalar(al.as_ref()), &Obj::new(2, 1, 1, 2, a.as_ref()), &Obj::new(2, 1, 1, 2, b.as_ref()), &Obj::scalar(be.as_ref()), &mut co).unwrap();

    // beta = 0 clears the stale content, the diagonal comes out exactly
    // real and the (0,1) slot stays untouched
    assert_eq!(c[0], Complex64::new(-10., 0.));
    assert_eq!(c[1], Complex64::new(-2., 4.));
    assert_eq!(c[2], Complex64::new(7., 7.));
    assert_eq!(c[3], Complex64::new(8., 0.));
}

#[test]
fn test_her2k3()
{
    use num_complex::Complex64;
    use crate::frame::{Struc, Trans};

    let al = [Complex64::new(0., 1.)];
    let be = [Complex64::new(0., 0.)];
    let a = [Complex64::new(1., 2.), Complex64::new(3., -1.)];
    let b = [Complex64::new(2., -1.), Complex64::new(1., 1.)];
    let mut c = [Complex64::new(7., 7.); 4];

    // conj(a)^T stored as a row, flagged conjugate-transposed, must agree
    // with test_her2k2 exactly
    let ah = [a[0].conj(), a[1].conj()];
    let mut ao = Obj::new(1, 2, 1, 1, ah.as_ref());
    ao.set_trans(Trans::ConjTranspose);

    let mut co = Obj::new_mut(2, 2, 1, 2, c.as_mut());
    co.set_struc(Struc::Hermitian).unwrap();
    her2k(&Obj::scalar(al.as_ref()), &ao, &Obj::new(2, 1, 1, 2, b.as_ref()), &Obj::scalar(be.as_ref()), &mut co).unwrap();

    assert_eq!(c[0], Complex64::new(-10., 0.));
    assert_eq!(c[1], Complex64::new(-2., 4.));
    assert_eq!(c[2], Complex64::new(7., 7.));
    assert_eq!(c[3], Complex64::new(8., 0.));
}

#[test]
fn test_her2k4()
{
    use float_eq::assert_float_eq;
    use crate::frame::Struc;

    let al = [2.];
    let be = [-1.];
    let a = [1., 2.];
    let b = [3., 4.];
    let mut c = [1., 2., 9., 5.];

    let mut co = Obj::new_mut(2, 2, 1, 2, c.as_mut());
    co.set_struc(Struc::Hermitian).unwrap();
    co.set_uplo(Uplo::Upper);
    her2k(&Obj::scalar(al.as_ref()), &Obj::new(2, 1, 1, 2, a.as_ref()), &Obj::new(2, 1, 1, 2, b.as_ref()), &Obj::scalar(be.as_ref()), &mut co).unwrap();

    // upper triangle updated, the (1,0) slot stays untouched
    assert_float_eq!(c.as_ref(), [11., 2., 11., 27.].as_ref(), abs_all <= 1e-12);
}
