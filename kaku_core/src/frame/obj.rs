use crate::frame::{Conj, Diag, Element, Error, NumType, Struc, Trans, Uplo};
use num_complex::{Complex32, Complex64};

//

/// Borrowed element buffer of an object.
#[derive(Debug)]
pub enum Buf<'a, T>
{
    /// Shared borrow; the object is read-only.
    Ref(&'a[T]),
    /// Mutable borrow; the object is writable.
    Mut(&'a mut[T]),
}

impl<'a, T> Buf<'a, T>
{
    /// Returns the element slice.
    pub fn get_ref(&self) -> &[T]
    {
        match self {
            Buf::Ref(s) => s,
            Buf::Mut(s) => s,
        }
    }

    /// Returns the mutable element slice.
    ///
    /// Writing through a read-only object is a caller contract violation and
    /// panics.
    pub fn get_mut(&mut self) -> &mut[T]
    {
        match self {
            Buf::Ref(_) => panic!("write access through a read-only object"),
            Buf::Mut(s) => s,
        }
    }

    /// Checks if the borrow is mutable.
    pub fn is_mut(&self) -> bool
    {
        match self {
            Buf::Ref(_) => false,
            Buf::Mut(_) => true,
        }
    }

    /// Element count of the slice.
    pub fn len(&self) -> usize
    {
        self.get_ref().len()
    }
}

//

/// Typed element store of an object.
///
/// One variant per supported element type; dispatch matches on this once per
/// operation to select the kernel implementor.
#[derive(Debug)]
pub enum Store<'a>
{
    /// Real single precision.
    F32(Buf<'a, f32>),
    /// Real double precision.
    F64(Buf<'a, f64>),
    /// Complex single precision.
    C32(Buf<'a, Complex32>),
    /// Complex double precision.
    C64(Buf<'a, Complex64>),
    /// Integer bookkeeping.
    Int(Buf<'a, i64>),
}

impl<'a> Store<'a>
{
    /// Element type tag of the store.
    pub fn num_type(&self) -> NumType
    {
        match self {
            Store::F32(_) => NumType::F32,
            Store::F64(_) => NumType::F64,
            Store::C32(_) => NumType::C32,
            Store::C64(_) => NumType::C64,
            Store::Int(_) => NumType::Int,
        }
    }

    /// Element count of the underlying slice.
    pub fn len(&self) -> usize
    {
        match self {
            Store::F32(b) => b.len(),
            Store::F64(b) => b.len(),
            Store::C32(b) => b.len(),
            Store::C64(b) => b.len(),
            Store::Int(b) => b.len(),
        }
    }

    /// Checks if the underlying borrow is mutable.
    pub fn is_mut(&self) -> bool
    {
        match self {
            Store::F32(b) => b.is_mut(),
            Store::F64(b) => b.is_mut(),
            Store::C32(b) => b.is_mut(),
            Store::C64(b) => b.is_mut(),
            Store::Int(b) => b.is_mut(),
        }
    }
}

//

pub(crate) fn span(nrow: usize, ncol: usize, rs: isize, cs: isize) -> usize
{
    if nrow == 0 || ncol == 0 {
        0
    }
    else {
        (nrow - 1) * rs.unsigned_abs() + (ncol - 1) * cs.unsigned_abs() + 1
    }
}

//

/// Object descriptor
///
/// A matrix or vector view which borrows a slice of elements and carries the
/// metadata that dispatch and the algorithms consult: dimensions, strides,
/// element type and the BLAS-style structure/conjugation/transposition
/// flags. The element type is fixed at creation; the flags are metadata and
/// may be mutated afterwards without touching the buffer.
#[derive(Debug)]
pub struct Obj<'a>
{
    nrow: usize,
    ncol: usize,
    rs: isize,
    cs: isize,
    struc: Struc,
    uplo: Uplo,
    diag: Diag,
    conj: Conj,
    trans: Trans,
    store: Store<'a>,
}

impl<'a> Obj<'a>
{
    /// Creates a read-only view.
    ///
    /// Returns the [`Obj`] instance with general structure and plain flags.
    /// * `nrow`, `ncol` are the shape of the view.
    /// * `rs`, `cs` are the row and column strides in elements.
    ///   A negative stride traverses its dimension backwards, addressed from
    ///   the high end of the buffer span.
    /// * `buf` is the element slice; it shall cover the strided span of the
    ///   shape.
    pub fn new<E: Element>(nrow: usize, ncol: usize, rs: isize, cs: isize, buf: &'a[E]) -> Self
    {
        assert!(span(nrow, ncol, rs, cs) <= buf.len());

        Obj {
            nrow, ncol, rs, cs,
            struc: Struc::General,
            uplo: Uplo::Lower,
            diag: Diag::NonUnit,
            conj: Conj::NoConjugate,
            trans: Trans::NoTranspose,
            store: E::store(buf),
        }
    }

    /// Creates a writable view.
    ///
    /// Returns the [`Obj`] instance; same as [`Obj::new`] but operations may
    /// write through it.
    pub fn new_mut<E: Element>(nrow: usize, ncol: usize, rs: isize, cs: isize, buf: &'a mut[E]) -> Self
    {
        assert!(span(nrow, ncol, rs, cs) <= buf.len());

        Obj {
            nrow, ncol, rs, cs,
            struc: Struc::General,
            uplo: Uplo::Lower,
            diag: Diag::NonUnit,
            conj: Conj::NoConjugate,
            trans: Trans::NoTranspose,
            store: E::store_mut(buf),
        }
    }

    /// Creates a read-only column vector view of `n` elements spaced by `inc`.
    pub fn vector<E: Element>(n: usize, inc: isize, buf: &'a[E]) -> Self
    {
        Obj::new(n, 1, inc, 1, buf)
    }

    /// Creates a writable column vector view of `n` elements spaced by `inc`.
    pub fn vector_mut<E: Element>(n: usize, inc: isize, buf: &'a mut[E]) -> Self
    {
        Obj::new_mut(n, 1, inc, 1, buf)
    }

    /// Creates a read-only 1x1 scalar view of the first element of `buf`.
    pub fn scalar<E: Element>(buf: &'a[E]) -> Self
    {
        Obj::new(1, 1, 1, 1, buf)
    }

    /// Row count.
    pub fn nrow(&self) -> usize
    {
        self.nrow
    }

    /// Column count.
    pub fn ncol(&self) -> usize
    {
        self.ncol
    }

    /// Row stride in elements.
    pub fn row_stride(&self) -> isize
    {
        self.rs
    }

    /// Column stride in elements.
    pub fn col_stride(&self) -> isize
    {
        self.cs
    }

    /// Element type of the view.
    pub fn num_type(&self) -> NumType
    {
        self.store.num_type()
    }

    /// Structure tag.
    pub fn struc(&self) -> Struc
    {
        self.struc
    }

    /// Stored-triangle flag.
    pub fn uplo(&self) -> Uplo
    {
        self.uplo
    }

    /// Diagonal flag.
    pub fn diag(&self) -> Diag
    {
        self.diag
    }

    /// Conjugation flag.
    pub fn conj(&self) -> Conj
    {
        self.conj
    }

    /// Transposition flag.
    pub fn trans(&self) -> Trans
    {
        self.trans
    }

    /// Typed element store of the view.
    pub fn store(&self) -> &Store<'a>
    {
        &self.store
    }

    /// Typed element store of the view, mutable.
    pub fn store_mut(&mut self) -> &mut Store<'a>
    {
        &mut self.store
    }

    /// Checks if operations may write through the view.
    pub fn is_writable(&self) -> bool
    {
        self.store.is_mut()
    }

    /// Row count after the transposition flag is applied.
    pub fn length_after_trans(&self) -> usize
    {
        if self.trans.has_trans() {self.ncol} else {self.nrow}
    }

    /// Column count after the transposition flag is applied.
    pub fn width_after_trans(&self) -> usize
    {
        if self.trans.has_trans() {self.nrow} else {self.ncol}
    }

    /// Conjugation effective after the transposition flag's conjugate bit is
    /// folded into the conjugation flag.
    pub fn conj_after_trans(&self) -> Conj
    {
        self.conj.compose(self.trans.conj())
    }

    /// Checks if the shape is square.
    pub fn is_square(&self) -> bool
    {
        self.nrow == self.ncol
    }

    /// Checks if the shape is a vector (a single row or column).
    pub fn is_vector(&self) -> bool
    {
        self.nrow == 1 || self.ncol == 1
    }

    /// Checks if the shape is a 1x1 scalar.
    pub fn is_scalar(&self) -> bool
    {
        self.nrow == 1 && self.ncol == 1
    }

    /// Element count of a vector-shaped view.
    pub fn vector_len(&self) -> usize
    {
        assert!(self.is_vector());

        if self.nrow == 1 {self.ncol} else {self.nrow}
    }

    /// Stride between consecutive elements of a vector-shaped view.
    pub fn vector_inc(&self) -> isize
    {
        assert!(self.is_vector());

        if self.nrow == 1 {self.cs} else {self.rs}
    }

    /// Sets the structure tag.
    ///
    /// Symmetric and Hermitian structure requires a square shape; on failure
    /// the descriptor is left unchanged.
    pub fn set_struc(&mut self, struc: Struc) -> Result<(), Error>
    {
        if struc.requires_square() && self.nrow != self.ncol {
            return Err(Error::InvalidStructureForShape {
                operand: None,
                struc,
                nrow: self.nrow,
                ncol: self.ncol,
            });
        }

        self.struc = struc;
        Ok(())
    }

    /// Sets the stored-triangle flag.
    pub fn set_uplo(&mut self, uplo: Uplo)
    {
        self.uplo = uplo;
    }

    /// Sets the diagonal flag.
    pub fn set_diag(&mut self, diag: Diag)
    {
        self.diag = diag;
    }

    /// Sets the conjugation flag.
    pub fn set_conj(&mut self, conj: Conj)
    {
        self.conj = conj;
    }

    /// Composes `conj` onto the conjugation flag.
    pub fn apply_conj(&mut self, conj: Conj)
    {
        self.conj = self.conj.compose(conj);
    }

    /// Sets the transposition flag.
    pub fn set_trans(&mut self, trans: Trans)
    {
        self.trans = trans;
    }

    fn lin_idx(&self, r: usize, c: usize) -> usize
    {
        let mut i = r as isize * self.rs + c as isize * self.cs;
        if self.rs < 0 {
            i += (self.nrow - 1) as isize * -self.rs;
        }
        if self.cs < 0 {
            i += (self.ncol - 1) as isize * -self.cs;
        }

        i as usize
    }

    /// Canonical `f64` components of the element at (`r`, `c`) of the stored
    /// layout (flags are not applied).
    pub fn get_elem(&self, r: usize, c: usize) -> (f64, f64)
    {
        assert!(r < self.nrow);
        assert!(c < self.ncol);
        let i = self.lin_idx(r, c);

        match &self.store {
            Store::F32(b) => b.get_ref()[i].parts(),
            Store::F64(b) => b.get_ref()[i].parts(),
            Store::C32(b) => b.get_ref()[i].parts(),
            Store::C64(b) => b.get_ref()[i].parts(),
            Store::Int(b) => b.get_ref()[i].parts(),
        }
    }

    /// Sets the element at (`r`, `c`) of the stored layout from canonical
    /// `f64` components, converted to the view's element type.
    pub fn set_elem(&mut self, r: usize, c: usize, re: f64, im: f64)
    {
        assert!(r < self.nrow);
        assert!(c < self.ncol);
        let i = self.lin_idx(r, c);

        match &mut self.store {
            Store::F32(b) => b.get_mut()[i] = Element::from_parts(re, im),
            Store::F64(b) => b.get_mut()[i] = Element::from_parts(re, im),
            Store::C32(b) => b.get_mut()[i] = Element::from_parts(re, im),
            Store::C64(b) => b.get_mut()[i] = Element::from_parts(re, im),
            Store::Int(b) => b.get_mut()[i] = Element::from_parts(re, im),
        }
    }
}

//

#[test]
fn test_obj1()
{
    let buf = [0.; 6];
    let mut o = Obj::new(2, 3, 1, 2, buf.as_ref());

    assert_eq!(o.nrow(), 2);
    assert_eq!(o.ncol(), 3);
    assert_eq!(o.num_type(), NumType::F64);
    assert_eq!(o.length_after_trans(), 2);
    assert_eq!(o.width_after_trans(), 3);
    assert!(!o.is_writable());

    o.set_trans(Trans::Transpose);
    assert_eq!(o.length_after_trans(), 3);
    assert_eq!(o.width_after_trans(), 2);
    assert_eq!(o.conj_after_trans(), Conj::NoConjugate);

    o.set_trans(Trans::ConjTranspose);
    assert_eq!(o.conj_after_trans(), Conj::Conjugate);
    o.apply_conj(Conj::Conjugate);
    assert_eq!(o.conj_after_trans(), Conj::NoConjugate);
}

#[test]
fn test_obj2()
{
    let buf = [0_f32; 15];
    let mut o = Obj::new(3, 5, 1, 3, buf.as_ref());

    let r = o.set_struc(Struc::Hermitian);
    assert_eq!(r, Err(Error::InvalidStructureForShape {
        operand: None,
        struc: Struc::Hermitian,
        nrow: 3,
        ncol: 5,
    }));
    assert_eq!(o.struc(), Struc::General);

    let buf = [0_f32; 9];
    let mut o = Obj::new(3, 3, 1, 3, buf.as_ref());
    o.set_struc(Struc::Hermitian).unwrap();
    o.set_uplo(Uplo::Upper);
    assert_eq!(o.struc(), Struc::Hermitian);
    assert_eq!(o.uplo(), Uplo::Upper);
}

#[test]
fn test_obj3()
{
    let buf = [10., 20., 30.];
    let o = Obj::vector(3, -1, buf.as_ref());

    assert!(o.is_vector());
    assert_eq!(o.vector_len(), 3);
    assert_eq!(o.vector_inc(), -1);

    // a negative stride walks backwards from the high end of the span
    assert_eq!(o.get_elem(0, 0), (30., 0.));
    assert_eq!(o.get_elem(2, 0), (10., 0.));
}

#[test]
fn test_obj4()
{
    let mut buf = [Complex64::new(0., 0.); 4];
    let mut o = Obj::new_mut(2, 2, 1, 2, buf.as_mut());

    assert!(o.is_writable());
    o.set_elem(1, 0, 2.5, -1.5);
    assert_eq!(o.get_elem(1, 0), (2.5, -1.5));

    let a = [3_f32];
    let s = Obj::scalar(a.as_ref());
    assert!(s.is_scalar());
    assert_eq!(s.vector_len(), 1);
    assert_eq!(s.get_elem(0, 0), (3., 0.));
}
