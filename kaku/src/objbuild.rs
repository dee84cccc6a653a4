use std::ops::{Index, IndexMut, Deref};
use kaku_core::frame::{Conj, Diag, Element, Error, NumType, Obj, Struc, Trans, Uplo};

//

/// Object builder
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js"></script>
///
/// Matrix struct which owns a `Vec` of column-major data and is able to be
/// viewed as [`kaku_core::frame::Obj`]. It carries the same metadata flags
/// as the view and hands them to every view it produces.
/// This struct relies on dynamic heap allocation.
#[derive(Debug, Clone)]
pub struct ObjBuild<E: Element>
{
    nrow: usize,
    ncol: usize,
    struc: Struc,
    uplo: Uplo,
    diag: Diag,
    conj: Conj,
    trans: Trans,
    array: Vec<E>,
}

impl<E: Element> ObjBuild<E>
{
    /// Creates an instance.
    ///
    /// Returns the [`ObjBuild`] instance with zero data and general
    /// structure, or [`Error::AllocFailure`] if the buffer cannot be
    /// allocated.
    /// * `nrow`, `ncol` are the shape.
    pub fn new(nrow: usize, ncol: usize) -> Result<Self, Error>
    {
        let nelem = nrow.checked_mul(ncol).unwrap_or(usize::MAX);
        let mut array = Vec::new();
        if array.try_reserve_exact(nelem).is_err() {
            log::error!("objbuild: allocation of {} elements failed", nelem);
            return Err(Error::AllocFailure {nelem});
        }
        array.resize(nelem, E::from_parts(0., 0.));

        Ok(ObjBuild {
            nrow, ncol,
            struc: Struc::General,
            uplo: Uplo::Lower,
            diag: Diag::NonUnit,
            conj: Conj::NoConjugate,
            trans: Trans::NoTranspose,
            array,
        })
    }

    /// Creates a 1x1 scalar instance.
    ///
    /// Returns the [`ObjBuild`] instance holding one element, or
    /// [`Error::AllocFailure`].
    /// * `re`, `im` are the canonical `f64` components, converted to the
    ///   element type.
    pub fn scalar(re: f64, im: f64) -> Result<Self, Error>
    {
        let mut b = ObjBuild::new(1, 1)?;
        b.set_sc(re, im);

        Ok(b)
    }

    /// Size of the matrix.
    ///
    /// Returns a tuple of a number of rows and columns.
    pub fn size(&self) -> (usize, usize)
    {
        (self.nrow, self.ncol)
    }

    /// Element type tag of the matrix.
    pub fn num_type(&self) -> NumType
    {
        E::NUM
    }

    /// Converted as [`kaku_core::frame::Obj`], read-only.
    ///
    /// Returns the [`Obj`] borrowing the internal data array and carrying
    /// the builder's flags.
    pub fn as_obj(&self) -> Obj<'_>
    {
        let mut o = Obj::new(self.nrow, self.ncol, 1, self.nrow as isize, &self.array);
        let r = o.set_struc(self.struc);
        assert!(r.is_ok());
        o.set_uplo(self.uplo);
        o.set_diag(self.diag);
        o.set_conj(self.conj);
        o.set_trans(self.trans);

        o
    }

    /// Converted as [`kaku_core::frame::Obj`], writable.
    ///
    /// Returns the [`Obj`] borrowing the internal data array mutably;
    /// otherwise the same as [`ObjBuild::as_obj`].
    pub fn as_obj_mut(&mut self) -> Obj<'_>
    {
        let mut o = Obj::new_mut(self.nrow, self.ncol, 1, self.nrow as isize, &mut self.array);
        let r = o.set_struc(self.struc);
        assert!(r.is_ok());
        o.set_uplo(self.uplo);
        o.set_diag(self.diag);
        o.set_conj(self.conj);
        o.set_trans(self.trans);

        o
    }

    /// Sets the value of a 1x1 scalar.
    ///
    /// The shape shall be 1x1.
    /// * `re`, `im` are the canonical `f64` components, converted to the
    ///   element type.
    pub fn set_sc(&mut self, re: f64, im: f64)
    {
        assert_eq!((self.nrow, self.ncol), (1, 1));

        self.array[0] = E::from_parts(re, im);
    }
    /// Builder pattern of [`ObjBuild::set_sc`].
    pub fn sc(mut self, re: f64, im: f64) -> Self
    {
        self.set_sc(re, im);
        self
    }

    /// Sets the element at (`r`, `c`) from canonical `f64` components,
    /// converted to the element type.
    pub fn set_elem(&mut self, r: usize, c: usize, re: f64, im: f64)
    {
        let i = self.index((r, c));

        self.array[i] = E::from_parts(re, im);
    }

    /// Data by a function.
    ///
    /// * `func` takes a row and a column of the matrix and returns data of
    ///   each element.
    pub fn set_by_fn<M>(&mut self, mut func: M)
    where M: FnMut(usize, usize) -> E
    {
        for c in 0.. self.ncol {
            for r in 0.. self.nrow {
                self[(r, c)] = func(r, c);
            }
        }
    }
    /// Builder pattern of [`ObjBuild::set_by_fn`].
    pub fn by_fn<M>(mut self, func: M) -> Self
    where M: FnMut(usize, usize) -> E
    {
        self.set_by_fn(func);
        self
    }

    /// Data by an iterator in column-major.
    ///
    /// * `iter` iterates matrix data in column-major.
    pub fn set_iter_colmaj<T, I>(&mut self, iter: T)
    where T: IntoIterator<Item=I>, I: Deref<Target=E>
    {
        let mut i = iter.into_iter();

        for c in 0.. self.ncol {
            for r in 0.. self.nrow {
                if let Some(v) = i.next() {
                    self[(r, c)] = *v;
                }
                else {
                    break;
                }
            }
        }
    }
    /// Builder pattern of [`ObjBuild::set_iter_colmaj`].
    pub fn iter_colmaj<T, I>(mut self, iter: T) -> Self
    where T: IntoIterator<Item=I>, I: Deref<Target=E>
    {
        self.set_iter_colmaj(iter);
        self
    }

    /// Sets the structure tag.
    ///
    /// Symmetric and Hermitian structure requires a square shape; on
    /// failure the builder is left unchanged.
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
    /// Builder pattern of [`ObjBuild::set_struc`].
    pub fn struc(mut self, struc: Struc) -> Result<Self, Error>
    {
        self.set_struc(struc)?;
        Ok(self)
    }

    /// Sets the stored-triangle flag.
    pub fn set_uplo(&mut self, uplo: Uplo)
    {
        self.uplo = uplo;
    }
    /// Builder pattern of [`ObjBuild::set_uplo`].
    pub fn uplo(mut self, uplo: Uplo) -> Self
    {
        self.set_uplo(uplo);
        self
    }

    /// Sets the diagonal flag.
    pub fn set_diag(&mut self, diag: Diag)
    {
        self.diag = diag;
    }
    /// Builder pattern of [`ObjBuild::set_diag`].
    pub fn diag(mut self, diag: Diag) -> Self
    {
        self.set_diag(diag);
        self
    }

    /// Sets the conjugation flag.
    pub fn set_conj(&mut self, conj: Conj)
    {
        self.conj = conj;
    }
    /// Builder pattern of [`ObjBuild::set_conj`].
    pub fn conj(mut self, conj: Conj) -> Self
    {
        self.set_conj(conj);
        self
    }

    /// Sets the transposition flag.
    pub fn set_trans(&mut self, trans: Trans)
    {
        self.trans = trans;
    }
    /// Builder pattern of [`ObjBuild::set_trans`].
    pub fn trans(mut self, trans: Trans) -> Self
    {
        self.set_trans(trans);
        self
    }

    fn index(&self, (r, c): (usize, usize)) -> usize
    {
        assert!(r < self.nrow);
        assert!(c < self.ncol);
        let i = c * self.nrow + r;

        assert!(i < self.array.len());
        i
    }
}

//

impl<E: Element> Index<(usize, usize)> for ObjBuild<E>
{
    type Output = E;
    fn index(&self, index: (usize, usize)) -> &Self::Output
    {
        let i = self.index(index);

        &self.array[i]
    }
}

impl<E: Element> IndexMut<(usize, usize)> for ObjBuild<E>
{
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output
    {
        let i = self.index(index);

        &mut self.array[i]
    }
}

//

// used by tests
impl<E: Element> AsRef<[E]> for ObjBuild<E>
{
    fn as_ref(&self) -> &[E]
    {
        &self.array
    }
}

// used by tests
impl<E: Element> AsMut<[E]> for ObjBuild<E>
{
    fn as_mut(&mut self) -> &mut[E]
    {
        &mut self.array
    }
}

//

impl<E: Element + core::fmt::LowerExp> ObjBuild<E>
{
    // corner entries of one row, elided in the middle
    fn fmt_row(&self, f: &mut core::fmt::Formatter, r: usize) -> Result<(), core::fmt::Error>
    {
        write!(f, "{:.3e}", self[(r, 0)])?;
        if self.ncol > 2 {
            write!(f, " ...")?;
        }
        if self.ncol > 1 {
            write!(f, " {:.3e}", self[(r, self.ncol - 1)])?;
        }

        Ok(())
    }
}

impl<E: Element + core::fmt::LowerExp> core::fmt::Display for ObjBuild<E>
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        let (nr, nc) = self.size();
        if nr == 0 || nc == 0 {
            write!(f, "[ ]")?;
        }
        else {
            write!(f, "[ ")?;
            self.fmt_row(f, 0)?;

            if nr > 2 {
                writeln!(f)?;
                write!(f, "  ...")?;
            }

            if nr > 1 {
                writeln!(f)?;
                write!(f, "  ")?;
                self.fmt_row(f, nr - 1)?;
            }
            write!(f, " ]")?;
        }

        write!(f, " ({} x {}) {}", nr, nc, self.struc)
    }
}

//

#[test]
fn test_objbuild1()
{
    use float_eq::assert_float_eq;

    let array = &[ // column-major
        1., 2.,
        3., 4.,
        5., 6.,
    ];

    let mut m = ObjBuild::<f64>::new(2, 3).unwrap()
            .iter_colmaj(array);

    assert_eq!(m.size(), (2, 3));
    assert_float_eq!(m.as_ref(), array.as_ref(), abs_all <= 1e-12);

    // the data array is column-major
    m.as_mut()[2] = 30.;
    assert_eq!(m[(0, 1)], 30.);

    let o = m.as_obj();
    assert_eq!(o.get_elem(0, 1), (30., 0.));
    assert_eq!(o.get_elem(1, 2), (6., 0.));
}

#[test]
fn test_objbuild2()
{
    use num_complex::Complex64;

    let s = ObjBuild::<Complex64>::scalar(2., -1.).unwrap();
    assert_eq!(s.num_type(), NumType::C64);
    assert_eq!(s.as_obj().num_type(), NumType::C64);
    assert_eq!(s.as_obj().get_elem(0, 0), (2., -1.));

    // structure tags flow through to the views
    let r = ObjBuild::<f64>::new(2, 3).unwrap().struc(Struc::Hermitian);
    assert!(r.is_err());

    let m = ObjBuild::<f64>::new(3, 3).unwrap()
            .struc(Struc::Hermitian).unwrap()
            .uplo(Uplo::Upper)
            .trans(Trans::Transpose);
    let o = m.as_obj();
    assert_eq!(o.struc(), Struc::Hermitian);
    assert_eq!(o.uplo(), Uplo::Upper);
    assert_eq!(o.trans(), Trans::Transpose);
}

#[test]
fn test_objbuild3()
{
    let mut m = ObjBuild::<f64>::new(2, 2).unwrap()
                .by_fn(|r, c| (10 * r + c) as f64);

    assert_eq!(m[(1, 0)], 10.);
    m.set_elem(1, 0, 7.5, 0.);
    assert_eq!(m[(1, 0)], 7.5);

    assert_eq!(format!("{}", m), "[ 0.000e0 1.000e0\n  7.500e0 1.100e1 ] (2 x 2) general");
}
