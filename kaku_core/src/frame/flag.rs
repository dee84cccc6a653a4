/// Conjugation flag of an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conj
{
    /// Use elements as stored.
    NoConjugate,
    /// Use complex conjugates of stored elements.
    Conjugate,
}

impl Conj
{
    /// Checks if conjugating.
    pub fn is_conj(&self) -> bool
    {
        *self == Conj::Conjugate
    }

    /// Composes two conjugation flags.
    ///
    /// Returns the combined flag; conjugation cancels pairwise, so the
    /// composition is an exclusive or.
    pub fn compose(&self, other: Conj) -> Conj
    {
        if self.is_conj() != other.is_conj() {Conj::Conjugate} else {Conj::NoConjugate}
    }

    /// The opposite flag.
    pub fn toggled(&self) -> Conj
    {
        self.compose(Conj::Conjugate)
    }
}

//

/// Transposition flag of an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trans
{
    /// Use the object as stored.
    NoTranspose,
    /// Swap rows and columns.
    Transpose,
    /// Swap rows and columns and conjugate the elements.
    ConjTranspose,
}

impl Trans
{
    /// Checks if rows and columns are swapped.
    pub fn has_trans(&self) -> bool
    {
        match self {
            Trans::NoTranspose => false,
            Trans::Transpose | Trans::ConjTranspose => true,
        }
    }

    /// The conjugation carried by the flag.
    pub fn conj(&self) -> Conj
    {
        match self {
            Trans::ConjTranspose => Conj::Conjugate,
            _ => Conj::NoConjugate,
        }
    }
}

//

/// Stored triangle of a structured matrix, diagonal inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uplo
{
    /// The lower triangle holds authoritative data.
    Lower,
    /// The upper triangle holds authoritative data.
    Upper,
}

//

/// Diagonal flag of a triangular matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diag
{
    /// Diagonal elements are stored.
    NonUnit,
    /// Diagonal elements are implicitly one and not referenced.
    Unit,
}

//

/// Structure tag of a matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Struc
{
    /// No structure; every element is meaningful.
    General,
    /// Symmetric; one triangle holds authoritative data.
    Symmetric,
    /// Hermitian; one triangle holds authoritative data and the diagonal is real.
    Hermitian,
    /// Triangular; one triangle holds authoritative data, the rest is zero.
    Triangular,
}

impl Struc
{
    /// Checks if the structure requires equal row and column counts.
    pub fn requires_square(&self) -> bool
    {
        match self {
            Struc::Symmetric | Struc::Hermitian => true,
            Struc::General | Struc::Triangular => false,
        }
    }
}

impl core::fmt::Display for Struc
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{}", match self {
            Struc::General => "general",
            Struc::Symmetric => "symmetric",
            Struc::Hermitian => "hermitian",
            Struc::Triangular => "triangular",
        })
    }
}

//

#[test]
fn test_flag1()
{
    // conjugation composes by exclusive or
    let c = Conj::Conjugate.compose(Conj::Conjugate);
    assert_eq!(c, Conj::NoConjugate);
    let c = Conj::NoConjugate.compose(Conj::Conjugate);
    assert_eq!(c, Conj::Conjugate);
    let c = Conj::NoConjugate.compose(Conj::NoConjugate);
    assert_eq!(c, Conj::NoConjugate);

    assert_eq!(Conj::Conjugate.toggled(), Conj::NoConjugate);
}

#[test]
fn test_flag2()
{
    assert!(!Trans::NoTranspose.has_trans());
    assert!(Trans::Transpose.has_trans());
    assert!(Trans::ConjTranspose.has_trans());

    assert_eq!(Trans::Transpose.conj(), Conj::NoConjugate);
    assert_eq!(Trans::ConjTranspose.conj(), Conj::Conjugate);

    assert!(Struc::Hermitian.requires_square());
    assert!(Struc::Symmetric.requires_square());
    assert!(!Struc::General.requires_square());
}
