//! Elementary scalar kernels

use num_traits::Signed;
use crate::frame::Conj;

/// Elementary scalar kernel trait.
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// One implementor per element type provides the primitive per-element
/// operations every algorithm is written in terms of. Values cross this
/// boundary as explicit (real, imaginary) component pairs; real and integer
/// implementors scale the imaginary slot along with the real one, so a single
/// algorithm body (and the widened mixed-precision paths) serves every
/// element type. An architecture-tuned backend substitutes by implementing
/// this trait and instantiating the generic algorithm routines with it.
pub trait Kernel: Clone
{
    /// Numeric component type of a (real, imaginary) pair.
    type R: Signed + Copy;

    /// Stored element type.
    type E: Copy;

    /// Packs a component pair into a stored element.
    ///
    /// Returns the element.
    /// The imaginary component is dropped for real and integer implementors.
    fn pack(re: Self::R, im: Self::R) -> Self::E;

    /// Unpacks a stored element into its component pair.
    ///
    /// Returns the (real, imaginary) pair.
    /// The imaginary component is zero for real and integer implementors.
    fn unpack(e: Self::E) -> (Self::R, Self::R);

    /// Calculates \\(\alpha x\\).
    ///
    /// Returns the component pair of \\(\alpha x\\).
    /// * `ar`, `ai` are the components of a scalar \\(\alpha\\).
    /// * `xr`, `xi` are the components of an element \\(x\\).
    fn scal(ar: Self::R, ai: Self::R, xr: Self::R, xi: Self::R) -> (Self::R, Self::R);

    /// Calculates \\(\alpha \bar x\\) if `conj` is conjugating, \\(\alpha x\\) otherwise.
    ///
    /// The conjugation applies to the element \\(x\\) being scaled, never to
    /// the scalar \\(\alpha\\).
    /// Returns the component pair of the product.
    /// * `conj` selects whether \\(\bar x\\) replaces \\(x\\).
    /// * `ar`, `ai` are the components of a scalar \\(\alpha\\).
    /// * `xr`, `xi` are the components of an element \\(x\\).
    fn scalcj(conj: Conj, ar: Self::R, ai: Self::R, xr: Self::R, xi: Self::R) -> (Self::R, Self::R);

    /// Calculates \\(\alpha x + y\\).
    ///
    /// Returns the component pair of \\(\alpha x + y\\).
    /// * `ar`, `ai` are the components of a scalar \\(\alpha\\).
    /// * `xr`, `xi` are the components of an element \\(x\\).
    /// * `yr`, `yi` are the components of an element \\(y\\).
    fn axpy(ar: Self::R, ai: Self::R, xr: Self::R, xi: Self::R, yr: Self::R, yi: Self::R) -> (Self::R, Self::R);

    /// Calculates \\(\bar x\\).
    ///
    /// Returns the component pair of \\(\bar x\\); the identity for real and
    /// integer implementors.
    /// * `xr`, `xi` are the components of an element \\(x\\).
    fn conj(xr: Self::R, xi: Self::R) -> (Self::R, Self::R);

    /// Calculates \\(\bar x\\) if `conj` is conjugating, \\(x\\) otherwise.
    fn copycj(conj: Conj, xr: Self::R, xi: Self::R) -> (Self::R, Self::R)
    {
        if conj.is_conj() {
            Self::conj(xr, xi)
        }
        else {
            (xr, xi)
        }
    }
}
