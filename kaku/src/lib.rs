/*!
Kaku ([核](http://www.decodeunicode.org/en/u+6838) in Japanese) means kernel.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

This crate for Rust provides **object-based dense linear-algebra kernels** that are carried out by [`kaku_core`].

# General usage

1. Construct your operands as [`ObjBuild`] instances, or as
   [`kaku_core::frame::Obj`] views borrowing buffers you already own.
1. Tag the structure, stored-triangle, conjugation and transposition flags
   as needed; the flags are metadata and never move elements.
1. Invoke an operation such as [`prelude::axpyv`] or [`prelude::her2k`].
   It validates the operands, resolves the element type and runs the typed
   loops of a [`prelude::Kernel`] implementation:
   * [`prelude::RealGeneric`] / [`prelude::ComplexGeneric`] -
     `num::Float`-generic, pure Rust.
   * [`prelude::IndexGeneric`] -
     integer bookkeeping elements, usable at the kernel level only.

# Examples

A simple vector update:
\\[
y \leftarrow \alpha x + y
\\]

```
use float_eq::assert_float_eq;
use kaku::prelude::*;
use kaku::*;

//env_logger::init(); // Use any logger crate as `kaku` uses `log` crate.

let n = 3;

let alpha = ObjBuild::<f64>::scalar(2., 0.).unwrap();

let mut x = ObjBuild::<f64>::new(n, 1).unwrap();
x[(0, 0)] = 1.;
x[(1, 0)] = 2.;
x[(2, 0)] = 3.;

let mut y = ObjBuild::<f64>::new(n, 1).unwrap();

axpyv(&alpha.as_obj(), &x.as_obj(), &mut y.as_obj_mut()).unwrap();

assert_float_eq!(y.as_ref(), [2., 4., 6.].as_ref(), abs_all <= 1e-12);
```

## Other examples

You can find other tests of the operations under the `tests` directory.
*/

mod objbuild;

pub use objbuild::*;

//

/// Prelude
pub mod prelude
{
    pub use kaku_core::frame::{Conj, Diag, Element, Error, Kernel, NumType, Obj, Struc, Trans, Uplo};
    pub use kaku_core::{axpyv, her2k, ComplexGeneric, IndexGeneric, RealGeneric};
    pub use num_complex::{Complex32, Complex64};
}
