use crate::frame::{NumType, Struc};

/// Kernel library errors.
///
/// Every variant names the operand it was raised for (0-origin position in
/// the operation's signature) and the constraint that failed. All variants
/// except [`Error::AllocFailure`] are detected during dispatch, before any
/// output buffer is mutated, and are recoverable by correcting the offending
/// descriptor and retrying.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error
{
    /// An operand's element type is not acceptable where it appears.
    NumTypeMismatch {
        /// Operand position.
        operand: usize,
        /// Element type found.
        actual: NumType,
    },
    /// A structure tag conflicts with a shape or an operation's contract.
    InvalidStructureForShape {
        /// Operand position; `None` when raised by a descriptor setter.
        operand: Option<usize>,
        /// Structure tag involved.
        struc: Struc,
        /// Row count.
        nrow: usize,
        /// Column count.
        ncol: usize,
    },
    /// Operand dimensions disagree with the operation's mathematical signature.
    DimensionMismatch {
        /// Operand position.
        operand: usize,
        /// Expected row count.
        expect_nrow: usize,
        /// Expected column count.
        expect_ncol: usize,
        /// Row count found.
        nrow: usize,
        /// Column count found.
        ncol: usize,
    },
    /// An element type pairing outside the documented mixed-precision set.
    UnsupportedMixedPrecision {
        /// Operand position.
        operand: usize,
        /// Element type of the operand.
        num: NumType,
        /// Element type it was paired with.
        other: NumType,
    },
    /// Backing buffer allocation failed.
    AllocFailure {
        /// Element count requested.
        nelem: usize,
    },
}

impl core::fmt::Display for Error
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        match self {
            Error::NumTypeMismatch {operand, actual} => {
                write!(f, "operand {}: element type {} is not computational", operand, actual)
            },
            Error::InvalidStructureForShape {operand, struc, nrow, ncol} => {
                if let Some(i) = operand {
                    write!(f, "operand {}: ", i)?;
                }
                if nrow != ncol {
                    write!(f, "{} structure requires square dimensions, got {}x{}", struc, nrow, ncol)
                }
                else {
                    write!(f, "{} structure is not valid for this operation ({}x{})", struc, nrow, ncol)
                }
            },
            Error::DimensionMismatch {operand, expect_nrow, expect_ncol, nrow, ncol} => {
                write!(f, "operand {}: dimensions {}x{} where {}x{} is required", operand, nrow, ncol, expect_nrow, expect_ncol)
            },
            Error::UnsupportedMixedPrecision {operand, num, other} => {
                write!(f, "operand {}: element type {} paired with {} is outside the supported mixed-precision set", operand, num, other)
            },
            Error::AllocFailure {nelem} => {
                write!(f, "allocation of {} elements failed", nelem)
            },
        }
    }
}

//

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for Error {}
