//! Errors reported by the argument checker.
//!
//! The formatting engine itself never fails; these only come out of
//! [`check_args`](crate::check::check_args) and the `_checked` entry points.

use core::fmt;

use crate::args::ArgKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FmtError {
    /// The template needs argument `index` but the list ended.
    MissingArgument { index: usize, conversion: u8 },
    /// Argument `index` cannot feed the conversion that reads it.
    TypeMismatch {
        index: usize,
        conversion: u8,
        found: ArgKind,
    },
    /// More arguments were supplied than the template reads.
    ExtraArguments { consumed: usize, supplied: usize },
}

impl fmt::Display for FmtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument { index, conversion } => {
                write!(
                    f,
                    "argument {} missing for %{}",
                    index, *conversion as char
                )
            }
            Self::TypeMismatch {
                index,
                conversion,
                found,
            } => {
                write!(
                    f,
                    "argument {} is {}, which %{} cannot take",
                    index, found, *conversion as char
                )
            }
            Self::ExtraArguments { consumed, supplied } => {
                write!(
                    f,
                    "template reads {} arguments but {} were supplied",
                    consumed, supplied
                )
            }
        }
    }
}

/// Convenience result type for checked formatting.
pub type FmtResult<T = ()> = Result<T, FmtError>;
