//! Error types for relink-rs.
//!
//! The whole workspace reports failures through a single `thiserror`-derived
//! enum.  The `ensure!` and `fail!` macros cover the common precondition /
//! immediate-failure cases.

use thiserror::Error;

/// The top-level error type used throughout relink-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// One-time construction of a shared resource failed.
    ///
    /// The construction gate resets, so a later resolve may retry.
    #[error("resource construction failed: {0}")]
    Construction(String),

    /// A selection policy received a method token it does not recognise.
    ///
    /// Surfaced immediately; there is no silent default.
    #[error("unsupported shipping method: {method}")]
    UnsupportedMethod {
        /// The token that was not recognised.
        method: String,
    },

    /// Invalid argument (negative weight, negative amount, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout relink-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a precondition, returning `Err(Error::InvalidArgument(...))` if it
/// does not hold.
///
/// # Example
/// ```
/// use rl_core::ensure;
/// fn non_negative(x: f64) -> rl_core::errors::Result<f64> {
///     ensure!(x >= 0.0, "x must be non-negative, got {x}");
///     Ok(x)
/// }
/// assert!(non_negative(1.0).is_ok());
/// assert!(non_negative(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Construction(...))` immediately.
///
/// # Example
/// ```
/// use rl_core::fail;
/// fn always_err() -> rl_core::errors::Result<()> {
///     fail!("gateway unreachable");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Construction(format!($($msg)*)))
    };
}
