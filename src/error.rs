//! Error types for fastborder
//!
//! Border drawing itself never fails: invalid geometry and non-positive
//! widths degrade to no-op draws so border painting can never abort page
//! generation. Errors exist only on the display-list surface, where a
//! recorded operation sequence can be structurally invalid (unbalanced
//! graphics state).
//!
//! All errors use the `thiserror` crate for minimal boilerplate and
//! proper error trait implementations.

use thiserror::Error;

/// Result type alias for fastborder operations
///
/// # Examples
///
/// ```
/// use fastborder::Result;
///
/// fn replay_ops() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for fastborder
///
/// # Examples
///
/// ```
/// use fastborder::Error;
///
/// let error = Error::StateUnderflow { index: 3 };
/// assert!(format!("{}", error).contains("save_state"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// A `restore_state` operation had no matching `save_state`
  #[error("Graphics state underflow: restore_state at op {index} has no matching save_state")]
  StateUnderflow { index: usize },

  /// One or more `save_state` operations were never restored
  #[error("Unbalanced graphics state: {depth} save_state call(s) left open")]
  UnbalancedState { depth: usize },

  /// Invalid paint parameters
  #[error("Invalid paint parameters: {message}")]
  InvalidParameters { message: String },
}
