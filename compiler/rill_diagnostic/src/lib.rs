//! Diagnostic system for the rill front end.
//!
//! Diagnostics follow the shape of the rest of the pipeline's reports:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Context labels and notes (why it's wrong)
//!
//! Recoverable reports accumulate in a [`DiagnosticSink`]; emitting one
//! never aborts the pass that raised it. Unrecoverable internal-invariant
//! failures are not diagnostics — passes surface those through their own
//! fatal error channel.

mod diagnostic;
mod error_code;
mod sink;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use sink::DiagnosticSink;

pub mod reports;
