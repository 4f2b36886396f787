//! Core library for the fixbrot-tools command line application.
//!
//! The crate hosts the build-time amalgamation step of the fixbrot project:
//! it inlines the full header tree under `lib/include` into one
//! self-contained, include-guarded header. The traversal lives in
//! [`flatten`], failure cases in [`error`], the per-checkout constants in
//! [`config`], and the tracing setup for the binary in [`logging`].
//!
//! Include detection is a per-line regular expression, not a preprocessor:
//! directives inside block comments or string literals are matched too. The
//! header tree is expected not to rely on that distinction.

pub mod config;
pub mod error;
pub mod flatten;
pub mod logging;

pub use error::{FlattenError, Result};
pub use flatten::Flattener;
