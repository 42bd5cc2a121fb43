//! Command handlers.
//!
//! Handlers are thin wrappers: resolve what the command needs from
//! [`CliConfig`](crate::CliConfig), call into `shopdiag-core`, and print
//! the result to stdout. Logs never go to stdout.

pub mod check;
pub mod env;
