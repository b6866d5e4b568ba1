//! The operation facade composing validation, argument building,
//! invocation, and parsing.

mod defender;

pub use defender::{DefenderClient, DefenderClientBuilder};
