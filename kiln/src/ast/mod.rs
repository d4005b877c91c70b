//! Abstract Syntax Tree definitions
//!
//! The tree is built by an external parser; this crate only consumes it.
//! Every node is serde-encodable so a finished tree can be handed over as JSON.

mod expr;

pub use expr::*;
