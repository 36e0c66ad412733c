//! Developer-friendly facade layer.
//!
//! [`SimpleAo`] guards the wallet precondition, applies default tags and
//! metadata, owns the wallet file lifecycle and reduces outcomes to the few
//! fields callers want.

pub mod builder;
pub mod prelude;
pub mod simple;

pub use builder::SimpleAoBuilder;
pub use simple::{SimpleAo, DEFAULT_DRY_RUN_ACTION, DEFAULT_MESSAGE_ACTION, EVAL_ACTION};
