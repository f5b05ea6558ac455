//! Core reply types.

mod reply;

pub use reply::{ReplyCode, ReplyEntry};
