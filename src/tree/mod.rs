//! Directory tree walking logic
//!
//! `StreamingWalker` visits a directory and its descendants depth-first,
//! in name order, and hands each line to a `StreamingOutput` as soon as
//! it is known. Nothing but the current path of open directories is held
//! in memory.

mod config;
mod entries;
mod streaming;

pub use config::WalkerConfig;
pub use entries::{Entry, read_sorted_entries};
pub use streaming::{StreamingOutput, StreamingWalker, WalkStats};
