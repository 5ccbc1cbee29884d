//! treeprint - print a directory hierarchy as an indented tree

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::TreeError;
pub use output::StreamingFormatter;
pub use tree::{StreamingOutput, StreamingWalker, WalkStats, WalkerConfig};
