//! Output formatting for tree display

mod streaming;

pub use streaming::StreamingFormatter;
