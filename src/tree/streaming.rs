//! StreamingWalker - depth-first traversal that streams lines as it goes

use std::path::Path;
use std::vec;

use log::{debug, trace};

use crate::error::TreeError;

use super::config::WalkerConfig;
use super::entries::{Entry, read_sorted_entries};

/// Callback for streaming output - receives each line's parts for display.
pub trait StreamingOutput {
    /// A bare connector line, emitted once per visited directory.
    fn output_connector(&mut self, prefix: &str) -> std::io::Result<()>;

    fn output_node(&mut self, name: &str, is_dir: bool, prefix: &str) -> std::io::Result<()>;

    fn finish(&mut self) -> std::io::Result<()>;
}

/// Counts of the entries printed by a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub dirs: usize,
    pub files: usize,
}

/// One directory being listed: its remaining entries and their padding.
struct Frame {
    entries: vec::IntoIter<Entry>,
    padding: String,
}

/// Streaming tree walker that writes output while traversing.
/// Uses an explicit stack, so deep trees do not grow the call stack.
pub struct StreamingWalker {
    config: WalkerConfig,
}

impl StreamingWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` with the initial padding.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<WalkStats, TreeError> {
        self.print_tree(root, self.config.initial_padding(), output)
    }

    /// Print `directory` and everything below it, starting from `padding`.
    ///
    /// A directory is listed before its connector line is written, so a
    /// directory that cannot be listed contributes no lines of its own.
    /// The first listing failure aborts the walk; lines already written stay
    /// written. `output.finish()` is not called here.
    pub fn print_tree<O: StreamingOutput>(
        &self,
        directory: &Path,
        padding: &str,
        output: &mut O,
    ) -> Result<WalkStats, TreeError> {
        let mut stats = WalkStats::default();
        let mut stack = vec![self.visit(directory, padding, output)?];

        while let Some(frame) = stack.last_mut() {
            let Some(entry) = frame.entries.next() else {
                stack.pop();
                continue;
            };

            let name = entry.display_name();
            trace!("entry {}", entry.path.display());

            if entry.is_dir() {
                output.output_node(&name, true, &frame.padding)?;
                stats.dirs += 1;
                let child_padding = format!("{}{}", frame.padding, self.config.connector);
                let child = self.visit(&entry.path, &child_padding, output)?;
                stack.push(child);
            } else {
                output.output_node(&name, false, &frame.padding)?;
                stats.files += 1;
            }
        }

        debug!(
            "walked {}: {} directories, {} files",
            directory.display(),
            stats.dirs,
            stats.files
        );
        Ok(stats)
    }

    fn visit<O: StreamingOutput>(
        &self,
        directory: &Path,
        padding: &str,
        output: &mut O,
    ) -> Result<Frame, TreeError> {
        debug!("visiting {}", directory.display());
        let entries = read_sorted_entries(directory)?;

        output.output_connector(self.config.connector_line(padding))?;

        Ok(Frame {
            entries: entries.into_iter(),
            padding: format!("{}{}", padding, self.config.indent),
        })
    }
}

impl Default for StreamingWalker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}
