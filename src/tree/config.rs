//! Configuration types for tree walkers

/// Connector unit marking one level of nesting.
const CONNECTOR: &str = "|-- ";

/// Whitespace appended to the padding on each descent.
const INDENT: &str = "   ";

/// Layout units used by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Appended to a directory's padding before descending into it.
    /// Also the padding of the root visit.
    pub connector: String,
    /// Appended to the incoming padding to indent a directory's entries.
    /// The connector line drops this many trailing characters.
    pub indent: String,
}

impl WalkerConfig {
    /// Padding handed to the root visit.
    pub fn initial_padding(&self) -> &str {
        &self.connector
    }

    /// The connector line printed for a directory visited with `padding`.
    pub fn connector_line<'a>(&self, padding: &'a str) -> &'a str {
        let strip = self.indent.chars().count();
        let keep = padding.chars().count().saturating_sub(strip);
        match padding.char_indices().nth(keep) {
            Some((idx, _)) => &padding[..idx],
            None => padding,
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            connector: CONNECTOR.to_string(),
            indent: INDENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_connector_line() {
        let config = WalkerConfig::default();
        assert_eq!(config.connector_line(config.initial_padding()), "|");
    }

    #[test]
    fn test_nested_connector_line() {
        let config = WalkerConfig::default();
        assert_eq!(config.connector_line("|--    |-- "), "|--    |");
    }

    #[test]
    fn test_connector_line_shorter_than_indent() {
        let config = WalkerConfig::default();
        assert_eq!(config.connector_line("ab"), "");
        assert_eq!(config.connector_line(""), "");
    }
}
