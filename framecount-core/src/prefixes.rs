/// Ordered list of grouping prefixes; earlier entries win
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixList {
    prefixes: Vec<String>,
    lowered: Vec<String>,
}

impl PrefixList {
    /// Parse a comma-separated prefix string
    /// Each entry is trimmed and empty entries are dropped; order is preserved.
    pub fn parse(input: &str) -> Self {
        let prefixes: Vec<String> = input
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let lowered = prefixes.iter().map(|p| p.to_lowercase()).collect();

        Self { prefixes, lowered }
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.prefixes
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    /// Index of the first prefix the name starts with (case-insensitive)
    pub fn first_match(&self, name: &str) -> Option<usize> {
        let name = name.to_lowercase();
        self.lowered
            .iter()
            .position(|prefix| name.starts_with(prefix.as_str()))
    }

    /// The first prefix the name starts with, as written by the user
    pub fn claim(&self, name: &str) -> Option<&str> {
        self.first_match(name).map(|i| self.prefixes[i].as_str())
    }
}

/// A prefix input that is missing or only whitespace requests no grouping
pub fn is_blank(prefix_input: Option<&str>) -> bool {
    prefix_input.map_or(true, |s| s.trim().is_empty())
}
