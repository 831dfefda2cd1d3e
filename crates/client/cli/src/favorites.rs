//! Favorite palettes marked during one run.
use std::collections::BTreeSet;

use tracing::warn;

/// Lines the user marked, kept sorted for the closing summary.
#[derive(Clone, Debug, Default)]
pub struct Favorites {
    lines: BTreeSet<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag `lines[index]` with a leading `+` and remember it.
    ///
    /// Returns `false` when the index is out of range.
    pub fn mark(&mut self, lines: &mut [String], index: usize) -> bool {
        let available = lines.len();
        let Some(line) = lines.get_mut(index) else {
            warn!(index, available, "ignoring mark outside the listing");
            return false;
        };

        if let Some(rest) = line.strip_prefix(' ') {
            *line = format!("+{rest}");
        }
        self.lines.insert(line.clone());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}
