use serde::Deserialize;

const DEFAULT_MAX_ENTRIES: usize = 1000;

/// In-memory line editor history settings.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct HistoryConfigSection {
    pub max_entries: Option<usize>,
    pub ignore_duplicates: Option<bool>,
}

impl HistoryConfigSection {
    pub fn max_entries(&self) -> usize {
        self.max_entries.unwrap_or(DEFAULT_MAX_ENTRIES)
    }

    pub fn ignore_duplicates(&self) -> bool {
        self.ignore_duplicates.unwrap_or(true)
    }
}
