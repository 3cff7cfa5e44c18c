use serde::Deserialize;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogConfigSection {
    pub level: Option<String>,
}

impl LogConfigSection {
    /// Configured level, `warn` when absent or unrecognised.
    pub fn level_filter(&self) -> LevelFilter {
        self.level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::WARN)
    }
}
