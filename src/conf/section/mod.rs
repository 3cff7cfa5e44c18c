mod history;
mod logging;
mod ui;

pub use history::HistoryConfigSection;
pub use logging::LogConfigSection;
pub use ui::UiConfigSection;
