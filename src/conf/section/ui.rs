use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UiConfigSection {
    pub banner: Option<bool>,
    pub color: Option<bool>,
}

impl UiConfigSection {
    /// Print the welcome banner at startup.
    pub fn banner(&self) -> bool {
        self.banner.unwrap_or(true)
    }

    /// Colour the prompt and banner.
    pub fn color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}
