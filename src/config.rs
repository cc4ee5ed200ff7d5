//! Board Configuration
//!
//! Storage keys and UI behavior switches.

/// Settings for a `Board` and its view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// localStorage key holding the container sequence
    pub containers_key: String,
    /// localStorage key holding the task map
    pub todos_key: String,
    /// Close the color picker after a color is chosen
    pub close_picker_on_select: bool,
    /// How long a validation notice stays visible
    pub notice_timeout_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            containers_key: "selectedColors".to_string(),
            todos_key: "todos".to_string(),
            close_picker_on_select: true,
            notice_timeout_ms: 3000,
        }
    }
}
