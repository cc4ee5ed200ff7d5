//! Frontend Models
//!
//! Data structures persisted to localStorage.

use serde::{Deserialize, Serialize};

/// Container identifier (monotonic within a session)
pub type ContainerId = u32;

/// Palette of container colors
///
/// Stored with the shade suffix the board has always written
/// (`"red-500"`); bare names are accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerColor {
    #[serde(rename = "yellow-400", alias = "yellow")]
    Yellow,
    #[serde(rename = "red-500", alias = "red")]
    Red,
    #[serde(rename = "purple-500", alias = "purple")]
    Purple,
    #[serde(rename = "pink-500", alias = "pink")]
    Pink,
}

impl ContainerColor {
    /// Picker order
    pub const PALETTE: [ContainerColor; 4] = [
        ContainerColor::Yellow,
        ContainerColor::Red,
        ContainerColor::Purple,
        ContainerColor::Pink,
    ];

    pub fn css_class(&self) -> &'static str {
        match self {
            ContainerColor::Yellow => "bg-yellow-400",
            ContainerColor::Red => "bg-red-500",
            ContainerColor::Purple => "bg-purple-500",
            ContainerColor::Pink => "bg-pink-500",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContainerColor::Yellow => "yellow",
            ContainerColor::Red => "red",
            ContainerColor::Purple => "purple",
            ContainerColor::Pink => "pink",
        }
    }
}

/// A colored column on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: ContainerId,
    pub color: ContainerColor,
}

/// Render key for a todo item, assigned per session and never persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

/// A single task inside a container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(skip)]
    pub key: TaskId,
    pub text: String,
    #[serde(default)]
    pub checked: bool,
}

impl TodoItem {
    pub fn new(key: TaskId, text: String) -> Self {
        Self { key, text, checked: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_color_wire_names() {
        let json = serde_json::to_string(&ContainerColor::PALETTE).unwrap();
        assert_eq!(json, r#"["yellow-400","red-500","purple-500","pink-500"]"#);
    }

    #[test]
    fn test_color_aliases() {
        let colors: Vec<ContainerColor> = serde_json::from_str(r#"["yellow","red-500","purple","pink"]"#).unwrap();
        assert_eq!(colors, ContainerColor::PALETTE.to_vec());
    }

    #[test]
    fn test_todo_item_shape() {
        let item = TodoItem::new(TaskId(7), "buy milk".to_string());
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"text":"buy milk","checked":false}"#);

        let back: TodoItem = serde_json::from_str(r#"{"text":"a"}"#).unwrap();
        assert_eq!(back.key, TaskId::default());
        assert!(!back.checked);
    }
}
