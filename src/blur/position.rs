//! Blur edge and mask direction

use log::warn;
use serde::{Deserialize, Serialize};

/// Edge of the container the blur emanates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Position {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl Position {
    /// Look up a position by name, returning `None` for unknown names
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "top" => Some(Position::Top),
            "bottom" => Some(Position::Bottom),
            "left" => Some(Position::Left),
            "right" => Some(Position::Right),
            _ => None,
        }
    }

    /// Look up a position by name, falling back to `Bottom` for unknown names
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            warn!("Unknown position '{}', falling back to bottom", name);
            Position::Bottom
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::Bottom => "bottom",
            Position::Left => "left",
            Position::Right => "right",
        }
    }

    /// True for the top and bottom edges
    pub fn is_vertical(&self) -> bool {
        matches!(self, Position::Top | Position::Bottom)
    }

    /// Direction of the mask gradient for layers anchored at this edge
    pub fn gradient_direction(&self) -> GradientDirection {
        match self {
            Position::Top => GradientDirection::ToTop,
            Position::Bottom => GradientDirection::ToBottom,
            Position::Left => GradientDirection::ToLeft,
            Position::Right => GradientDirection::ToRight,
        }
    }
}

impl From<String> for Position {
    fn from(name: String) -> Self {
        Position::from_name(&name)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Linear-gradient direction keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradientDirection {
    #[serde(rename = "to top")]
    ToTop,
    #[serde(rename = "to bottom")]
    ToBottom,
    #[serde(rename = "to left")]
    ToLeft,
    #[serde(rename = "to right")]
    ToRight,
}

impl GradientDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientDirection::ToTop => "to top",
            GradientDirection::ToBottom => "to bottom",
            GradientDirection::ToLeft => "to left",
            GradientDirection::ToRight => "to right",
        }
    }
}

impl std::fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_mapping() {
        assert_eq!(Position::Top.gradient_direction().as_str(), "to top");
        assert_eq!(Position::Bottom.gradient_direction().as_str(), "to bottom");
        assert_eq!(Position::Left.gradient_direction().as_str(), "to left");
        assert_eq!(Position::Right.gradient_direction().as_str(), "to right");
    }

    #[test]
    fn test_invalid_position_defaults_to_bottom() {
        assert_eq!(Position::parse("invalid"), None);
        assert_eq!(Position::from_name("invalid"), Position::Bottom);
        assert_eq!(
            Position::from_name("invalid").gradient_direction(),
            GradientDirection::ToBottom
        );
    }

    #[test]
    fn test_is_vertical() {
        assert!(Position::Top.is_vertical());
        assert!(Position::Bottom.is_vertical());
        assert!(!Position::Left.is_vertical());
        assert!(!Position::Right.is_vertical());
    }

    #[test]
    fn test_position_serde() {
        let pos: Position = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(pos, Position::Left);

        let pos: Position = serde_json::from_str("\"diagonal\"").unwrap();
        assert_eq!(pos, Position::Bottom);

        assert_eq!(
            serde_json::to_string(&GradientDirection::ToRight).unwrap(),
            "\"to right\""
        );
    }
}
