//! Container layout
//!
//! Describes the outer panel hosting the layer stack: how it is positioned,
//! which edge it is anchored to, and how it fades in and out.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::config::{Animation, BlurConfig, Target};
use super::position::Position;

/// Stacking offset applied to page-level containers
const PAGE_Z_OFFSET: i32 = 100;

/// CSS positioning scheme of the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Positioning {
    Absolute,
    Fixed,
}

impl Positioning {
    pub fn as_str(&self) -> &'static str {
        match self {
            Positioning::Absolute => "absolute",
            Positioning::Fixed => "fixed",
        }
    }
}

/// Layout of the container element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerLayout {
    pub class_name: String,
    pub positioning: Positioning,
    /// True when the container should receive hover events
    pub pointer_events: bool,
    pub opacity: f64,
    pub transition: Option<String>,
    pub z_index: i32,
    pub width: String,
    pub height: String,
    /// Edges pinned to zero, in declaration order
    pub anchors: Vec<Position>,
    /// Caller declarations, applied over the computed ones
    pub style: BTreeMap<String, String>,
}

impl ContainerLayout {
    /// Whether a freshly mounted container starts visible
    ///
    /// Scroll-animated containers stay hidden until scrolled into view.
    pub fn initially_visible(config: &BlurConfig) -> bool {
        !matches!(config.animated, Animation::Scroll)
    }

    /// Derive the layout for `config`
    pub fn from_config(config: &BlurConfig, visible: bool) -> Self {
        let (positioning, z_index, target_class) = match config.target {
            Target::Page => (
                Positioning::Fixed,
                config.z_index + PAGE_Z_OFFSET,
                "gradual-blur-page",
            ),
            Target::Parent => (Positioning::Absolute, config.z_index, "gradual-blur-parent"),
        };

        let (width, height, anchors) = if config.position.is_vertical() {
            (
                config.width.clone().unwrap_or_else(|| "100%".to_string()),
                config.height.clone(),
                vec![config.position, Position::Left, Position::Right],
            )
        } else {
            (
                config.width.clone().unwrap_or_else(|| config.height.clone()),
                "100%".to_string(),
                vec![config.position, Position::Top, Position::Bottom],
            )
        };

        let transition = config
            .animated
            .is_animated()
            .then(|| format!("opacity {} {}", config.duration, config.easing));

        Self {
            class_name: format!("gradual-blur {} {}", target_class, config.class_name)
                .trim()
                .to_string(),
            positioning,
            pointer_events: config.active_hover_intensity().is_some(),
            opacity: if visible { 1.0 } else { 0.0 },
            transition,
            z_index,
            width,
            height,
            anchors,
            style: config.style.clone(),
        }
    }
}
