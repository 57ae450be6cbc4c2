//! Blur configuration
//!
//! A `BlurConfig` is always built fresh by layering partial
//! `ConfigOverrides` on top of the defaults: defaults first, then a preset,
//! then caller overrides. Nothing is mutated in place.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::curve::CurveKind;
use super::position::Position;
use crate::error::{BlurError, Result};

// ============================================================================
// Constants
// ============================================================================

/// Default container extent along the blur axis
pub const DEFAULT_HEIGHT: &str = "6rem";

/// Default container stacking order
pub const DEFAULT_Z_INDEX: i32 = 1000;

/// Default transition duration
pub const DEFAULT_DURATION: &str = "0.3s";

/// Default transition timing function
pub const DEFAULT_EASING: &str = "ease-out";

// ============================================================================
// Supporting enums
// ============================================================================

/// Element the blur container attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Target {
    /// Positioned inside the host element
    #[default]
    Parent,
    /// Fixed to the viewport
    Page,
}

impl Target {
    pub fn name(&self) -> &'static str {
        match self {
            Target::Parent => "parent",
            Target::Page => "page",
        }
    }
}

impl From<String> for Target {
    fn from(name: String) -> Self {
        if name == "page" {
            Target::Page
        } else {
            Target::Parent
        }
    }
}

/// Transition policy for the container and its layers
///
/// Accepts `false`/`true` as well as mode names when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "AnimationRepr")]
pub enum Animation {
    #[default]
    None,
    /// Container opacity and layer blur both transition
    Transition,
    /// Container starts hidden and fades in when scrolled into view
    Scroll,
}

impl Animation {
    /// True when the container opacity transitions
    pub fn is_animated(&self) -> bool {
        !matches!(self, Animation::None)
    }

    /// True when each layer's backdrop filter transitions
    pub fn transitions_layers(&self) -> bool {
        matches!(self, Animation::Transition)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnimationRepr {
    Flag(bool),
    Mode(String),
}

impl From<AnimationRepr> for Animation {
    fn from(repr: AnimationRepr) -> Self {
        match repr {
            AnimationRepr::Flag(false) => Animation::None,
            AnimationRepr::Flag(true) => Animation::Transition,
            AnimationRepr::Mode(mode) => match mode.as_str() {
                "" | "none" | "false" => Animation::None,
                "scroll" => Animation::Scroll,
                _ => Animation::Transition,
            },
        }
    }
}

// ============================================================================
// BlurConfig
// ============================================================================

/// Fully resolved configuration for one blur stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurConfig {
    /// Edge the blur emanates from
    pub position: Position,
    /// Base blur multiplier
    pub strength: f64,
    /// Number of stacked layers
    #[serde(alias = "divCount")]
    pub div_count: u32,
    /// Grow blur as a power of two instead of linearly
    pub exponential: bool,
    /// Progress-remapping curve
    pub curve: CurveKind,
    /// Uniform layer opacity
    pub opacity: f64,
    /// Strength multiplier applied while hovered
    #[serde(alias = "hoverIntensity")]
    pub hover_intensity: Option<f64>,
    /// Container extent along the blur axis (CSS length)
    pub height: String,
    /// Container cross extent override (CSS length)
    pub width: Option<String>,
    #[serde(alias = "zIndex")]
    pub z_index: i32,
    pub animated: Animation,
    pub duration: String,
    pub easing: String,
    pub target: Target,
    /// Extra class names for the container
    #[serde(alias = "className")]
    pub class_name: String,
    /// Container declarations applied after the computed ones
    pub style: BTreeMap<String, String>,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            position: Position::Bottom,
            strength: 2.0,
            div_count: 5,
            exponential: false,
            curve: CurveKind::Linear,
            opacity: 1.0,
            hover_intensity: None,
            height: DEFAULT_HEIGHT.to_string(),
            width: None,
            z_index: DEFAULT_Z_INDEX,
            animated: Animation::None,
            duration: DEFAULT_DURATION.to_string(),
            easing: DEFAULT_EASING.to_string(),
            target: Target::Parent,
            class_name: String::new(),
            style: BTreeMap::new(),
        }
    }
}

impl BlurConfig {
    /// Check the numeric fields the generator depends on
    pub fn validate(&self) -> Result<()> {
        if self.div_count == 0 {
            return Err(BlurError::invalid("div_count", "must be at least 1, got 0"));
        }
        if !self.strength.is_finite() || self.strength < 0.0 {
            return Err(BlurError::invalid(
                "strength",
                format!("must be finite and non-negative, got {}", self.strength),
            ));
        }
        if let Some(h) = self.hover_intensity {
            if !h.is_finite() || h < 0.0 {
                return Err(BlurError::invalid(
                    "hover_intensity",
                    format!("must be finite and non-negative, got {}", h),
                ));
            }
        }
        if !self.opacity.is_finite() {
            return Err(BlurError::invalid(
                "opacity",
                format!("must be finite, got {}", self.opacity),
            ));
        }
        Ok(())
    }

    /// Hover multiplier, if hovering changes anything
    ///
    /// A zero intensity is treated the same as an unset one.
    pub fn active_hover_intensity(&self) -> Option<f64> {
        self.hover_intensity.filter(|h| *h != 0.0)
    }

    /// Blur multiplier for the given hover state
    pub fn effective_strength(&self, is_hovered: bool) -> f64 {
        match self.active_hover_intensity() {
            Some(h) if is_hovered => self.strength * h,
            _ => self.strength,
        }
    }
}

// ============================================================================
// ConfigOverrides
// ============================================================================

/// Partial configuration: every field is optional
///
/// Used for presets, JSON config files and command-line flags. Keys may
/// be snake_case or camelCase; any other key is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "divCount")]
    pub div_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exponential: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<CurveKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "hoverIntensity")]
    pub hover_intensity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "zIndex")]
    pub z_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animated: Option<Animation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "className")]
    pub class_name: Option<String>,
    /// Replaces the whole style map when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<BTreeMap<String, String>>,
}

impl ConfigOverrides {
    /// Parse overrides from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load overrides from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Layer `other` on top of `self`; fields set in `other` win
    pub fn or(&self, other: &ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            position: other.position.or(self.position),
            strength: other.strength.or(self.strength),
            div_count: other.div_count.or(self.div_count),
            exponential: other.exponential.or(self.exponential),
            curve: other.curve.or(self.curve),
            opacity: other.opacity.or(self.opacity),
            hover_intensity: other.hover_intensity.or(self.hover_intensity),
            height: other.height.clone().or_else(|| self.height.clone()),
            width: other.width.clone().or_else(|| self.width.clone()),
            z_index: other.z_index.or(self.z_index),
            animated: other.animated.or(self.animated),
            duration: other.duration.clone().or_else(|| self.duration.clone()),
            easing: other.easing.clone().or_else(|| self.easing.clone()),
            target: other.target.or(self.target),
            class_name: other.class_name.clone().or_else(|| self.class_name.clone()),
            style: other.style.clone().or_else(|| self.style.clone()),
        }
    }

    /// Build a new config from `base` with every set field replaced
    pub fn apply_to(&self, base: &BlurConfig) -> BlurConfig {
        let base = base.clone();
        BlurConfig {
            position: self.position.unwrap_or(base.position),
            strength: self.strength.unwrap_or(base.strength),
            div_count: self.div_count.unwrap_or(base.div_count),
            exponential: self.exponential.unwrap_or(base.exponential),
            curve: self.curve.unwrap_or(base.curve),
            opacity: self.opacity.unwrap_or(base.opacity),
            hover_intensity: self.hover_intensity.or(base.hover_intensity),
            height: self.height.clone().unwrap_or(base.height),
            width: self.width.clone().or(base.width),
            z_index: self.z_index.unwrap_or(base.z_index),
            animated: self.animated.unwrap_or(base.animated),
            duration: self.duration.clone().unwrap_or(base.duration),
            easing: self.easing.clone().unwrap_or(base.easing),
            target: self.target.unwrap_or(base.target),
            class_name: self.class_name.clone().unwrap_or(base.class_name),
            style: self.style.clone().unwrap_or(base.style),
        }
    }
}

/// Resolve a config from defaults, an optional preset and caller overrides
///
/// Precedence: overrides > preset > defaults.
pub fn merge(
    defaults: &BlurConfig,
    preset: Option<&ConfigOverrides>,
    overrides: &ConfigOverrides,
) -> BlurConfig {
    let layered = match preset {
        Some(preset) => preset.apply_to(defaults),
        None => defaults.clone(),
    };
    overrides.apply_to(&layered)
}

// ============================================================================
// Tests
// ============================================================================
