//! Named presets
//!
//! A preset is a partial configuration layered between the defaults and
//! caller overrides.

use log::debug;

use super::config::{ConfigOverrides, Target};
use super::curve::CurveKind;
use super::position::Position;
use crate::error::{BlurError, Result};

/// Built-in preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Top,
    Bottom,
    Left,
    Right,
    Subtle,
    Intense,
    Smooth,
    Sharp,
    Header,
    Footer,
    Sidebar,
    PageHeader,
    PageFooter,
}

impl Preset {
    /// Every preset, in listing order
    pub fn all() -> &'static [Preset] {
        &[
            Preset::Top,
            Preset::Bottom,
            Preset::Left,
            Preset::Right,
            Preset::Subtle,
            Preset::Intense,
            Preset::Smooth,
            Preset::Sharp,
            Preset::Header,
            Preset::Footer,
            Preset::Sidebar,
            Preset::PageHeader,
            Preset::PageFooter,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Top => "top",
            Preset::Bottom => "bottom",
            Preset::Left => "left",
            Preset::Right => "right",
            Preset::Subtle => "subtle",
            Preset::Intense => "intense",
            Preset::Smooth => "smooth",
            Preset::Sharp => "sharp",
            Preset::Header => "header",
            Preset::Footer => "footer",
            Preset::Sidebar => "sidebar",
            Preset::PageHeader => "page-header",
            Preset::PageFooter => "page-footer",
        }
    }

    /// Look up a preset by name
    pub fn from_name(name: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.name() == name)
            .ok_or_else(|| BlurError::UnknownPreset {
                name: name.to_string(),
            })
    }

    /// Fields this preset sets
    pub fn overrides(&self) -> ConfigOverrides {
        let height = |h: &str| Some(h.to_string());
        let overrides = match self {
            Preset::Top => ConfigOverrides {
                position: Some(Position::Top),
                height: height("6rem"),
                ..Default::default()
            },
            Preset::Bottom => ConfigOverrides {
                position: Some(Position::Bottom),
                height: height("6rem"),
                ..Default::default()
            },
            Preset::Left => ConfigOverrides {
                position: Some(Position::Left),
                height: height("6rem"),
                ..Default::default()
            },
            Preset::Right => ConfigOverrides {
                position: Some(Position::Right),
                height: height("6rem"),
                ..Default::default()
            },
            Preset::Subtle => ConfigOverrides {
                height: height("4rem"),
                strength: Some(1.0),
                opacity: Some(0.8),
                div_count: Some(3),
                ..Default::default()
            },
            Preset::Intense => ConfigOverrides {
                height: height("10rem"),
                strength: Some(4.0),
                div_count: Some(8),
                exponential: Some(true),
                ..Default::default()
            },
            Preset::Smooth => ConfigOverrides {
                height: height("8rem"),
                curve: Some(CurveKind::Bezier),
                div_count: Some(10),
                ..Default::default()
            },
            Preset::Sharp => ConfigOverrides {
                height: height("5rem"),
                curve: Some(CurveKind::Linear),
                div_count: Some(4),
                ..Default::default()
            },
            Preset::Header => ConfigOverrides {
                position: Some(Position::Top),
                height: height("8rem"),
                curve: Some(CurveKind::EaseOut),
                ..Default::default()
            },
            Preset::Footer => ConfigOverrides {
                position: Some(Position::Bottom),
                height: height("8rem"),
                curve: Some(CurveKind::EaseOut),
                ..Default::default()
            },
            Preset::Sidebar => ConfigOverrides {
                position: Some(Position::Left),
                height: height("6rem"),
                strength: Some(2.5),
                ..Default::default()
            },
            Preset::PageHeader => ConfigOverrides {
                position: Some(Position::Top),
                height: height("10rem"),
                target: Some(Target::Page),
                strength: Some(3.0),
                ..Default::default()
            },
            Preset::PageFooter => ConfigOverrides {
                position: Some(Position::Bottom),
                height: height("10rem"),
                target: Some(Target::Page),
                strength: Some(3.0),
                ..Default::default()
            },
        };
        debug!("Resolved preset '{}'", self.name());
        overrides
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
