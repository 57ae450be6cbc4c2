//! Gradual blur
//!
//! Layer generation, its configuration, and the descriptors handed to a
//! renderer. Everything here is pure data; nothing touches a display.

pub mod config;
pub mod container;
pub mod css;
pub mod curve;
pub mod generator;
pub mod layer;
pub mod position;
pub mod preset;
pub mod widget;

pub use config::{merge, Animation, BlurConfig, ConfigOverrides, Target};
pub use container::{ContainerLayout, Positioning};
pub use curve::CurveKind;
pub use generator::generate;
pub use layer::{Layer, MaskColor, MaskStop};
pub use position::{GradientDirection, Position};
pub use preset::Preset;
pub use widget::GradualBlur;
