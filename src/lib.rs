//! Gradual Blur - Layered Backdrop-Blur Generator
//!
//! Computes the stack of masked backdrop-blur panels that make an edge of a
//! container fade progressively out of focus.
//!
//! # Architecture
//!
//! - `blur::config`: defaults, presets and overrides merged into a `BlurConfig`
//! - `blur::generator`: `BlurConfig` -> ordered `Layer` stack
//! - `blur::css` / `blur::container`: descriptors for a renderer to apply
//! - `cli`: command-line front end

pub mod blur;
pub mod cli;
pub mod error;

pub use blur::{generate, BlurConfig, ConfigOverrides, GradualBlur, Layer, Preset};
pub use error::{BlurError, Result};
