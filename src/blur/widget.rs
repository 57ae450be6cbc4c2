//! Stateful blur stack
//!
//! `GradualBlur` owns a resolved config plus the transient hover state and
//! keeps the generated layers in sync with both. Every change is a full
//! regeneration; previous layers are discarded.

use log::debug;

use super::config::{BlurConfig, ConfigOverrides};
use super::container::ContainerLayout;
use super::generator::generate;
use super::layer::Layer;
use crate::error::Result;

/// A configured blur stack and its current layers
#[derive(Debug, Clone)]
pub struct GradualBlur {
    config: BlurConfig,
    hovered: bool,
    layers: Vec<Layer>,
}

impl GradualBlur {
    /// Validate `config` and generate the initial, unhovered layers
    pub fn new(config: BlurConfig) -> Result<Self> {
        let layers = generate(&config, false)?;
        Ok(Self {
            config,
            hovered: false,
            layers,
        })
    }

    pub fn config(&self) -> &BlurConfig {
        &self.config
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Current layers, in stacking order
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Update the hover state
    ///
    /// Returns true if the layers were regenerated. Without a hover
    /// intensity the layers never change, so nothing is recomputed.
    pub fn set_hovered(&mut self, hovered: bool) -> Result<bool> {
        if self.hovered == hovered || self.config.active_hover_intensity().is_none() {
            self.hovered = hovered;
            return Ok(false);
        }
        self.layers = generate(&self.config, hovered)?;
        self.hovered = hovered;
        debug!("Hover {} -> regenerated {} layers", hovered, self.layers.len());
        Ok(true)
    }

    /// Merge `overrides` into the current config and regenerate
    ///
    /// On failure the previous config and layers are kept.
    pub fn update(&mut self, overrides: &ConfigOverrides) -> Result<()> {
        let config = overrides.apply_to(&self.config);
        let layers = generate(&config, self.hovered)?;
        self.config = config;
        self.layers = layers;
        Ok(())
    }

    /// Container layout at the given visibility
    pub fn container(&self, visible: bool) -> ContainerLayout {
        ContainerLayout::from_config(&self.config, visible)
    }
}
