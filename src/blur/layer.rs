//! Layer descriptors produced by the generator

use serde::{Deserialize, Serialize};

use super::position::GradientDirection;

/// Mask state at a gradient stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskColor {
    /// Fully masked out
    Transparent,
    /// Fully visible
    Black,
}

impl MaskColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskColor::Transparent => "transparent",
            MaskColor::Black => "black",
        }
    }
}

impl std::fmt::Display for MaskColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single mask gradient stop
///
/// `percent` lies in `[0, 100]`, rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskStop {
    pub color: MaskColor,
    pub percent: f64,
}

impl MaskStop {
    #[inline]
    pub const fn new(color: MaskColor, percent: f64) -> Self {
        Self { color, percent }
    }

    #[inline]
    pub const fn transparent(percent: f64) -> Self {
        Self::new(MaskColor::Transparent, percent)
    }

    #[inline]
    pub const fn black(percent: f64) -> Self {
        Self::new(MaskColor::Black, percent)
    }
}

/// One panel of the blur stack
///
/// Layers are rendered back-to-front in `index` order; each layer's mask
/// window overlaps the next one's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// 1-based position in the stack
    pub index: u32,
    pub mask_direction: GradientDirection,
    /// Two to four stops, non-decreasing in percent
    pub mask_stops: Vec<MaskStop>,
    /// Backdrop blur radius in rem, rounded to three decimal places
    pub blur_radius_rem: f64,
    pub opacity: f64,
    /// Backdrop-filter transition, when the config animates layers
    pub transition: Option<String>,
}

impl Layer {
    /// True when the mask ends opaque instead of fading back out
    pub fn is_terminal(&self) -> bool {
        self.mask_stops
            .last()
            .map(|stop| stop.color == MaskColor::Black)
            .unwrap_or(false)
    }
}
