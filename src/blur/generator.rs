//! Layer generation
//!
//! Turns a `BlurConfig` into the ordered stack of masked backdrop-blur
//! layers. Each layer `i` of `n` shows a window of the mask starting at
//! `(i - 1) / n` of the way from the edge, so consecutive windows overlap
//! and the blur radius ramps up toward the far side.

use log::debug;

use super::config::BlurConfig;
use super::layer::{Layer, MaskStop};
use crate::error::Result;

// ============================================================================
// Constants
// ============================================================================

/// Blur contributed by one unit of progress at strength 1 (1px at 16px/rem)
const BASE_BLUR_REM: f64 = 0.0625;

/// Exponent range for exponential growth: progress 1.0 gives 2^4
const EXPONENTIAL_OCTAVES: f64 = 4.0;

/// Mask domain upper bound in percent
const MASK_EXTENT: f64 = 100.0;

// ============================================================================
// Helper Functions
// ============================================================================

/// Round to one decimal place (half rounds up)
#[inline]
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to three decimal places
#[inline]
fn round_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Unrounded blur radius for a layer at remapped `progress`
fn blur_radius(progress: f64, div_count: u32, strength: f64, exponential: bool) -> f64 {
    if exponential {
        2f64.powf(progress * EXPONENTIAL_OCTAVES) * BASE_BLUR_REM * strength
    } else {
        BASE_BLUR_REM * (progress * div_count as f64 + 1.0) * strength
    }
}

/// Mask stops for the window ending at `increment * index`
///
/// The leading transparent and black stops are always present; the
/// trailing ones are dropped once they fall beyond the mask extent.
fn mask_stops(index: u32, increment: f64) -> Vec<MaskStop> {
    let edge = increment * index as f64;
    let p1 = round_tenths(edge - increment);
    let p2 = round_tenths(edge);
    let p3 = round_tenths(edge + increment);
    let p4 = round_tenths(edge + increment * 2.0);

    let trailing = [MaskStop::black(p3), MaskStop::transparent(p4)];

    let mut stops = vec![MaskStop::transparent(p1), MaskStop::black(p2)];
    stops.extend(trailing.into_iter().filter(|stop| stop.percent <= MASK_EXTENT));
    stops
}

// ============================================================================
// Generation
// ============================================================================

/// Generate the layer stack for `config`
///
/// Returns exactly `config.div_count` layers with indices `1..=div_count`,
/// in stacking order. Fails only when the config does not validate.
///
/// # Example
/// ```
/// use gradual_blur::{generate, BlurConfig};
///
/// let layers = generate(&BlurConfig::default(), false).unwrap();
/// assert_eq!(layers.len(), 5);
/// assert_eq!(layers[0].blur_radius_rem, 0.25);
/// ```
pub fn generate(config: &BlurConfig, is_hovered: bool) -> Result<Vec<Layer>> {
    config.validate()?;

    let div_count = config.div_count;
    let increment = MASK_EXTENT / div_count as f64;
    let strength = config.effective_strength(is_hovered);
    let direction = config.position.gradient_direction();
    let transition = config
        .animated
        .transitions_layers()
        .then(|| format!("backdrop-filter {} {}", config.duration, config.easing));

    debug!(
        "Generating {} layers: position={} curve={} exponential={} strength={}",
        div_count, config.position, config.curve, config.exponential, strength
    );

    let layers = (1..=div_count)
        .map(|index| {
            let progress = config.curve.apply(index as f64 / div_count as f64);
            let blur = blur_radius(progress, div_count, strength, config.exponential);

            Layer {
                index,
                mask_direction: direction,
                mask_stops: mask_stops(index, increment),
                blur_radius_rem: round_thousandths(blur),
                opacity: config.opacity,
                transition: transition.clone(),
            }
        })
        .collect();

    Ok(layers)
}

// ============================================================================
// Tests
// ============================================================================
