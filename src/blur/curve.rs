//! Progress curves
//!
//! Each curve remaps a layer's raw progress in `(0, 1]` onto `[0, 1]`,
//! biasing where along the stack the blur grows fastest.

use log::warn;
use serde::{Deserialize, Serialize};

/// Named progress-remapping function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum CurveKind {
    #[default]
    Linear,
    /// Smoothstep
    Bezier,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl CurveKind {
    /// Every curve, in declaration order
    pub const ALL: [CurveKind; 5] = [
        CurveKind::Linear,
        CurveKind::Bezier,
        CurveKind::EaseIn,
        CurveKind::EaseOut,
        CurveKind::EaseInOut,
    ];

    /// Look up a curve by name, returning `None` for unknown names
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(CurveKind::Linear),
            "bezier" => Some(CurveKind::Bezier),
            "ease-in" => Some(CurveKind::EaseIn),
            "ease-out" => Some(CurveKind::EaseOut),
            "ease-in-out" => Some(CurveKind::EaseInOut),
            _ => None,
        }
    }

    /// Look up a curve by name, falling back to `Linear` for unknown names
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            warn!("Unknown curve '{}', falling back to linear", name);
            CurveKind::Linear
        })
    }

    /// Canonical name of the curve
    pub fn name(&self) -> &'static str {
        match self {
            CurveKind::Linear => "linear",
            CurveKind::Bezier => "bezier",
            CurveKind::EaseIn => "ease-in",
            CurveKind::EaseOut => "ease-out",
            CurveKind::EaseInOut => "ease-in-out",
        }
    }

    /// Remap `progress` through this curve
    pub fn apply(&self, p: f64) -> f64 {
        match self {
            CurveKind::Linear => p,
            CurveKind::Bezier => p * p * (3.0 - 2.0 * p),
            CurveKind::EaseIn => p * p,
            CurveKind::EaseOut => 1.0 - (1.0 - p).powi(2),
            CurveKind::EaseInOut => {
                if p < 0.5 {
                    2.0 * p * p
                } else {
                    1.0 - (-2.0 * p + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

impl From<String> for CurveKind {
    fn from(name: String) -> Self {
        CurveKind::from_name(&name)
    }
}

impl std::fmt::Display for CurveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_curve_endpoints() {
        for curve in CurveKind::ALL {
            assert_abs_diff_eq!(curve.apply(0.0), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(curve.apply(1.0), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_curve_midpoints() {
        assert_abs_diff_eq!(CurveKind::Linear.apply(0.25), 0.25);
        assert_abs_diff_eq!(CurveKind::Bezier.apply(0.5), 0.5);
        assert_abs_diff_eq!(CurveKind::EaseIn.apply(0.5), 0.25);
        assert_abs_diff_eq!(CurveKind::EaseOut.apply(0.5), 0.75);
        assert_abs_diff_eq!(CurveKind::EaseInOut.apply(0.25), 0.125);
        assert_abs_diff_eq!(CurveKind::EaseInOut.apply(0.75), 0.875);
    }

    #[test]
    fn test_curves_monotonic() {
        for curve in CurveKind::ALL {
            let mut prev = curve.apply(0.0);
            for step in 1..=100 {
                let next = curve.apply(step as f64 / 100.0);
                assert!(next > prev, "{} not increasing at step {}", curve, step);
                prev = next;
            }
        }
    }

    #[test]
    fn test_curve_names_roundtrip() {
        for curve in CurveKind::ALL {
            assert_eq!(CurveKind::parse(curve.name()), Some(curve));
        }
    }

    #[test]
    fn test_unknown_curve_falls_back() {
        assert_eq!(CurveKind::parse("wobbly"), None);
        assert_eq!(CurveKind::from_name("wobbly"), CurveKind::Linear);
    }

    #[test]
    fn test_curve_serde() {
        let curve: CurveKind = serde_json::from_str("\"ease-in-out\"").unwrap();
        assert_eq!(curve, CurveKind::EaseInOut);

        let curve: CurveKind = serde_json::from_str("\"spline\"").unwrap();
        assert_eq!(curve, CurveKind::Linear);

        assert_eq!(
            serde_json::to_string(&CurveKind::EaseOut).unwrap(),
            "\"ease-out\""
        );
    }
}
