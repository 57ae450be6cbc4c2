//! CSS formatting
//!
//! Formats layers and container layouts as declaration text a renderer can
//! apply verbatim.

use super::container::ContainerLayout;
use super::layer::Layer;

/// `linear-gradient(...)` value for a layer's mask
pub fn mask_image(layer: &Layer) -> String {
    let stops = layer
        .mask_stops
        .iter()
        .map(|stop| format!("{} {}%", stop.color, stop.percent))
        .collect::<Vec<_>>()
        .join(", ");
    format!("linear-gradient({}, {})", layer.mask_direction, stops)
}

/// `blur(...)` value for a layer's backdrop filter
pub fn backdrop_filter(layer: &Layer) -> String {
    format!("blur({:.3}rem)", layer.blur_radius_rem)
}

/// A `(property, value)` pair
pub type Declaration = (String, String);

fn decl(property: &str, value: impl Into<String>) -> Declaration {
    (property.to_string(), value.into())
}

/// Declarations for one layer panel
pub fn layer_declarations(layer: &Layer) -> Vec<Declaration> {
    let mask = mask_image(layer);
    let filter = backdrop_filter(layer);
    vec![
        decl("position", "absolute"),
        decl("inset", "0"),
        decl("mask-image", mask.clone()),
        decl("-webkit-mask-image", mask),
        decl("backdrop-filter", filter.clone()),
        decl("-webkit-backdrop-filter", filter),
        decl("opacity", layer.opacity.to_string()),
        decl(
            "transition",
            layer.transition.clone().unwrap_or_else(|| "none".to_string()),
        ),
    ]
}

/// Declarations for the container panel
///
/// Entries from `layout.style` replace a computed declaration of the same
/// property in place; new properties are appended in key order.
pub fn container_declarations(layout: &ContainerLayout) -> Vec<Declaration> {
    let mut decls = vec![
        decl("position", layout.positioning.as_str()),
        decl(
            "pointer-events",
            if layout.pointer_events { "auto" } else { "none" },
        ),
        decl("opacity", layout.opacity.to_string()),
    ];
    if let Some(transition) = &layout.transition {
        decls.push(decl("transition", transition.clone()));
    }
    decls.push(decl("z-index", layout.z_index.to_string()));
    decls.push(decl("width", layout.width.clone()));
    decls.push(decl("height", layout.height.clone()));
    for anchor in &layout.anchors {
        decls.push(decl(anchor.name(), "0"));
    }

    for (property, value) in &layout.style {
        match decls.iter_mut().find(|d| d.0 == *property) {
            Some(existing) => existing.1 = value.clone(),
            None => decls.push(decl(property, value.clone())),
        }
    }
    decls
}

/// Join declarations into a `prop: value;` block, one per line
pub fn to_style_block(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|(prop, value)| format!("{}: {};", prop, value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blur::config::BlurConfig;
    use crate::blur::generate;

    #[test]
    fn test_mask_image_format() {
        let layers = generate(&BlurConfig::default(), false).unwrap();
        assert_eq!(
            mask_image(&layers[0]),
            "linear-gradient(to bottom, transparent 0%, black 20%, black 40%, transparent 60%)"
        );
        assert_eq!(
            mask_image(&layers[4]),
            "linear-gradient(to bottom, transparent 80%, black 100%)"
        );
    }

    #[test]
    fn test_fractional_percent_format() {
        let config = BlurConfig {
            div_count: 3,
            ..Default::default()
        };
        let layers = generate(&config, false).unwrap();
        assert_eq!(
            mask_image(&layers[0]),
            "linear-gradient(to bottom, transparent 0%, black 33.3%, black 66.7%, transparent 100%)"
        );
    }

    #[test]
    fn test_backdrop_filter_format() {
        let layers = generate(&BlurConfig::default(), false).unwrap();
        assert_eq!(backdrop_filter(&layers[0]), "blur(0.250rem)");
        assert_eq!(backdrop_filter(&layers[4]), "blur(0.750rem)");
    }

    #[test]
    fn test_layer_declarations() {
        let layers = generate(&BlurConfig::default(), false).unwrap();
        let block = to_style_block(&layer_declarations(&layers[1]));

        assert!(block.contains("position: absolute;"));
        assert!(block.contains("backdrop-filter: blur(0.375rem);"));
        assert!(block.contains("-webkit-backdrop-filter: blur(0.375rem);"));
        assert!(block.contains("opacity: 1;"));
        assert!(block.contains("transition: none;"));
    }

    #[test]
    fn test_container_declarations() {
        let layout = ContainerLayout::from_config(&BlurConfig::default(), true);
        let block = to_style_block(&container_declarations(&layout));

        assert!(block.contains("position: absolute;"));
        assert!(block.contains("pointer-events: none;"));
        assert!(block.contains("z-index: 1000;"));
        assert!(block.contains("height: 6rem;"));
        assert!(block.contains("bottom: 0;"));
        assert!(!block.contains("transition"));
    }

    #[test]
    fn test_container_style_overrides() {
        let config = BlurConfig {
            style: [("z-index", "5"), ("mix-blend-mode", "multiply")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Default::default()
        };
        let layout = ContainerLayout::from_config(&config, true);
        let decls = container_declarations(&layout);

        let z: Vec<_> = decls.iter().filter(|d| d.0 == "z-index").collect();
        assert_eq!(z.len(), 1);
        assert_eq!(z[0].1, "5");
        assert_eq!(
            decls.last(),
            Some(&("mix-blend-mode".to_string(), "multiply".to_string()))
        );
    }
}
