//! CLI Command Implementations
//!
//! Each command renders its output to a string; `main` decides where it goes.

use log::info;
use serde::Serialize;

use super::{GenerateArgs, OutputFormat};
use crate::blur::css::{container_declarations, layer_declarations, to_style_block};
use crate::blur::{merge, BlurConfig, ConfigOverrides, ContainerLayout, GradualBlur, Layer, Preset};
use crate::error::Result;

/// JSON document printed by `generate`
#[derive(Debug, Serialize)]
struct GenerateOutput<'a> {
    config: &'a BlurConfig,
    hovered: bool,
    container: ContainerLayout,
    layers: &'a [Layer],
}

/// Resolve the config for `generate`: defaults, preset, config file, flags
pub fn resolve_config(args: &GenerateArgs) -> Result<BlurConfig> {
    let preset = args
        .preset
        .as_deref()
        .map(Preset::from_name)
        .transpose()?
        .map(|preset| preset.overrides());

    let file = match &args.config {
        Some(path) => {
            info!("Loading config: {}", path.display());
            ConfigOverrides::from_file(path)?
        }
        None => ConfigOverrides::default(),
    };

    let overrides = file.or(&args.flag_overrides());
    Ok(merge(&BlurConfig::default(), preset.as_ref(), &overrides))
}

/// Generate layers and render them in the requested format
pub fn generate(args: &GenerateArgs) -> Result<String> {
    let config = resolve_config(args)?;
    let mut blur = GradualBlur::new(config)?;
    blur.set_hovered(args.hovered)?;

    info!(
        "Generated {} layers (hovered: {})",
        blur.layers().len(),
        blur.is_hovered()
    );

    let container = blur.container(ContainerLayout::initially_visible(blur.config()));

    match args.format {
        OutputFormat::Json => {
            let output = GenerateOutput {
                config: blur.config(),
                hovered: blur.is_hovered(),
                container,
                layers: blur.layers(),
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Css => Ok(render_css(&container, blur.layers())),
    }
}

fn render_css(container: &ContainerLayout, layers: &[Layer]) -> String {
    let mut blocks = vec![format!(
        "/* container */\n{}",
        to_style_block(&container_declarations(container))
    )];
    for layer in layers {
        blocks.push(format!(
            "/* layer {} */\n{}",
            layer.index,
            to_style_block(&layer_declarations(layer))
        ));
    }
    blocks.join("\n\n")
}

/// List every preset with the fields it sets
pub fn list_presets() -> Result<String> {
    let mut lines = Vec::with_capacity(Preset::all().len());
    for preset in Preset::all() {
        let fields = serde_json::to_string(&preset.overrides())?;
        lines.push(format!("{:<12} {}", preset.name(), fields));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blur::{CurveKind, Position};
    use std::io::Write;

    #[test]
    fn test_resolve_defaults() {
        let config = resolve_config(&GenerateArgs::default()).unwrap();
        assert_eq!(config, BlurConfig::default());
    }

    #[test]
    fn test_resolve_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"div_count": 6, "curve": "bezier", "position": "top"}}"#).unwrap();

        let args = GenerateArgs {
            preset: Some("sidebar".to_string()),
            config: Some(file.path().to_path_buf()),
            div_count: Some(2),
            ..Default::default()
        };
        let config = resolve_config(&args).unwrap();

        // flag beats file
        assert_eq!(config.div_count, 2);
        // file beats preset
        assert_eq!(config.position, Position::Top);
        assert_eq!(config.curve, CurveKind::Bezier);
        // preset beats defaults
        assert_eq!(config.strength, 2.5);
    }

    #[test]
    fn test_resolve_unknown_preset() {
        let args = GenerateArgs {
            preset: Some("fuzzy".to_string()),
            ..Default::default()
        };
        let err = resolve_config(&args).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_PRESET");
    }

    #[test]
    fn test_generate_json() {
        let output = generate(&GenerateArgs::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let layers = value["layers"].as_array().unwrap();
        assert_eq!(layers.len(), 5);
        assert_eq!(layers[0]["mask_direction"], "to bottom");
        assert_eq!(layers[0]["mask_stops"][0]["color"], "transparent");
        assert_eq!(layers[4]["blur_radius_rem"].as_f64(), Some(0.75));
        assert_eq!(value["hovered"], false);
        assert_eq!(value["container"]["positioning"], "absolute");
    }

    #[test]
    fn test_generate_css_hovered() {
        let args = GenerateArgs {
            hover_intensity: Some(2.0),
            hovered: true,
            format: OutputFormat::Css,
            ..Default::default()
        };
        let output = generate(&args).unwrap();

        assert!(output.starts_with("/* container */"));
        assert!(output.contains("/* layer 5 */"));
        assert!(output.contains("backdrop-filter: blur(1.500rem);"));
        assert!(output.contains("pointer-events: auto;"));
    }

    #[test]
    fn test_generate_rejects_zero_layers() {
        let args = GenerateArgs {
            div_count: Some(0),
            ..Default::default()
        };
        assert!(generate(&args).is_err());
    }

    #[test]
    fn test_list_presets() {
        let output = list_presets().unwrap();
        assert_eq!(output.lines().count(), Preset::all().len());
        assert!(output.contains("page-footer"));
        assert!(output.contains("\"exponential\":true"));
    }
}
