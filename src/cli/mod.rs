//! CLI Module
//!
//! Command-line interface for the gradual blur generator.

pub mod commands;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::blur::{ConfigOverrides, CurveKind, Position};

/// Gradual Blur - layered backdrop-blur mask generator
#[derive(Parser, Debug)]
#[command(name = "gradual-blur")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the layer stack for a configuration
    #[command(name = "generate")]
    Generate(GenerateArgs),

    /// List the built-in presets
    #[command(name = "presets")]
    Presets,
}

/// Output format for generated layers
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Layers and container layout as JSON
    #[default]
    Json,
    /// One CSS declaration block per panel
    Css,
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Preset to start from
    #[arg(short, long)]
    pub preset: Option<String>,

    /// JSON config file with overrides
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Edge the blur emanates from (top, bottom, left, right)
    #[arg(long)]
    pub position: Option<String>,

    /// Base blur multiplier
    #[arg(long)]
    pub strength: Option<f64>,

    /// Number of stacked layers
    #[arg(long)]
    pub div_count: Option<u32>,

    /// Grow blur exponentially
    #[arg(long)]
    pub exponential: bool,

    /// Progress curve (linear, bezier, ease-in, ease-out, ease-in-out)
    #[arg(long)]
    pub curve: Option<String>,

    /// Uniform layer opacity
    #[arg(long)]
    pub opacity: Option<f64>,

    /// Strength multiplier while hovered
    #[arg(long)]
    pub hover_intensity: Option<f64>,

    /// Generate the hovered state
    #[arg(long)]
    pub hovered: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl GenerateArgs {
    /// Overrides set directly by flags
    pub fn flag_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            position: self.position.as_deref().map(Position::from_name),
            strength: self.strength,
            div_count: self.div_count,
            exponential: self.exponential.then_some(true),
            curve: self.curve.as_deref().map(CurveKind::from_name),
            opacity: self.opacity,
            hover_intensity: self.hover_intensity,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "gradual-blur",
            "generate",
            "--preset",
            "intense",
            "--div-count",
            "4",
            "--curve",
            "ease-in",
            "--hovered",
            "--format",
            "css",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.preset.as_deref(), Some("intense"));
                assert_eq!(args.div_count, Some(4));
                assert!(args.hovered);
                assert_eq!(args.format, OutputFormat::Css);

                let overrides = args.flag_overrides();
                assert_eq!(overrides.curve, Some(CurveKind::EaseIn));
                assert_eq!(overrides.exponential, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_verbose_presets() {
        let cli = Cli::try_parse_from(["gradual-blur", "-v", "presets"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Presets)));
    }

    #[test]
    fn test_unknown_flag_values_fall_back() {
        let args = GenerateArgs {
            position: Some("diagonal".to_string()),
            curve: Some("wobbly".to_string()),
            ..Default::default()
        };
        let overrides = args.flag_overrides();
        assert_eq!(overrides.position, Some(Position::Bottom));
        assert_eq!(overrides.curve, Some(CurveKind::Linear));
    }
}
