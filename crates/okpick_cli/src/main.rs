//! okpick - OKLCH / LCH color picker math on the command line
//!
//! Provides:
//! - `convert`: any accepted color notation to hex, RGB, OKLCH and LCH
//! - `gradient`: sampled slider gradients as stops or CSS
//! - `normalize`: text-field input to a lowercase `#rrggbb`
//! - `config init`: write a default okpick.toml

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use okpick_color::{ColorSpace, GradientAxis};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::config::{OkpickConfig, OutputFormat};

/// Convert colors between OKLCH, LCH, RGB and hex
#[derive(Parser, Debug)]
#[command(name = "okpick")]
#[command(about = "Convert colors between OKLCH, LCH, RGB and hex")]
#[command(version)]
struct Args {
    /// Config file or directory (defaults to ./okpick.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a color in every representation
    Convert {
        /// Hex (3, 6 or 8 digits), rgb(), hsl(), oklch() or lch()
        color: String,

        /// Color space for the display string
        #[arg(long, value_enum)]
        space: Option<SpaceArg>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Sample the background gradient of one slider
    Gradient {
        /// Axis the slider sweeps
        #[arg(value_enum)]
        axis: AxisArg,

        /// First fixed axis: chroma for lightness, lightness for chroma and hue
        #[arg(long, allow_hyphen_values = true)]
        a: f64,

        /// Second fixed axis: hue for lightness and chroma, chroma for hue
        #[arg(long, allow_hyphen_values = true)]
        b: f64,

        #[arg(long, value_enum)]
        space: Option<SpaceArg>,

        /// Print a CSS linear-gradient instead of the stop list
        #[arg(long)]
        css: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Normalize text-field input to #rrggbb
    Normalize {
        input: String,
    },

    /// Manage okpick.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Write a default okpick.toml
    Init {
        /// Target file or directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SpaceArg {
    Oklch,
    Lch,
}

impl From<SpaceArg> for ColorSpace {
    fn from(space: SpaceArg) -> Self {
        match space {
            SpaceArg::Oklch => ColorSpace::Oklch,
            SpaceArg::Lch => ColorSpace::Lch,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AxisArg {
    Lightness,
    Chroma,
    Hue,
}

impl From<AxisArg> for GradientAxis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::Lightness => GradientAxis::Lightness,
            AxisArg::Chroma => GradientAxis::Chroma,
            AxisArg::Hue => GradientAxis::Hue,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    // `config init` must work without a readable config
    let config = match args.command {
        Command::Config { .. } => OkpickConfig::default(),
        _ => OkpickConfig::load(args.config.as_deref())?,
    };
    if run(args.command, &config)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Execute one command; `false` means the input was rejected
fn run(command: Command, config: &OkpickConfig) -> Result<bool> {
    let space_or_default =
        |space: Option<SpaceArg>| space.map(ColorSpace::from).unwrap_or(config.picker.space);
    let wants_json = |json: bool| json || config.output.format == OutputFormat::Json;

    match command {
        Command::Convert { color, space, json } => {
            let report = commands::convert(&color, space_or_default(space))?;
            emit(&report, wants_json(json))?;
        }
        Command::Gradient {
            axis,
            a,
            b,
            space,
            css,
            json,
        } => {
            let report = commands::gradient(axis.into(), a, b, space_or_default(space));
            if wants_json(json) {
                emit(&report, true)?;
            } else if css || config.output.css {
                println!("{}", report.css);
            } else {
                println!("{report}");
            }
        }
        Command::Normalize { input } => match commands::normalize(&input) {
            Some(hex) => println!("{hex}"),
            None => {
                eprintln!("Not a hex, rgb() or hsl() color: {input:?}");
                return Ok(false);
            }
        },
        Command::Config {
            action: ConfigAction::Init { path, force },
        } => {
            let written = OkpickConfig::write_default(&path, force)?;
            println!("Created {}", written.display());
        }
    }

    Ok(true)
}

fn emit<T: Serialize + Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
