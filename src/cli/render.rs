//! Render command: synthesize one shape selected by kind name.

use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;

use crate::error::{Result, SynthError};
use crate::output::{display_path, Printer};
use crate::render::write_png;
use crate::synth::synthesize_scaled;
use crate::types::{Colour, ShapeParams, ShapeSpec};

/// Render a single shape to a PNG file
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Shape kind: circle, rect, gradient, hoop, player, bat, goal
    pub kind: String,

    /// Size as WxH, or a single number for a square
    #[arg(long, short)]
    pub size: Size,

    /// Fill colour (top colour for gradients)
    #[arg(long, short, default_value = "#FFFFFF")]
    pub color: Colour,

    /// Bottom colour for gradients
    #[arg(long)]
    pub bottom: Option<Colour>,

    /// Integer scale factor
    #[arg(long, default_value = "1")]
    pub scale: u32,

    /// Output file, or `-` for stdout
    #[arg(long, short)]
    pub output: PathBuf,
}

/// Canvas size parsed from `WxH` or `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl FromStr for Size {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self> {
        let parse = |part: &str| {
            part.trim().parse::<u32>().map_err(|_| SynthError::Parse {
                message: format!("Invalid size: {}", s),
                help: Some("Use WxH (e.g. 60x12) or a single number".to_string()),
            })
        };

        match s.split_once(['x', 'X']) {
            Some((w, h)) => Ok(Self {
                width: parse(w)?,
                height: parse(h)?,
            }),
            None => {
                let n = parse(s)?;
                Ok(Self {
                    width: n,
                    height: n,
                })
            }
        }
    }
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let mut params = ShapeParams::new(args.size.width, args.size.height, args.color);
    params.bottom = args.bottom;

    let spec = ShapeSpec::from_kind(&args.kind, &params)?;
    let bytes = synthesize_scaled(&spec, args.scale)?;

    if args.output.as_os_str() == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&bytes)?;
        stdout.flush()?;
        return Ok(());
    }

    write_png(&args.output, &bytes)?;
    let (w, h) = spec.dimensions();
    printer.status(
        "Rendered",
        &format!(
            "{} ({}x{}) {} {}",
            spec.kind_name(),
            w * args.scale.max(1),
            h * args.scale.max(1),
            printer.dim("->"),
            display_path(&args.output)
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_size() {
        assert_eq!(
            "60x12".parse::<Size>().unwrap(),
            Size {
                width: 60,
                height: 12
            }
        );
        assert_eq!(
            "16".parse::<Size>().unwrap(),
            Size {
                width: 16,
                height: 16
            }
        );
        assert!("12x".parse::<Size>().is_err());
        assert!("big".parse::<Size>().is_err());
    }

    #[test]
    fn test_run_writes_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("sky.png");
        let args = RenderArgs {
            kind: "gradient".to_string(),
            size: Size {
                width: 4,
                height: 4,
            },
            color: Colour::BLACK,
            bottom: Some(Colour::WHITE),
            scale: 1,
            output: output.clone(),
        };

        run(args, &Printer::new().quiet(true)).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_run_unknown_kind() {
        let dir = tempdir().unwrap();
        let args = RenderArgs {
            kind: "star".to_string(),
            size: Size {
                width: 4,
                height: 4,
            },
            color: Colour::WHITE,
            bottom: None,
            scale: 1,
            output: dir.path().join("star.png"),
        };

        let err = run(args, &Printer::new().quiet(true)).unwrap_err();
        assert!(matches!(err, SynthError::UnsupportedShapeKind { .. }));
    }
}
