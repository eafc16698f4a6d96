//! Verify command: check PNG framing and chunk CRCs of generated files.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{Result, SynthError};
use crate::output::{display_path, plural, Printer};
use crate::render::verify_png;

/// Check PNG signatures and chunk checksums
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// PNG files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: VerifyArgs, printer: &Printer) -> Result<()> {
    let mut failed = 0;

    for file in &args.files {
        match verify_file(file) {
            Ok(chunks) => printer.status(
                "Verified",
                &format!("{} ({})", display_path(file), plural(chunks, "chunk", "chunks")),
            ),
            Err(e) => {
                failed += 1;
                printer.error("Corrupt", &format!("{}: {}", display_path(file), e));
            }
        }
    }

    if failed > 0 {
        return Err(SynthError::Verify {
            message: format!("{} of {} file(s) failed", failed, args.files.len()),
            help: Some("Regenerate the affected sprites with `pxsynth build`".to_string()),
        });
    }

    Ok(())
}

fn verify_file(path: &Path) -> Result<usize> {
    let bytes = fs::read(path).map_err(|e| SynthError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;
    verify_png(&bytes)
}
