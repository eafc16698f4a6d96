use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxsynth operations
#[derive(Error, Diagnostic, Debug)]
pub enum SynthError {
    #[error("Invalid dimensions {width}x{height}: {reason}")]
    #[diagnostic(
        code(pxsynth::dimensions),
        help("Width and height must be at least 1 and match the pixel data")
    )]
    InvalidDimensions {
        width: u32,
        height: u32,
        reason: String,
    },

    #[error("Compression failed: {0}")]
    #[diagnostic(code(pxsynth::compress))]
    CompressionFailure(#[source] std::io::Error),

    #[error("Unsupported shape kind: {kind}")]
    #[diagnostic(code(pxsynth::kind))]
    UnsupportedShapeKind {
        kind: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error: {0}")]
    #[diagnostic(code(pxsynth::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxsynth::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pxsynth::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(pxsynth::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Verification failed: {message}")]
    #[diagnostic(code(pxsynth::verify))]
    Verify {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl SynthError {
    pub(crate) fn dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SynthError>;
