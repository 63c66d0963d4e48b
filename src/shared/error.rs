use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - lookup completed and results were printed
    Success = 0,
    /// Application error (unsupported version, API error, network error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for BuiltWith API lookups.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
///
/// Transport and JSON errors are not wrapped here; they propagate
/// unchanged from reqwest/serde_json through the anyhow error chain.
#[derive(Debug, Error)]
pub enum BuiltWithError {
    #[error("Unsupported BuiltWith API version: {version}\n\n💡 Hint: supported API versions are 1 and 2")]
    UnsupportedApiVersion { version: u32 },

    #[error("Malformed timestamp: {value:?}\nDetails: {details}")]
    MalformedTimestamp { value: String, details: String },

    #[error("Malformed BuiltWith API response: {details}")]
    MalformedResponse { details: String },
}
