use thiserror::Error;

/// Failures surfaced by the media server client and the upload intake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },

    #[error("{path} answered with HTTP {status}")]
    Status { path: String, status: u16 },

    /// The response arrived but did not match the expected contract.
    #[error("unexpected response from {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("could not read {filename}: {message}")]
    FileRead { filename: String, message: String },

    #[error("{filename} is not a supported audio file")]
    UnsupportedFile { filename: String },
}

impl ApiError {
    pub fn transport(path: &str, err: impl std::fmt::Display) -> Self {
        Self::Transport {
            path: path.to_string(),
            message: err.to_string(),
        }
    }

    pub fn malformed(path: &str, err: impl std::fmt::Display) -> Self {
        Self::Malformed {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}
