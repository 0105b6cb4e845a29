use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] quotedeck_core::ApiError),

    #[error(transparent)]
    Integrity(#[from] quotedeck_core::IntegrityError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Api(_) => 2,
            Self::Integrity(_) => 3,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
