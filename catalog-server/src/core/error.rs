use thiserror::Error;

/// Errors that stop the server (bind failures, serve loop errors)
///
/// Request-level failures are [`shared::AppError`] and never reach here.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Document root does not exist: {0}")]
    MissingDocRoot(std::path::PathBuf),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
