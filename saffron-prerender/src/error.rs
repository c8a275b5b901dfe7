use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, PrerenderError>;

#[derive(Debug, thiserror::Error)]
pub enum PrerenderError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid motion preset")]
    Motion(#[from] saffron_motion::MotionError),

    #[error("Failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
