use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("auto-advance interval must be greater than zero")]
    InvalidInterval,

    #[error("window size {width}x{height} is invalid")]
    InvalidWindowSize { width: u32, height: u32 },

    #[error("failed to read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no card images found in directory {0:?}")]
    NoCards(PathBuf),
}
