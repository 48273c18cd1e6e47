use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`crate::convert_to_coloring_page`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file is missing, unreadable, or not a decodable image.
    #[error("could not read image: {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The result could not be encoded or written to the output path.
    #[error("could not write image: {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output's parent directory chain could not be created.
    #[error("could not create output directory: {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
