pub mod convert;
pub mod error;
pub mod processing;

pub use convert::{ConvertOptions, convert_to_coloring_page};
pub use error::ConvertError;
