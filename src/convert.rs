use std::fs;
use std::path::{Path, PathBuf};

use image::ImageReader;

use crate::error::ConvertError;
use crate::processing;

/// Tuning parameters for the photo-to-outline conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Gaussian blur kernel size in pixels. Even values are coerced to the
    /// next odd value; sizes <= 1 skip blurring.
    pub blur_ksize: u32,
    /// Lower Canny hysteresis threshold.
    pub threshold_low: f32,
    /// Upper Canny hysteresis threshold.
    pub threshold_high: f32,
    /// Output black lines on a white background instead of white-on-black.
    pub invert: bool,
    /// Print per-stage progress to stdout.
    pub verbose: bool,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self {
            blur_ksize: 5,
            threshold_low: 50.0,
            threshold_high: 150.0,
            invert: true,
            verbose: false,
        }
    }

    pub fn with_blur_ksize(mut self, ksize: u32) -> Self {
        self.blur_ksize = ksize;
        self
    }

    pub fn with_thresholds(mut self, low: f32, high: f32) -> Self {
        self.threshold_low = low;
        self.threshold_high = high;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert an image file into a black-outline coloring page and save it.
///
/// The input is decoded as a color image, reduced to grayscale, optionally
/// blurred, run through Canny edge detection, thickened by one dilation
/// pass, optionally inverted, and re-binarized before being written to
/// `output_path` (format inferred from the extension, PNG recommended).
/// Missing parent directories of the output are created. The output always
/// has the input's dimensions and contains only the values 0 and 255.
///
/// Returns the path of the written file.
pub fn convert_to_coloring_page(
    input_path: &Path,
    output_path: &Path,
    options: &ConvertOptions,
) -> Result<PathBuf, ConvertError> {
    let decoded = ImageReader::open(input_path)
        .map_err(|e| ConvertError::Decode {
            path: input_path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .decode()
        .map_err(|e| ConvertError::Decode {
            path: input_path.to_path_buf(),
            source: e,
        })?;

    if options.verbose {
        println!("Image loaded: {}x{}", decoded.width(), decoded.height());
        println!("Converting to grayscale...");
    }
    let mut gray = processing::to_grayscale(&decoded);

    let ksize = if options.blur_ksize % 2 == 0 {
        options.blur_ksize + 1
    } else {
        options.blur_ksize
    };
    if ksize > 1 {
        if options.verbose {
            println!("Applying Gaussian blur (kernel size {})...", ksize);
        }
        gray = processing::apply_blur(&gray, ksize);
    }

    if options.verbose {
        println!("Detecting edges...");
    }
    let edges = processing::detect_edges(&gray, options.threshold_low, options.threshold_high);

    if options.verbose {
        println!("Thickening edges...");
    }
    let mut outline = processing::thicken_edges(&edges);

    if options.invert {
        image::imageops::invert(&mut outline);
    }

    let outline = processing::binarize(&outline);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ConvertError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    if options.verbose {
        println!("Saving output...");
    }
    outline.save(output_path).map_err(|e| ConvertError::Encode {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(output_path.to_path_buf())
}
