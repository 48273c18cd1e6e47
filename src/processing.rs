use image::{DynamicImage, GrayImage, Luma};
use imageproc::contrast::{ThresholdType, threshold};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::morphology::{Mask, grayscale_dilate};

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Sigma a kernel-sized Gaussian uses when no explicit sigma is given
/// (the OpenCV rule for sigma = 0).
pub fn sigma_for_ksize(ksize: u32) -> f32 {
    0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Apply Gaussian blur parameterized by kernel size rather than sigma
pub fn apply_blur(img: &GrayImage, ksize: u32) -> GrayImage {
    gaussian_blur_f32(img, sigma_for_ksize(ksize))
}

/// Detect edges using Canny edge detector
pub fn detect_edges(img: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    canny(img, low_threshold, high_threshold)
}

/// Thicken edges with one pass of a 2x2 structuring element
pub fn thicken_edges(img: &GrayImage) -> GrayImage {
    let element = GrayImage::from_pixel(2, 2, Luma([255u8]));
    grayscale_dilate(img, &Mask::from_image(&element, 1, 1))
}

/// Force every pixel to exactly 0 or 255 (values above 127 become white)
pub fn binarize(img: &GrayImage) -> GrayImage {
    threshold(img, 127, ThresholdType::Binary)
}
