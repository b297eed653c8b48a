//! Image preprocessing for the leaf classifier.

use image::{DynamicImage, GenericImageView};
use ndarray::Array4;
use tracing::debug;

use crate::error::ClassifyError;
use crate::labels::INPUT_SIZE;

/// Preprocessor turning an arbitrary image into the model's input tensor.
///
/// The model expects a single NHWC tensor of shape `[1, N, N, 3]` with each
/// channel scaled from `[0, 255]` to `[0.0, 1.0]`. No mean/std normalization
/// is applied.
pub struct ImagePreprocessor {
    /// Target edge length of the square model input.
    input_size: u32,
}

impl ImagePreprocessor {
    /// Create a new preprocessor with the default 224x224 input.
    pub fn new() -> Self {
        Self {
            input_size: INPUT_SIZE,
        }
    }

    /// Set the target input edge length.
    pub fn with_input_size(mut self, size: u32) -> Self {
        self.input_size = size;
        self
    }

    /// The configured input edge length.
    pub fn input_size(&self) -> u32 {
        self.input_size
    }

    /// The tensor shape this preprocessor produces.
    pub fn input_shape(&self) -> [usize; 4] {
        [1, self.input_size as usize, self.input_size as usize, 3]
    }

    /// Preprocess an image into the classifier input tensor.
    ///
    /// Resizes to exactly `input_size` on both edges with bilinear filtering,
    /// then fills the tensor row-major with R,G,B triples divided by 255.
    pub fn preprocess(&self, image: &DynamicImage) -> Result<Array4<f32>, ClassifyError> {
        let (orig_width, orig_height) = image.dimensions();
        if orig_width == 0 || orig_height == 0 {
            return Err(ClassifyError::InvalidImage(format!(
                "image has zero dimension: {}x{}",
                orig_width, orig_height
            )));
        }

        debug!(
            "Preprocessing image of size {}x{} to {}x{}",
            orig_width, orig_height, self.input_size, self.input_size
        );

        let resized = image.resize_exact(
            self.input_size,
            self.input_size,
            image::imageops::FilterType::Triangle,
        );

        let rgb = resized.to_rgb8();

        let size = self.input_size as usize;
        let mut tensor = Array4::<f32>::zeros((1, size, size, 3));

        for y in 0..self.input_size {
            for x in 0..self.input_size {
                let pixel = rgb.get_pixel(x, y);
                for c in 0..3 {
                    tensor[[0, y as usize, x as usize, c]] = pixel[c] as f32 / 255.0;
                }
            }
        }

        Ok(tensor)
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use pretty_assertions::assert_eq;

    fn solid_image(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        let mut img = RgbImage::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = Rgb(color);
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_output_shape() {
        let preprocessor = ImagePreprocessor::new();
        let image = solid_image(640, 480, [0, 0, 0]);

        let tensor = preprocessor.preprocess(&image).unwrap();
        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
    }

    #[test]
    fn test_custom_input_size() {
        let preprocessor = ImagePreprocessor::new().with_input_size(96);
        let image = solid_image(30, 50, [10, 20, 30]);

        let tensor = preprocessor.preprocess(&image).unwrap();
        assert_eq!(tensor.shape(), &[1, 96, 96, 3]);
    }

    #[test]
    fn test_normalization_range() {
        let preprocessor = ImagePreprocessor::new();
        let image = solid_image(224, 224, [255, 128, 0]);

        let tensor = preprocessor.preprocess(&image).unwrap();
        assert!((tensor[[0, 100, 100, 0]] - 1.0).abs() < 1e-6);
        assert!((tensor[[0, 100, 100, 1]] - 128.0 / 255.0).abs() < 1e-6);
        assert!((tensor[[0, 100, 100, 2]] - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_channel_order_is_rgb() {
        // Left half red, right half green. Sample well away from the seam so
        // bilinear resampling cannot blend the halves.
        let mut img = RgbImage::new(224, 224);
        for (x, _, pixel) in img.enumerate_pixels_mut() {
            *pixel = if x < 112 { Rgb([255, 0, 0]) } else { Rgb([0, 255, 0]) };
        }
        let image = DynamicImage::ImageRgb8(img);

        let tensor = ImagePreprocessor::new().preprocess(&image).unwrap();

        // Left: R channel high, G low
        assert!(tensor[[0, 50, 20, 0]] > 0.9);
        assert!(tensor[[0, 50, 20, 1]] < 0.1);
        // Right: G channel high, R low
        assert!(tensor[[0, 50, 200, 1]] > 0.9);
        assert!(tensor[[0, 50, 200, 0]] < 0.1);
    }

    #[test]
    fn test_grayscale_input_converts() {
        let gray = image::GrayImage::from_pixel(64, 64, image::Luma([200]));
        let image = DynamicImage::ImageLuma8(gray);

        let tensor = ImagePreprocessor::new().preprocess(&image).unwrap();
        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
        // All three channels carry the gray value.
        let v = 200.0 / 255.0;
        for c in 0..3 {
            assert!((tensor[[0, 10, 10, c]] - v).abs() < 1e-2);
        }
    }
}
