//! Tests for alpha stripping and image buffer construction

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
    use tilechart::ChartError;
    use tilechart::spatial::{ImageBuffer, PixelColor};

    // Tests that a fourth component is dropped as alpha
    // Verified by keeping the last component instead of the first three
    #[test]
    fn test_from_components_strips_alpha() {
        let rgb = PixelColor::from_components(&[10, 20, 30]).unwrap();
        let rgba = PixelColor::from_components(&[10, 20, 30, 0]).unwrap();

        assert_eq!(rgb, PixelColor::new(10, 20, 30));
        assert_eq!(rgb, rgba);
    }

    // Tests rejection of pixels that are neither RGB nor RGBA
    // Verified by accepting any component count of at least three
    #[test]
    fn test_from_components_rejects_other_lengths() {
        for components in [&[1u8, 2][..], &[1, 2, 3, 4, 5], &[]] {
            let result = PixelColor::from_components(components);
            assert!(
                matches!(result, Err(ChartError::InvalidSourceData { .. })),
                "{} components should be rejected",
                components.len()
            );
        }
    }

    // Tests the "r, g, b" text form used by CSV output and reports
    #[test]
    fn test_display_format() {
        assert_eq!(PixelColor::new(213, 223, 250).to_string(), "213, 223, 250");
    }

    // Tests that the buffer enforces width * height pixels
    // Verified by removing the length check
    #[test]
    fn test_new_checks_pixel_count() {
        let pixels = vec![PixelColor::new(0, 0, 0); 5];
        assert!(ImageBuffer::new(2, 3, pixels.clone()).is_err());
        assert!(ImageBuffer::new(5, 1, pixels).is_ok());
    }

    // Tests interleaved RGBA data is stripped the same way as RGB data
    // Verified by reading RGBA data with a stride of three
    #[test]
    fn test_from_raw_rgba_matches_rgb() {
        let rgba = [1, 2, 3, 255, 4, 5, 6, 0];
        let rgb = [1, 2, 3, 4, 5, 6];

        let from_rgba = ImageBuffer::from_raw(2, 1, 4, &rgba).unwrap();
        let from_rgb = ImageBuffer::from_raw(2, 1, 3, &rgb).unwrap();

        assert_eq!(from_rgba, from_rgb);
        assert_eq!(from_rgba.get(1), Some(PixelColor::new(4, 5, 6)));
    }

    // Tests rejection of unsupported channel counts and ragged data
    #[test]
    fn test_from_raw_rejects_bad_shapes() {
        assert!(ImageBuffer::from_raw(1, 1, 2, &[1, 2]).is_err());
        assert!(ImageBuffer::from_raw(1, 1, 3, &[1, 2, 3, 4]).is_err());
        assert!(ImageBuffer::from_raw(2, 1, 3, &[1, 2, 3]).is_err());
    }

    // Tests decoded images with and without alpha produce identical buffers
    // Verified by converting RGBA images through to_rgb8 before stripping
    #[test]
    fn test_from_dynamic_image_strips_alpha() {
        let rgba = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8, y as u8, 7, (x * 80) as u8]));
        let rgb = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 7]));

        let from_rgba = ImageBuffer::from_dynamic_image(&DynamicImage::ImageRgba8(rgba)).unwrap();
        let from_rgb = ImageBuffer::from_dynamic_image(&DynamicImage::ImageRgb8(rgb)).unwrap();

        assert_eq!(from_rgba, from_rgb);
        assert_eq!(from_rgba.dimensions(), (3, 2));
        assert_eq!(from_rgba.get(4), Some(PixelColor::new(1, 1, 7)));
    }

    // Tests accessors on an empty image
    #[test]
    fn test_empty_image() {
        let image = ImageBuffer::new(0, 4, Vec::new()).unwrap();
        assert!(image.is_empty());
        assert_eq!(image.len(), 0);
        assert_eq!(image.get(0), None);
    }
}
