//! Tests for round-trip validation and the temporary artifact lifecycle

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use tilechart::ChartError;
    use tilechart::algorithm::partition::partition;
    use tilechart::algorithm::reconstruction::reconstruct;
    use tilechart::algorithm::validation::{
        Mismatch, ValidationArtifact, Validator, collect_mismatches, compare_buffers, validate,
    };
    use tilechart::spatial::{GridConfig, ImageBuffer, PixelColor, Tile, TileMatrix};

    fn gradient(width: usize, height: usize) -> ImageBuffer {
        let pixels = (0..width * height)
            .map(|i| PixelColor::new((i * 7) as u8, (i * 13) as u8, (i * 29) as u8))
            .collect();
        ImageBuffer::new(width, height, pixels).unwrap()
    }

    fn corrupt(image: &ImageBuffer, index: usize, color: PixelColor) -> ImageBuffer {
        let mut pixels = image.pixels().to_vec();
        pixels[index] = color;
        ImageBuffer::new(image.width(), image.height(), pixels).unwrap()
    }

    fn entries(dir: &Path) -> usize {
        fs::read_dir(dir).map(|read| read.count()).unwrap_or(0)
    }

    // Tests a faithful partition validates through the temporary PNG
    #[test]
    fn test_validate_round_trip() {
        let image = gradient(11, 6);
        let matrix = partition(&image, GridConfig::new(4, 4).unwrap()).unwrap();

        assert!(validate(&image, &matrix).is_ok());
    }

    // Tests a single corrupted pixel is reported with its index and both colors
    // Verified by discarding the comparison result
    #[test]
    fn test_pixel_mismatch_reports_first_difference() {
        let image = gradient(8, 8);
        let matrix = partition(&image, GridConfig::new(3, 3).unwrap()).unwrap();
        let reconstructed = reconstruct(&matrix).unwrap();

        let wrong = PixelColor::new(1, 2, 3);
        let corrupted = corrupt(&reconstructed, 37, wrong);
        let expected = image.get(37).unwrap();

        match Validator::new().validate_reconstruction(&image, &corrupted) {
            Err(ChartError::PixelMismatch {
                index,
                expected: source,
                found,
            }) => {
                assert_eq!(index, 37);
                assert_eq!(source, expected);
                assert_eq!(found, wrong);
            }
            other => unreachable!("Expected PixelMismatch, got {other:?}"),
        }
    }

    // Tests size is compared before any pixel
    #[test]
    fn test_size_mismatch() {
        let original = gradient(4, 3);
        let other = gradient(3, 4);

        match compare_buffers(&original, &other) {
            Err(ChartError::SizeMismatch { expected, found }) => {
                assert_eq!(expected, (4, 3));
                assert_eq!(found, (3, 4));
            }
            result => unreachable!("Expected SizeMismatch, got {result:?}"),
        }
    }

    // Tests a matrix from a different image fails validation on size
    #[test]
    fn test_validate_against_wrong_source() {
        let matrix = partition(&gradient(5, 5), GridConfig::new(2, 2).unwrap()).unwrap();

        assert!(matches!(
            validate(&gradient(5, 6), &matrix),
            Err(ChartError::SizeMismatch { .. })
        ));
    }

    // Tests the artifact is removed after success and after a mismatch
    // Verified by leaking the temporary file on the error path
    #[test]
    fn test_artifact_removed_on_all_paths() {
        let dir = tempfile::tempdir().unwrap();
        let validator = Validator::with_artifact_dir(dir.path());
        let image = gradient(6, 5);
        let matrix = partition(&image, GridConfig::new(4, 2).unwrap()).unwrap();

        assert!(validator.validate(&image, &matrix).is_ok());
        assert_eq!(entries(dir.path()), 0);

        let corrupted = corrupt(&image, 0, PixelColor::new(255, 255, 255));
        assert!(validator.validate_reconstruction(&image, &corrupted).is_err());
        assert_eq!(entries(dir.path()), 0);
    }

    // Tests the artifact exists while held and is gone after release
    #[test]
    fn test_artifact_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let image = gradient(3, 2);

        let artifact = ValidationArtifact::create(&image, Some(dir.path())).unwrap();
        let path = artifact.path().to_path_buf();
        assert!(path.exists());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
        assert_eq!(artifact.load().unwrap(), image);

        artifact.release().unwrap();
        assert!(!path.exists());
    }

    // Tests a missing artifact directory surfaces as a file system error
    #[test]
    fn test_artifact_dir_missing() {
        let dir = tempfile::tempdir().unwrap();
        let validator = Validator::with_artifact_dir(dir.path().join("missing"));
        let image = gradient(2, 2);

        assert!(matches!(
            validator.validate_reconstruction(&image, &image),
            Err(ChartError::FileSystem { .. })
        ));
    }

    // Tests empty images validate without touching the file system
    #[test]
    fn test_empty_image_validates() {
        let image = ImageBuffer::new(0, 3, Vec::new()).unwrap();
        let matrix = partition(&image, GridConfig::new(2, 2).unwrap()).unwrap();

        assert!(validate(&image, &matrix).is_ok());
    }

    // Tests the collecting comparison reports every differing index
    #[test]
    fn test_collect_mismatches() {
        let image = gradient(5, 2);
        let first = PixelColor::new(0, 0, 1);
        let second = PixelColor::new(0, 0, 2);
        let corrupted = corrupt(&corrupt(&image, 2, first), 9, second);

        let mismatches = collect_mismatches(&image, &corrupted).unwrap();
        assert_eq!(
            mismatches,
            vec![
                Mismatch {
                    index: 2,
                    expected: image.get(2).unwrap(),
                    found: first,
                },
                Mismatch {
                    index: 9,
                    expected: image.get(9).unwrap(),
                    found: second,
                },
            ]
        );
        assert!(collect_mismatches(&image, &image).unwrap().is_empty());
    }

    // Tests a malformed matrix is blamed on the partition, not the source
    // Verified by validating without the structural check
    #[test]
    fn test_malformed_matrix_reports_dimensions() {
        let image = gradient(2, 2);
        let config = GridConfig::new(2, 2).unwrap();
        let short = Tile::from_rows(0, 0, vec![image.pixels()[..2].to_vec()]);
        let matrix = TileMatrix::from_rows(vec![vec![short]], 2, 2, config);

        match validate(&image, &matrix) {
            Err(ChartError::DimensionMismatch { violations }) => assert_eq!(violations.len(), 1),
            other => unreachable!("Expected DimensionMismatch, got {other:?}"),
        }
    }
}
