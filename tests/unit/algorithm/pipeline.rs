//! Tests for complete single-image runs

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use std::path::{Path, PathBuf};
    use tilechart::algorithm::pipeline::{ChartOptions, chart_image, run};
    use tilechart::algorithm::validation::Validator;
    use tilechart::io::chart::ChartSettings;
    use tilechart::spatial::{GridConfig, ImageBuffer, PixelColor};

    fn write_source(dir: &Path, width: u32, height: u32) -> PathBuf {
        let image = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 40) as u8, (y * 40) as u8, 100, (x * y) as u8])
        });
        let path = dir.join("sample.png");
        image.save(&path).unwrap();
        path
    }

    fn small_options(config: GridConfig, destination: &Path) -> ChartOptions {
        ChartOptions {
            chart: ChartSettings {
                swatch_size: 3,
                border: 1,
                gutter: 2,
            },
            ..ChartOptions::new(config, destination)
        }
    }

    // Tests the in-memory pipeline returns consistent partition and counts
    #[test]
    fn test_chart_image() {
        let pixels = vec![PixelColor::new(1, 1, 1); 12];
        let image = ImageBuffer::new(4, 3, pixels).unwrap();
        let data = chart_image(image, GridConfig::new(2, 2).unwrap(), &Validator::new()).unwrap();

        assert_eq!(data.matrix.tile_count(), 4);
        assert_eq!(data.report.total_pixels(), 12);
        assert_eq!(data.report.distinct_colors(), 1);
    }

    // Tests validate-only runs write nothing
    // Verified by writing the report before checking the flag
    #[test]
    fn test_validate_only_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 5, 4);
        let out = dir.path().join("out");

        let options = ChartOptions {
            validate_only: true,
            ..small_options(GridConfig::new(2, 2).unwrap(), &out)
        };
        let chart_run = run(&source, &options).unwrap();

        assert!(chart_run.outputs.is_empty());
        assert!(!out.exists());
        assert_eq!(chart_run.data.image.dimensions(), (5, 4));
    }

    // Tests a full run writes the report, charts and optional CSV files
    #[test]
    fn test_full_run_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 5, 4);
        let out = dir.path().join("out");

        let options = ChartOptions {
            csv: true,
            ..small_options(GridConfig::new(2, 2).unwrap(), &out)
        };
        let chart_run = run(&source, &options).unwrap();

        // 3x2 tiles: 6 CSV files, 1 report, 6 tile charts, 1 complete chart
        assert_eq!(chart_run.outputs.len(), 14);
        for path in &chart_run.outputs {
            assert!(path.exists(), "{} should exist", path.display());
        }

        assert!(out.join("sample_Grid-C2.csv").exists());
        assert!(out.join("sample_report.txt").exists());
        assert!(out.join("sample_GRID-A1.png").exists());
        assert!(out.join("sample_GRID-COMPLETE.png").exists());
    }

    // Tests alpha is stripped on the way in from a decoded file
    #[test]
    fn test_run_strips_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 3, 3);

        let options = ChartOptions {
            validate_only: true,
            ..small_options(GridConfig::new(2, 2).unwrap(), dir.path())
        };
        let chart_run = run(&source, &options).unwrap();

        assert_eq!(chart_run.data.image.get(4), Some(PixelColor::new(40, 40, 100)));
    }

    // Tests a missing source surfaces as an image load error
    #[test]
    fn test_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let options = small_options(GridConfig::new(2, 2).unwrap(), dir.path());

        assert!(run(&dir.path().join("absent.png"), &options).is_err());
    }
}
