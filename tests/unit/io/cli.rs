//! Tests for command-line parsing and processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use log::LevelFilter;
    use std::path::PathBuf;
    use tilechart::ChartError;
    use tilechart::io::cli::{ChartProcessor, Cli, parse_swatch_size};
    use tilechart::io::configuration::{DEFAULT_SWATCH_SIZE, MAX_SWATCH_SIZE};

    // Tests CLI parsing with only the required image argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "photo.png"]);

        assert_eq!(cli.image, PathBuf::from("photo.png"));
        assert_eq!(cli.destination, PathBuf::from("."));
        assert_eq!(cli.grid.to_string(), "10x10");
        assert_eq!(cli.swatch, DEFAULT_SWATCH_SIZE);
        assert!(!cli.csv);
        assert!(!cli.validate_only);
        assert_eq!(cli.log_level_filter(), LevelFilter::Info);
        assert!(cli.should_show_progress());
    }

    // Tests short and long flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "in.png",
            "-d",
            "charts",
            "-g",
            "7x5",
            "-c",
            "--validate-only",
            "--swatch",
            "20",
        ]);

        assert_eq!(cli.destination, PathBuf::from("charts"));
        assert_eq!(cli.grid.tile_width(), 7);
        assert_eq!(cli.grid.tile_height(), 5);
        assert!(cli.csv);
        assert!(cli.validate_only);

        let options = cli.chart_options();
        assert_eq!(options.chart.swatch_size, 20);
        assert!(options.validate_only);
    }

    // Tests invalid grid sizes are rejected at parse time
    #[test]
    fn test_cli_rejects_bad_grid() {
        assert!(Cli::try_parse_from(["program", "in.png", "-g", "0x5"]).is_err());
        assert!(Cli::try_parse_from(["program", "in.png", "--grid", "ten"]).is_err());
    }

    // Tests swatch sizes are bounded at parse time
    // Verified by accepting any u32
    #[test]
    fn test_cli_bounds_swatch() {
        assert!(Cli::try_parse_from(["program", "in.png", "-s", "0"]).is_err());
        assert!(Cli::try_parse_from(["program", "in.png", "-s", "4294967295"]).is_err());
        assert!(Cli::try_parse_from(["program", "in.png", "--swatch", "big"]).is_err());

        let largest = MAX_SWATCH_SIZE.to_string();
        let cli = Cli::try_parse_from(["program", "in.png", "-s", largest.as_str()]).unwrap();
        assert_eq!(cli.swatch, MAX_SWATCH_SIZE);
    }

    // Tests the swatch parser reports the offending value
    #[test]
    fn test_parse_swatch_size() {
        assert_eq!(parse_swatch_size(" 40 ").unwrap(), 40);
        match parse_swatch_size("60000") {
            Err(ChartError::InvalidParameter { parameter, value, .. }) => {
                assert_eq!(parameter, "swatch");
                assert_eq!(value, "60000");
            }
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
    }

    // Tests quiet verbosity hides progress
    #[test]
    fn test_quiet_hides_progress() {
        let cli = Cli::parse_from(["program", "in.png", "-q"]);
        assert_eq!(cli.log_level_filter(), LevelFilter::Warn);
        assert!(!cli.should_show_progress());
    }

    // Tests the processor runs the pipeline end to end
    #[test]
    fn test_processor_validate_only() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("tiny.png");
        RgbImage::from_fn(4, 4, |x, y| Rgb([x as u8, y as u8, 0]))
            .save(&source)
            .unwrap();

        let cli = Cli::parse_from([
            PathBuf::from("program"),
            source,
            PathBuf::from("--validate-only"),
            PathBuf::from("-g"),
            PathBuf::from("3x3"),
        ]);
        let chart_run = ChartProcessor::new(cli).process().unwrap();

        assert_eq!(chart_run.data.matrix.tile_count(), 4);
        assert!(chart_run.outputs.is_empty());
    }
}
