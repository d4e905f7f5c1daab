//! Tests for argument parsing, output naming and batch processing of motif files

#[cfg(test)]
mod tests {
    use clap::Parser;
    use motifmap::io::cli::{Cli, FileProcessor};
    use motifmap::io::json::read_layout;
    use motifmap::{LayoutError, ShrinkRule};
    use std::fs;
    use std::path::{Path, PathBuf};

    const MOTIFS: &str = r#"[
        {"id": 1, "imageUrl": "/uploads/a.png", "width": 10, "height": 10},
        {"id": 2, "imageUrl": "/uploads/b.png", "width": 10, "height": 10},
        {"id": 3, "imageUrl": null, "width": 10, "height": 10},
        {"id": 4, "imageUrl": "https://cdn.example.org/d.png", "width": 10, "height": 10}
    ]"#;

    fn parse(args: &[&str]) -> Cli {
        let Ok(cli) = Cli::try_parse_from(std::iter::once("motifmap").chain(args.iter().copied()))
        else {
            unreachable!("arguments {args:?} must parse");
        };
        cli
    }

    fn write_motifs(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        assert!(fs::write(&path, MOTIFS).is_ok());
        path
    }

    // Tests defaults mirror the layout constants
    // Verified by changing the default density flag value
    #[test]
    fn test_defaults() {
        let cli = parse(&["motifs.json"]);
        let config = cli.layout_config();

        assert_eq!(cli.target, PathBuf::from("motifs.json"));
        assert_eq!(cli.seed, 42);
        assert!((cli.viewport_width - 1920.0).abs() < f64::EPSILON);
        assert!((cli.viewport_height - 1080.0).abs() < f64::EPSILON);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
        assert!(!cli.preview);
        assert_eq!(config, motifmap::LayoutConfig::default());
    }

    // Tests flags flow into the layout configuration
    // Verified by ignoring the proportional shrink flag
    #[test]
    fn test_flags_map_to_config() {
        let cli = parse(&[
            "dir",
            "-s",
            "7",
            "-W",
            "800",
            "-H",
            "600",
            "-d",
            "1.5",
            "-m",
            "0.5",
            "-f",
            "20",
            "-n",
            "10",
            "--proportional-shrink",
            "--no-shuffle",
            "-b",
            "http://localhost:1337",
            "--preview",
            "-q",
            "--no-skip",
        ]);
        let config = cli.layout_config();

        assert_eq!(cli.seed, 7);
        assert!((cli.viewport().aspect_ratio().unwrap_or_default() - 4.0 / 3.0).abs() < 1e-12);
        assert!((config.density - 1.5).abs() < f64::EPSILON);
        assert!((config.size_multiplier - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.fetch_limit, Some(20));
        assert_eq!(config.draw_count, Some(10));
        assert_eq!(config.shrink_rule, ShrinkRule::Proportional);
        assert!(!config.shuffle);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:1337"));
        assert!(cli.preview);
        assert!(!cli.should_show_progress());
        assert!(!cli.skip_existing());
    }

    // Tests output names sit next to the input with their suffixes
    // Verified by dropping the stem from the output name
    #[test]
    fn test_output_paths() {
        let input = Path::new("data/motifs.json");

        assert_eq!(
            FileProcessor::get_output_path(input),
            PathBuf::from("data/motifs_layout.json")
        );
        assert_eq!(
            FileProcessor::get_preview_path(input),
            PathBuf::from("data/motifs_preview.png")
        );
    }

    // Tests a directory run writes one layout per motif file with resolved urls and a preview
    // Verified by treating layout outputs as new inputs
    #[test]
    fn test_process_directory() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir must be created");
        };
        let input = write_motifs(dir.path(), "motifs.json");
        assert!(fs::write(dir.path().join("notes.txt"), "ignored").is_ok());

        let target = dir.path().to_string_lossy().to_string();
        let mut processor = FileProcessor::new(parse(&[
            target.as_str(),
            "-q",
            "--preview",
            "-b",
            "http://localhost:1337/",
        ]));
        assert!(processor.process().is_ok());

        let output = FileProcessor::get_output_path(&input);
        let Ok(layout) = read_layout(&output) else {
            unreachable!("layout must be readable");
        };
        assert_eq!(layout.len(), 3);
        assert!(layout.circle(3).is_none());
        assert!(
            layout
                .circle(1)
                .is_some_and(|c| c.source == "http://localhost:1337/uploads/a.png")
        );
        assert!(
            layout
                .circle(4)
                .is_some_and(|c| c.source == "https://cdn.example.org/d.png")
        );
        assert!(FileProcessor::get_preview_path(&input).exists());

        // Second run must not pick up motifs_layout.json as an input
        let mut processor = FileProcessor::new(parse(&[target.as_str(), "-q", "--no-skip"]));
        assert!(processor.process().is_ok());
        assert!(!dir.path().join("motifs_layout_layout.json").exists());
    }

    // Tests existing outputs are skipped unless forced
    // Verified by always reprocessing
    #[test]
    fn test_skip_existing_output() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir must be created");
        };
        let input = write_motifs(dir.path(), "set.json");
        let output = FileProcessor::get_output_path(&input);
        assert!(fs::write(&output, "sentinel").is_ok());

        let target = input.to_string_lossy().to_string();
        assert!(FileProcessor::new(parse(&[target.as_str(), "-q"])).process().is_ok());
        assert_eq!(fs::read_to_string(&output).ok().as_deref(), Some("sentinel"));

        assert!(FileProcessor::new(parse(&[target.as_str(), "-q", "--no-skip"])).process().is_ok());
        assert!(read_layout(&output).is_ok_and(|l| l.len() == 3));
    }

    // Tests a file with no usable images still yields an empty layout
    // Verified by failing on an empty selection
    #[test]
    fn test_process_without_images() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir must be created");
        };
        let input = dir.path().join("empty.json");
        assert!(fs::write(&input, r#"[{"id": 9, "imageUrl": ""}]"#).is_ok());

        let target = input.to_string_lossy().to_string();
        assert!(FileProcessor::new(parse(&[target.as_str(), "-q", "-p"])).process().is_ok());

        let layout = read_layout(&FileProcessor::get_output_path(&input));
        assert!(layout.is_ok_and(|l| l.is_empty() && l.canvas.is_none()));
        assert!(!FileProcessor::get_preview_path(&input).exists());
    }

    // Tests bad targets and parameters are reported before any file is written
    // Verified by validating the configuration per file
    #[test]
    fn test_process_rejects_bad_input() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir must be created");
        };
        let missing = dir.path().join("missing").to_string_lossy().to_string();
        assert!(matches!(
            FileProcessor::new(parse(&[missing.as_str(), "-q"])).process(),
            Err(LayoutError::InvalidInput { .. })
        ));

        let text = dir.path().join("list.txt");
        assert!(fs::write(&text, "[]").is_ok());
        let text = text.to_string_lossy().to_string();
        assert!(matches!(
            FileProcessor::new(parse(&[text.as_str(), "-q"])).process(),
            Err(LayoutError::InvalidInput { .. })
        ));

        let input = write_motifs(dir.path(), "m.json");
        let target = input.to_string_lossy().to_string();
        assert!(matches!(
            FileProcessor::new(parse(&[target.as_str(), "-q", "-d", "0.5"])).process(),
            Err(LayoutError::InvalidParameter { parameter: "density", .. })
        ));
        assert!(!FileProcessor::get_output_path(&input).exists());
    }
}
