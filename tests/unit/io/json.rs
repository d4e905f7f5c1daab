//! Tests for reading motif records and writing layouts as JSON

#[cfg(test)]
mod tests {
    use motifmap::io::json::{read_layout, read_motif_records, write_layout};
    use motifmap::spatial::Canvas;
    use motifmap::{LayoutError, LayoutResult, PlacedCircle};
    use std::fs;

    fn layout() -> LayoutResult {
        LayoutResult {
            canvas: Some(Canvas {
                width: 160.0,
                height: 90.0,
            }),
            circles: vec![
                PlacedCircle {
                    id: 3,
                    x: 20.5,
                    y: 30.25,
                    r: 12.0,
                    source: "http://localhost:1337/a.png".to_string(),
                },
                PlacedCircle {
                    id: 8,
                    x: 90.0,
                    y: 45.0,
                    r: 30.0,
                    source: "b.png".to_string(),
                },
            ],
        }
    }

    // Tests motif records load with camelCase keys and missing fields defaulted
    // Verified by requiring width and height
    #[test]
    fn test_read_motif_records() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir must be created");
        };
        let path = dir.path().join("motifs.json");
        let text = r#"[{"id": 1, "imageUrl": "a.png", "width": 640, "height": 480}, {"id": 2}]"#;
        assert!(fs::write(&path, text).is_ok());

        let Ok(records) = read_motif_records(&path) else {
            unreachable!("records must parse");
        };

        assert_eq!(records.len(), 2);
        assert!(records.first().is_some_and(|r| {
            r.image_url.as_deref() == Some("a.png") && (r.width, r.height) == (640, 480)
        }));
        assert!(records.get(1).is_some_and(|r| r.image_url.is_none() && r.width == 0));
    }

    // Tests a written layout reads back unchanged, creating missing directories
    // Verified by writing into an existing directory only
    #[test]
    fn test_write_then_read_layout() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir must be created");
        };
        let path = dir.path().join("nested").join("out_layout.json");

        assert!(write_layout(&layout(), &path).is_ok());
        assert!(read_layout(&path).is_ok_and(|read| read == layout()));

        let Ok(text) = fs::read_to_string(&path) else {
            unreachable!("layout file must exist");
        };
        assert!(text.contains("\"url\""));
        assert!(text.contains('\n'));
    }

    // Tests malformed and missing files map to their error kinds
    // Verified by reporting parse errors as file system errors
    #[test]
    fn test_read_errors() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir must be created");
        };
        let malformed = dir.path().join("bad.json");
        assert!(fs::write(&malformed, "{\"id\": 1}").is_ok());

        assert!(matches!(
            read_motif_records(&malformed),
            Err(LayoutError::Json { .. })
        ));
        assert!(matches!(
            read_layout(&dir.path().join("absent.json")),
            Err(LayoutError::FileSystem { .. })
        ));
    }
}
