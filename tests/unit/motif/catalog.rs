//! Tests for motif record filtering, selection and validation

#[cfg(test)]
mod tests {
    use motifmap::LayoutError;
    use motifmap::math::random::RandomSource;
    use motifmap::motif::catalog::validate_motifs;
    use motifmap::motif::{Motif, MotifCatalog, MotifRecord};

    fn record(id: i64, url: Option<&str>) -> MotifRecord {
        MotifRecord {
            id,
            image_url: url.map(str::to_string),
            width: 640,
            height: 480,
        }
    }

    fn records(count: i64) -> Vec<MotifRecord> {
        (1..=count)
            .map(|id| record(id, Some(&format!("/uploads/{id}.png"))))
            .collect()
    }

    // Tests records without an image reference are dropped
    // Verified by keeping empty URLs
    #[test]
    fn test_from_records_drops_missing_images() {
        let input = vec![
            record(1, Some("/a.png")),
            record(2, None),
            record(3, Some("")),
            record(4, Some("/d.png")),
        ];

        let catalog = MotifCatalog::from_records(&input, None);

        assert_eq!(catalog.len(), 2);
        let ids: Vec<i64> = catalog.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(catalog.entries().first().map(|e| e.source.as_str()), Some("/a.png"));
    }

    // Tests relative references are joined to the base URL and absolute ones kept
    // Verified by prefixing absolute URLs as well
    #[test]
    fn test_base_url_resolution() {
        let input = vec![
            record(1, Some("/uploads/a.png")),
            record(2, Some("uploads/b.png")),
            record(3, Some("https://cdn.example.com/c.png")),
        ];

        let catalog = MotifCatalog::from_records(&input, Some("http://localhost:1337/"));
        let sources: Vec<&str> = catalog.entries().iter().map(|e| e.source.as_str()).collect();

        assert_eq!(
            sources,
            vec![
                "http://localhost:1337/uploads/a.png",
                "http://localhost:1337/uploads/b.png",
                "https://cdn.example.com/c.png",
            ]
        );
    }

    // Tests selection without shuffling keeps order and applies the limit
    // Verified by truncating before the limit check
    #[test]
    fn test_select_limit_without_shuffle() {
        let mut random = RandomSource::new(1);

        let limited = MotifCatalog::from_records(&records(10), None).select(Some(3), false, &mut random);
        let ids: Vec<i64> = limited.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let unlimited = MotifCatalog::from_records(&records(4), None).select(Some(9), false, &mut random);
        assert_eq!(unlimited.len(), 4);
    }

    // Tests shuffled selection is a seeded permutation of the catalog
    // Verified by shuffling with a fresh unseeded generator
    #[test]
    fn test_select_shuffle_is_seeded_permutation() {
        let catalog = MotifCatalog::from_records(&records(30), None);

        let first = catalog.clone().select(None, true, &mut RandomSource::new(11));
        let second = catalog.clone().select(None, true, &mut RandomSource::new(11));
        assert_eq!(first, second);

        let mut ids: Vec<i64> = first.iter().map(|e| e.id).collect();
        assert_ne!(ids, (1..=30).collect::<Vec<_>>());
        ids.sort_unstable();
        assert_eq!(ids, (1..=30).collect::<Vec<_>>());
    }

    // Tests validation rejects negative, non-finite radii and duplicate ids but allows zero
    // Verified by skipping the duplicate check
    #[test]
    fn test_validate_motifs() {
        assert!(validate_motifs(&[]).is_ok());
        assert!(validate_motifs(&[Motif::new(1, "a", 0.0), Motif::new(2, "b", 5.0)]).is_ok());

        for motifs in [
            vec![Motif::new(1, "a", -1.0)],
            vec![Motif::new(1, "a", f64::NAN)],
            vec![Motif::new(1, "a", f64::INFINITY)],
            vec![Motif::new(1, "a", 5.0), Motif::new(1, "b", 6.0)],
        ] {
            assert!(matches!(
                validate_motifs(&motifs),
                Err(LayoutError::InvalidInput { .. })
            ));
        }
    }

    // Tests records parse from the content source JSON shape
    // Verified by renaming the image field to snake case
    #[test]
    fn test_record_json_shape() {
        let json = r#"[
            {"id": 7, "imageUrl": "/uploads/7.png", "width": 800, "height": 600},
            {"id": 8, "imageUrl": null, "width": 0, "height": 0},
            {"id": 9}
        ]"#;

        let Ok(parsed) = serde_json::from_str::<Vec<MotifRecord>>(json) else {
            unreachable!("record JSON must parse");
        };

        assert_eq!(parsed.len(), 3);
        assert_eq!(
            parsed.first(),
            Some(&MotifRecord {
                id: 7,
                image_url: Some("/uploads/7.png".to_string()),
                width: 800,
                height: 600,
            })
        );
        assert_eq!(parsed.get(1).and_then(|r| r.image_url.clone()), None);
        assert_eq!(parsed.get(2).map(|r| r.width), Some(0));
    }
}
