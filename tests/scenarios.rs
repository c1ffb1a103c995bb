use masonry_rows::{
    Dimensions, Item, LayoutConfig, LayoutError, LayoutParams, MasonryEngine, Strategy, justify,
    pack,
};

const EPS: f64 = 1e-9;

#[test]
fn naive_packer_square_target() {
    let items = vec![Item::new(300.0, 200.0); 3];
    let params = LayoutParams::new(600.0, 200.0).with_scale_factor(0.0);
    let result = pack(&params, &items).unwrap();

    assert_eq!(result.row_count, 2);
    for placement in &result.placements[..2] {
        assert_eq!(placement.row_number, 1);
        assert_eq!(placement.items_in_row, 2);
        assert_eq!(placement.height, 200.0);
    }
    assert_eq!(result.placements[1].right(), 600.0);

    let third = result.placements[2];
    assert_eq!((third.row_number, third.items_in_row), (2, 1));
    assert_eq!(third.height, 200.0);
    assert_eq!(third.left, 0.0);
}

#[test]
fn justified_optimizer_keeps_unpenalized_solo_row() {
    let items = [Item::new(900.0, 200.0), Item::new(300.0, 200.0)];
    let result = justify(&LayoutParams::new(600.0, 200.0), &items).unwrap();

    let first = result.placements[0];
    assert_eq!(first.items_in_row, 1);
    assert!((first.height - 600.0 / 4.5).abs() < EPS);
    // The pair row would sit at 100 high, further from target than 133.3.
    assert_ne!(result.placements[1].row_number, first.row_number);
}

#[test]
fn zero_viewport_collapses_to_one_row() {
    let items = [
        Item::new(300.0, 200.0),
        Item::new(200.0, 300.0),
        Item::new(500.0, 100.0),
    ];
    let params = LayoutParams::new(0.0, 200.0);
    for result in [pack(&params, &items).unwrap(), justify(&params, &items).unwrap()] {
        assert_eq!(result.row_count, 1);
        assert!(result.placements.iter().all(|p| p.items_in_row == 3));
        assert!(result.total_height.is_finite());
    }
}

#[test]
fn single_item_forms_one_row() {
    let items = [Item::new(640.0, 480.0)];
    let params = LayoutParams::new(1200.0, 250.0);
    for strategy in [Strategy::Naive, Strategy::Justified] {
        let result = masonry_rows::compute(strategy, &params, &items).unwrap();
        assert_eq!(result.row_count, 1);
        assert_eq!(result.placements[0].row_number, 1);
        assert_eq!(result.placements[0].index_in_row, 0);
    }
}

#[test]
fn invalid_parameters_fail_before_layout() {
    let items = [Item::new(100.0, 100.0)];
    let err = pack(&LayoutParams::new(600.0, 200.0).with_scale_factor(-2.0), &items).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidParameters(_)));

    let err = justify(&LayoutParams::new(600.0, 0.0), &items).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidParameters(_)));
}

#[test]
fn extreme_aspect_ratio_is_rejected_instead_of_producing_nan() {
    let items = [Item::new(1e300, 1e-300), Item::new(100.0, 100.0)];
    let params = LayoutParams::new(600.0, 200.0);

    let err = pack(&params, &items).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidItem { index: 0, .. }));
    let err = justify(&params, &items).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidItem { index: 0, .. }));
}

#[derive(Debug, Clone, PartialEq)]
struct Photo {
    url: &'static str,
    size: (f64, f64),
}

impl Dimensions for Photo {
    fn width(&self) -> f64 {
        self.size.0
    }

    fn height(&self) -> f64 {
        self.size.1
    }
}

#[test]
fn caller_payloads_pair_back_by_index() {
    let photos = [
        Photo {
            url: "/a.jpg",
            size: (300.0, 200.0),
        },
        Photo {
            url: "/b.jpg",
            size: (300.0, 400.0),
        },
        Photo {
            url: "/c.jpg",
            size: (300.0, 169.0),
        },
    ];
    let result = justify(&LayoutParams::new(900.0, 250.0), &photos).unwrap();
    let urls: Vec<&str> = result.pair_with(&photos).map(|(photo, _)| photo.url).collect();
    assert_eq!(urls, vec!["/a.jpg", "/b.jpg", "/c.jpg"]);

    let tagged = [
        Item::with_payload(300.0, 200.0, 7u32),
        Item::with_payload(200.0, 300.0, 9u32),
    ];
    let result = pack(&LayoutParams::new(500.0, 200.0), &tagged).unwrap();
    let payloads: Vec<u32> = result.pair_with(&tagged).map(|(item, _)| item.payload).collect();
    assert_eq!(payloads, vec![7, 9]);
}

#[test]
fn engine_from_json_config_lays_out_items() {
    let config = LayoutConfig::from_json_str(
        r#"{ "strategy": "naive", "target_height": 200, "scale_factor": 0, "gap": 4 }"#,
    )
    .unwrap();
    let engine = MasonryEngine::new(config).unwrap();
    let items = vec![Item::new(300.0, 200.0); 3];

    let result = engine.layout(600.0, &items).unwrap();
    assert_eq!(result.row_count, 2);

    let rects = engine.content_rects(&result);
    assert_eq!(rects[2].x, 4.0);
    assert_eq!(rects[2].y, 202.0);
}

#[test]
fn results_serialize_to_json() {
    let items = vec![Item::new(300.0, 200.0); 2];
    let result = pack(&LayoutParams::new(600.0, 200.0).with_scale_factor(0.0), &items).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["row_count"], 1);
    assert_eq!(json["placements"][1]["index_in_row"], 1);
}
