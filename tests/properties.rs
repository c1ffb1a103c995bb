use masonry_rows::{Item, LayoutError, LayoutParams, LayoutResult, Strategy as RowStrategy, compute};
use proptest::prelude::*;

fn items_strategy(max_len: usize) -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((1.0f64..2000.0, 1.0f64..2000.0), 0..max_len)
        .prop_map(|dims| dims.into_iter().map(|(w, h)| Item::new(w, h)).collect())
}

fn params_strategy() -> impl Strategy<Value = LayoutParams> {
    (1.0f64..3000.0, 20.0f64..600.0, -0.9f64..1.5).prop_map(|(viewport, target, scale)| {
        LayoutParams::new(viewport, target).with_scale_factor(scale)
    })
}

fn layout_strategy() -> impl Strategy<Value = RowStrategy> {
    prop_oneof![Just(RowStrategy::Naive), Just(RowStrategy::Justified)]
}

fn relative_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1.0)
}

fn check_structure(items: &[Item], result: &LayoutResult) -> Result<(), TestCaseError> {
    prop_assert_eq!(result.placements.len(), items.len());
    prop_assert_eq!(result.rows().count(), result.row_count);

    let mut expected_top = 0.0;
    let mut previous_bottom = 0.0;
    for (row_index, row) in result.rows().enumerate() {
        let first = row[0];
        prop_assert_eq!(first.left, 0.0);
        prop_assert_eq!(first.top, expected_top);
        prop_assert!(relative_eq(first.top, previous_bottom, 1e-12));
        for (k, placement) in row.iter().enumerate() {
            prop_assert_eq!(placement.row_number, row_index + 1);
            prop_assert_eq!(placement.index_in_row, k);
            prop_assert_eq!(placement.items_in_row, row.len());
            prop_assert_eq!(placement.height, first.height);
            prop_assert_eq!(placement.top, first.top);
        }
        for pair in row.windows(2) {
            prop_assert_eq!(pair[1].left, pair[0].left + pair[0].width);
        }
        expected_top += first.height;
        previous_bottom = first.bottom();
    }

    let summed: f64 = result.row_heights().iter().sum();
    prop_assert_eq!(result.total_height, summed);
    Ok(())
}

proptest! {
    #[test]
    fn placements_partition_items_in_order(
        items in items_strategy(60),
        params in params_strategy(),
        strategy in layout_strategy(),
    ) {
        let result = compute(strategy, &params, &items).unwrap();
        check_structure(&items, &result)?;
        if items.is_empty() {
            prop_assert_eq!(result.row_count, 0);
            prop_assert_eq!(result.total_height, 0.0);
        }
    }

    #[test]
    fn aspect_ratios_survive_layout(
        items in items_strategy(40),
        params in params_strategy(),
        strategy in layout_strategy(),
    ) {
        let result = compute(strategy, &params, &items).unwrap();
        for (item, placement) in result.pair_with(&items) {
            let expected = item.width / item.height;
            let actual = placement.width / placement.height;
            prop_assert!(relative_eq(actual, expected, 1e-6), "{actual} vs {expected}");
        }
    }

    #[test]
    fn justified_rows_span_the_viewport(
        items in items_strategy(50),
        params in params_strategy(),
    ) {
        let result = compute(RowStrategy::Justified, &params, &items).unwrap();
        for row in result.rows() {
            let right = row[row.len() - 1].right();
            prop_assert!(relative_eq(right, params.viewport_width, 1e-9));
        }
    }

    #[test]
    fn naive_rows_fill_except_possibly_the_last(
        items in items_strategy(50),
        params in params_strategy(),
    ) {
        let result = compute(RowStrategy::Naive, &params, &items).unwrap();
        let max_height = params.max_row_height();
        let rows: Vec<_> = result.rows().collect();
        for (index, row) in rows.iter().enumerate() {
            prop_assert!(row[0].height <= max_height * (1.0 + 1e-12));
            if index + 1 < rows.len() {
                let right = row[row.len() - 1].right();
                prop_assert!(relative_eq(right, params.viewport_width, 1e-9));
            }
        }
    }

    #[test]
    fn repeated_calls_are_identical(
        items in items_strategy(40),
        params in params_strategy(),
        strategy in layout_strategy(),
    ) {
        let first = compute(strategy, &params, &items).unwrap();
        let second = compute(strategy, &params, &items).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn zero_viewport_is_one_finite_row(
        items in items_strategy(30).prop_filter("non-empty", |items| !items.is_empty()),
        target in 20.0f64..600.0,
        strategy in layout_strategy(),
    ) {
        let params = LayoutParams::new(0.0, target);
        let result = compute(strategy, &params, &items).unwrap();
        prop_assert_eq!(result.row_count, 1);
        prop_assert!(result.total_height.is_finite());
        for placement in &result.placements {
            prop_assert!(placement.height.is_finite() && placement.width.is_finite());
            prop_assert_eq!(placement.row_number, 1);
        }
    }

    #[test]
    fn extreme_dimensions_fail_cleanly_or_stay_finite(
        exponents in prop::collection::vec((-300i32..300, -300i32..300), 1..8),
        params in params_strategy(),
        strategy in layout_strategy(),
    ) {
        let items: Vec<Item> = exponents
            .iter()
            .map(|&(w, h)| Item::new(10f64.powi(w), 10f64.powi(h)))
            .collect();
        match compute(strategy, &params, &items) {
            Ok(result) => {
                for placement in &result.placements {
                    prop_assert!(placement.width.is_finite() && placement.height.is_finite());
                    prop_assert!(placement.left.is_finite());
                }
            }
            Err(err) => {
                prop_assert!(matches!(err, LayoutError::InvalidItem { .. }), "{err:?}");
            }
        }
    }
}
