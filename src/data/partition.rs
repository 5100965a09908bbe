use super::model::{
    DataError, NumericTable, Partition, Series, METRIC, REQUIRED_COLUMNS, SELECTOR, WIDTH,
};

/// Indices of rows whose selector column equals `partition`'s selector,
/// in file order. Rows with any other selector value are ignored.
pub fn partition_rows(table: &NumericTable, partition: Partition) -> Vec<usize> {
    let selector = partition.selector();
    table
        .rows()
        .enumerate()
        .filter(|(_, row)| row[SELECTOR] == selector)
        .map(|(i, _)| i)
        .collect()
}

/// Compute `(width, baseline_metric / variant_metric)` per baseline row.
///
/// Rows are matched by position inside their partition, not by width:
/// the i-th baseline row is divided by the i-th variant row. Division by
/// zero follows IEEE rules and is not an error.
pub fn degradation_ratio(table: &NumericTable) -> Result<Vec<[f64; 2]>, DataError> {
    if table.n_cols() < REQUIRED_COLUMNS {
        return Err(DataError::TooFewColumns {
            required: REQUIRED_COLUMNS,
            found: table.n_cols(),
        });
    }

    let baseline = partition_rows(table, Partition::Baseline);
    let variant = partition_rows(table, Partition::Variant);

    if baseline.is_empty() {
        return Err(DataError::EmptyPartition(Partition::Baseline));
    }
    if variant.is_empty() {
        return Err(DataError::EmptyPartition(Partition::Variant));
    }
    if baseline.len() != variant.len() {
        return Err(DataError::ShapeMismatch {
            baseline: baseline.len(),
            variant: variant.len(),
        });
    }

    Ok(baseline
        .iter()
        .zip(variant.iter())
        .map(|(&b, &v)| {
            let width = table.get(b, WIDTH);
            [width, table.get(b, METRIC) / table.get(v, METRIC)]
        })
        .collect())
}

/// Build a labelled series from a loaded table.
pub fn build_series(label: impl Into<String>, table: &NumericTable) -> Result<Series, DataError> {
    Ok(Series {
        label: label.into(),
        points: degradation_ratio(table)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[[f64; 4]]) -> NumericTable {
        NumericTable::from_rows(rows.iter().map(|r| r.to_vec()).collect())
    }

    #[test]
    fn ratio_is_baseline_over_variant() {
        let t = table(&[
            [1.0, 256.0, 256.0, 4.0],
            [1.0, 512.0, 512.0, 10.0],
            [0.0, 256.0, 256.0, 2.0],
            [0.0, 512.0, 512.0, 5.0],
        ]);
        let points = degradation_ratio(&t).unwrap();
        assert_eq!(points, vec![[256.0, 0.5], [512.0, 0.5]]);
    }

    #[test]
    fn rows_are_matched_by_position_not_width() {
        // Variant rows are in reverse width order; the ratio still pairs
        // the first baseline row with the first variant row.
        let t = table(&[
            [0.0, 1.0, 0.0, 6.0],
            [0.0, 2.0, 0.0, 8.0],
            [1.0, 2.0, 0.0, 2.0],
            [1.0, 1.0, 0.0, 4.0],
        ]);
        let points = degradation_ratio(&t).unwrap();
        assert_eq!(points, vec![[1.0, 3.0], [2.0, 2.0]]);
    }

    #[test]
    fn other_selector_values_are_ignored() {
        let t = table(&[
            [0.0, 1.0, 0.0, 3.0],
            [2.0, 1.0, 0.0, 100.0],
            [1.0, 1.0, 0.0, 1.5],
        ]);
        assert_eq!(partition_rows(&t, Partition::Baseline), vec![0]);
        assert_eq!(partition_rows(&t, Partition::Variant), vec![2]);
        assert_eq!(degradation_ratio(&t).unwrap(), vec![[1.0, 2.0]]);
    }

    #[test]
    fn missing_variant_rows_fail() {
        let t = table(&[[0.0, 1.0, 0.0, 3.0], [0.0, 2.0, 0.0, 3.0]]);
        assert_eq!(
            degradation_ratio(&t),
            Err(DataError::EmptyPartition(Partition::Variant))
        );
    }

    #[test]
    fn missing_baseline_rows_fail() {
        let t = table(&[[1.0, 1.0, 0.0, 3.0]]);
        assert_eq!(
            degradation_ratio(&t),
            Err(DataError::EmptyPartition(Partition::Baseline))
        );
    }

    #[test]
    fn unequal_partitions_fail() {
        let t = table(&[
            [0.0, 1.0, 0.0, 3.0],
            [0.0, 2.0, 0.0, 3.0],
            [1.0, 1.0, 0.0, 3.0],
        ]);
        assert_eq!(
            degradation_ratio(&t),
            Err(DataError::ShapeMismatch {
                baseline: 2,
                variant: 1
            })
        );
    }

    #[test]
    fn narrow_and_empty_tables_fail() {
        let narrow = NumericTable::from_rows(vec![vec![0.0, 1.0, 2.0], vec![1.0, 1.0, 2.0]]);
        assert_eq!(
            degradation_ratio(&narrow),
            Err(DataError::TooFewColumns {
                required: 4,
                found: 3
            })
        );

        let empty = NumericTable::from_rows(Vec::new());
        assert!(matches!(
            degradation_ratio(&empty),
            Err(DataError::TooFewColumns { found: 0, .. })
        ));
    }

    #[test]
    fn zero_variant_metric_gives_infinity() {
        let t = table(&[[0.0, 1.0, 0.0, 1.0], [1.0, 1.0, 0.0, 0.0]]);
        let points = degradation_ratio(&t).unwrap();
        assert!(points[0][1].is_infinite());
    }

    #[test]
    fn series_carries_label() {
        let t = table(&[[0.0, 8.0, 0.0, 1.0], [1.0, 8.0, 0.0, 2.0]]);
        let series = build_series("run.txt", &t).unwrap();
        assert_eq!(series.label, "run.txt");
        assert_eq!(series.points, vec![[8.0, 0.5]]);
    }
}
