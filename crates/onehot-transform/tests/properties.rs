//! Property tests for the encoding invariants.

use std::collections::HashSet;

use polars::prelude::{DataFrame, NamedFrom, Series};
use proptest::prelude::{Strategy, prop, prop_assert, prop_assert_eq, proptest};

use onehot_transform::{Encoder, ValidationKind};

fn labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(0usize..6, 0..40)
        .prop_map(|codes| codes.into_iter().map(|code| format!("v{code}")).collect())
}

fn table(values: &[String]) -> DataFrame {
    let ids: Vec<i64> = (0..values.len() as i64).collect();
    DataFrame::new(vec![
        Series::new("row_id".into(), ids).into(),
        Series::new("col".into(), values.to_vec()).into(),
    ])
    .unwrap()
}

fn arity(values: &[String]) -> usize {
    values.iter().collect::<HashSet<_>>().len()
}

fn int_column(df: &DataFrame, name: &str) -> Vec<i64> {
    df.column(name)
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .map(|value| value.unwrap())
        .collect()
}

proptest! {
    #[test]
    fn binary_encode_preserves_shape_and_counts(values in labels()) {
        let df = table(&values);
        let mut encoder = Encoder::new(&df);
        match encoder.binary_encode("col") {
            Ok(encoded) => {
                prop_assert_eq!(arity(&values), 2);
                prop_assert_eq!(encoded.data.height(), df.height());
                prop_assert_eq!(encoded.data.width(), df.width());
                let indicator = int_column(&encoded.data, "one_hot_col");
                prop_assert!(indicator.iter().all(|&v| v == 0 || v == 1));
                let positive = &values[0];
                let expected = values.iter().filter(|v| *v == positive).count() as i64;
                prop_assert_eq!(indicator.iter().sum::<i64>(), expected);
                for (row, value) in values.iter().enumerate() {
                    prop_assert_eq!(indicator[row] == 1, value == positive);
                }
            }
            Err(err) => {
                prop_assert!(arity(&values) != 2);
                prop_assert_eq!(err.kind(), Some(ValidationKind::WrongArityBinary));
            }
        }
    }

    #[test]
    fn one_hot_indicators_partition_rows(values in labels()) {
        let df = table(&values);
        let mut encoder = Encoder::new(&df);
        let k = arity(&values);
        match encoder.one_hot_encode("col") {
            Ok(encoded) => {
                prop_assert!(k > 2);
                prop_assert_eq!(encoded.data.width(), df.width() - 1 + k);
                prop_assert_eq!(encoded.data.height(), df.height());
                let columns: Vec<Vec<i64>> = encoded
                    .indicators
                    .iter()
                    .map(|name| int_column(&encoded.data, name))
                    .collect();
                for (row, value) in values.iter().enumerate() {
                    let total: i64 = columns.iter().map(|column| column[row]).sum();
                    prop_assert_eq!(total, 1);
                    let hot = encoded
                        .indicators
                        .iter()
                        .zip(&columns)
                        .find(|(_, column)| column[row] == 1)
                        .map(|(name, _)| name.clone());
                    prop_assert_eq!(hot.as_ref(), Some(value));
                }
                prop_assert_eq!(int_column(&encoded.data, "row_id"), int_column(&df, "row_id"));
            }
            Err(err) => {
                prop_assert!(k <= 2);
                prop_assert_eq!(err.kind(), Some(ValidationKind::WrongArityOneHot));
            }
        }
    }

    #[test]
    fn encoding_never_mutates_source(values in labels()) {
        let df = table(&values);
        let before = df.clone();
        let mut encoder = Encoder::new(&df);
        let _ = encoder.binary_encode("col");
        let _ = encoder.one_hot_encode("col");
        prop_assert!(df.equals_missing(&before));
    }
}
