//! Integration tests for CSV reading and writing.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tempfile::TempDir;

use onehot_ingest::{read_csv_table, write_csv_string, write_csv_table};

#[test]
fn writes_and_reads_back_encoded_frame() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("encoded.csv");
    let mut df = DataFrame::new(vec![
        Series::new("id".into(), vec![1i64, 2, 3]).into(),
        Series::new("one_hot_pet".into(), vec![1i64, 0, 1]).into(),
    ])
    .unwrap();

    write_csv_table(&mut df, &path).expect("write csv");
    let read = read_csv_table(&path).expect("read csv");

    assert!(read.equals_missing(&df));
}

#[test]
fn empty_cells_read_as_nulls() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("gaps.csv");
    std::fs::write(&path, "id,colour\n1,red\n2,\n3,blue\n").expect("write file");

    let df = read_csv_table(&path).expect("read csv");

    let colour = df.column("colour").unwrap();
    assert_eq!(colour.null_count(), 1);
}

#[test]
fn csv_string_snapshot() {
    let mut df = DataFrame::new(vec![
        Series::new("id".into(), vec![1i64, 2]).into(),
        Series::new("red".into(), vec![1i64, 0]).into(),
        Series::new("green".into(), vec![0i64, 1]).into(),
    ])
    .unwrap();

    let text = write_csv_string(&mut df).expect("render csv");

    insta::assert_snapshot!(text, @r"
    id,red,green
    1,1,0
    2,0,1
    ");
}
