//! Integration tests for dataset loading.

use std::fs;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tempfile::TempDir;

use dupview_ingest::{CsvOptions, IngestError, dataset_from_frame, load_dataset};
use dupview_model::AttrValue;

const PIZZA_CSV: &str = "\u{feff}size,noOfToppings,toppings
small,1,pepperoni
small,2,pepperoni;mushroom
large,2,sausage; red pepper
medium,,
";

#[test]
fn loads_csv_with_lists_and_blanks() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pizzas.csv");
    fs::write(&path, PIZZA_CSV).unwrap();

    let dataset = load_dataset(&path, &CsvOptions::default()).unwrap();
    assert_eq!(dataset.name, "pizzas");
    assert_eq!(dataset.columns, vec!["size", "noOfToppings", "toppings"]);
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.records[0].get("noOfToppings"), Some(&AttrValue::from(1)));
    assert_eq!(
        dataset.records[2].get("toppings"),
        Some(&AttrValue::from(vec!["sausage", "red pepper"]))
    );
    assert_eq!(dataset.records[3].get("noOfToppings"), None);
    assert_eq!(dataset.records[3].get("toppings"), None);
}

#[test]
fn csv_name_and_delimiter_options() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("menu.csv");
    fs::write(&path, "size|toppings\nsmall|olive;ham\n").unwrap();

    let options = CsvOptions::default()
        .with_delimiter(b'|')
        .with_list_separator(None)
        .with_name("menu items");
    let dataset = load_dataset(&path, &options).unwrap();
    assert_eq!(dataset.name, "menu items");
    assert_eq!(
        dataset.records[0].get("toppings"),
        Some(&AttrValue::from("olive;ham"))
    );
}

#[test]
fn loads_json_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pizzas.json");
    fs::write(
        &path,
        r#"[
            {"size": "small", "noOfToppings": 1, "toppings": ["pepperoni"]},
            {"size": "large", "noOfToppings": 2, "toppings": ["sausage", "red pepper"]}
        ]"#,
    )
    .unwrap();

    let dataset = load_dataset(&path, &CsvOptions::default()).unwrap();
    assert_eq!(dataset.columns, vec!["size", "noOfToppings", "toppings"]);
    assert_eq!(dataset.records[1].display_value("toppings"), "sausage,red pepper");
}

#[test]
fn reports_load_failures() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("missing.csv");
    assert!(matches!(
        load_dataset(&missing, &CsvOptions::default()),
        Err(IngestError::FileRead { .. })
    ));

    let empty = dir.path().join("empty.csv");
    fs::write(&empty, "").unwrap();
    assert!(matches!(
        load_dataset(&empty, &CsvOptions::default()),
        Err(IngestError::EmptyCsv { .. })
    ));

    let layout = dir.path().join("object.json");
    fs::write(&layout, r#"{"size": "small"}"#).unwrap();
    assert!(matches!(
        load_dataset(&layout, &CsvOptions::default()),
        Err(IngestError::JsonLayout { .. })
    ));

    let other = dir.path().join("pizzas.xlsx");
    fs::write(&other, "").unwrap();
    assert!(matches!(
        load_dataset(&other, &CsvOptions::default()),
        Err(IngestError::UnsupportedFormat { .. })
    ));

    let duplicate = dir.path().join("dup.csv");
    fs::write(&duplicate, "size,size\nsmall,large\n").unwrap();
    assert!(matches!(
        load_dataset(&duplicate, &CsvOptions::default()),
        Err(IngestError::Model(_))
    ));
}

fn test_df() -> DataFrame {
    let columns: Vec<Column> = vec![
        Series::new("size".into(), vec!["small", "large"]).into_column(),
        Series::new("noOfToppings".into(), vec![1i64, 2]).into_column(),
        Series::new("color".into(), vec![Some("red"), None]).into_column(),
        Series::new("price".into(), vec![9.5f64, 12.0]).into_column(),
    ];
    DataFrame::new(columns).unwrap()
}

#[test]
fn converts_data_frames() {
    let dataset = dataset_from_frame("frame", &test_df()).unwrap();
    assert_eq!(dataset.columns, vec!["size", "noOfToppings", "color", "price"]);
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.records[0].get("noOfToppings"), Some(&AttrValue::from(1)));
    assert_eq!(dataset.records[0].get("color"), Some(&AttrValue::from("red")));
    assert_eq!(dataset.records[1].get("color"), None);
    assert_eq!(dataset.records[1].get("price"), Some(&AttrValue::from("12")));
}
