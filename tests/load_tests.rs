// Integration tests for loading data files into each variant

use motorstock::constants::MAX_SIZE;
use motorstock::inventory::{Inventory, Variant};
use motorstock::loader::LoaderConfig;
use motorstock::LoadError;
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "MotorPH Inventory Data - March 2023\n\
                      Date Entered,Stock Label,Brand,Engine Number,Status\n";

fn data_file(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(HEADER.as_bytes()).expect("Failed to write header");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write line");
    }
    file
}

fn well_formed(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("2/{}/2023,Old,Honda,EN{:04},On-hand", i % 28 + 1, i))
        .collect()
}

#[test]
fn test_load_counts_well_formed_lines() {
    let file = data_file(&well_formed(12));
    for variant in Variant::ALL {
        let mut inventory = variant.build();
        assert_eq!(inventory.load(file.path()), 12, "{}", variant);
        assert_eq!(inventory.len(), 12, "{}", variant);
    }
}

#[test]
fn test_load_caps_bounded_array() {
    let file = data_file(&well_formed(MAX_SIZE + 30));
    for variant in Variant::ALL {
        let mut inventory = variant.build();
        let expected = match variant {
            Variant::Array => MAX_SIZE,
            _ => MAX_SIZE + 30,
        };
        assert_eq!(inventory.load(file.path()), expected, "{}", variant);
        assert_eq!(inventory.len(), expected, "{}", variant);
    }
}

#[test]
fn test_load_skips_malformed_lines() {
    let lines = vec![
        "1/1/2023,Old,Honda,EN001,On-hand".to_string(),
        "1/1/2023,Old,Honda".to_string(),
        String::new(),
        "1/2/2023,New,Yamaha,EN002,".to_string(),
        "1/3/2023,New,Yamaha,EN003,Sold,warehouse-2".to_string(),
    ];
    let file = data_file(&lines);

    for variant in Variant::ALL {
        let mut inventory = variant.build();
        assert_eq!(inventory.load(file.path()), 2, "{}", variant);
        assert!(inventory.search_by_engine_number("EN003").is_some());
        assert!(inventory.search_by_engine_number("EN002").is_none());
    }
}

#[test]
fn test_stack_load_puts_last_record_on_top() {
    let file = data_file(&well_formed(3));
    let mut inventory = Variant::Stack.build();
    inventory.load(file.path());

    let top = inventory.iter().next().map(|i| i.engine_number().to_string());
    assert_eq!(top, Some("EN0002".to_string()));
}

#[test]
fn test_missing_file_loads_nothing() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("does-not-exist.csv");

    for variant in Variant::ALL {
        let mut inventory = variant.build();
        assert_eq!(inventory.load(&path), 0, "{}", variant);
        assert!(inventory.is_empty());

        match inventory.try_load(&path) {
            Err(LoadError::Open { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected open error, got {:?}", other),
        }
    }
}

#[test]
fn test_load_appends_to_existing_contents() {
    let file = data_file(&well_formed(3));
    let mut inventory = Variant::LinkedList.build();
    assert_eq!(inventory.load(file.path()), 3);
    assert_eq!(inventory.load(file.path()), 3);
    assert_eq!(inventory.len(), 6);
}

#[test]
fn test_load_with_custom_config() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "1/1/2023;Old;Honda;EN001;On-hand").expect("write");
    writeln!(file, "1/2/2023;New;Kymco;EN002;Sold").expect("write");

    let config = LoaderConfig::default()
        .with_header_lines(0)
        .with_delimiter(';');
    let mut inventory = Variant::Queue.build();
    let loaded = inventory
        .try_load_with(file.path(), &config)
        .expect("load should succeed");
    assert_eq!(loaded, 2);
    assert_eq!(inventory.count_by_brand("kymco"), 1);
}

#[test]
fn test_header_only_file() {
    let file = data_file(&[]);
    let mut inventory = Variant::DynamicArray.build();
    assert_eq!(inventory.try_load(file.path()).ok(), Some(0));
}

#[test]
fn test_invalid_utf8_line_does_not_abort_load() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(HEADER.as_bytes()).expect("Failed to write header");
    file.write_all(b"2/1/2023,Old,Honda,EN001,On-hand\n").expect("write");
    file.write_all(b"2/1/2023,New,Yamaha,EN\xff02,Sold\n").expect("write");
    file.write_all(b"2/1/2023,Old,Kymco,EN003,On-hand\n").expect("write");

    for variant in Variant::ALL {
        let mut inventory = variant.build();
        let loaded = inventory
            .try_load(file.path())
            .expect("load should succeed");
        assert_eq!(loaded, 3, "{}", variant);
        assert!(inventory.search_by_engine_number("EN001").is_some());
        assert!(inventory.search_by_engine_number("EN003").is_some());
        assert_eq!(inventory.count_by_brand("yamaha"), 1);
    }
}
