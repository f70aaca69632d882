// Constants for the inventory collections and the data-file format

/// Capacity of the bounded array variant
pub const MAX_SIZE: usize = 100;

/// Number of header/metadata lines at the top of every data file
pub const HEADER_LINES: usize = 2;

/// Field separator used by the data file
pub const FIELD_DELIMITER: char = ',';

/// Lines with fewer fields than this are skipped
pub const MIN_FIELDS: usize = 5;

/// Status of a record still in stock
pub const STATUS_ON_HAND: &str = "On-hand";

/// Status of a record that has left the inventory
pub const STATUS_SOLD: &str = "Sold";

/// Stock label for older stock
pub const STOCK_OLD: &str = "Old";

/// Stock label for newer stock
pub const STOCK_NEW: &str = "New";

/// Brands reported by the bounded array's distribution summary, in report order
pub const TRACKED_BRANDS: [&str; 5] = ["Honda", "Yamaha", "Suzuki", "Kawasaki", "Kymco"];

/// Conventional location of the March 2023 inventory export
pub const DEFAULT_DATA_PATH: &str = "csv/MotorPH Inventory Data - March 2023 Inventory Data.csv";

/// Width of the `=` rule drawn under listing headers
pub const RULE_WIDTH: usize = 80;
