mod csv_import;

pub use csv_import::{CsvImporter, CsvProfile};
pub(crate) use csv_import::parse_decimal;
