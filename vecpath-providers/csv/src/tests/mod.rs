pub(crate) use super::{CsvGraphError, CsvGraphErrorCode, CsvGraphLoader};

mod parse;
