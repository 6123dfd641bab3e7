use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::DataError;

use super::model::{Penguin, PenguinDataset};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset from a CSV file on disk.
///
/// The header must name every column of [`Penguin`]; `NA` or empty cells in
/// the measurement and `sex` columns become missing values.
pub fn load_file(path: &Path) -> Result<PenguinDataset, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file)
}

/// Parse CSV records from any reader.
pub fn load_reader<R: Read>(reader: R) -> Result<PenguinDataset, DataError> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for (i, result) in reader.deserialize::<Penguin>().enumerate() {
        let penguin = result.map_err(|source| DataError::Row { row: i + 1, source })?;
        rows.push(penguin);
    }

    if rows.is_empty() {
        return Err(DataError::Empty);
    }

    Ok(PenguinDataset::new(rows))
}
