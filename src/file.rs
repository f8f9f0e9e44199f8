// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::error::{Result, ScrapeError};
use crate::store::{Cell, DataSet, Record};

/// Write `ds` as `<dir>/<file_name>`: comma separated, header row, no index.
/// Returns the final path written to.
pub fn write_dataset(dir: &Path, file_name: &str, ds: &DataSet) -> Result<PathBuf> {
    ensure_directory(dir)?;
    let path = dir.join(file_name);
    let file = fs::File::create(&path)?; // truncate/overwrite
    write_csv(file, ds)?;
    logf!("{} saved.", path.display());
    Ok(path)
}

/// Serialize to any writer.
pub fn write_csv<W: Write>(w: W, ds: &DataSet) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    if !ds.headers.is_empty() {
        wtr.write_record(&ds.headers)?;
    }
    for row in ds.to_rows() {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a file written by `write_dataset`. Every cell comes back as text.
pub fn read_dataset(path: &Path) -> Result<DataSet> {
    let mut rdr = csv::Reader::from_path(path)?;
    let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();
    let mut ds = DataSet::new(headers);
    for rec in rdr.records() {
        let rec = rec?;
        let row: Record = ds
            .headers
            .iter()
            .zip(rec.iter())
            .map(|(h, v)| (h.clone(), Cell::from(v)))
            .collect();
        ds.rows.push(row);
    }
    Ok(ds)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
