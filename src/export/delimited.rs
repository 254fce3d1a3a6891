//! CSV export and import of traces.
//!
//! One header row ([`Method::columns`]) followed by one row per record, the 
//! 0-based iteration index first. Floats are written in their shortest 
//! round-trip form.

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::debug;

use super::errors::ExportError;
use crate::root_finding::algorithms::Method;
use crate::root_finding::report::Trace;


/// Writes `trace` as CSV to `writer`.
pub fn write_csv<W: io::Write>(trace: &Trace, writer: W) -> Result<(), ExportError> { 
    let mut wtr = csv::Writer::from_writer(writer); 
    wtr.write_record(trace.method().columns())?; 

    for (i, row) in trace.rows().iter().enumerate() { 
        let fields = std::iter::once(i.to_string()).chain(row.iter().map(f64::to_string)); 
        wtr.write_record(fields)?; 
    }

    wtr.flush()?; 
    Ok(())
}

/// Writes `trace` as CSV to the file at `path`, creating or truncating it.
pub fn export_csv<P: AsRef<Path>>(trace: &Trace, path: P) -> Result<(), ExportError> { 
    let path = path.as_ref(); 
    let file = File::create(path)?; 
    write_csv(trace, io::BufWriter::new(file))?; 
    debug!(path = %path.display(), method = %trace.method(), rows = trace.len(), "trace exported");
    Ok(())
}

/// Like [`export_csv`], with the method given as a string tag 
/// (`bisection`, `muller`, `regula`).
///
/// # Errors 
/// ├ [`ExportError::UnsupportedMethod`] - unknown tag 
/// └ [`ExportError::MethodMismatch`]    - tag names another method than the trace's 
///
/// Both are checked before the file is created.
pub fn export_csv_as<P: AsRef<Path>>(trace: &Trace, tag: &str, path: P) -> Result<(), ExportError> { 
    let requested: Method = tag.parse()?; 
    let actual = trace.method(); 
    if requested != actual { 
        return Err(ExportError::MethodMismatch { requested, actual }); 
    }
    export_csv(trace, path)
}


/// A parsed CSV trace.
/// - `headers` : header row 
/// - `rows`    : numeric rows, iteration index included as the first value 
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedTable { 
    pub headers : Vec<String>, 
    pub rows    : Vec<Vec<f64>>, 
}

impl ExportedTable { 
    /// Method whose schema matches the header row, if any.
    pub fn method(&self) -> Option<Method> { 
        Method::ALL
            .into_iter()
            .find(|m| m.columns().iter().eq(self.headers.iter()))
    }
}

/// Reads a CSV trace written by [`write_csv`].
///
/// # Errors 
/// └ [`ExportError::InvalidRow`] - a field is not a number (row numbers are 1-based, 
///                                 the header excluded)
pub fn read_csv<R: io::Read>(reader: R) -> Result<ExportedTable, ExportError> { 
    let mut rdr = csv::Reader::from_reader(reader); 
    let headers = rdr.headers()?.iter().map(str::to_string).collect(); 

    let mut rows = Vec::new(); 
    for (idx, result) in rdr.records().enumerate() { 
        let record = result?; 
        let row = record
            .iter()
            .map(|field| field.trim().parse::<f64>().map_err(|e| ExportError::InvalidRow { 
                row: idx + 1, 
                message: format!("`{field}`: {e}"), 
            }))
            .collect::<Result<Vec<f64>, _>>()?; 
        rows.push(row); 
    }

    Ok(ExportedTable { headers, rows })
}
