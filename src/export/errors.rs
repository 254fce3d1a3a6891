//! Export error types.

use thiserror::Error; 

use crate::root_finding::algorithms::Method; 
use crate::root_finding::errors::AlgorithmError; 


/// Errors that can occur while writing or reading an exported trace.
#[derive(Debug, Error)]
pub enum ExportError { 
    #[error(transparent)]
    UnsupportedMethod(#[from] AlgorithmError), 

    #[error("method tag `{requested}` does not match the trace, which was produced by {actual}")]
    MethodMismatch { requested: Method, actual: Method }, 

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error), 

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error), 

    #[error("invalid row {row}: {message}")]
    InvalidRow { row: usize, message: String }, 
}
