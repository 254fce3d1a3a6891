//! Export of root-finding traces.
//!
//! ┌ [`delimited`] : CSV writer and reader 
//! └ [`table`]     : fixed-width console table 
//!
//! Both pick their column schema from the trace's [`crate::root_finding::algorithms::Method`].

pub mod errors; 
pub mod delimited; 
pub mod table; 

pub use delimited::{export_csv, export_csv_as, read_csv, write_csv, ExportedTable}; 
pub use errors::ExportError; 
