//! Console rendering of traces as fixed-width columns.

use std::fmt;

use crate::root_finding::report::Trace;

const INDEX_WIDTH: usize = 9;
const VALUE_WIDTH: usize = 15;

impl fmt::Display for Trace { 
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { 
        let (index_header, value_headers) = match self.method().columns().split_first() { 
            Some(split) => split, 
            None        => return Ok(()), 
        };

        write!(f, "{index_header:>INDEX_WIDTH$}")?; 
        for h in value_headers { 
            write!(f, " {h:>VALUE_WIDTH$}")?; 
        }
        writeln!(f)?; 

        for (i, row) in self.rows().iter().enumerate() { 
            write!(f, "{i:>INDEX_WIDTH$}")?; 
            for v in row { 
                write!(f, " {v:>VALUE_WIDTH$.6e}")?; 
            }
            writeln!(f)?; 
        }
        Ok(())
    }
}

impl Trace { 
    /// The table as printed by `Display`.
    pub fn to_table(&self) -> String { 
        self.to_string()
    }
}
