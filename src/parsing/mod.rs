//! Parsers for the pan-genome inputs.
//!
//! This module provides parsers for:
//!
//! - **Presence/absence tables**: Panaroo/Roary `gene_presence_absence` tables
//!   (`.csv`, `_roary.csv` or `.tsv`) carrying locus tags per genome
//! - **Rtab matrices**: the binary gene × genome `gene_presence_absence.Rtab`
//! - **FASTA files**: the species-representative `.ffn`, indexed by locus tag
//!
//! ## Example
//!
//! ```rust,no_run
//! use speciesrep_classes::parsing::presence_absence::{find_speciesrep_column, read_presence_absence_table};
//! use speciesrep_classes::parsing::rtab::read_rtab;
//! use std::path::Path;
//!
//! let dir = Path::new("panaroo_out");
//! let (table, path) = read_presence_absence_table(dir).unwrap();
//! let column = find_speciesrep_column(&table).unwrap();
//! let rtab = read_rtab(dir).unwrap();
//! println!("{}: {} genes, column {column}", path.display(), rtab.rows.len());
//! ```

use thiserror::Error;

pub mod fasta;
pub mod presence_absence;
pub mod rtab;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Ambiguous input: {0}")]
    Ambiguous(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
