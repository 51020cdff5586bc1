//! Parser for Panaroo/Roary `gene_presence_absence` tables.
//!
//! The table has one row per gene cluster. Besides the `Gene` column and a
//! handful of annotation columns it has one column per genome, whose cells
//! hold the `;`-separated locus tags of that genome's members of the cluster.
//! Exactly one genome is the species representative; its column name carries
//! the [`SPECIESREP_MARKER`].

use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::parsing::ParseError;

/// Candidate table file names, in lookup order, with their field delimiter.
pub const PRESENCE_ABSENCE_CANDIDATES: [(&str, u8); 3] = [
    ("gene_presence_absence.csv", b','),
    ("gene_presence_absence_roary.csv", b','),
    ("gene_presence_absence.tsv", b'\t'),
];

/// Substring identifying the species-representative genome column.
pub const SPECIESREP_MARKER: &str = ".speciesrep";

/// Name of the gene identifier column.
pub const GENE_COLUMN: &str = "Gene";

/// A parsed presence/absence table: column names plus rows of cells in column order.
#[derive(Debug, Clone, Default)]
pub struct PresenceAbsenceTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PresenceAbsenceTable {
    /// Index of the first column named exactly `name`.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (`row`, `column`); missing trailing cells read as empty.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }
}

/// Locate and parse the presence/absence table in `dir`.
///
/// The first existing file from [`PRESENCE_ABSENCE_CANDIDATES`] is used.
///
/// # Errors
///
/// Returns `ParseError::NotFound` if none of the candidates exist, or
/// `ParseError::Io`/`ParseError::Csv` if the chosen file cannot be parsed.
pub fn read_presence_absence_table(
    dir: &Path,
) -> Result<(PresenceAbsenceTable, PathBuf), ParseError> {
    for (name, delimiter) in PRESENCE_ABSENCE_CANDIDATES {
        let path = dir.join(name);
        if path.is_file() {
            let table = parse_presence_absence_file(&path, delimiter)?;
            debug!(
                "Read {} rows x {} columns from {}",
                table.rows.len(),
                table.columns.len(),
                path.display()
            );
            return Ok((table, path));
        }
    }

    let checked: Vec<&str> = PRESENCE_ABSENCE_CANDIDATES
        .iter()
        .map(|(name, _)| *name)
        .collect();
    Err(ParseError::NotFound(format!(
        "No gene_presence_absence file found in {}. Checked: {}",
        dir.display(),
        checked.join(", ")
    )))
}

/// Parse a delimited presence/absence file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened, or `ParseError::Csv`
/// if the content is not valid delimited text.
pub fn parse_presence_absence_file(
    path: &Path,
    delimiter: u8,
) -> Result<PresenceAbsenceTable, ParseError> {
    let file = std::fs::File::open(path)?;
    parse_presence_absence_reader(file, delimiter)
}

/// Parse delimited presence/absence text.
///
/// # Errors
///
/// Returns `ParseError::Csv` if the content is not valid delimited text.
pub fn parse_presence_absence_text(
    text: &str,
    delimiter: u8,
) -> Result<PresenceAbsenceTable, ParseError> {
    parse_presence_absence_reader(text.as_bytes(), delimiter)
}

fn parse_presence_absence_reader<R: Read>(
    reader: R,
    delimiter: u8,
) -> Result<PresenceAbsenceTable, ParseError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(PresenceAbsenceTable { columns, rows })
}

/// Find the species-representative column: the first column whose name
/// contains [`SPECIESREP_MARKER`].
///
/// # Errors
///
/// Returns `ParseError::NotFound` if no column name contains the marker.
pub fn find_speciesrep_column(table: &PresenceAbsenceTable) -> Result<String, ParseError> {
    let matches: Vec<&String> = table
        .columns
        .iter()
        .filter(|c| c.contains(SPECIESREP_MARKER))
        .collect();

    match matches.as_slice() {
        [] => Err(ParseError::NotFound(
            "No speciesrep column found in gene_presence_absence table".to_string(),
        )),
        [only] => Ok((*only).clone()),
        [first, ..] => {
            let names: Vec<&str> = matches.iter().map(|c| c.as_str()).collect();
            warn!(
                "Multiple speciesrep columns found ({}); using '{first}'",
                names.join(", ")
            );
            Ok((*first).clone())
        }
    }
}
