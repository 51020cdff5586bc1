//! Parser for the binary gene × genome `.Rtab` matrix.
//!
//! ```text
//! Gene	genomeA	genomeB	genomeC
//! groupA	1	1	0
//! groupB	0	0	1
//! ```

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::parsing::ParseError;

/// Fixed file name of the presence/absence matrix.
pub const RTAB_FILE_NAME: &str = "gene_presence_absence.Rtab";

/// One matrix row: the gene identifier and one presence flag per genome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtabRow {
    pub gene: String,
    pub present: Vec<bool>,
}

impl RtabRow {
    /// Number of genomes this gene is present in.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.present.iter().filter(|p| **p).count()
    }
}

/// Presence/absence matrix with genomes as columns.
#[derive(Debug, Clone, Default)]
pub struct RtabMatrix {
    pub genomes: Vec<String>,
    pub rows: Vec<RtabRow>,
}

/// Read `gene_presence_absence.Rtab` from `dir`.
///
/// # Errors
///
/// Returns `ParseError::NotFound` if the file does not exist, or
/// `ParseError::Io`/`ParseError::Csv` if it cannot be parsed.
pub fn read_rtab(dir: &Path) -> Result<RtabMatrix, ParseError> {
    let path = dir.join(RTAB_FILE_NAME);
    if !path.is_file() {
        return Err(ParseError::NotFound(format!("{} not found", path.display())));
    }

    let file = std::fs::File::open(&path)?;
    let matrix = parse_rtab_reader(file)?;
    debug!(
        "Read {} genes x {} genomes from {}",
        matrix.rows.len(),
        matrix.genomes.len(),
        path.display()
    );
    Ok(matrix)
}

/// Parse Rtab text.
///
/// # Errors
///
/// Returns `ParseError::Csv` if the content is not valid tab-delimited text.
pub fn parse_rtab_text(text: &str) -> Result<RtabMatrix, ParseError> {
    parse_rtab_reader(text.as_bytes())
}

fn parse_rtab_reader<R: Read>(reader: R) -> Result<RtabMatrix, ParseError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    // First header cell names the index column
    let genomes: Vec<String> = rdr.headers()?.iter().skip(1).map(str::to_string).collect();

    let mut rows = Vec::new();
    let mut seen = HashSet::new();
    for result in rdr.records() {
        let record = result?;
        let mut fields = record.iter();
        let gene = fields.next().unwrap_or_default().to_string();

        let mut present: Vec<bool> = fields.take(genomes.len()).map(is_present).collect();
        present.resize(genomes.len(), false);

        if !seen.insert(gene.clone()) {
            warn!("Duplicate gene '{gene}' in Rtab");
        }
        rows.push(RtabRow { gene, present });
    }

    Ok(RtabMatrix { genomes, rows })
}

/// A cell counts as present only when it is numerically equal to 1.
#[allow(clippy::float_cmp)] // Rtab cells are integer-valued
fn is_present(cell: &str) -> bool {
    cell.trim().parse::<f64>().is_ok_and(|v| v == 1.0)
}
