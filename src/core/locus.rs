use std::collections::HashMap;

use tracing::debug;

use crate::parsing::presence_absence::{PresenceAbsenceTable, GENE_COLUMN};
use crate::parsing::ParseError;

/// Gene identifier -> species-representative locus tag.
pub type GeneToLocus = HashMap<String, String>;

/// First locus tag of a `;`-separated presence/absence cell.
///
/// Returns `None` for empty cells and for the textual missing value `nan`.
#[must_use]
pub fn first_locus_tag(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("nan") {
        return None;
    }

    let tag = value.split(';').next().unwrap_or_default().trim();
    if tag.is_empty() || tag.eq_ignore_ascii_case("nan") {
        None
    } else {
        Some(tag)
    }
}

/// Map each gene of the table to the first locus tag in `rep_column`.
///
/// Rows without a usable tag are left out of the map.
///
/// # Errors
///
/// Returns `ParseError::NotFound` if the table has no `Gene` column or no
/// column named `rep_column`.
pub fn build_gene_to_locus(
    table: &PresenceAbsenceTable,
    rep_column: &str,
) -> Result<GeneToLocus, ParseError> {
    let gene_idx = table.column_index(GENE_COLUMN).ok_or_else(|| {
        ParseError::NotFound(format!(
            "No '{GENE_COLUMN}' column in gene_presence_absence table"
        ))
    })?;
    let rep_idx = table.column_index(rep_column).ok_or_else(|| {
        ParseError::NotFound(format!(
            "No '{rep_column}' column in gene_presence_absence table"
        ))
    })?;

    let mut mapping = GeneToLocus::new();
    for row in 0..table.rows.len() {
        if let Some(tag) = first_locus_tag(table.cell(row, rep_idx)) {
            mapping.insert(table.cell(row, gene_idx).to_string(), tag.to_string());
        }
    }

    debug!(
        "{} of {} genes have a locus tag in '{rep_column}'",
        mapping.len(),
        table.rows.len()
    );
    Ok(mapping)
}
