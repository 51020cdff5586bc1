//! Writer for the per-class FASTA files.
//!
//! Each record is `>{gene}|{locus}` followed by the species-representative
//! sequence wrapped at [`LINE_WIDTH`] bases per line.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use noodles::fasta;
use noodles::fasta::record::{Definition, Sequence};
use serde::Serialize;

use crate::core::locus::GeneToLocus;
use crate::parsing::fasta::SequenceIndex;

/// Bases per sequence line.
pub const LINE_WIDTH: usize = 80;

/// Per-class write outcome.
///
/// `missing` counts genes whose locus tag has no (or an empty) sequence in the
/// index. `unmapped` counts genes without any locus tag; these are never
/// reported alongside `written`/`missing` in the console output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WriteCounts {
    pub written: usize,
    pub missing: usize,
    pub unmapped: usize,
}

/// Write one class FASTA to `path`, truncating any existing file.
///
/// Genes are written in the set's (lexicographic) order.
///
/// # Errors
///
/// Returns an IO error if the file cannot be created or written.
pub fn write_class_fasta(
    path: &Path,
    genes: &BTreeSet<String>,
    gene_to_locus: &GeneToLocus,
    sequences: &SequenceIndex,
) -> io::Result<WriteCounts> {
    let mut out = BufWriter::new(File::create(path)?);
    let counts = write_class_records(&mut out, genes, gene_to_locus, sequences)?;
    out.flush()?;
    Ok(counts)
}

/// Write class records to any writer.
///
/// # Errors
///
/// Returns an IO error if writing fails.
pub fn write_class_records<W: Write>(
    out: W,
    genes: &BTreeSet<String>,
    gene_to_locus: &GeneToLocus,
    sequences: &SequenceIndex,
) -> io::Result<WriteCounts> {
    let mut writer = fasta::io::writer::Builder::default()
        .set_line_base_count(LINE_WIDTH)
        .build_from_writer(out);

    let mut counts = WriteCounts::default();
    for gene in genes {
        let Some(locus) = gene_to_locus.get(gene) else {
            counts.unmapped += 1;
            continue;
        };

        let Some(sequence) = sequences.get(locus).filter(|s| !s.is_empty()) else {
            counts.missing += 1;
            continue;
        };

        let record = fasta::Record::new(
            Definition::new(format!("{gene}|{locus}"), None),
            Sequence::from(sequence.as_bytes().to_vec()),
        );
        writer.write_record(&record)?;
        counts.written += 1;
    }

    Ok(counts)
}
