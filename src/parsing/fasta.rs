//! FASTA indexing for the species-representative nucleotide file (`.ffn`).
//!
//! Records are read with noodles and indexed by name (the header text up to
//! the first whitespace). Sequences are kept verbatim: no case folding and
//! no alphabet validation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use noodles::fasta;
use tracing::{debug, warn};

use crate::parsing::ParseError;

/// Extension required for a directly supplied sequence file.
pub const FFN_EXTENSION: &str = ".ffn";

/// Suffix of the species-representative `.ffn` when searching a directory.
pub const SPECIESREP_FFN_SUFFIX: &str = ".speciesrep.ffn";

/// Locus tag -> nucleotide sequence.
pub type SequenceIndex = HashMap<String, String>;

/// Resolve the species-representative `.ffn` from a file or directory path.
///
/// A file is used as-is provided its name ends in [`FFN_EXTENSION`]. A
/// directory is searched with [`find_speciesrep_ffn`].
///
/// # Errors
///
/// Returns `ParseError::NotFound` if the path does not exist,
/// `ParseError::TypeMismatch` for a file without the `.ffn` extension, or
/// the errors of [`find_speciesrep_ffn`] for a directory.
pub fn resolve_speciesrep_ffn(path: &Path) -> Result<PathBuf, ParseError> {
    if path.is_file() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !name.ends_with(FFN_EXTENSION) {
            return Err(ParseError::TypeMismatch(format!(
                "Expected a {FFN_EXTENSION} file, got: {}",
                path.display()
            )));
        }
        return Ok(path.to_path_buf());
    }

    if path.is_dir() {
        return find_speciesrep_ffn(path);
    }

    Err(ParseError::NotFound(format!("{} does not exist", path.display())))
}

/// Find the single `*.speciesrep.ffn` directly inside `dir` (not recursive).
///
/// Hidden entries count too, so a stray `._ref.speciesrep.ffn` makes the
/// lookup ambiguous rather than being ignored.
///
/// # Errors
///
/// Returns `ParseError::NotFound` if nothing matches, `ParseError::Ambiguous`
/// (listing every match) if more than one file matches, or `ParseError::Io`
/// if the directory cannot be read.
pub fn find_speciesrep_ffn(dir: &Path) -> Result<PathBuf, ParseError> {
    let mut matches = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(SPECIESREP_FFN_SUFFIX) {
            matches.push(entry.path());
        }
    }
    matches.sort();

    match matches.len() {
        0 => Err(ParseError::NotFound(format!(
            "No '*{SPECIESREP_FFN_SUFFIX}' found in {}",
            dir.display()
        ))),
        1 => Ok(matches.remove(0)),
        _ => {
            let names: Vec<String> = matches
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect();
            Err(ParseError::Ambiguous(format!(
                "Multiple '*{SPECIESREP_FFN_SUFFIX}' found in {}: {}",
                dir.display(),
                names.join(", ")
            )))
        }
    }
}

/// Parse a FASTA file into a name -> sequence index.
///
/// A file without any header line yields an empty index. When a name occurs
/// more than once the last record wins.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::Noodles` if a record is malformed.
pub fn parse_fasta_file(path: &Path) -> Result<SequenceIndex, ParseError> {
    let data = std::fs::read(path)?;
    let index = parse_fasta_bytes(&data)?;
    debug!("Indexed {} sequences from {}", index.len(), path.display());
    Ok(index)
}

/// Parse FASTA text into a name -> sequence index.
///
/// # Errors
///
/// Returns `ParseError::Noodles` if a record is malformed.
pub fn parse_fasta_text(text: &str) -> Result<SequenceIndex, ParseError> {
    parse_fasta_bytes(text.as_bytes())
}

fn parse_fasta_bytes(data: &[u8]) -> Result<SequenceIndex, ParseError> {
    let normalized = normalize_definitions(data);

    let mut fasta_reader = fasta::io::Reader::new(&normalized[..]);
    let mut index = SequenceIndex::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).into_owned();
        let sequence = String::from_utf8_lossy(record.sequence().as_ref()).into_owned();

        if index.insert(name.clone(), sequence).is_some() {
            warn!("Duplicate FASTA record '{name}'; keeping the last one");
        }
    }

    Ok(index)
}

/// Drop lines preceding the first `>` definition and strip blanks between
/// `>` and the name, so `>  LOCUS_1 x` is read as `LOCUS_1`.
fn normalize_definitions(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut in_records = false;

    for line in data.split_inclusive(|b| *b == b'\n') {
        if line.first() == Some(&b'>') {
            in_records = true;
            out.push(b'>');
            out.extend(
                line[1..]
                    .iter()
                    .skip_while(|b| matches!(**b, b' ' | b'\t' | b'\x0B' | b'\x0C')),
            );
        } else if in_records {
            out.extend_from_slice(line);
        }
    }

    out
}
