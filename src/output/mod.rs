//! Output writers: the per-class FASTA files and the run summary.

pub mod fasta;
pub mod report;
