//! # speciesrep-classes
//!
//! A library for building frequency-class FASTAs from a pan-genome.
//!
//! Pan-genome tools such as Panaroo and Roary report, for every gene cluster,
//! which genomes carry it (`gene_presence_absence.Rtab`) and under which
//! locus tags (`gene_presence_absence.csv`). `speciesrep-classes` buckets the
//! clusters by presence fraction into core, soft-core, shell and cloud, and
//! writes one FASTA per class using sequences from a single designated
//! species-representative genome.
//!
//! ## Pipeline
//!
//! 1. Locate and parse the presence/absence table and its `.speciesrep` column
//! 2. Parse the Rtab matrix and classify each gene by presence fraction
//! 3. Resolve and index the representative `.ffn` by locus tag
//! 4. Join genes to locus tags and write the wrapped class FASTAs
//!
//! Structural problems (a missing file, an absent column, an ambiguous
//! `.ffn`) abort the run. Per-gene misses (no locus tag, no sequence) are
//! skipped and counted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use speciesrep_classes::parsing::rtab::parse_rtab_text;
//! use speciesrep_classes::{classify_genes, GeneClass};
//!
//! let rtab = parse_rtab_text("Gene\tg1\tg2\ngroup_1\t1\t1\ngroup_2\t0\t1\n").unwrap();
//! let classes = classify_genes(&rtab);
//!
//! assert_eq!(classes.class_of("group_1"), Some(GeneClass::Core));
//! assert_eq!(classes.class_of("group_2"), Some(GeneClass::Shell));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Gene classes, classification and the gene-to-locus join
//! - [`parsing`]: Parsers for presence/absence tables, Rtab and FASTA files
//! - [`output`]: Class FASTA writer and run summary
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod output;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::classify::{classify_genes, Classification};
pub use crate::core::locus::{build_gene_to_locus, GeneToLocus};
pub use crate::core::types::GeneClass;
pub use output::fasta::{write_class_fasta, WriteCounts};
pub use parsing::fasta::SequenceIndex;
pub use parsing::ParseError;
