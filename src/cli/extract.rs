use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::core::classify::{classify_genes, Classification};
use crate::core::locus::{build_gene_to_locus, GeneToLocus};
use crate::core::types::GeneClass;
use crate::output::fasta::write_class_fasta;
use crate::output::report::{ClassReport, RunSummary};
use crate::parsing::fasta::{parse_fasta_file, resolve_speciesrep_ffn, SequenceIndex};
use crate::parsing::presence_absence::{find_speciesrep_column, read_presence_absence_table};
use crate::parsing::rtab::read_rtab;
use crate::parsing::ParseError;

#[derive(Args)]
pub struct ExtractArgs {
    /// Panaroo/Roary output directory holding gene_presence_absence.{csv,tsv} and .Rtab
    #[arg(required = true)]
    pub panaroo_dir: PathBuf,

    /// Species-representative .ffn, or a directory holding exactly one *.speciesrep.ffn
    #[arg(required = true)]
    pub speciesrep: PathBuf,

    /// Directory for the class FASTAs (defaults to the Panaroo directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Execute the class extraction pipeline
///
/// # Errors
///
/// Returns an error if any input cannot be located or parsed, or if an
/// output file cannot be written.
pub fn run(args: &ExtractArgs, format: OutputFormat) -> anyhow::Result<()> {
    let (table, table_path) = read_presence_absence_table(&args.panaroo_dir)?;
    let rep_column = find_speciesrep_column(&table)?;
    let rtab = read_rtab(&args.panaroo_dir)?;
    let classification = classify_genes(&rtab);

    let ffn = resolve_speciesrep_ffn(&args.speciesrep)?;
    let sequences = parse_fasta_file(&ffn)?;
    let gene_to_locus = build_gene_to_locus(&table, &rep_column)?;

    let output_dir = args
        .output_dir
        .as_deref()
        .unwrap_or(args.panaroo_dir.as_path());
    if !output_dir.is_dir() {
        return Err(ParseError::NotFound(format!(
            "Output directory {} does not exist",
            output_dir.display()
        ))
        .into());
    }

    if format == OutputFormat::Text {
        println!("Presence/absence table: {}", table_path.display());
        println!("Representative column: {rep_column}");
        println!("Representative FFN: {}", ffn.display());
    }

    let mut reports = Vec::with_capacity(GeneClass::ALL.len());
    for class in GeneClass::ALL {
        let report = write_class(output_dir, class, &classification, &gene_to_locus, &sequences)?;
        if format == OutputFormat::Text {
            for line in report.text_lines() {
                println!("{line}");
            }
        }
        reports.push(report);
    }

    let summary = RunSummary {
        presence_absence_table: table_path,
        representative_column: rep_column,
        representative_ffn: ffn,
        genomes: rtab.genomes.len(),
        classes: reports,
    };

    match format {
        OutputFormat::Text => {}
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Tsv => print!("{}", summary.to_tsv()),
    }

    Ok(())
}

fn write_class(
    output_dir: &Path,
    class: GeneClass,
    classification: &Classification,
    gene_to_locus: &GeneToLocus,
    sequences: &SequenceIndex,
) -> anyhow::Result<ClassReport> {
    let path = output_dir.join(class.fasta_file_name());
    let genes = classification.genes(class);

    let counts = write_class_fasta(&path, genes, gene_to_locus, sequences)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    if counts.unmapped > 0 {
        debug!(
            "{class}: {} genes have no locus tag in the speciesrep column",
            counts.unmapped
        );
    }

    Ok(ClassReport {
        class,
        genes: genes.len(),
        path,
        counts,
    })
}
