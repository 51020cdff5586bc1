//! Command-line interface for speciesrep-classes.
//!
//! The tool takes a Panaroo (or Roary) output directory and the
//! species-representative Prokka `.ffn` (or a directory holding exactly one
//! `*.speciesrep.ffn`) and writes four FASTA files into the Panaroo directory:
//!
//! - `pan_genome_reference.core.speciesrep.fasta`
//! - `pan_genome_reference.soft_core.speciesrep.fasta`
//! - `pan_genome_reference.shell.speciesrep.fasta`
//! - `pan_genome_reference.cloud.speciesrep.fasta`
//!
//! ## Usage
//!
//! ```text
//! # Search a Prokka output directory for the speciesrep .ffn
//! speciesrep-classes panaroo_out/ prokka_out/
//!
//! # Point directly at the .ffn
//! speciesrep-classes panaroo_out/ prokka_out/GCF_000005845.speciesrep.ffn
//!
//! # Machine-readable summary
//! speciesrep-classes panaroo_out/ prokka_out/ --format json
//! ```

use clap::Parser;

pub mod extract;

#[derive(Parser)]
#[command(name = "speciesrep-classes")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Build pan-genome class FASTAs from the species-representative genome")]
#[command(
    long_about = "speciesrep-classes splits the genes of a pan-genome into core, soft-core, shell and cloud classes by their presence across genomes, and writes one FASTA per class.\n\nSequences come only from the species-representative genome: each gene is joined to the first locus tag in the '.speciesrep' column of gene_presence_absence and looked up in the representative's .ffn.\n\nClasses by presence fraction f:\n- core: f = 1.0\n- soft_core: 0.95 <= f < 1.0\n- shell: 0.15 <= f < 0.95\n- cloud: f < 0.15"
)]
pub struct Cli {
    #[command(flatten)]
    pub args: extract::ExtractArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Summary output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_positionals() {
        let cli = Cli::try_parse_from(["speciesrep-classes", "pan", "rep.ffn", "-f", "tsv"]).unwrap();
        assert_eq!(cli.args.panaroo_dir.to_str(), Some("pan"));
        assert_eq!(cli.args.speciesrep.to_str(), Some("rep.ffn"));
        assert_eq!(cli.format, OutputFormat::Tsv);
        assert!(cli.args.output_dir.is_none());
    }

    #[test]
    fn test_wrong_argument_count_is_rejected() {
        assert!(Cli::try_parse_from(["speciesrep-classes", "pan"]).is_err());
        assert!(Cli::try_parse_from(["speciesrep-classes", "a", "b", "c"]).is_err());
    }
}
