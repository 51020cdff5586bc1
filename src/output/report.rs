use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Serialize;

use crate::core::types::GeneClass;
use crate::output::fasta::WriteCounts;

/// Outcome of writing one class FASTA
#[derive(Debug, Clone, Serialize)]
pub struct ClassReport {
    pub class: GeneClass,
    pub genes: usize,
    pub path: PathBuf,
    #[serde(flatten)]
    pub counts: WriteCounts,
}

impl ClassReport {
    /// Console lines for this class: always the write line, plus a skip line
    /// when some locus tags had no sequence.
    #[must_use]
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{}: wrote {} sequences to {}",
            self.class,
            self.counts.written,
            self.path.display()
        )];
        if self.counts.missing > 0 {
            lines.push(format!(
                "{}: skipped {} genes (locus tag not found in speciesrep FFN)",
                self.class, self.counts.missing
            ));
        }
        lines
    }
}

/// Summary of a full run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub presence_absence_table: PathBuf,
    pub representative_column: String,
    pub representative_ffn: PathBuf,
    pub genomes: usize,
    pub classes: Vec<ClassReport>,
}

impl RunSummary {
    /// Tab-separated table with one row per class
    #[must_use]
    pub fn to_tsv(&self) -> String {
        let mut out = String::from("class\tgenes\twritten\tmissing\tunmapped\tpath\n");
        for report in &self.classes {
            // Writing to a String cannot fail
            let _ = writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}\t{}",
                report.class,
                report.genes,
                report.counts.written,
                report.counts.missing,
                report.counts.unmapped,
                report.path.display()
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(class: GeneClass, written: usize, missing: usize) -> ClassReport {
        ClassReport {
            class,
            genes: written + missing + 1,
            path: PathBuf::from(format!("out/{}", class.fasta_file_name())),
            counts: WriteCounts {
                written,
                missing,
                unmapped: 1,
            },
        }
    }

    #[test]
    fn test_text_lines() {
        let lines = report(GeneClass::Core, 3, 0).text_lines();
        assert_eq!(
            lines,
            vec!["core: wrote 3 sequences to out/pan_genome_reference.core.speciesrep.fasta"]
        );

        let lines = report(GeneClass::SoftCore, 1, 2).text_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "soft_core: skipped 2 genes (locus tag not found in speciesrep FFN)"
        );
    }

    #[test]
    fn test_tsv_and_json() {
        let summary = RunSummary {
            presence_absence_table: PathBuf::from("pa.csv"),
            representative_column: "ref.speciesrep".to_string(),
            representative_ffn: PathBuf::from("ref.speciesrep.ffn"),
            genomes: 4,
            classes: vec![report(GeneClass::Core, 2, 0), report(GeneClass::Cloud, 0, 1)],
        };

        let tsv = summary.to_tsv();
        let rows: Vec<&str> = tsv.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].starts_with("core\t3\t2\t0\t1\t"));
        assert!(rows[2].starts_with("cloud\t2\t0\t1\t1\t"));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["classes"][0]["class"], "core");
        assert_eq!(json["classes"][0]["written"], 2);
        assert_eq!(json["classes"][1]["missing"], 1);
        assert_eq!(json["representative_column"], "ref.speciesrep");
    }
}
