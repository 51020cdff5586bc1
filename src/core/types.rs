use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the presence fraction for soft-core genes
pub const SOFT_CORE_MIN_FRACTION: f64 = 0.95;

/// Lower bound (inclusive) of the presence fraction for shell genes
pub const SHELL_MIN_FRACTION: f64 = 0.15;

/// Frequency class of a gene across the genomes of a pan-genome
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneClass {
    /// Present in every genome
    Core,
    /// Present in at least 95% but not all genomes
    SoftCore,
    /// Present in at least 15% and under 95% of genomes
    Shell,
    /// Present in under 15% of genomes
    Cloud,
}

impl GeneClass {
    /// All classes in reporting order
    pub const ALL: [Self; 4] = [Self::Core, Self::SoftCore, Self::Shell, Self::Cloud];

    /// Class for a presence fraction in `[0, 1]`.
    ///
    /// The bands are right-open except `core`, so every fraction maps to
    /// exactly one class and the boundary values 0.95 and 0.15 belong to the
    /// upper band.
    #[must_use]
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction >= 1.0 {
            Self::Core
        } else if fraction >= SOFT_CORE_MIN_FRACTION {
            Self::SoftCore
        } else if fraction >= SHELL_MIN_FRACTION {
            Self::Shell
        } else {
            Self::Cloud
        }
    }

    /// Label used in output file names and reports
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::SoftCore => "soft_core",
            Self::Shell => "shell",
            Self::Cloud => "cloud",
        }
    }

    /// File name of the class FASTA, e.g. `pan_genome_reference.core.speciesrep.fasta`
    #[must_use]
    pub fn fasta_file_name(self) -> String {
        format!("pan_genome_reference.{}.speciesrep.fasta", self.as_str())
    }
}

impl std::fmt::Display for GeneClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fraction_boundaries() {
        assert_eq!(GeneClass::from_fraction(1.0), GeneClass::Core);
        assert_eq!(GeneClass::from_fraction(0.95), GeneClass::SoftCore);
        assert_eq!(GeneClass::from_fraction(0.999), GeneClass::SoftCore);
        assert_eq!(GeneClass::from_fraction(0.949_999), GeneClass::Shell);
        assert_eq!(GeneClass::from_fraction(0.15), GeneClass::Shell);
        assert_eq!(GeneClass::from_fraction(0.149_999), GeneClass::Cloud);
        assert_eq!(GeneClass::from_fraction(0.0), GeneClass::Cloud);
    }

    #[test]
    fn test_ratio_boundaries_are_exact() {
        // 19/20 and 3/20 round to the same doubles as the threshold literals
        assert_eq!(GeneClass::from_fraction(19.0 / 20.0), GeneClass::SoftCore);
        assert_eq!(GeneClass::from_fraction(3.0 / 20.0), GeneClass::Shell);
    }

    #[test]
    fn test_labels_and_file_names() {
        let labels: Vec<&str> = GeneClass::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(labels, vec!["core", "soft_core", "shell", "cloud"]);
        assert_eq!(
            GeneClass::SoftCore.fasta_file_name(),
            "pan_genome_reference.soft_core.speciesrep.fasta"
        );
        assert_eq!(GeneClass::Cloud.to_string(), "cloud");
    }

    #[test]
    fn test_serde_label() {
        let json = serde_json::to_string(&GeneClass::SoftCore).unwrap();
        assert_eq!(json, "\"soft_core\"");
    }
}
