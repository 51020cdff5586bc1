use std::collections::{BTreeMap, BTreeSet};

use crate::core::types::GeneClass;
use crate::parsing::rtab::RtabMatrix;

/// Partition of the Rtab genes into the four frequency classes.
///
/// Sets are ordered, so iterating a class yields genes in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    classes: BTreeMap<GeneClass, BTreeSet<String>>,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            classes: GeneClass::ALL
                .iter()
                .map(|class| (*class, BTreeSet::new()))
                .collect(),
        }
    }
}

impl Classification {
    /// Genes assigned to `class`
    #[must_use]
    pub fn genes(&self, class: GeneClass) -> &BTreeSet<String> {
        // Every class key is inserted by `Default`
        &self.classes[&class]
    }

    /// Class of `gene`, if it was classified
    #[must_use]
    pub fn class_of(&self, gene: &str) -> Option<GeneClass> {
        self.classes
            .iter()
            .find(|(_, genes)| genes.contains(gene))
            .map(|(class, _)| *class)
    }

    /// Total number of classified genes
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.values().map(BTreeSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&mut self, class: GeneClass, gene: String) {
        self.classes.entry(class).or_default().insert(gene);
    }
}

/// Presence fraction of a gene: genomes present / total genomes.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Genome counts are far below 2^52
pub fn presence_fraction(present: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    present as f64 / total as f64
}

/// Classify every gene of the matrix by its presence fraction.
///
/// A matrix without genome columns yields four empty classes.
#[must_use]
pub fn classify_genes(matrix: &RtabMatrix) -> Classification {
    let mut classification = Classification::default();

    let total = matrix.genomes.len();
    if total == 0 {
        return classification;
    }

    for row in &matrix.rows {
        let fraction = presence_fraction(row.present_count(), total);
        classification.insert(GeneClass::from_fraction(fraction), row.gene.clone());
    }

    classification
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::rtab::{parse_rtab_text, RtabRow};

    fn matrix_with_counts(total: usize, counts: &[(&str, usize)]) -> RtabMatrix {
        RtabMatrix {
            genomes: (0..total).map(|i| format!("g{i}")).collect(),
            rows: counts
                .iter()
                .map(|(gene, n)| RtabRow {
                    gene: (*gene).to_string(),
                    present: (0..total).map(|i| i < *n).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_four_genome_scenario() {
        let rtab = "Gene\tg1\tg2\tg3\tg4\n\
                    GENE_X\t1\t1\t1\t1\n\
                    GENE_Y\t0\t1\t0\t0\n\
                    GENE_Z\t0\t0\t0\t0\n";
        let classes = classify_genes(&parse_rtab_text(rtab).unwrap());

        assert_eq!(classes.class_of("GENE_X"), Some(GeneClass::Core));
        assert_eq!(classes.class_of("GENE_Y"), Some(GeneClass::Shell));
        assert_eq!(classes.class_of("GENE_Z"), Some(GeneClass::Cloud));
        assert!(classes.genes(GeneClass::SoftCore).is_empty());
    }

    #[test]
    fn test_threshold_boundaries_with_twenty_genomes() {
        let matrix = matrix_with_counts(
            20,
            &[("all", 20), ("nineteen", 19), ("eighteen", 18), ("three", 3), ("two", 2)],
        );
        let classes = classify_genes(&matrix);

        assert_eq!(classes.class_of("all"), Some(GeneClass::Core));
        assert_eq!(classes.class_of("nineteen"), Some(GeneClass::SoftCore));
        assert_eq!(classes.class_of("eighteen"), Some(GeneClass::Shell));
        assert_eq!(classes.class_of("three"), Some(GeneClass::Shell));
        assert_eq!(classes.class_of("two"), Some(GeneClass::Cloud));
    }

    #[test]
    fn test_partition_is_total_and_disjoint() {
        for total in 1..=40 {
            let counts: Vec<(String, usize)> =
                (0..=total).map(|n| (format!("gene_{total}_{n}"), n)).collect();
            let borrowed: Vec<(&str, usize)> =
                counts.iter().map(|(g, n)| (g.as_str(), *n)).collect();
            let classes = classify_genes(&matrix_with_counts(total, &borrowed));

            assert_eq!(classes.len(), total + 1);
            for (gene, _) in &counts {
                let hits = GeneClass::ALL
                    .iter()
                    .filter(|c| classes.genes(**c).contains(gene))
                    .count();
                assert_eq!(hits, 1, "{gene} should be in exactly one class");
            }
        }
    }

    #[test]
    fn test_same_fraction_same_class() {
        // 2/4 and 10/20 are the same fraction
        let a = classify_genes(&matrix_with_counts(4, &[("g", 2)]));
        let b = classify_genes(&matrix_with_counts(20, &[("g", 10)]));
        assert_eq!(a.class_of("g"), b.class_of("g"));
    }

    #[test]
    fn test_zero_columns_yield_empty_classes() {
        let classes = classify_genes(&parse_rtab_text("Gene\ngroupA\ngroupB\n").unwrap());
        assert!(classes.is_empty());
        for class in GeneClass::ALL {
            assert!(classes.genes(class).is_empty());
        }
    }

    #[test]
    fn test_presence_fraction() {
        assert!((presence_fraction(1, 4) - 0.25).abs() < f64::EPSILON);
        assert!(presence_fraction(3, 0).abs() < f64::EPSILON);
    }
}
