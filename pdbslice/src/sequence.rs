//! Amino-acid sequences derived from the residues of a chain.

use components::{named_residue_mass, one_letter_code, residue_mass, WATER_MASS};

use crate::parsers::residues::ResidueView;

/// A protein sequence as one-letter codes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    codes: String,
    /// Sum of the residue masses. Kept apart from the codes because some
    /// residues share a code but not a mass.
    residue_masses: f64,
}

impl Sequence {
    /// Translate every residue into its one-letter code.
    ///
    /// Residues we do not know, waters and ligands included, become `X`.
    pub fn from_residues<'a, I>(residues: I) -> Self
    where
        I: IntoIterator<Item = ResidueView<'a>>,
    {
        let mut sequence = Sequence::default();
        for residue in residues {
            sequence.codes.push(one_letter_code(residue.name()));
            sequence.residue_masses += named_residue_mass(residue.name());
        }
        sequence
    }

    pub fn as_str(&self) -> &str {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Average mass of the linear peptide, in Dalton.
    ///
    /// This is the sum of the residue masses plus one water for the two
    /// termini. An empty sequence weighs nothing.
    pub fn molecular_weight(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.residue_masses + WATER_MASS
    }

    /// Write the sequence as a PIR-style record: a header line with the
    /// identifier and the rounded weight, then the sequence.
    pub fn to_record(&self, identifier: &str) -> String {
        let weight = self.molecular_weight().round() as u64;
        format!(">{identifier} {weight} Da\n{}\n", self.codes)
    }
}

impl From<&str> for Sequence {
    fn from(codes: &str) -> Self {
        Sequence {
            codes: String::from(codes),
            residue_masses: codes.chars().map(residue_mass).sum(),
        }
    }
}
