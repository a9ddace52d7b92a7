use log::{debug, info};
use thiserror::Error;

use crate::parsers::Structure;
use crate::sequence::Sequence;

pub const DEFAULT_FIRST_RESIDUE: isize = 1;
pub const DEFAULT_LAST_RESIDUE: isize = 100000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Chain '{0}' is not in the structure.")]
    ChainNotFound(char),
}

/// An inclusive range of residue numbers.
///
/// Insertion codes play no part: residues 52 and 52A are both in `[50, 52]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidueRange {
    pub first: isize,
    pub last: isize,
}

impl ResidueRange {
    pub fn new(first: isize, last: isize) -> Self {
        ResidueRange { first, last }
    }

    pub fn contains(&self, residue_number: isize) -> bool {
        self.first <= residue_number && residue_number <= self.last
    }

    /// The part of an output file name that describes the range. Bounds
    /// left at their default are not mentioned.
    pub fn file_name_suffix(&self) -> String {
        let mut suffix = String::new();
        if self.first != DEFAULT_FIRST_RESIDUE {
            suffix.push_str(&format!("-{}", self.first));
        }
        if self.last != DEFAULT_LAST_RESIDUE {
            suffix.push_str(&format!("-{}", self.last));
        }
        suffix
    }
}

impl Default for ResidueRange {
    fn default() -> Self {
        ResidueRange::new(DEFAULT_FIRST_RESIDUE, DEFAULT_LAST_RESIDUE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Keep the atom records of the residues in the range, or of the
    /// residues outside of it when `exclude` is set.
    Coordinates { exclude: bool },
    /// Derive the sequence of the whole chain. The range is not used.
    Sequence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Coordinates,
    Sequence,
}

impl OutputKind {
    pub fn suffix(&self) -> &'static str {
        match self {
            OutputKind::Coordinates => ".pdb",
            OutputKind::Sequence => ".pir",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub kind: OutputKind,
}

/// Extract a fragment of a chain from the default model of a structure.
///
/// The `identifier` names the structure in the header of sequence records.
pub fn select(
    structure: &Structure,
    identifier: &str,
    chain_identifier: char,
    range: ResidueRange,
    mode: SelectionMode,
) -> Result<Fragment, SelectionError> {
    let chain = structure
        .default_model()
        .and_then(|model| model.chain(chain_identifier))
        .ok_or(SelectionError::ChainNotFound(chain_identifier))?;

    let fragment = match mode {
        SelectionMode::Coordinates { exclude } => {
            if exclude {
                info!("Delete mode: residues {} to {} are left out.", range.first, range.last);
            }
            let mut text = String::new();
            let mut selected = 0;
            for residue in chain.iter_residues() {
                if range.contains(residue.number()) != exclude {
                    residue.write_records(&mut text);
                    selected += 1;
                }
            }
            debug!(
                "Selected {selected} of the {} residues of chain {chain_identifier}.",
                chain.residue_count()
            );
            Fragment {
                text,
                kind: OutputKind::Coordinates,
            }
        }
        SelectionMode::Sequence => {
            let sequence = Sequence::from_residues(chain.iter_residues());
            debug!("Chain {chain_identifier} has {} residues in its sequence.", sequence.len());
            Fragment {
                text: sequence.to_record(identifier),
                kind: OutputKind::Sequence,
            }
        }
    };
    Ok(fragment)
}
