use std::ops::Range;

use indexmap::IndexMap;

use crate::parsers::chains::{ChainIterator, ChainView};
use crate::parsers::line::PDBLine;
use crate::parsers::residues::{ResidueIterator, ResidueView};

/// Identifier of a model: the serial from the MODEL record, or `None` for the
/// atoms that are not part of any explicit model.
pub type ModelIdentifier = Option<isize>;

/// The atoms of one model, with their grouping in residues and chains.
///
/// Atoms are stored in file order. A residue is a contiguous range of atoms,
/// and a chain is the list of its residues in file order. The back reference
/// from an atom to its residue, and from a residue to its chain, are indices
/// in these tables.
#[derive(Debug, Default)]
pub struct MolecularSystem {
    pub atoms: Vec<PDBLine>,
    pub atom_resindex: Vec<usize>,
    pub residue_atoms: Vec<Range<usize>>,
    pub residue_chain_index: Vec<usize>,
    pub chains: IndexMap<char, Vec<usize>>,
}

impl MolecularSystem {
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn residue_count(&self) -> usize {
        self.residue_atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter_residues(&self) -> ResidueIterator {
        ResidueIterator::new(self, 0..self.residue_count())
    }

    pub fn iter_chains(&self) -> ChainIterator {
        ChainIterator::new(self)
    }

    /// Get a chain from its identifier.
    pub fn chain(&self, identifier: char) -> Option<ChainView> {
        let index = self.chains.get_index_of(&identifier)?;
        ChainView::new(self, index)
    }

    /// The residue an atom belongs to.
    pub fn residue_of(&self, atom_index: usize) -> Option<ResidueView> {
        self.atom_resindex
            .get(atom_index)
            .map(|&residue_index| ResidueView::new(self, residue_index))
    }
}

impl From<Vec<PDBLine>> for MolecularSystem {
    fn from(atoms: Vec<PDBLine>) -> Self {
        if atoms.is_empty() {
            return MolecularSystem::default();
        }

        let mut atom_resindex = Vec::with_capacity(atoms.len());
        let mut residue_atoms: Vec<Range<usize>> = Vec::new();
        let mut residue_chain_index = Vec::new();
        let mut chains: IndexMap<char, Vec<usize>> = IndexMap::new();

        let mut previous = None;
        for (atom_index, atom) in atoms.iter().enumerate() {
            let key = atom.residue_key();
            if previous == Some(key) {
                if let Some(residue) = residue_atoms.last_mut() {
                    residue.end = atom_index + 1;
                }
            } else {
                let residue_index = residue_atoms.len();
                residue_atoms.push(atom_index..(atom_index + 1));
                let chain_entry = chains.entry(atom.chain_identifier);
                residue_chain_index.push(chain_entry.index());
                chain_entry.or_default().push(residue_index);
            }
            atom_resindex.push(residue_atoms.len() - 1);
            previous = Some(key);
        }

        MolecularSystem {
            atoms,
            atom_resindex,
            residue_atoms,
            residue_chain_index,
            chains,
        }
    }
}

/// All the models read from a file, in file order.
#[derive(Debug, Default)]
pub struct Structure {
    pub models: IndexMap<ModelIdentifier, MolecularSystem>,
}

impl Structure {
    pub fn is_empty(&self) -> bool {
        self.models.values().all(MolecularSystem::is_empty)
    }

    pub fn model(&self, identifier: ModelIdentifier) -> Option<&MolecularSystem> {
        self.models.get(&identifier)
    }

    /// The model to work on when none is requested explicitly.
    ///
    /// This is the unnamed model if there are atoms outside of any MODEL
    /// record, the first model of the file otherwise.
    pub fn default_model(&self) -> Option<&MolecularSystem> {
        self.model(None)
            .or_else(|| self.models.values().next())
    }
}
