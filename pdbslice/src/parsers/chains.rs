use std::iter::Copied;
use std::slice::Iter;

use crate::parsers::residues::ResidueIterator;
use crate::parsers::MolecularSystem;

pub struct ChainView<'a> {
    system: &'a MolecularSystem,
    identifier: char,
    residues: &'a [usize],
}

impl<'a> ChainView<'a> {
    pub(crate) fn new(system: &'a MolecularSystem, chain_index: usize) -> Option<Self> {
        let (identifier, residues) = system.chains.get_index(chain_index)?;
        Some(ChainView {
            system,
            identifier: *identifier,
            residues,
        })
    }

    pub fn identifier(&self) -> char {
        self.identifier
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    /// The residues of the chain in file order.
    pub fn iter_residues(&self) -> ResidueIterator<'a, Copied<Iter<'a, usize>>> {
        ResidueIterator::new(self.system, self.residues.iter().copied())
    }
}

pub struct ChainIterator<'a> {
    system: &'a MolecularSystem,
    chain_index: usize,
}

impl<'a> ChainIterator<'a> {
    pub fn new(system: &'a MolecularSystem) -> Self {
        Self {
            system,
            chain_index: 0,
        }
    }
}

impl<'a> Iterator for ChainIterator<'a> {
    type Item = ChainView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let chain = ChainView::new(self.system, self.chain_index)?;
        self.chain_index += 1;
        Some(chain)
    }
}
