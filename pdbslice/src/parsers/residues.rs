use std::ops::Range;

use crate::parsers::line::PDBLine;
use crate::parsers::MolecularSystem;

/// Iterate over residues given by their index in the residue table.
pub struct ResidueIterator<'a, I = Range<usize>> {
    system: &'a MolecularSystem,
    indices: I,
}

impl<'a, I> ResidueIterator<'a, I>
where
    I: Iterator<Item = usize>,
{
    pub(crate) fn new(system: &'a MolecularSystem, indices: I) -> Self {
        ResidueIterator { system, indices }
    }
}

impl<'a, I> Iterator for ResidueIterator<'a, I>
where
    I: Iterator<Item = usize>,
{
    type Item = ResidueView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.indices
            .next()
            .map(|residue_index| ResidueView::new(self.system, residue_index))
    }
}

#[derive(Clone, Copy)]
pub struct ResidueView<'a> {
    system: &'a MolecularSystem,
    residue_index: usize,
}

impl<'a> ResidueView<'a> {
    pub(crate) fn new(system: &'a MolecularSystem, residue_index: usize) -> Self {
        ResidueView {
            system,
            residue_index,
        }
    }

    /// The atoms of the residue, in file order.
    pub fn atoms(&self) -> &'a [PDBLine] {
        let range = self.system.residue_atoms[self.residue_index].clone();
        &self.system.atoms[range]
    }

    // A residue always has at least one atom: it is created by one.
    fn first_atom(&self) -> &'a PDBLine {
        &self.atoms()[0]
    }

    pub fn name(&self) -> &'a str {
        &self.first_atom().residue_name
    }

    pub fn number(&self) -> isize {
        self.first_atom().residue_identifier
    }

    pub fn insertion_code(&self) -> char {
        self.first_atom().insertion_code
    }

    pub fn chain_identifier(&self) -> char {
        self.first_atom().chain_identifier
    }

    /// Whether the residue comes from HETATM records.
    pub fn is_hetero(&self) -> bool {
        self.first_atom().is_hetero()
    }

    pub fn find_atom_position(&self, name: &str) -> Option<usize> {
        let range = &self.system.residue_atoms[self.residue_index];
        self.atoms()
            .iter()
            .position(|atom| name.trim() == atom.name())
            .map(|position| range.start + position)
    }

    /// Write the atom records of the residue, one per line.
    pub fn write_records(&self, output: &mut String) {
        for atom in self.atoms() {
            output.push_str(&atom.to_string());
            output.push('\n');
        }
    }
}
