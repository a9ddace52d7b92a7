use indexmap::IndexMap;
use log::{debug, trace};
use std::io::BufRead;

use crate::parsers::errors::*;
use crate::parsers::line::{PDBLine, Record};
use crate::parsers::molecular_system::{ModelIdentifier, MolecularSystem, Structure};

/// Read a structure from the text of a PDB file.
pub fn parse_pdb(text: &str) -> Result<Structure, ReadError> {
    read_pdb(text.as_bytes())
}

pub fn read_pdb<F>(input: F) -> Result<Structure, ReadError>
where
    F: BufRead,
{
    let models = read_pdb_models(input)?;
    let models: IndexMap<ModelIdentifier, MolecularSystem> = models
        .into_iter()
        .map(|(identifier, atoms)| (identifier, MolecularSystem::from(atoms)))
        .collect();
    for (identifier, model) in &models {
        debug!(
            "Model {identifier:?}: {} atoms in {} residues and {} chains.",
            model.atom_count(),
            model.residue_count(),
            model.chains.len(),
        );
    }
    Ok(Structure { models })
}

fn read_pdb_models<F>(input: F) -> Result<IndexMap<ModelIdentifier, Vec<PDBLine>>, ReadError>
where
    F: BufRead,
{
    let mut models: IndexMap<ModelIdentifier, Vec<PDBLine>> = IndexMap::new();
    let mut current_model: ModelIdentifier = None;
    // Lines are split on bytes: a stray non-UTF-8 byte in a record we ignore
    // must not stop the reading. On an atom line, it is a format error.
    for (lineno, line) in input.split(b'\n').enumerate() {
        let bytes = line?;
        let text = String::from_utf8_lossy(&bytes);
        let line = text.strip_suffix('\r').unwrap_or(&*text);
        let record = Record::parse(line).map_err(|e| ReadError::FormatError(e, lineno + 1))?;
        match record {
            Record::Atom(atom) => {
                trace!("Line {}: atom {}.", lineno + 1, atom.serial);
                models.entry(current_model).or_default().push(atom);
            }
            Record::Model(serial) => current_model = Some(serial),
            Record::EndModel => current_model = None,
            Record::End => break,
            Record::Terminator | Record::Ignored => {}
        }
    }
    Ok(models)
}
