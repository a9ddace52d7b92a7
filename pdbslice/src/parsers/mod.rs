pub type Position = [f64; 3];

pub mod chains;
pub mod errors;
pub mod line;
pub mod molecular_system;
pub mod pdb;
pub mod residues;

pub use molecular_system::{MolecularSystem, Structure};
pub use pdb::{parse_pdb, read_pdb};
