mod amino_acids;

pub use amino_acids::{
    get_amino_acid, named_residue_mass, one_letter_code, residue_mass, AminoAcid, UNKNOWN_CODE,
    UNKNOWN_RESIDUE_MASS, WATER_MASS,
};
