/// Average mass of a water molecule, in Dalton.
pub const WATER_MASS: f64 = 18.01528;

/// One-letter code used for residues missing from the table.
pub const UNKNOWN_CODE: char = 'X';

/// Mass given to a residue of unknown identity. This is the usual mean mass
/// of an amino-acid residue in a protein.
pub const UNKNOWN_RESIDUE_MASS: f64 = 110.0;

#[derive(Debug, PartialEq)]
pub struct AminoAcid<'a> {
    pub name: &'a str,
    pub code: char,
    /// Average mass of the residue in a peptide chain, that is the mass of
    /// the free amino acid minus one water.
    pub residue_mass: f64,
}

static AMINO_ACIDS: [AminoAcid<'static>; 23] = [
    AminoAcid { name: "ALA", code: 'A', residue_mass: 71.0788 },
    AminoAcid { name: "ARG", code: 'R', residue_mass: 156.1875 },
    AminoAcid { name: "ASN", code: 'N', residue_mass: 114.1038 },
    AminoAcid { name: "ASP", code: 'D', residue_mass: 115.0886 },
    AminoAcid { name: "CYS", code: 'C', residue_mass: 103.1388 },
    AminoAcid { name: "GLN", code: 'Q', residue_mass: 128.1307 },
    AminoAcid { name: "GLU", code: 'E', residue_mass: 129.1155 },
    AminoAcid { name: "GLY", code: 'G', residue_mass: 57.0519 },
    AminoAcid { name: "HIS", code: 'H', residue_mass: 137.1411 },
    AminoAcid { name: "ILE", code: 'I', residue_mass: 113.1594 },
    AminoAcid { name: "LEU", code: 'L', residue_mass: 113.1594 },
    AminoAcid { name: "LYS", code: 'K', residue_mass: 128.1741 },
    AminoAcid { name: "MET", code: 'M', residue_mass: 131.1926 },
    AminoAcid { name: "PHE", code: 'F', residue_mass: 147.1766 },
    AminoAcid { name: "PRO", code: 'P', residue_mass: 97.1167 },
    AminoAcid { name: "SER", code: 'S', residue_mass: 87.0782 },
    AminoAcid { name: "THR", code: 'T', residue_mass: 101.1051 },
    AminoAcid { name: "TRP", code: 'W', residue_mass: 186.2132 },
    AminoAcid { name: "TYR", code: 'Y', residue_mass: 163.1760 },
    AminoAcid { name: "VAL", code: 'V', residue_mass: 99.1326 },
    AminoAcid { name: "SEC", code: 'U', residue_mass: 150.0388 },
    AminoAcid { name: "PYL", code: 'O', residue_mass: 237.3018 },
    // Selenomethionine is how methionine usually shows up in
    // crystallographic structures solved by SAD phasing.
    AminoAcid { name: "MSE", code: 'M', residue_mass: 178.0910 },
];

/// Find an amino acid from its 3-letter residue name.
///
/// The lookup ignores surrounding spaces and case, so the raw residue name
/// field of a PDB line can be used directly.
pub fn get_amino_acid(residue_name: &str) -> Option<&'static AminoAcid<'static>> {
    let residue_name = residue_name.trim();
    AMINO_ACIDS
        .iter()
        .find(|amino_acid| amino_acid.name.eq_ignore_ascii_case(residue_name))
}

/// The one-letter code of a residue, `X` when the residue is not an amino acid.
pub fn one_letter_code(residue_name: &str) -> char {
    get_amino_acid(residue_name)
        .map(|amino_acid| amino_acid.code)
        .unwrap_or(UNKNOWN_CODE)
}

/// The average residue mass for a one-letter code.
///
/// Selenomethionine shares `M` with methionine; the mass returned for `M` is
/// the one of methionine. Use [`named_residue_mass`] when the residue name is
/// known. Unknown codes weigh [`UNKNOWN_RESIDUE_MASS`].
pub fn residue_mass(code: char) -> f64 {
    AMINO_ACIDS
        .iter()
        .find(|amino_acid| amino_acid.code == code)
        .map(|amino_acid| amino_acid.residue_mass)
        .unwrap_or(UNKNOWN_RESIDUE_MASS)
}

/// The average residue mass for a 3-letter residue name.
///
/// Unknown residues weigh [`UNKNOWN_RESIDUE_MASS`].
pub fn named_residue_mass(residue_name: &str) -> f64 {
    get_amino_acid(residue_name)
        .map(|amino_acid| amino_acid.residue_mass)
        .unwrap_or(UNKNOWN_RESIDUE_MASS)
}
