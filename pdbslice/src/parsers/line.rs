use std::fmt;
use std::ops::Range;

use crate::parsers::errors::{FieldError, FormatError};
use crate::parsers::Position;

/// Record names are stored in the first 6 columns of a line.
const RECORD_NAME: Range<usize> = 0..6;
/// Nothing after the z coordinate is required on an atom line.
const MINIMUM_ATOM_LINE_LENGTH: usize = 54;

/// Which of the two coordinate records a line comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomKind {
    Atom,
    Hetatm,
}

impl AtomKind {
    pub fn record_name(&self) -> &'static str {
        match self {
            AtomKind::Atom => "ATOM",
            AtomKind::Hetatm => "HETATM",
        }
    }
}

/// The parsed fields from an ATOM or HETATM line in a PDB file.
///
/// Text fields are kept as they appear in the file, without the surrounding
/// spaces, except for the atom name. The alignment of the atom name within
/// its 4 columns carries meaning (it tells apart calcium "CA" from an alpha
/// carbon " CA "), so the field is kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct PDBLine {
    pub kind: AtomKind,
    pub serial: isize,
    pub atom_name: String,
    pub alternate: char,
    pub residue_name: String,
    pub chain_identifier: char,
    pub residue_identifier: isize,
    pub insertion_code: char,
    pub position: Position,
    pub occupancy: f64,
    pub temperature_factor: f64,
    pub segment: String,
    pub element: String,
    pub charge: String,
}

impl PDBLine {
    /// The atom name without the alignment spaces.
    pub fn name(&self) -> &str {
        self.atom_name.trim()
    }

    pub fn is_hetero(&self) -> bool {
        self.kind == AtomKind::Hetatm
    }

    /// The key that tells residues apart in a chain.
    pub fn residue_key(&self) -> (char, isize, char) {
        (
            self.chain_identifier,
            self.residue_identifier,
            self.insertion_code,
        )
    }
}

impl fmt::Display for PDBLine {
    /// Write the atom as an 80 columns record, without the end of line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.position;
        write!(
            f,
            "{:<6}{:>5} {:<4}{}{:>3} {}{:>4}{}   {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}      {:<4}{:>2}{:<2}",
            self.kind.record_name(),
            self.serial,
            self.atom_name,
            self.alternate,
            self.residue_name,
            self.chain_identifier,
            self.residue_identifier,
            self.insertion_code,
            x,
            y,
            z,
            self.occupancy,
            self.temperature_factor,
            self.segment,
            self.element,
            self.charge,
        )
    }
}

/// The kinds of line the reader knows about.
///
/// Anything else is [`Record::Ignored`], which is not an error: PDB files
/// carry a lot of records we do not need.
#[derive(Debug, PartialEq)]
pub enum Record {
    Atom(PDBLine),
    Model(isize),
    EndModel,
    Terminator,
    End,
    Ignored,
}

impl Record {
    pub fn parse(line: &str) -> Result<Record, FormatError> {
        let record_name = line.get(RECORD_NAME).unwrap_or(line).trim_end();
        let record = match record_name {
            "ATOM" => Record::Atom(parse_pdb_atom_line(line, AtomKind::Atom)?),
            "HETATM" => Record::Atom(parse_pdb_atom_line(line, AtomKind::Hetatm)?),
            // A model serial we cannot read still opens a new model.
            "MODEL" => match field(line, 10..14).trim().parse() {
                Ok(serial) => Record::Model(serial),
                Err(_) => Record::Model(0),
            },
            "ENDMDL" => Record::EndModel,
            "TER" => Record::Terminator,
            "END" => Record::End,
            _ => Record::Ignored,
        };
        Ok(record)
    }
}

/// Get a field from a line, an empty string if the line is too short.
fn field(line: &str, range: Range<usize>) -> &str {
    let end = range.end.min(line.len());
    line.get(range.start.min(end)..end).unwrap_or("")
}

fn field_char(line: &str, index: usize) -> char {
    field(line, index..(index + 1)).chars().next().unwrap_or(' ')
}

fn parse_optional_float(
    line: &str,
    range: Range<usize>,
    default: f64,
    error: FieldError,
) -> Result<f64, FormatError> {
    let value = field(line, range).trim();
    if value.is_empty() {
        return Ok(default);
    }
    value.parse().map_err(|_| FormatError::FieldFormat(error))
}

pub(crate) fn parse_pdb_atom_line(line: &str, kind: AtomKind) -> Result<PDBLine, FormatError> {
    if !line.is_ascii() {
        return Err(FormatError::NotAscii);
    }
    if line.len() < MINIMUM_ATOM_LINE_LENGTH {
        // A line should be 80 columns. However, nothing after the positions is
        // required. Therefore, it is OK for a line to stop after the positions.
        return Err(FormatError::LineTooShort);
    }
    // From this point, we know the line is long enough to retrieve all the
    // fields up to the positions. The optional fields go through `field`.

    let serial = line[6..11]
        .trim()
        .parse()
        .map_err(|_| FormatError::FieldFormat(FieldError::Serial))?;
    let atom_name = String::from(&line[12..16]);
    let alternate = field_char(line, 16);
    let residue_name = String::from(line[17..20].trim());
    let chain_identifier = field_char(line, 21);
    let residue_identifier = line[22..26]
        .trim()
        .parse()
        .map_err(|_| FormatError::FieldFormat(FieldError::ResidueIdentifier))?;
    let insertion_code = field_char(line, 26);

    let x: Result<f64, _> = line[30..38].trim().parse();
    let y: Result<f64, _> = line[38..46].trim().parse();
    let z: Result<f64, _> = line[46..54].trim().parse();
    let (Ok(x), Ok(y), Ok(z)) = (x, y, z) else {
        return Err(FormatError::FieldFormat(FieldError::Position));
    };

    let occupancy = parse_optional_float(line, 54..60, 1.0, FieldError::Occupancy)?;
    let temperature_factor =
        parse_optional_float(line, 60..66, 0.0, FieldError::TemperatureFactor)?;

    Ok(PDBLine {
        kind,
        serial,
        atom_name,
        alternate,
        residue_name,
        chain_identifier,
        residue_identifier,
        insertion_code,
        position: [x, y, z],
        occupancy,
        temperature_factor,
        segment: String::from(field(line, 72..76).trim()),
        element: String::from(field(line, 76..78).trim()),
        charge: String::from(field(line, 78..80).trim()),
    })
}
