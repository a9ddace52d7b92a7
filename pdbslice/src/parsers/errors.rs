use std::io;
use thiserror::Error;

/// When a PDB field is ill-formatted, this enum tells what field has the issue.
#[derive(Debug, PartialEq, Eq)]
pub enum FieldError {
    Serial,
    ResidueIdentifier,
    Position,
    Occupancy,
    TemperatureFactor,
}

/// What went wrong when reading a line of a PDB file?
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("ill-formatted {0:?} field")]
    FieldFormat(FieldError),
    #[error("the line is too short to contain the coordinates")]
    LineTooShort,
    #[error("the line is not valid ASCII")]
    NotAscii,
}

#[derive(Error, Debug)]
pub enum ReadError {
    /// The line number is 1-based.
    #[error("Line {1}: {0}.")]
    FormatError(FormatError, usize),
    #[error("Cannot read the input: {0}")]
    IOError(#[from] io::Error),
}
