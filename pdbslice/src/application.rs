extern crate clap;

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;
use thiserror::Error;

use crate::fragment::{
    select, OutputKind, ResidueRange, SelectionError, SelectionMode, DEFAULT_FIRST_RESIDUE,
    DEFAULT_LAST_RESIDUE,
};
use crate::parsers::errors::ReadError;
use crate::parsers::read_pdb;
use crate::source::{
    ensure_local, write_atomically, FetchError, StructureSource, DEFAULT_REMOTE_URL,
};

/// Generate a subfragment from a PDB file.
///
/// Writes the atoms of a range of residues from one chain, or the sequence of
/// that chain. If the input file does not exist, it is downloaded from the
/// Protein Data Bank using the file name as the structure identifier.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the input file.
    #[clap(short, long, value_parser)]
    pub infile: PathBuf,
    /// Name of the output file [default: INFILE-CHAIN-BEGIN-END.pdb].
    #[clap(short, long, value_parser)]
    pub outfile: Option<PathBuf>,
    /// Number of the first residue to extract.
    #[clap(
        short,
        long,
        value_parser,
        default_value_t = DEFAULT_FIRST_RESIDUE,
        allow_negative_numbers = true
    )]
    pub begin: isize,
    /// Number of the last residue to extract.
    #[clap(
        short,
        long,
        value_parser,
        default_value_t = DEFAULT_LAST_RESIDUE,
        allow_negative_numbers = true
    )]
    pub end: isize,
    /// Chain identifier.
    #[clap(short, long, value_parser, default_value_t = 'A')]
    pub chain: char,
    /// Write every residue of the chain but the ones in the range.
    #[clap(short, long, value_parser, default_value_t = false)]
    pub delete: bool,
    /// Write the sequence of the chain instead of the coordinates.
    #[clap(short, long, value_parser, default_value_t = false)]
    pub sequence: bool,
    /// Where to download missing structures from.
    #[clap(long, value_parser, default_value = DEFAULT_REMOTE_URL)]
    pub remote_url: String,
    /// Display more information about what the software does.
    #[clap(short, long, value_parser, default_value_t = false)]
    pub verbose: bool,
    /// Be very verbose about what the software does.
    #[clap(short, long, value_parser, default_value_t = false)]
    pub trace: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Cli {
            infile: PathBuf::new(),
            outfile: None,
            begin: DEFAULT_FIRST_RESIDUE,
            end: DEFAULT_LAST_RESIDUE,
            chain: 'A',
            delete: false,
            sequence: false,
            remote_url: DEFAULT_REMOTE_URL.to_owned(),
            verbose: false,
            trace: false,
        }
    }
}

impl Cli {
    pub fn range(&self) -> ResidueRange {
        ResidueRange::new(self.begin, self.end)
    }

    pub fn mode(&self) -> SelectionMode {
        if self.sequence {
            SelectionMode::Sequence
        } else {
            SelectionMode::Coordinates {
                exclude: self.delete,
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),
    #[error("Cannot get the input file: {0}")]
    Fetch(#[from] FetchError),
    #[error("Cannot open the input file: {0}")]
    CannotOpenInputFile(std::io::Error),
    #[error("Cannot parse the input file. {0}")]
    CannotParseInputFile(#[from] ReadError),
    #[error("{0}")]
    Selection(#[from] SelectionError),
    #[error("Cannot write the output file: {0}")]
    CannotWriteOutputFile(std::io::Error),
}

/// The paths and names derived from the input file name.
#[derive(Debug, PartialEq, Eq)]
pub struct InputPath {
    /// The input path without its `.pdb` extension.
    pub base: PathBuf,
    /// The name of the structure, used to download it and to name it in
    /// sequence records.
    pub identifier: String,
}

impl InputPath {
    pub fn new(infile: &Path) -> Self {
        let infile = infile.to_string_lossy();
        let base = PathBuf::from(infile.strip_suffix(".pdb").unwrap_or(&*infile));
        let identifier = base
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        InputPath { base, identifier }
    }

    /// The default name of the output file: the base name followed by the
    /// chain, the range bounds that differ from their default, and the
    /// suffix for the kind of output.
    pub fn output_path(&self, chain: char, range: ResidueRange, kind: OutputKind) -> PathBuf {
        let mut name = self.base.clone().into_os_string();
        name.push(format!("-{chain}{}{}", range.file_name_suffix(), kind.suffix()));
        PathBuf::from(name)
    }
}

/// Run the whole extraction and return the path of the file written.
pub fn run(cli: &Cli, source: &dyn StructureSource) -> Result<PathBuf, AppError> {
    if cli.begin > cli.end {
        return Err(AppError::Usage(format!(
            "The first residue ({}) comes after the last one ({}).",
            cli.begin, cli.end
        )));
    }
    let input = InputPath::new(&cli.infile);
    ensure_local(&cli.infile, &input.identifier, source)?;

    let file = File::open(&cli.infile).map_err(AppError::CannotOpenInputFile)?;
    let structure = read_pdb(BufReader::new(file))?;
    let fragment = select(
        &structure,
        &input.identifier,
        cli.chain,
        cli.range(),
        cli.mode(),
    )?;

    let output = cli
        .outfile
        .clone()
        .unwrap_or_else(|| input.output_path(cli.chain, cli.range(), fragment.kind));
    info!("Writing result to: {}", output.display());
    write_atomically(&output, |writer| {
        writer.write_all(fragment.text.as_bytes())?;
        if !fragment.text.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        Ok(())
    })
    .map_err(AppError::CannotWriteOutputFile)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1abc.pdb", "1abc", "1abc")]
    #[case("data/1abc.pdb", "data/1abc", "1abc")]
    #[case("1abc", "1abc", "1abc")]
    #[case("model.pdb.pdb", "model.pdb", "model.pdb")]
    #[case("structure.ent", "structure.ent", "structure.ent")]
    fn test_input_path(#[case] infile: &str, #[case] base: &str, #[case] identifier: &str) {
        let input = InputPath::new(Path::new(infile));
        assert_eq!(input.base, PathBuf::from(base));
        assert_eq!(input.identifier, identifier);
    }

    #[rstest]
    #[case('A', 1, 100000, OutputKind::Coordinates, "data/1abc-A.pdb")]
    #[case('B', 10, 100000, OutputKind::Coordinates, "data/1abc-B-10.pdb")]
    #[case('A', 1, 50, OutputKind::Coordinates, "data/1abc-A-50.pdb")]
    #[case('C', 10, 50, OutputKind::Coordinates, "data/1abc-C-10-50.pdb")]
    #[case('A', 1, 100000, OutputKind::Sequence, "data/1abc-A.pir")]
    #[case('A', 10, 50, OutputKind::Sequence, "data/1abc-A-10-50.pir")]
    fn test_output_path(
        #[case] chain: char,
        #[case] first: isize,
        #[case] last: isize,
        #[case] kind: OutputKind,
        #[case] expected: &str,
    ) {
        let input = InputPath::new(Path::new("data/1abc.pdb"));
        let range = ResidueRange::new(first, last);
        assert_eq!(input.output_path(chain, range, kind), PathBuf::from(expected));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["pdbslice", "-i", "1abc.pdb"]);
        assert_eq!(cli.infile, PathBuf::from("1abc.pdb"));
        assert_eq!(cli.range(), ResidueRange::default());
        assert_eq!(cli.chain, 'A');
        assert_eq!(cli.mode(), SelectionMode::Coordinates { exclude: false });
        assert_eq!(cli.remote_url, DEFAULT_REMOTE_URL);
        assert!(cli.outfile.is_none());
    }

    #[test]
    fn test_cli_all_options() {
        let cli = Cli::parse_from([
            "pdbslice", "-i", "1abc.pdb", "-o", "out.pdb", "-b", "10", "-e", "20", "-c", "B", "-d",
        ]);
        assert_eq!(cli.outfile, Some(PathBuf::from("out.pdb")));
        assert_eq!(cli.range(), ResidueRange::new(10, 20));
        assert_eq!(cli.chain, 'B');
        assert_eq!(cli.mode(), SelectionMode::Coordinates { exclude: true });

        let cli = Cli::parse_from(["pdbslice", "--infile", "1abc.pdb", "--sequence", "--delete"]);
        assert_eq!(cli.mode(), SelectionMode::Sequence);
    }

    #[rstest]
    #[case(vec!["pdbslice"])]
    #[case(vec!["pdbslice", "-i", "1abc.pdb", "-c", "AB"])]
    #[case(vec!["pdbslice", "-i", "1abc.pdb", "-b", "first"])]
    fn test_cli_usage_errors(#[case] arguments: Vec<&str>) {
        assert!(Cli::try_parse_from(arguments).is_err());
    }
}
