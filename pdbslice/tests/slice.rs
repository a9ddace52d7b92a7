use std::cell::Cell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use pdbslice::application::{run, AppError, Cli};
use pdbslice::fragment::SelectionError;
use pdbslice::source::{write_atomically, FetchError, StructureSource};
use pdbslice::test_ressource;
use tempfile::TempDir;

use test_log::test;

/// Serves the test structure as if it were downloaded, and counts the
/// downloads.
struct LocalMirror {
    downloads: Cell<usize>,
}

impl LocalMirror {
    fn new() -> Self {
        LocalMirror {
            downloads: Cell::new(0),
        }
    }
}

impl StructureSource for LocalMirror {
    fn fetch(&self, identifier: &str, destination: &Path) -> Result<(), FetchError> {
        self.downloads.set(self.downloads.get() + 1);
        if identifier != "1tst" {
            return Err(FetchError::Status {
                identifier: String::from(identifier),
                url: String::from("mirror://"),
                status: 404,
            });
        }
        let content = fs::read(test_ressource!("/fragment.pdb"))?;
        write_atomically(destination, |writer| writer.write_all(&content))?;
        Ok(())
    }
}

/// A scratch directory holding a copy of the test structure as `1tst.pdb`.
fn workspace() -> (TempDir, PathBuf) {
    let directory = tempfile::tempdir().expect("Could not create a temporary directory.");
    let infile = directory.path().join("1tst.pdb");
    fs::copy(test_ressource!("/fragment.pdb"), &infile).expect("Could not copy the test file.");
    (directory, infile)
}

fn atom_lines(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| line.starts_with("ATOM") || line.starts_with("HETATM"))
        .collect()
}

fn written_files(directory: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(directory)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn default_run_writes_chain_a() {
    let (directory, infile) = workspace();
    let cli = Cli {
        infile: infile.clone(),
        ..Default::default()
    };
    let mirror = LocalMirror::new();

    let output = run(&cli, &mirror).expect("The run failed.");

    assert_eq!(output, directory.path().join("1tst-A.pdb"));
    assert_eq!(mirror.downloads.get(), 0);
    let input = fs::read_to_string(&infile).unwrap();
    let expected: Vec<&str> = atom_lines(&input)
        .into_iter()
        .filter(|line| &line[21..22] == "A")
        .collect();
    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().collect::<Vec<_>>(), expected);
    assert!(written.ends_with('\n'));
}

#[test]
fn range_and_delete_partition_the_chain() {
    let (directory, infile) = workspace();
    let kept = Cli {
        infile: infile.clone(),
        begin: 2,
        end: 3,
        ..Default::default()
    };
    let mirror = LocalMirror::new();

    let kept_path = run(&kept, &mirror).unwrap();
    assert_eq!(kept_path, directory.path().join("1tst-A-2-3.pdb"));
    let kept = fs::read_to_string(kept_path).unwrap();

    let removed_path = directory.path().join("removed.pdb");
    let removed = Cli {
        infile,
        outfile: Some(removed_path.clone()),
        begin: 2,
        end: 3,
        delete: true,
        ..Default::default()
    };
    assert_eq!(run(&removed, &mirror).unwrap(), removed_path);
    let removed = fs::read_to_string(removed_path).unwrap();

    let kept: Vec<&str> = kept.lines().collect();
    let removed: Vec<&str> = removed.lines().collect();
    // ALA 2, GLY 3 and GLY 3A.
    assert_eq!(kept.len(), 13);
    assert_eq!(kept.len() + removed.len(), 25);
    assert!(kept.iter().all(|line| !removed.contains(line)));
}

#[test]
fn sequence_mode_writes_pir_record() {
    let (directory, infile) = workspace();
    let cli = Cli {
        infile,
        chain: 'B',
        sequence: true,
        ..Default::default()
    };

    let output = run(&cli, &LocalMirror::new()).unwrap();

    assert_eq!(output, directory.path().join("1tst-B.pir"));
    // 128.1741 + 186.2132 + 18.01528 = 332.40258
    assert_eq!(fs::read_to_string(output).unwrap(), ">1tst 332 Da\nKW\n");
}

#[test]
fn missing_chain_writes_nothing() {
    let (directory, infile) = workspace();
    let cli = Cli {
        infile,
        chain: 'Z',
        ..Default::default()
    };

    let error = run(&cli, &LocalMirror::new()).unwrap_err();

    assert!(matches!(
        error,
        AppError::Selection(SelectionError::ChainNotFound('Z'))
    ));
    assert_eq!(written_files(directory.path()), vec!["1tst.pdb"]);
}

#[test]
fn missing_input_is_fetched() {
    let directory = tempfile::tempdir().unwrap();
    let infile = directory.path().join("1tst.pdb");
    let cli = Cli {
        infile: infile.clone(),
        ..Default::default()
    };
    let mirror = LocalMirror::new();

    let output = run(&cli, &mirror).unwrap();

    assert_eq!(mirror.downloads.get(), 1);
    assert!(infile.exists());
    assert_eq!(output, directory.path().join("1tst-A.pdb"));

    // The second run finds the file on disk.
    run(&cli, &mirror).unwrap();
    assert_eq!(mirror.downloads.get(), 1);
}

#[test]
fn failed_fetch_aborts() {
    let directory = tempfile::tempdir().unwrap();
    let cli = Cli {
        infile: directory.path().join("9zzz.pdb"),
        ..Default::default()
    };

    let error = run(&cli, &LocalMirror::new()).unwrap_err();

    assert!(matches!(
        error,
        AppError::Fetch(FetchError::Status { status: 404, .. })
    ));
    assert!(written_files(directory.path()).is_empty());
}

#[test]
fn malformed_input_reports_line() {
    let directory = tempfile::tempdir().unwrap();
    let infile = directory.path().join("broken.pdb");
    let text = "\
HEADER    BROKEN
ATOM      1  N   ALA A   1      11.104   x.134  -6.504  1.00  0.00           N
";
    fs::write(&infile, text).unwrap();
    let cli = Cli {
        infile,
        ..Default::default()
    };

    let error = run(&cli, &LocalMirror::new()).unwrap_err();

    assert!(matches!(error, AppError::CannotParseInputFile(_)));
    assert!(error.to_string().contains("Line 2"));
    assert_eq!(written_files(directory.path()), vec!["broken.pdb"]);
}

#[test]
fn inverted_range_is_a_usage_error() {
    let (directory, infile) = workspace();
    for (delete, sequence) in [(false, false), (true, false), (false, true)] {
        let cli = Cli {
            infile: infile.clone(),
            begin: 10,
            end: 2,
            delete,
            sequence,
            ..Default::default()
        };
        let error = run(&cli, &LocalMirror::new()).unwrap_err();
        assert!(matches!(error, AppError::Usage(_)));
    }
    assert_eq!(written_files(directory.path()), vec!["1tst.pdb"]);
}

#[test]
fn empty_fragment_still_writes_a_file() {
    let (directory, infile) = workspace();
    let cli = Cli {
        infile,
        begin: 500,
        end: 600,
        ..Default::default()
    };

    let output = run(&cli, &LocalMirror::new()).unwrap();

    assert_eq!(output, directory.path().join("1tst-A-500-600.pdb"));
    assert_eq!(fs::read_to_string(output).unwrap(), "\n");
}
