//! Where the input structures come from.
//!
//! The input file is read from the disk. When it is not there, a
//! [`StructureSource`] is asked to put it there first; [`RemoteSource`]
//! downloads it from a structure repository.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use reqwest::blocking::Client;
use thiserror::Error;

/// Files are downloaded from the RCSB by default.
pub const DEFAULT_REMOTE_URL: &str = "https://files.rcsb.org/download/";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Could not reach {url}: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },
    #[error("Could not find {identifier} at {url} (HTTP status {status}).")]
    Status {
        identifier: String,
        url: String,
        status: u16,
    },
    #[error("Could not save the downloaded file: {0}")]
    Io(#[from] io::Error),
}

/// Something able to provide a local copy of a structure file.
pub trait StructureSource {
    /// Write the structure named `identifier` at `destination`.
    fn fetch(&self, identifier: &str, destination: &Path) -> Result<(), FetchError>;
}

/// Download PDB files over HTTP with a single GET request.
pub struct RemoteSource {
    base_url: String,
    client: Client,
}

impl RemoteSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        RemoteSource {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// The address of the PDB file for a structure identifier.
    pub fn url(&self, identifier: &str) -> String {
        let separator = if self.base_url.ends_with('/') { "" } else { "/" };
        format!(
            "{}{separator}{}.pdb",
            self.base_url,
            identifier.to_uppercase()
        )
    }
}

impl Default for RemoteSource {
    fn default() -> Self {
        RemoteSource::new(DEFAULT_REMOTE_URL)
    }
}

impl StructureSource for RemoteSource {
    fn fetch(&self, identifier: &str, destination: &Path) -> Result<(), FetchError> {
        let url = self.url(identifier);
        info!("Downloading {url}");
        let mut response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                identifier: String::from(identifier),
                url,
                status: status.as_u16(),
            });
        }
        write_atomically(destination, |writer| {
            response.copy_to(writer).map_err(io::Error::other)?;
            Ok(())
        })?;
        Ok(())
    }
}

/// Make sure the structure file exists at `path`, asking `source` for it
/// if it does not.
pub fn ensure_local(
    path: &Path,
    identifier: &str,
    source: &dyn StructureSource,
) -> Result<(), FetchError> {
    if path.exists() {
        info!("Found file {}", path.display());
        return Ok(());
    }
    info!("{} not found locally, fetching {identifier}.", path.display());
    source.fetch(identifier, path)
}

/// Write a file through a temporary sibling that is renamed at the end.
///
/// A failed write never leaves a partial file at `destination`; the
/// temporary file is removed instead.
pub fn write_atomically<F>(destination: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let temporary = temporary_path(destination);
    let result = File::create(&temporary).and_then(|file| {
        let mut writer = BufWriter::new(file);
        write(&mut writer)?;
        writer.flush()?;
        writer.get_ref().sync_all()
    });
    let result = result.and_then(|_| fs::rename(&temporary, destination));
    if result.is_err() {
        // The temporary file may not exist if the creation failed.
        fs::remove_file(&temporary).ok();
    }
    result
}

fn temporary_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    destination.with_file_name(name)
}
