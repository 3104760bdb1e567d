//! Read-only access to an exported streaming-history archive.
//!
//! Spotify delivers the export as a ZIP file; a gzip-compressed tar of the
//! same folder is accepted too. The container type is detected from the
//! first bytes of the file, not from its extension.

use crate::errors::{AppError, AppResult};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

const ZIP_MAGIC: [&[u8]; 2] = [b"PK\x03\x04", b"PK\x05\x06"];
const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    TarGz,
}

enum Source {
    Zip(ZipArchive<BufReader<File>>),
    // tar has no index: keep the path and rescan on each request
    TarGz(PathBuf),
}

pub struct HistoryArchive {
    source: Source,
}

impl HistoryArchive {
    /// Open `path` and validate its container format.
    pub fn open(path: &Path) -> AppResult<Self> {
        let mut file = File::open(path)?;

        let mut magic = [0u8; 4];
        let n = read_prefix(&mut file, &mut magic)?;
        file.rewind()?;

        let kind = sniff(&magic[..n]).ok_or_else(|| {
            AppError::ArchiveFormat(format!("{} is not a zip or tar.gz file", path.display()))
        })?;

        let source = match kind {
            ArchiveKind::Zip => Source::Zip(ZipArchive::new(BufReader::new(file))?),
            ArchiveKind::TarGz => Source::TarGz(path.to_path_buf()),
        };

        Ok(Self { source })
    }

    pub fn kind(&self) -> ArchiveKind {
        match self.source {
            Source::Zip(_) => ArchiveKind::Zip,
            Source::TarGz(_) => ArchiveKind::TarGz,
        }
    }

    /// Names of all file entries, in archive order. Nothing is extracted.
    pub fn entry_names(&mut self) -> AppResult<Vec<String>> {
        match &mut self.source {
            Source::Zip(zip) => {
                let mut names = Vec::with_capacity(zip.len());
                for i in 0..zip.len() {
                    let entry = zip.by_index_raw(i)?;
                    if !entry.is_dir() {
                        names.push(entry.name().to_string());
                    }
                }
                Ok(names)
            }
            Source::TarGz(path) => {
                let mut names = Vec::new();
                let mut tar = open_tar(path)?;
                for entry in tar.entries().map_err(tar_error)? {
                    let entry = entry.map_err(tar_error)?;
                    if entry.header().entry_type().is_file() {
                        names.push(entry.path().map_err(tar_error)?.to_string_lossy().into_owned());
                    }
                }
                Ok(names)
            }
        }
    }

    /// Entries selected by `prefix`/`suffix`, see [`matches_entry`].
    /// An empty result is a normal outcome.
    pub fn matching_entries(&mut self, prefix: &str, suffix: &str) -> AppResult<Vec<String>> {
        Ok(self
            .entry_names()?
            .into_iter()
            .filter(|name| matches_entry(name, prefix, suffix))
            .collect())
    }

    /// Full content of the entry called `name`.
    pub fn read_entry(&mut self, name: &str) -> AppResult<Vec<u8>> {
        let mut buf = Vec::new();

        match &mut self.source {
            Source::Zip(zip) => {
                let mut entry = zip.by_name(name)?;
                entry.read_to_end(&mut buf)?;
            }
            Source::TarGz(path) => {
                let mut tar = open_tar(path)?;
                let mut found = false;
                for entry in tar.entries().map_err(tar_error)? {
                    let mut entry = entry.map_err(tar_error)?;
                    if entry.path().map_err(tar_error)?.to_string_lossy() == name {
                        entry.read_to_end(&mut buf).map_err(tar_error)?;
                        found = true;
                        break;
                    }
                }
                if !found {
                    return Err(AppError::ArchiveFormat(format!("entry not found: {name}")));
                }
            }
        }

        Ok(buf)
    }
}

/// True when the base file name of `name` starts with `prefix` and the name
/// ends with `suffix`. Case-sensitive.
pub fn matches_entry(name: &str, prefix: &str, suffix: &str) -> bool {
    let base = name.rsplit('/').next().unwrap_or(name);
    base.starts_with(prefix) && name.ends_with(suffix)
}

fn sniff(magic: &[u8]) -> Option<ArchiveKind> {
    if ZIP_MAGIC.iter().any(|m| magic.starts_with(m)) {
        Some(ArchiveKind::Zip)
    } else if magic.starts_with(GZIP_MAGIC) {
        Some(ArchiveKind::TarGz)
    } else {
        None
    }
}

fn read_prefix(file: &mut File, buf: &mut [u8]) -> AppResult<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match file.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

fn open_tar(path: &Path) -> AppResult<tar::Archive<GzDecoder<BufReader<File>>>> {
    let file = File::open(path)?;
    Ok(tar::Archive::new(GzDecoder::new(BufReader::new(file))))
}

fn tar_error(e: std::io::Error) -> AppError {
    AppError::ArchiveFormat(format!("tar.gz: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "Streaming_History_Audio";

    #[test]
    fn test_matches_entry() {
        assert!(matches_entry(
            "Spotify Extended Streaming History/Streaming_History_Audio_2019-2020_0.json",
            PREFIX,
            ".json"
        ));
        assert!(matches_entry("Streaming_History_Audio.json", PREFIX, ".json"));

        // wrong kind of history
        assert!(!matches_entry(
            "Spotify Extended Streaming History/Streaming_History_Video_2020.json",
            PREFIX,
            ".json"
        ));
        // macOS resource forks
        assert!(!matches_entry(
            "__MACOSX/Spotify Extended Streaming History/._Streaming_History_Audio_2020.json",
            PREFIX,
            ".json"
        ));
        // prefix in the folder name only
        assert!(!matches_entry("Streaming_History_Audio/readme.json", PREFIX, ".json"));
        // case-sensitive
        assert!(!matches_entry("streaming_history_audio_2020.json", PREFIX, ".json"));
        assert!(!matches_entry("Streaming_History_Audio_2020.JSON", PREFIX, ".json"));
        assert!(!matches_entry("Streaming_History_Audio_2020.pdf", PREFIX, ".json"));
    }

    #[test]
    fn test_sniff() {
        assert_eq!(sniff(b"PK\x03\x04"), Some(ArchiveKind::Zip));
        assert_eq!(sniff(b"PK\x05\x06"), Some(ArchiveKind::Zip));
        assert_eq!(sniff(&[0x1f, 0x8b, 0x08, 0x00]), Some(ArchiveKind::TarGz));
        assert_eq!(sniff(b"{\"ts"), None);
        assert_eq!(sniff(b""), None);
    }
}
