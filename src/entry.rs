//! Display records for directory listings.

use std::ffi::OsStr;
use std::fs::{DirEntry, Metadata};
use std::io;

use chrono::{DateTime, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};
use serde::Serialize;

use crate::Config;
use crate::humanize::{byte_size, relative_time};

/// Bytes left unescaped in a link to a single path segment: RFC 3986 unreserved
/// characters plus the sub-delimiters that are safe inside a segment. `:` stays
/// escaped so a relative link like `a:b.txt` is not read as a URL scheme.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b'@');

/// Kind of a listing entry, as understood by the page script
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    Folder,
    FolderBack,
    Media,
    File,
}

/// One row of a directory listing
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub url: String,
    pub last_modified: String,
    pub size: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// Classify a name. Only directory-ness and the name suffix matter.
pub fn classify(name: &str, is_dir: bool, config: &Config) -> EntryKind {
    if is_dir {
        EntryKind::Folder
    } else if config.is_media_name(name) {
        EntryKind::Media
    } else {
        EntryKind::File
    }
}

impl Entry {
    /// The synthetic ".." row pointing at the parent directory.
    pub fn parent() -> Self {
        Self {
            name: "..".to_string(),
            url: "..".to_string(),
            last_modified: String::new(),
            size: String::new(),
            kind: EntryKind::FolderBack,
        }
    }

    /// Build an entry from a file name and the metadata describing it.
    ///
    /// `name` is for display and may be lossy; `url` is built from the raw
    /// name bytes so every listed entry can be requested back.
    pub fn from_metadata(
        file_name: &OsStr,
        metadata: &Metadata,
        now: DateTime<Utc>,
        config: &Config,
    ) -> io::Result<Self> {
        let modified: DateTime<Utc> = metadata.modified()?.into();
        let display = file_name.to_string_lossy();
        let kind = classify(&display, metadata.is_dir(), config);

        let (name, url) = match kind {
            EntryKind::Folder => {
                let name = format!("{}/", display);
                // Directories link by raw name unless it is not representable as text
                let url = match file_name.to_str() {
                    Some(_) => name.clone(),
                    None => format!("{}/", segment_url(file_name)),
                };
                (name, url)
            }
            _ => (display.into_owned(), segment_url(file_name)),
        };

        Ok(Self {
            name,
            url,
            last_modified: relative_time(modified, now),
            size: byte_size(metadata.len()),
            kind,
        })
    }

    /// Build an entry from a raw directory entry. Fails if its metadata
    /// cannot be read (removed mid-scan, permissions).
    pub fn from_dir_entry(entry: &DirEntry, now: DateTime<Utc>, config: &Config) -> io::Result<Self> {
        let metadata = entry.metadata()?;
        Self::from_metadata(&entry.file_name(), &metadata, now, config)
    }
}

/// Percent-escape one raw file name for use as a relative link.
fn segment_url(file_name: &OsStr) -> String {
    percent_encode(file_name.as_encoded_bytes(), SEGMENT).to_string()
}
