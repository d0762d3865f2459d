use std::cmp::Ordering;
use std::fs::DirEntry;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::Config;
use crate::entry::{Entry, EntryKind};
use crate::error::BrowseError;

/// List the immediate children of `path`.
///
/// Entries come back in enumeration order unless `config.sort_entries` is set.
/// The first unreadable entry aborts the listing; no partial result is returned.
pub fn list_directory(path: &Path, config: &Config) -> Result<Vec<Entry>, BrowseError> {
    let mut entries = collect_entries(std::fs::read_dir(path)?, Utc::now(), config)?;

    if config.sort_entries {
        entries.sort_by(compare_entries);
    }

    debug!("Listed {} entries in {}", entries.len(), path.display());
    Ok(entries)
}

/// Classify every enumerated entry, stopping at the first failure.
fn collect_entries<I>(dir_entries: I, now: DateTime<Utc>, config: &Config) -> io::Result<Vec<Entry>>
where
    I: IntoIterator<Item = io::Result<DirEntry>>,
{
    dir_entries
        .into_iter()
        .map(|dir_entry| Entry::from_dir_entry(&dir_entry?, now, config))
        .collect()
}

/// Folders first, then case-insensitive by name.
fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    match (a.kind, b.kind) {
        (EntryKind::Folder, EntryKind::Folder) => compare_names(a, b),
        (EntryKind::Folder, _) => Ordering::Less,
        (_, EntryKind::Folder) => Ordering::Greater,
        _ => compare_names(a, b),
    }
}

fn compare_names(a: &Entry, b: &Entry) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}
