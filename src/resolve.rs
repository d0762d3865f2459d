//! Mapping of request paths onto the served root.

use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode;
use tracing::debug;

/// Number of leading URL segments that belong to the mount point
/// (the empty segment before the first `/` and `files`).
const MOUNT_SEGMENTS: usize = 2;

/// A filesystem path confined to the served root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    path: PathBuf,
    at_root: bool,
}

impl ResolvedPath {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when no segment survived sanitization, i.e. the path is the root itself.
    pub fn is_root(&self) -> bool {
        self.at_root
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

/// Resolve a request path such as `/files/docs/notes.txt` under `root`.
///
/// The path is percent-decoded and split on `/`. The mount segments are dropped,
/// `..` segments are silently discarded, and `.` or empty segments collapse.
/// Whatever survives is joined onto the root, so the result can never climb
/// above it.
pub fn resolve(root: &Path, url_path: &str) -> ResolvedPath {
    let decoded: Vec<u8> = percent_decode(url_path.as_bytes()).collect();

    let mut path = root.to_path_buf();
    let mut at_root = true;

    for segment in decoded.split(|&b| b == b'/').skip(MOUNT_SEGMENTS) {
        if segment == b".." {
            debug!("Dropping parent segment from {:?}", url_path);
            continue;
        }

        // A decoded segment is a single name on unix; on other platforms it may
        // still carry separators or prefixes, so only plain names are joined.
        for component in segment_path(segment).components() {
            if let Component::Normal(name) = component {
                path.push(name);
                at_root = false;
            }
        }
    }

    ResolvedPath { path, at_root }
}

/// File names are raw bytes on unix, so decoded segments map onto them as-is.
#[cfg(unix)]
fn segment_path(segment: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(std::ffi::OsStr::from_bytes(segment))
}

#[cfg(not(unix))]
fn segment_path(segment: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(segment).into_owned())
}
