//! Path resolution and file:// URL construction

use std::path::{Path, PathBuf};
use url::Url;

use crate::core::error::KqError;

/// Platform family for file URL construction.
///
/// Passed explicitly so URL construction stays a pure function that can be
/// exercised for both families on any host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFamily {
    Windows,
    Unix,
}

impl PathFamily {
    /// The family this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            PathFamily::Windows
        } else {
            PathFamily::Unix
        }
    }
}

/// Resolve a user-supplied path to its canonical absolute form.
///
/// The path must exist at call time; the check-then-canonicalize window is
/// accepted.
pub fn resolve(path: &Path) -> Result<PathBuf, KqError> {
    if !path.exists() {
        return Err(KqError::NotFound {
            path: path.to_path_buf(),
        });
    }
    path.canonicalize().map_err(|source| KqError::Resolve {
        path: path.to_path_buf(),
        source,
    })
}

/// Build a file:// URL for an absolute path on the current platform.
pub fn file_url(path: &Path) -> String {
    file_url_for(path, PathFamily::current())
}

/// Build a file:// URL for an absolute path of the given platform family.
///
/// Windows paths carry no leading separator ("C:\..."), so the Windows
/// family inserts one to produce a file:///C:/... URL.
pub fn file_url_for(path: &Path, family: PathFamily) -> String {
    let mut slashed = path.to_string_lossy().replace('\\', "/");
    if family == PathFamily::Windows && !slashed.starts_with('/') {
        slashed.insert(0, '/');
    }
    let mut url = Url::parse("file:///").expect("static file URL base");
    url.set_path(&slashed);
    url.into()
}
