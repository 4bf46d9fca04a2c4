//! Locating the directory of template trees.
//!
//! Templates ship next to the tool: a `templates/` directory beside the
//! executable, or beside one of its ancestors (which covers both an
//! installed layout and `target/<profile>/kitgen` during development).
//!
//! ```text
//! templates/
//! ├── basic-crud/
//! │   ├── package.json
//! │   └── README.md
//! ├── dashboard/
//! └── plugin/
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

/// Directory name searched for.
pub const TEMPLATES_DIR: &str = "templates";

/// How many directories above the executable's own are searched.
const MAX_ANCESTORS: usize = 4;

/// Find a `templates/` directory relative to `exe`.
pub fn discover_from(exe: &Path) -> Option<PathBuf> {
    exe.parent()?
        .ancestors()
        .take(MAX_ANCESTORS)
        .map(|dir| dir.join(TEMPLATES_DIR))
        .find(|candidate| candidate.is_dir())
}

/// Resolve the templates root.
///
/// An explicitly configured path always wins, existing or not (a missing
/// root later surfaces as a per-template warning). Otherwise the search in
/// [`discover_from`] runs against the current executable; if that finds
/// nothing, `templates/` beside the executable is returned.
pub fn resolve(configured: Option<&Path>) -> PathBuf {
    if let Some(path) = configured {
        debug!(path = %path.display(), "Using configured templates root");
        return path.to_path_buf();
    }

    let exe = std::env::current_exe()
        .and_then(|p| p.canonicalize())
        .unwrap_or_else(|_| PathBuf::from("."));

    match discover_from(&exe) {
        Some(found) => {
            debug!(path = %found.display(), "Discovered templates root");
            found
        }
        None => {
            let fallback = exe
                .parent()
                .map(|dir| dir.join(TEMPLATES_DIR))
                .unwrap_or_else(|| PathBuf::from(TEMPLATES_DIR));
            debug!(path = %fallback.display(), "No templates root found");
            fallback
        }
    }
}
