//! Static site export.
//!
//! Writes every page plus its assets into a directory that any static file
//! host can serve without this binary.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::ExportError;
use crate::render::{GLOBAL_CSS, render_document};
use crate::ui::app::Page;

/// Pages written by [`export_site`].
const PAGES: [Page; 2] = [Page::Home, Page::NotFound];

/// Files produced by an export, relative to the output directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: Vec<PathBuf>,
    pub assets: Vec<PathBuf>,
}

impl ExportSummary {
    pub fn total(&self) -> usize {
        self.pages.len() + self.assets.len()
    }
}

/// Render the site into `out_dir`.
///
/// `public_dir` is copied to `out_dir/public/` when it exists; a missing
/// directory is not an error.
pub fn export_site(out_dir: &Path, public_dir: &Path) -> Result<ExportSummary, ExportError> {
    let mut summary = ExportSummary::default();

    for page in PAGES {
        let rel = PathBuf::from(page.file_name());
        write_file(out_dir, &rel, render_document(page).as_bytes())?;
        summary.pages.push(rel);
    }

    let css = Path::new("static").join("globals.css");
    write_file(out_dir, &css, GLOBAL_CSS.as_bytes())?;
    summary.assets.push(css);

    if public_dir.is_dir() {
        // out_dir may live inside public_dir; never copy the export into itself.
        let out_canonical = fs::canonicalize(out_dir).map_err(|e| ExportError::Read {
            path: out_dir.to_path_buf(),
            source: e,
        })?;
        let walker = WalkDir::new(public_dir)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| !is_same_dir(entry, &out_canonical));
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(public_dir) else {
                return Err(ExportError::OutsidePublicDir(entry.path().to_path_buf()));
            };
            let target = Path::new("public").join(rel);
            let bytes = fs::read(entry.path()).map_err(|e| ExportError::Read {
                path: entry.path().to_path_buf(),
                source: e,
            })?;
            write_file(out_dir, &target, &bytes)?;
            summary.assets.push(target);
        }
    } else {
        debug!(public_dir = %public_dir.display(), "No public directory to copy");
    }

    info!(
        name: "site.exported",
        out_dir = %out_dir.display(),
        pages = summary.pages.len(),
        assets = summary.assets.len(),
        "Static site exported"
    );

    Ok(summary)
}

fn is_same_dir(entry: &walkdir::DirEntry, dir: &Path) -> bool {
    entry.file_type().is_dir()
        && fs::canonicalize(entry.path()).is_ok_and(|path| path == dir)
}

fn write_file(out_dir: &Path, rel: &Path, contents: &[u8]) -> Result<(), ExportError> {
    let path = out_dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ExportError::write(parent, e))?;
    }
    fs::write(&path, contents).map_err(|e| ExportError::write(path, e))
}
