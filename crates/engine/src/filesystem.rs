use crate::error::{EngineError, Result};
use crate::options::TraversalOrder;
use crate::pattern::Pattern;
use std::collections::VecDeque;
use std::ffi::OsStr;
use std::fs::DirEntry;
use std::path::{Path, PathBuf};

/// Counters describing what a walk saw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub dirs: usize,
    pub scanned: usize,
    pub hidden: usize,
    pub empty: usize,
    pub unmatched: usize,
}

/// Hidden entries start with a `.` byte.
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// Walk `root` with an explicit work-list and call `visit` for every
/// non-hidden, non-empty regular file whose name matches `pattern`.
///
/// Hidden directories are not entered. Symlinks are neither followed nor
/// scanned. Entries of a directory are handled in byte order of their names.
///
/// # Errors
/// The first directory that cannot be listed, entry that cannot be stat'ed,
/// or error returned by `visit` aborts the walk.
pub fn walk<F>(
    root: &Path,
    pattern: &Pattern,
    order: TraversalOrder,
    mut visit: F,
) -> Result<WalkSummary>
where
    F: FnMut(&Path) -> Result<()>,
{
    let mut summary = WalkSummary::default();
    let mut pending = VecDeque::from([root.to_path_buf()]);

    let next = |pending: &mut VecDeque<PathBuf>| match order {
        TraversalOrder::DepthFirst => pending.pop_back(),
        TraversalOrder::BreadthFirst => pending.pop_front(),
    };

    while let Some(dir) = next(&mut pending) {
        summary.dirs += 1;
        let mut subdirs = Vec::new();

        for entry in read_sorted(&dir)? {
            let name = entry.file_name();
            let path = entry.path();
            if is_hidden(&name) {
                log::debug!("skip hidden {}", path.display());
                summary.hidden += 1;
                continue;
            }

            let file_type = entry.file_type().map_err(|e| EngineError::Stat {
                path: path.clone(),
                source: e,
            })?;

            if file_type.is_dir() {
                subdirs.push(path);
            } else if file_type.is_file() {
                let size = entry
                    .metadata()
                    .map_err(|e| EngineError::Stat {
                        path: path.clone(),
                        source: e,
                    })?
                    .len();
                if size == 0 {
                    log::debug!("skip empty {}", path.display());
                    summary.empty += 1;
                } else if !pattern.matches(&name) {
                    log::trace!("skip unmatched {}", path.display());
                    summary.unmatched += 1;
                } else {
                    visit(&path)?;
                    summary.scanned += 1;
                }
            }
        }

        // スタックの場合は逆順に積んで名前順に取り出す
        match order {
            TraversalOrder::DepthFirst => pending.extend(subdirs.into_iter().rev()),
            TraversalOrder::BreadthFirst => pending.extend(subdirs),
        }
    }

    Ok(summary)
}

fn read_sorted(dir: &Path) -> Result<Vec<DirEntry>> {
    let read_err = |e| EngineError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    };
    let mut entries = std::fs::read_dir(dir)
        .map_err(read_err)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_err)?;
    entries.sort_by_key(DirEntry::file_name);
    Ok(entries)
}
