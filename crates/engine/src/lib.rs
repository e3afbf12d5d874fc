// crates/engine/src/lib.rs
use std::path::Path;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod pattern;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::filesystem::WalkSummary;
use crate::pattern::Pattern;
use crate::stats::FrequencyTable;

/// Owns the frequency table for one run and scans roots into it.
#[derive(Debug)]
pub struct Scanner<'a> {
    config: &'a Config,
    table: FrequencyTable,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            table: FrequencyTable::new(),
        }
    }

    /// Scan a single top-level directory argument.
    ///
    /// The root is stat'ed without following symlinks; a root that is not a
    /// directory only produces a warning and the walk is still attempted.
    /// The pattern is compiled for every root.
    ///
    /// # Errors
    /// Fails on the first stat, pattern, listing or read error.
    pub fn scan_root(&mut self, root: &Path) -> Result<WalkSummary> {
        let meta = std::fs::symlink_metadata(root).map_err(|e| EngineError::Stat {
            path: root.to_path_buf(),
            source: e,
        })?;
        if !meta.is_dir() {
            log::warn!("{} should be a directory", root.display());
        }

        let pattern = Pattern::compile(&self.config.pattern)?;
        log::info!("scanning {} for /{}/", root.display(), pattern.as_str());

        let table = &mut self.table;
        let summary = filesystem::walk(root, &pattern, self.config.order, |path| {
            processor::process_file(path, table).map(|_| ())
        })?;
        log::info!(
            "{}: {} dirs, {} files scanned",
            root.display(),
            summary.dirs,
            summary.scanned
        );
        Ok(summary)
    }

    pub fn finish(self) -> FrequencyTable {
        self.table
    }
}

/// Scan every root in order and return the accumulated table.
///
/// # Errors
/// Returns the first error encountered; nothing is accumulated past it.
pub fn run(config: &Config) -> Result<FrequencyTable> {
    let mut scanner = Scanner::new(config);
    for root in &config.roots {
        scanner.scan_root(root)?;
    }
    Ok(scanner.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use std::fs;
    use std::path::PathBuf;

    fn config(pattern: &str, roots: Vec<PathBuf>) -> Config {
        ConfigBuilder::default()
            .pattern(pattern)
            .roots(roots)
            .build()
            .unwrap()
    }

    #[test]
    fn single_file_scenario() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "aab").unwrap();

        let table = run(&config(r"\.txt$", vec![dir.path().to_path_buf()])).unwrap();
        assert_eq!(table.count('A'), 2);
        assert_eq!(table.count('B'), 1);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn roots_share_one_table() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("x.txt"), "ab").unwrap();
        fs::write(second.path().join("y.txt"), "Bc").unwrap();

        let table = run(&config(
            "txt",
            vec![first.path().to_path_buf(), second.path().to_path_buf()],
        ))
        .unwrap();
        assert_eq!(table.count('B'), 2);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn only_empty_and_hidden_files_leave_table_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("e.txt"), "").unwrap();
        fs::write(dir.path().join(".secret.txt"), "classified").unwrap();

        let table = run(&config(r"\.txt$", vec![dir.path().to_path_buf()])).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn invalid_pattern_fails_before_walking() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&config("(", vec![dir.path().to_path_buf()])).unwrap_err();
        assert!(matches!(err, EngineError::Pattern { .. }));
    }

    #[test]
    fn missing_root_is_a_stat_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&config(".", vec![dir.path().join("missing")])).unwrap_err();
        assert!(matches!(err, EngineError::Stat { .. }));
    }

    #[test]
    fn missing_root_is_reported_before_bad_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&config("(", vec![dir.path().join("missing")])).unwrap_err();
        assert!(matches!(err, EngineError::Stat { .. }));
    }

    #[test]
    fn file_root_fails_when_listed() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "abc").unwrap();

        let err = run(&config(".", vec![file])).unwrap_err();
        assert!(matches!(err, EngineError::ReadDir { .. }));
    }

    #[test]
    fn error_in_later_root_discards_everything() {
        let good = tempfile::tempdir().unwrap();
        fs::write(good.path().join("a.txt"), "a").unwrap();
        let cfg = config(
            ".",
            vec![good.path().to_path_buf(), good.path().join("missing")],
        );

        let mut scanner = Scanner::new(&cfg);
        let summary = scanner.scan_root(&cfg.roots[0]).unwrap();
        assert_eq!(summary.scanned, 1);
        assert!(scanner.scan_root(&cfg.roots[1]).is_err());
        assert!(run(&cfg).is_err());
    }
}
