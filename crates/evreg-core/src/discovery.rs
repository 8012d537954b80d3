use crate::error::EvregError;
use std::path::{Path, PathBuf};

/// PDF reports in `dir` whose file name contains `needle` (case-sensitive),
/// sorted by path so repeated runs see the same order.
pub fn discover_reports(dir: &Path, needle: &str) -> Result<Vec<PathBuf>, EvregError> {
    let dir = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&dir).join(format!("*{}*.pdf", glob::Pattern::escape(needle)));
    let options = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut files = Vec::new();
    for entry in glob::glob_with(&pattern.to_string_lossy(), options)? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => tracing::warn!(path = %e.path().display(), "skipping unreadable entry"),
        }
    }
    files.sort();

    tracing::debug!(count = files.len(), pattern = %pattern.display(), "reports discovered");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"%PDF").unwrap();
    }

    #[test]
    fn test_discover_matches_substring_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "electric_2022_01.pdf");
        touch(dir.path(), "electric_2021_09.pdf");
        touch(dir.path(), "ev-electric-summary.pdf");
        touch(dir.path(), "Electric_upper.pdf");
        touch(dir.path(), "electric_notes.txt");
        touch(dir.path(), "gas_2021.pdf");

        let found = discover_reports(dir.path(), "electric").unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(
            names,
            [
                "electric_2021_09.pdf",
                "electric_2022_01.pdf",
                "ev-electric-summary.pdf"
            ]
        );
    }

    #[test]
    fn test_discover_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_reports(dir.path(), "electric").unwrap().is_empty());
    }
}
