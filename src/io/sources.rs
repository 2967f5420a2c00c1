//! Reading export files from disk into named sources.

use crate::core::{Error, Result};
use crate::parse::NamedSource;
use std::fs;
use std::path::PathBuf;

/// Read every path into a named source, in the given order.
///
/// The source name is the file name (project attribution derives from it).
/// Any unreadable path fails the whole batch; the combiner's all-or-nothing
/// contract starts here.
pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<NamedSource>> {
    paths
        .iter()
        .map(|path| {
            let content =
                fs::read_to_string(path).map_err(|source| Error::file_read(path.clone(), source))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok(NamedSource { name, content })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("Alpha.csv");
        let b = dir.path().join("Beta.csv");
        fs::write(&a, "#,Tracker\n1,Bug\n").unwrap();
        fs::write(&b, "#,Tracker\n2,Bug\n").unwrap();
        let sources = read_sources(&[a, b]).unwrap();
        assert_eq!(sources[0].name, "Alpha.csv");
        assert_eq!(sources[1].name, "Beta.csv");
    }

    #[test]
    fn missing_file_fails_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        let err = read_sources(&[missing]).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
