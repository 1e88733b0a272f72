use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// A name-list file discovered under the batch root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameListFile {
    pub path: PathBuf,
    /// Path relative to the batch root, for reporting.
    pub relative: String,
}

/// One name taken from a name-list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameLine {
    /// 1-based line number in the source file.
    pub line: usize,
    pub text: String,
}

/// Walk `root` recursively and collect every file with extension `ext`.
///
/// Hidden files and directories (leading `.`) are skipped. Results are
/// sorted by path so batch output is stable between runs.
pub fn scan_name_lists(root: &Path, ext: &str) -> Result<Vec<NameListFile>> {
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let mut results = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name().to_str().unwrap_or("")))
    {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                log::warn!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(ext) {
            continue;
        }

        let relative = path
            .strip_prefix(root)
            .unwrap_or(path)
            .display()
            .to_string();
        results.push(NameListFile {
            path: path.to_path_buf(),
            relative,
        });
    }

    log::debug!("found {} name list(s) under {}", results.len(), root.display());
    Ok(results)
}

/// Read the names in a list file: one per line, blank lines and `#` comments skipped.
pub fn read_names(file: &NameListFile) -> Result<Vec<NameLine>> {
    let content = std::fs::read_to_string(&file.path).map_err(|e| Error::io(&file.path, e))?;
    Ok(names_in(&content))
}

fn names_in(content: &str) -> Vec<NameLine> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, l)| {
            let text = l.trim();
            if text.is_empty() || text.starts_with('#') {
                None
            } else {
                Some(NameLine {
                    line: i + 1,
                    text: text.to_string(),
                })
            }
        })
        .collect()
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.') && name.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_names_skip_blanks_and_comments() {
        let names = names_in("# contacts\nJuan Xavier\n\n  Dr. Juan Xavier  \n");
        assert_eq!(
            names,
            vec![
                NameLine {
                    line: 2,
                    text: "Juan Xavier".into()
                },
                NameLine {
                    line: 4,
                    text: "Dr. Juan Xavier".into()
                },
            ]
        );
    }

    #[test]
    fn test_scan_filters_by_extension_and_hidden() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("team/.cache")).unwrap();
        fs::write(root.join("b.txt"), "Cotter\n").unwrap();
        fs::write(root.join("team/a.txt"), "Juan Xavier\n").unwrap();
        fs::write(root.join("team/notes.md"), "ignored\n").unwrap();
        fs::write(root.join("team/.cache/c.txt"), "ignored\n").unwrap();

        let files = scan_name_lists(root, "txt").unwrap();
        let relative: Vec<String> = files
            .iter()
            .map(|f| f.relative.replace('\\', "/"))
            .collect();
        assert_eq!(relative, ["b.txt", "team/a.txt"]);

        let names = read_names(&files[1]).unwrap();
        assert_eq!(names[0].text, "Juan Xavier");
    }

    #[test]
    fn test_scan_rejects_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            scan_name_lists(&missing, "txt"),
            Err(Error::NotADirectory(_))
        ));
    }
}
