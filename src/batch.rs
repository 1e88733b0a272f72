use std::collections::BTreeMap;
use std::path::Path;

use fullname_parser::{ParsedName, parse_fullname};

use crate::error::Result;
use crate::scanner::{read_names, scan_name_lists};

/// One parsed line of a name-list file.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct NameRecord {
    pub file: String,
    pub line: usize,
    pub input: String,
    pub name: ParsedName,
}

/// How many records populated each field.
#[derive(Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldStats {
    pub files: usize,
    pub names: usize,
    pub fields: BTreeMap<String, usize>,
}

impl FieldStats {
    fn add(&mut self, name: &ParsedName) {
        self.names += 1;
        for (field, value) in name.fields() {
            if !value.is_empty() {
                *self.fields.entry(field.to_string()).or_insert(0) += 1;
            }
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct BatchReport {
    pub stats: FieldStats,
    pub records: Vec<NameRecord>,
}

/// Parse every name in every list file under `root`.
pub fn run_batch(root: &Path, ext: &str) -> Result<BatchReport> {
    let files = scan_name_lists(root, ext)?;
    log::info!("found {} name list file(s) under {}", files.len(), root.display());

    let mut stats = FieldStats::default();
    let mut records = Vec::new();

    for file in &files {
        let names = read_names(file)?;
        log::debug!("{}: {} name(s)", file.relative, names.len());
        stats.files += 1;

        for entry in names {
            let name = parse_fullname(&entry.text);
            stats.add(&name);
            records.push(NameRecord {
                file: file.relative.clone(),
                line: entry.line,
                input: entry.text,
                name,
            });
        }
    }

    log::info!("parsed {} name(s) from {} file(s)", stats.names, stats.files);
    Ok(BatchReport { stats, records })
}
