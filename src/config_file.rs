//! Line scanner for the INI-like shared credentials and config files.
//!
//! Parsing is deliberately permissive: these files are hand edited, so blank
//! lines, comments and malformed lines are skipped rather than rejected.

use std::collections::BTreeMap;

/// Returns the `key = value` pairs found under the named bracketed section.
///
/// A missing section yields an empty map; callers decide whether required
/// keys are absent. Section comparison is exact and case sensitive.
pub fn section_values(content: &str, section: &str) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();
    let mut current: Option<&str> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = section_header(line) {
            current = Some(name);
            continue;
        }

        if current != Some(section) {
            continue;
        }

        // Lines without a '=' are tolerated and dropped.
        if let Some((key, value)) = line.split_once('=') {
            values.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    values
}

/// Returns every section name in file order, without de-duplication.
pub fn section_names(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| section_header(line.trim()))
        .map(|name| name.to_string())
        .collect()
}

fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}
