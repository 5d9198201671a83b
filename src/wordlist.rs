use hashbrown::HashSet;
use std::fs;
use std::path::Path;

fn validate_entry(entry: &str, lineno: usize, path: &Path) -> Result<(), String> {
    if !entry.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(format!(
            "{}:{}: entry '{}' contains characters outside A-Z",
            path.display(),
            lineno,
            entry
        ));
    }
    Ok(())
}

/// Load a word list: one word per line, trimmed, blank lines skipped.
/// Case is preserved here; placement upper-cases later.
pub fn load_words_from_txt<P: AsRef<Path>>(path: P) -> Result<Vec<String>, String> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .map_err(|e| format!("failed to read word list {}: {e}", path.display()))?;

    let mut words = Vec::new();
    for (lineno, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        validate_entry(line, lineno + 1, path)?;
        words.push(line.to_string());
    }
    Ok(words)
}

/// Load a denylist: one forbidden term per line, trimmed, blank lines
/// skipped, upper-cased at load so the scanner compares like against like.
pub fn load_denylist_from_txt<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, String> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .map_err(|e| format!("failed to read denylist {}: {e}", path.display()))?;

    let mut terms = HashSet::new();
    for (lineno, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        validate_entry(line, lineno + 1, path)?;
        terms.insert(line.to_ascii_uppercase());
    }
    Ok(terms)
}
