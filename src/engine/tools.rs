//! Path and filter utilities for the file enumerator.

use std::path::Path;

/// OS junk files that are never log files.
pub fn is_os_hidden_file(path: &Path) -> bool {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => matches!(
            name,
            ".DS_Store" | ".AppleDouble" | "Thumbs.db" | "Desktop.ini" | ".directory"
        ) || name.starts_with("._"),
        None => false,
    }
}

/// True if `path` survives the exclude patterns (matched against the file
/// name and the full path) and is not an OS junk file.
pub fn should_include_file(path: &Path, exclude_patterns: &[String]) -> bool {
    if is_os_hidden_file(path) {
        return false;
    }
    if exclude_patterns.is_empty() {
        return true;
    }
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let full = path.to_str().unwrap_or("");
    !exclude_patterns
        .iter()
        .any(|p| glob_match(p, name) || glob_match(p, full))
}

/// Minimal glob matching: `*` matches any run of characters, `?` exactly one.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    fn matches(pat: &[char], txt: &[char]) -> bool {
        match pat.split_first() {
            None => txt.is_empty(),
            Some(('*', rest)) => {
                (0..=txt.len()).any(|skip| matches(rest, &txt[skip..]))
            }
            Some(('?', rest)) => !txt.is_empty() && matches(rest, &txt[1..]),
            Some((c, rest)) => txt.first() == Some(c) && matches(rest, &txt[1..]),
        }
    }
    let pat: Vec<char> = pattern.chars().collect();
    let txt: Vec<char> = text.chars().collect();
    matches(&pat, &txt)
}
