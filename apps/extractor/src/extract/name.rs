//! Name extractor. Resumes put the candidate's name near the top, and names
//! are short; that positional hunch is the whole algorithm.

/// How many lines from the top are considered name candidates.
const NAME_SCAN_WINDOW: usize = 5;

/// Maximum whitespace-delimited tokens for a line to count as a name.
const MAX_NAME_TOKENS: usize = 4;

/// Returns the first non-empty line within the scan window that has at most
/// four tokens, or an empty string when nothing qualifies.
pub fn extract_name(lines: &[&str]) -> String {
    lines
        .iter()
        .take(NAME_SCAN_WINDOW)
        .find(|line| !line.is_empty() && line.split_whitespace().count() <= MAX_NAME_TOKENS)
        .map(|line| line.to_string())
        .unwrap_or_default()
}
