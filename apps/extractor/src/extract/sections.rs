//! Section scanner: the shared line-classification primitive behind the
//! education and experience extractors.
//!
//! Two modes. Indicator-line mode marks individual keyword hits and absorbs
//! one line of trailing context. Section-boundary mode is a two-state machine
//! that accumulates everything between a section header and the next
//! header-looking line.

/// Minimum character count for a following line to be absorbed as context
/// (the "probably an institution name" heuristic). Kept as-is for parity
/// with long-standing behavior; there is no corpus to justify tuning it.
const MIN_CONTEXT_CHARS: usize = 5;

/// One keyword hit from indicator-line mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorHit {
    /// The line containing the indicator keyword.
    pub line: String,
    /// The immediately following line, when it looks like supporting context.
    pub context: Option<String>,
}

/// Indicator-line mode: every line containing any of `indicators`
/// (case-insensitive substring match) becomes a hit. The next line is
/// attached as context when it is non-empty and longer than five characters.
/// Callers apply their own entry caps; the scan itself is unbounded.
pub fn scan_indicator_lines(lines: &[&str], indicators: &[String]) -> Vec<IndicatorHit> {
    let mut hits = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if !contains_any(line, indicators) {
            continue;
        }
        let context = lines
            .get(i + 1)
            .filter(|next| !next.is_empty() && next.chars().count() > MIN_CONTEXT_CHARS)
            .map(|next| next.to_string());
        hits.push(IndicatorHit {
            line: line.to_string(),
            context,
        });
    }
    hits
}

/// State of the boundary-mode scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    InsideAccumulating,
}

/// Section-boundary mode: enters on a line containing any of `indicators`
/// (the header is consumed, never content), then accumulates non-empty lines
/// into space-joined entries. A boundary line (fully uppercase, or ending in
/// a colon) flushes the current buffer as one entry and then seeds the next
/// buffer itself. Indicator lines are consumed even mid-section. Stops once
/// `max_entries` have been flushed; a trailing buffer under the cap is
/// flushed at end of input.
pub fn scan_bounded_section(
    lines: &[&str],
    indicators: &[String],
    max_entries: usize,
) -> Vec<String> {
    let mut state = ScanState::Outside;
    let mut entries: Vec<String> = Vec::new();
    let mut buffer = String::new();

    for line in lines {
        if contains_any(line, indicators) {
            state = ScanState::InsideAccumulating;
            continue;
        }
        if state != ScanState::InsideAccumulating {
            continue;
        }
        if !line.is_empty() && is_boundary_line(line) {
            if !buffer.is_empty() {
                entries.push(std::mem::take(&mut buffer));
            }
            if entries.len() >= max_entries {
                return entries;
            }
        }
        if !line.is_empty() {
            if !buffer.is_empty() {
                buffer.push(' ');
            }
            buffer.push_str(line);
        }
    }

    if !buffer.is_empty() && entries.len() < max_entries {
        entries.push(buffer);
    }
    entries
}

fn contains_any(line: &str, indicators: &[String]) -> bool {
    let lowered = line.to_lowercase();
    indicators.iter().any(|ind| lowered.contains(ind.as_str()))
}

/// A line that reads as a new section header: fully uppercase (at least one
/// cased character, none lowercase) or ending with a colon.
fn is_boundary_line(line: &str) -> bool {
    if line.ends_with(':') {
        return true;
    }
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}
