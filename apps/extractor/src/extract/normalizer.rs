//! Text normalizer: raw document text to an ordered sequence of trimmed lines.

/// Splits raw text on line breaks and trims each line. Blank lines survive as
/// empty strings so positional heuristics downstream keep their bearings;
/// each extractor decides locally whether to skip them. Never fails: empty
/// input yields an empty sequence.
pub fn normalize_lines(raw_text: &str) -> Vec<&str> {
    raw_text.lines().map(str::trim).collect()
}
