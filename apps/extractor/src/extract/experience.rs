//! Experience extractor. A thin policy layer over the boundary-mode section
//! scan: find the work-history section, collect up to three entries.

use crate::extract::patterns::PatternRegistry;
use crate::extract::sections::scan_bounded_section;

/// Maximum experience entries reported per parse.
pub const MAX_EXPERIENCE_ENTRIES: usize = 3;

/// Returns up to three space-joined experience entries, or an empty sequence
/// when the document never announces an experience section.
pub fn extract_experience(lines: &[&str], registry: &PatternRegistry) -> Vec<String> {
    scan_bounded_section(
        lines,
        registry.experience_indicators(),
        MAX_EXPERIENCE_ENTRIES,
    )
}
