//! Education extractor. Degree-indicator hits in document order, each joined
//! with its absorbed institution line when one was found.

use crate::extract::patterns::PatternRegistry;
use crate::extract::sections::scan_indicator_lines;

/// Maximum education entries reported per parse.
pub const MAX_EDUCATION_ENTRIES: usize = 3;

/// Returns up to three `degree line` or `degree line - institution` strings.
/// The scanner yields every hit; truncation is this extractor's policy.
pub fn extract_education(lines: &[&str], registry: &PatternRegistry) -> Vec<String> {
    scan_indicator_lines(lines, registry.degree_indicators())
        .into_iter()
        .take(MAX_EDUCATION_ENTRIES)
        .map(|hit| match hit.context {
            Some(institution) => format!("{} - {}", hit.line, institution),
            None => hit.line,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PatternRegistry {
        PatternRegistry::load().unwrap()
    }

    #[test]
    fn test_degree_line_joined_with_institution() {
        let lines = vec![
            "Bachelor of Technology in Computer Science",
            "Indian Institute of Technology",
        ];
        assert_eq!(
            extract_education(&lines, &registry()),
            vec![
                "Bachelor of Technology in Computer Science - Indian Institute of Technology"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_degree_line_without_usable_next_line_stands_alone() {
        let lines = vec!["PhD in Mathematics", "2021."];
        assert_eq!(
            extract_education(&lines, &registry()),
            vec!["PhD in Mathematics".to_string()]
        );
    }

    #[test]
    fn test_entries_follow_document_order_and_cap_at_three() {
        let lines = vec![
            "B.Tech in Electronics",
            "",
            "Master of Science in Data Engineering",
            "",
            "Diploma in Web Development",
            "",
            "Bachelor of Arts in Design",
        ];
        let education = extract_education(&lines, &registry());
        assert_eq!(education.len(), MAX_EDUCATION_ENTRIES);
        assert!(education[0].starts_with("B.Tech"));
        assert!(education[1].starts_with("Master of Science"));
        assert!(education[2].starts_with("Diploma"));
    }

    #[test]
    fn test_no_degree_indicator_yields_empty_sequence() {
        let lines = vec!["Jane Doe", "Software Engineer", "EDUCATION"];
        assert!(extract_education(&lines, &registry()).is_empty());
    }
}
