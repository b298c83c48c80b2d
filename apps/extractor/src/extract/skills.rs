//! Skills extractor. Scans the case-folded full text for whole-word hits
//! against the registry vocabulary.

use crate::extract::patterns::PatternRegistry;

/// Maximum skills reported per parse.
pub const MAX_SKILLS: usize = 10;

/// Returns every vocabulary term present in the text as a whole word, in
/// vocabulary order (not document order), capped at [`MAX_SKILLS`].
pub fn extract_skills(text: &str, registry: &PatternRegistry) -> Vec<String> {
    let lowered = text.to_lowercase();
    registry
        .skills()
        .iter()
        .filter(|skill| skill.is_match(&lowered))
        .take(MAX_SKILLS)
        .map(|skill| skill.display().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PatternRegistry {
        PatternRegistry::load().unwrap()
    }

    #[test]
    fn test_skills_come_back_in_vocabulary_order() {
        let text = "Daily tools: Docker, PostgreSQL and Python.";
        assert_eq!(
            extract_skills(text, &registry()),
            vec!["Python", "Postgresql", "Docker"]
        );
    }

    #[test]
    fn test_javascript_does_not_leak_a_java_hit() {
        let skills = extract_skills("Senior JavaScript developer", &registry());
        assert_eq!(skills, vec!["Javascript".to_string()]);
    }

    #[test]
    fn test_java_and_javascript_are_independent_hits() {
        let skills = extract_skills("java backend, javascript frontend", &registry());
        assert_eq!(skills, vec!["Java".to_string(), "Javascript".to_string()]);
    }

    #[test]
    fn test_sql_does_not_match_inside_postgresql() {
        let skills = extract_skills("postgresql only", &registry());
        assert_eq!(skills, vec!["Postgresql".to_string()]);
    }

    #[test]
    fn test_output_is_capped_at_ten() {
        let text = "python java javascript html css react angular vue node express django";
        let skills = extract_skills(text, &registry());
        assert_eq!(skills.len(), MAX_SKILLS);
        // Eleven terms present; the last by vocabulary order is dropped.
        assert!(!skills.contains(&"Django".to_string()));
        assert_eq!(skills[0], "Python");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let skills = extract_skills("PYTHON and TensorFlow", &registry());
        assert_eq!(
            skills,
            vec!["Python".to_string(), "Tensorflow".to_string()]
        );
    }

    #[test]
    fn test_no_vocabulary_hits_yields_empty_sequence() {
        assert!(extract_skills("fluent in haskell and prolog", &registry()).is_empty());
    }
}
