//! Parse orchestrator: normalize once, run every extractor, assemble the
//! profile. Each extractor is a pure function of the text and the registry,
//! so the order here is arbitrary and nothing is shared between them.

use tracing::debug;

use crate::extract::patterns::PatternRegistry;
use crate::extract::{contact, education, experience, name, normalizer, skills};
use crate::models::profile::ParsedProfile;

/// Parses resume text with the process-wide default registry.
///
/// Total over all inputs: empty or garbled text yields an all-empty profile,
/// never an error. Failure is reserved for the decoding boundary and for
/// registry load problems, neither of which can happen here.
pub fn parse_resume(raw_text: &str) -> ParsedProfile {
    parse_resume_with(raw_text, PatternRegistry::shared())
}

/// Parses resume text against a caller-supplied registry.
pub fn parse_resume_with(raw_text: &str, registry: &PatternRegistry) -> ParsedProfile {
    let lines = normalizer::normalize_lines(raw_text);

    let profile = ParsedProfile {
        name: name::extract_name(&lines),
        email: contact::extract_email(raw_text, registry),
        phone: contact::extract_phone(raw_text, registry),
        skills: skills::extract_skills(raw_text, registry),
        education: education::extract_education(&lines, registry),
        experience: experience::extract_experience(&lines, registry),
    };

    debug!(
        lines = lines.len(),
        found_name = !profile.name.is_empty(),
        found_email = !profile.email.is_empty(),
        found_phone = !profile.phone.is_empty(),
        skills = profile.skills.len(),
        education = profile.education.len(),
        experience = profile.experience.len(),
        "parsed resume text"
    );

    profile
}
