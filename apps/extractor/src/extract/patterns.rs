//! Pattern registry: the immutable configuration tables every extractor reads.
//!
//! Loaded once per process (or supplied by the caller as an override) and
//! never mutated afterwards, so concurrent parse calls share it freely.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::EngineError;

/// Permissive email matcher. Picks up `local@domain.tld` with a 2+ letter
/// final label; deliverability is not this engine's problem.
pub const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// Phone matcher: optional `+` country prefix, optional 3-digit area code
/// (bare or parenthesized), then 3 digits, a separator, 4 digits.
pub const PHONE_PATTERN: &str =
    r"(?:\+\d{1,3}[-.\s]?)?(?:\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}";

/// Technology vocabulary scanned for whole-word hits. Order matters: skill
/// output follows this order, not document order.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node",
    "express",
    "django",
    "flask",
    "spring",
    "hibernate",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "nosql",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "git",
    "linux",
    "bash",
    "c++",
    "c#",
    "php",
    "ruby",
    "swift",
    "kotlin",
    "flutter",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "sklearn",
    "ai",
    "ml",
    "data science",
];

/// Substrings that mark a line as an academic credential.
pub const DEGREE_INDICATORS: &[&str] = &[
    "bachelor", "b.tech", "b.e.", "master", "m.tech", "m.e.", "phd", "b.sc", "m.sc", "b.a.",
    "m.a.", "diploma",
];

/// Substrings that mark a line as the start of a work-history section.
pub const EXPERIENCE_SECTION_INDICATORS: &[&str] = &[
    "experience",
    "work experience",
    "employment history",
    "work history",
];

static DEFAULT_REGISTRY: Lazy<PatternRegistry> =
    Lazy::new(|| PatternRegistry::load().expect("default pattern registry must compile"));

/// A vocabulary entry compiled for whole-word matching, with the display
/// form the profile reports.
#[derive(Debug, Clone)]
pub struct SkillPattern {
    display: String,
    word: Regex,
}

impl SkillPattern {
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whole-word match against already-lowercased text.
    pub fn is_match(&self, lowered_text: &str) -> bool {
        self.word.is_match(lowered_text)
    }
}

/// Immutable matcher and keyword tables. Compile failures surface as
/// `EngineError::Extraction` at load time; parsing itself never fails.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    email: Regex,
    phone: Regex,
    skills: Vec<SkillPattern>,
    degree_indicators: Vec<String>,
    experience_indicators: Vec<String>,
}

impl PatternRegistry {
    /// Compiles the default tables.
    pub fn load() -> Result<Self, EngineError> {
        Self::from_parts(
            EMAIL_PATTERN,
            PHONE_PATTERN,
            SKILL_VOCABULARY,
            DEGREE_INDICATORS,
            EXPERIENCE_SECTION_INDICATORS,
        )
    }

    /// Compiles a caller-supplied registry. Keyword lists are lowercased on
    /// the way in; matching is always case-insensitive by construction.
    pub fn from_parts(
        email_pattern: &str,
        phone_pattern: &str,
        skill_vocabulary: &[&str],
        degree_indicators: &[&str],
        experience_indicators: &[&str],
    ) -> Result<Self, EngineError> {
        let skills = skill_vocabulary
            .iter()
            .map(|token| {
                let token = token.to_lowercase();
                Ok(SkillPattern {
                    display: capitalize(&token),
                    word: compile(&word_anchored(&token))?,
                })
            })
            .collect::<Result<Vec<_>, EngineError>>()?;

        Ok(PatternRegistry {
            email: compile(email_pattern)?,
            phone: compile(phone_pattern)?,
            skills,
            degree_indicators: lowercased(degree_indicators),
            experience_indicators: lowercased(experience_indicators),
        })
    }

    /// Process-wide default registry. A broken default pattern is a
    /// programming error and panics on first access, never mid-parse.
    pub fn shared() -> &'static PatternRegistry {
        &DEFAULT_REGISTRY
    }

    pub fn email(&self) -> &Regex {
        &self.email
    }

    pub fn phone(&self) -> &Regex {
        &self.phone
    }

    pub fn skills(&self) -> &[SkillPattern] {
        &self.skills
    }

    pub fn degree_indicators(&self) -> &[String] {
        &self.degree_indicators
    }

    pub fn experience_indicators(&self) -> &[String] {
        &self.experience_indicators
    }
}

fn compile(pattern: &str) -> Result<Regex, EngineError> {
    Regex::new(pattern)
        .map_err(|e| EngineError::Extraction(format!("invalid pattern '{pattern}': {e}")))
}

/// Wraps a vocabulary token in `\b` anchors, but only on edges that are word
/// characters. `c++` and `c#` end in symbols where `\b` would demand a word
/// character next and never match.
fn word_anchored(token: &str) -> String {
    let mut pattern = String::new();
    if token.chars().next().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(token));
    if token.chars().last().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn lowercased(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| k.to_lowercase()).collect()
}
