//! Heuristic extraction core: normalizer, pattern registry, field
//! extractors, and the orchestrating parser.

pub mod contact;
pub mod education;
pub mod experience;
pub mod name;
pub mod normalizer;
pub mod parser;
pub mod patterns;
pub mod sections;
pub mod skills;

pub use parser::{parse_resume, parse_resume_with};
