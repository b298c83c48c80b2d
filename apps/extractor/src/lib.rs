//! Best-effort resume-to-profile extraction engine.
//!
//! Takes unstructured resume text and recovers typed fields (name, email,
//! phone, skills, education, experience) with layered heuristics: positional
//! rules, keyword dictionaries, and regex patterns. Missing or ambiguous
//! data yields empty fields, never errors; for a fixed input the output is
//! deterministic. Parsing is synchronous, allocation-bounded by document
//! length, and safe to call from any number of threads at once.

pub mod decode;
pub mod errors;
pub mod extract;
pub mod models;

pub use errors::EngineError;
pub use extract::patterns::PatternRegistry;
pub use extract::{parse_resume, parse_resume_with};
pub use models::profile::ParsedProfile;
