//! ID prefix constants.
//!
//! Generated IDs look like `crs-a3f8b2c1`: a three-letter prefix, a dash, and
//! eight lowercase hex characters. IDs written by older clients (plain
//! timestamps such as `"1736900000000"`) are opaque strings and stay valid.

pub const PREFIX_COURSE: &str = "crs";
pub const PREFIX_LESSON: &str = "lsn";
pub const PREFIX_ASSIGNMENT: &str = "asg";
pub const PREFIX_QUIZ: &str = "qiz";
pub const PREFIX_QUESTION: &str = "qst";

/// Every prefix the service generates IDs for.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_COURSE,
    PREFIX_LESSON,
    PREFIX_ASSIGNMENT,
    PREFIX_QUIZ,
    PREFIX_QUESTION,
];

/// Format a prefixed ID from four random bytes.
#[must_use]
pub fn format_id(prefix: &str, random: [u8; 4]) -> String {
    let hex: String = random.iter().map(|b| format!("{b:02x}")).collect();
    format!("{prefix}-{hex}")
}
