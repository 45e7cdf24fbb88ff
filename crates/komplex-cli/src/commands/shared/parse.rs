use chrono::NaiveDate;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}

/// Parse quiz answers: comma-separated option indexes, with `-` or an empty
/// slot for an unanswered question.
pub fn parse_answers(raw: &str) -> anyhow::Result<Vec<Option<usize>>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(idx, part)| match part {
            "" | "-" => Ok(None),
            index => index.parse::<usize>().map(Some).map_err(|error| {
                anyhow::anyhow!("invalid answer #{} '{index}': {error}", idx + 1)
            }),
        })
        .collect()
}
