/// Effective list limit: the `--limit` flag, else `general.default_limit`.
/// Zero means unlimited.
#[must_use]
pub fn effective_limit(flag: Option<u32>, configured: u32) -> u32 {
    flag.unwrap_or(configured)
}

/// Truncate `items` to `limit` entries (0 keeps everything).
#[must_use]
pub fn apply_limit<T>(mut items: Vec<T>, limit: u32) -> Vec<T> {
    if limit > 0 {
        items.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
    items
}
