// ============================================================================
// COOKIES - Lookup by exact name in a `document.cookie` string
// ============================================================================

/// Find `name` in a raw cookie header (`a=1; b=2`) and percent-decode its value.
///
/// Matching is on the exact `name=` prefix of each trimmed entry, so `csrftoken`
/// does not match `xcsrftoken` or `csrftoken_old`.
pub fn find_cookie(raw: &str, name: &str) -> Option<String> {
    if raw.is_empty() || name.is_empty() {
        return None;
    }

    let prefix = format!("{}=", name);
    raw.split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .map(|value| match urlencoding::decode(value) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => value.to_string(),
        })
}
