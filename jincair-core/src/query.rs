//! Minimal query-string access.
//!
//! Mirrors `URLSearchParams.get` for the two parameters the site uses:
//! first match wins, `+` decodes as a space, percent-escapes are decoded.

#[must_use]
pub fn query_param(search: &str, key: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    for pair in search.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode(name) == key {
            return Some(decode(value));
        }
    }
    None
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or(spaced.clone(), |cow| cow.into_owned())
}
