//! Text form of dictionary codes: `CODE_<n>`.

pub const CODE_PREFIX: &str = "CODE_";

pub fn format_code(code: u64) -> String {
    format!("{CODE_PREFIX}{code}")
}

/// Extract the code from a token, if it has the token shape.
///
/// Only the segment directly after the prefix is read, so `CODE_4_x` yields 4.
/// The segment must be bare digits: surrounding whitespace is not trimmed and
/// such tokens decode as literal text.
pub fn parse_code(token: &str) -> Option<u64> {
    if !token.starts_with(CODE_PREFIX) {
        return None;
    }
    token.split('_').nth(1)?.parse().ok()
}
