//! Reading credential updates out of `Set-Cookie` headers.

use super::Credential;

pub const CREDENTIAL_COOKIE: &str = "x-auth";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieUpdate {
    Set(Credential),
    Clear,
}

/// Interpret one `Set-Cookie` header value. Returns `None` for cookies other
/// than the credential cookie.
pub fn parse_set_cookie(header: &str) -> Option<CookieUpdate> {
    let mut parts = header.split(';').map(str::trim);
    let (name, value) = parts.next()?.split_once('=')?;
    if name.trim() != CREDENTIAL_COOKIE {
        return None;
    }

    let expired = parts.any(|attr| {
        attr.split_once('=').is_some_and(|(key, val)| {
            key.trim().eq_ignore_ascii_case("max-age")
                && val.trim().parse::<i64>().is_ok_and(|secs| secs <= 0)
        })
    });

    let value = value.trim().trim_matches('"');
    if value.is_empty() || expired {
        Some(CookieUpdate::Clear)
    } else {
        Some(CookieUpdate::Set(Credential::new(value)))
    }
}
