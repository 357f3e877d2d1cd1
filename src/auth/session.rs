use axum::http::{header::InvalidHeaderValue, HeaderValue};

use crate::auth::token::SESSION_TTL;

/// Name of the cookie that carries the session token.
pub const SESSION_COOKIE: &str = "token";

/// Build the `Set-Cookie` value for a freshly issued session token.
///
/// The cookie is `HttpOnly` (page scripts cannot read it) and expires with
/// the token. `secure` restricts it to encrypted transport and comes from
/// configuration so register and login always agree on it.
pub fn session_cookie(token: &str, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let max_age = SESSION_TTL.whole_seconds();
    let mut cookie =
        format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}
