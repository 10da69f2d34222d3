//! Recognizer for externally-issued verification action links
//!
//! Some callers already hold a complete action link from an identity
//! provider; such a link encodes its own one-time verification capability
//! and needs no locally minted token. The recognizer is the single place
//! that decides "pre-built link" versus "mint our own", so the heuristic
//! stays testable and swappable in isolation.

use url::Url;

/// Hosts whose links are always treated as provider-issued action links
const AUTH_DOMAINS: &[&str] = &["firebaseapp.com", "identitytoolkit.googleapis.com"];

/// Returns `true` when `candidate` is already a complete action link
///
/// A link qualifies when it carries an embedded one-time-code parameter
/// (`oobCode`), an explicit verify-email mode marker (`mode=verifyEmail`),
/// or is hosted on a recognized external auth domain. Anything that does
/// not parse as an absolute URL is not an action link.
pub fn is_action_link(candidate: &str) -> bool {
    let parsed = match Url::parse(candidate) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    let has_oob_code = parsed.query_pairs().any(|(key, _)| key == "oobCode");
    let has_verify_mode = parsed
        .query_pairs()
        .any(|(key, value)| key == "mode" && value == "verifyEmail");
    let on_auth_domain = parsed
        .host_str()
        .map(|host| {
            AUTH_DOMAINS
                .iter()
                .any(|domain| host == *domain || host.ends_with(&format!(".{}", domain)))
        })
        .unwrap_or(false);

    has_oob_code || has_verify_mode || on_auth_domain
}
