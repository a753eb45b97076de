//! Reserved key namespace
//!
//! Logical record names mapped to the string identifiers used in the
//! vault. These identifiers are part of the persisted layout; renaming
//! one orphans previously written data. Key uniqueness beyond this list
//! is the caller's responsibility; the store performs no collision
//! detection.

/// Registered user profile
pub const USER_DATA: &str = "@user_data";

/// Issued sign-in token
pub const AUTH_TOKEN: &str = "@auth_token";

/// SHA-256 digest of the signup password
pub const PASSWORD_HASH: &str = "@password_hash";

/// Application settings record
pub const SETTINGS: &str = "@settings";

/// Namespace prefix for cache entries
pub const CACHE: &str = "@cache";

/// Mobile OTP verification flag
pub const MOBILE_VERIFIED: &str = "@mobile_verified";

/// Email OTP verification flag
pub const EMAIL_VERIFIED: &str = "@email_verified";

/// Document verification record
pub const DOCUMENTS_VERIFIED: &str = "@documents_verified";

/// PAN card image reference
pub const PAN_IMAGE: &str = "@pan_image";

/// ID proof front image reference
pub const UID_FRONT_IMAGE: &str = "@uid_front_image";

/// ID proof back image reference
pub const UID_BACK_IMAGE: &str = "@uid_back_image";

/// Full key for a cache entry: `@cache:<subkey>`
pub fn cache_key(subkey: &str) -> String {
    format!("{}:{}", CACHE, subkey)
}

/// Prefix that every cache entry key starts with (`@cache:`). The
/// trailing colon matters: a plain key like `@cache_misc` must never
/// match.
pub fn cache_prefix() -> String {
    format!("{}:", CACHE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_is_namespaced() {
        assert_eq!(cache_key("funds:large-cap"), "@cache:funds:large-cap");
        assert!(cache_key("x").starts_with(&cache_prefix()));
    }

    #[test]
    fn colliding_suffix_is_outside_namespace() {
        assert!(!"@cache_misc".starts_with(&cache_prefix()));
    }
}
