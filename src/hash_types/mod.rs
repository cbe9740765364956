//! Hash-type catalog: human-readable algorithm names ↔ engine codes.

mod catalog;
mod matcher;

pub use catalog::HASH_TYPES;
pub use matcher::{closest_match, similarity, DEFAULT_CUTOFF};

/// Code used when a name cannot be resolved (MD5).
pub const DEFAULT_HASH_CODE: &str = "0";

/// Returned by [`reverse_lookup`] for codes absent from the catalog.
pub const UNKNOWN_HASH_NAME: &str = "UNKNOWN";

/// Whether `value` is one of the catalog's numeric codes.
pub fn is_known_code(value: &str) -> bool {
    HASH_TYPES.iter().any(|(_, code)| *code == value)
}

/// Resolve a hash-type name or code to an engine code.
///
/// Known codes are returned unchanged. Anything else is matched against the
/// catalog names; unmatched input falls back to [`DEFAULT_HASH_CODE`].
pub fn resolve(name_or_code: &str) -> String {
    if is_known_code(name_or_code) {
        return name_or_code.to_string();
    }

    let names = HASH_TYPES.iter().map(|(name, _)| *name);
    let Some(best) = closest_match(name_or_code, names, DEFAULT_CUTOFF) else {
        tracing::warn!(
            "Hash type '{}' not recognised, using {}",
            name_or_code,
            DEFAULT_HASH_CODE
        );
        return DEFAULT_HASH_CODE.to_string();
    };

    let code = HASH_TYPES
        .iter()
        .find(|(name, _)| *name == best)
        .map(|(_, code)| *code)
        .unwrap_or(DEFAULT_HASH_CODE);
    tracing::debug!("Hash type '{}' resolved to {} ({})", name_or_code, best, code);
    code.to_string()
}

/// First catalog name whose code equals `code`, ignoring ASCII case.
pub fn reverse_lookup(code: &str) -> &'static str {
    HASH_TYPES
        .iter()
        .find(|(_, c)| c.eq_ignore_ascii_case(code.trim()))
        .map(|(name, _)| *name)
        .unwrap_or(UNKNOWN_HASH_NAME)
}
