//! Badge slug derivation.
//!
//! A slug is the URL-safe identifier a printed badge travels under: it is
//! the route segment of the badge view and, prefixed with
//! [`BADGE_KEY_PREFIX`], the key its record is stored at in the badge
//! channel.

use std::sync::LazyLock;

use regex::Regex;

/// Key prefix for badge records in the badge channel.
pub const BADGE_KEY_PREFIX: &str = "badge-";

/// Matches a run of whitespace, collapsed into a single hyphen.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Matches every character that may not appear in a slug part. ASCII-word
/// based: Unicode letters are stripped, not transliterated.
static NON_SLUG_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_-]").expect("valid regex"));

/// Normalize one slug part: lowercase, whitespace runs to single hyphens,
/// then strip everything outside `[a-z0-9_-]`.
fn normalize_part(input: &str) -> String {
    let lowered = input.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    NON_SLUG_CHAR.replace_all(&hyphenated, "").into_owned()
}

/// Derive the badge slug for a visitor name and hall name.
///
/// Both parts are normalized independently and joined with a single hyphen,
/// so the result is deterministic, URL-safe, and human-legible. The
/// function is total: empty inputs normalize to empty parts, producing
/// slugs like `"-"`.
///
/// Slugs are NOT unique. Two visitors with the same name and hall collide,
/// and the later print overwrites the earlier badge record at the shared
/// key. Last print wins.
///
/// # Examples
///
/// ```
/// use regdesk_core::slug::badge_slug;
///
/// assert_eq!(badge_slug("Alex Chen", "Hall A"), "alex-chen-hall-a");
/// assert_eq!(badge_slug("Sarah Johnson", "Blue Hall"), "sarah-johnson-blue-hall");
/// assert_eq!(badge_slug("", ""), "-");
/// ```
pub fn badge_slug(name: &str, hall: &str) -> String {
    format!("{}-{}", normalize_part(name), normalize_part(hall))
}

/// Channel key for a badge slug.
///
/// # Examples
///
/// ```
/// use regdesk_core::slug::badge_key;
///
/// assert_eq!(badge_key("alex-chen-hall-a"), "badge-alex-chen-hall-a");
/// ```
pub fn badge_key(slug: &str) -> String {
    format!("{BADGE_KEY_PREFIX}{slug}")
}
