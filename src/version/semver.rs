use std::cmp::Ordering;

use semver::{Comparator, Op, Version};

/// Parse a version string into a semver::Version.
///
/// Surrounding whitespace and a single leading `v` or `=` are ignored, so
/// `node --version` output parses directly.
///
/// Examples:
/// - "1.2.3" -> Version(1, 2, 3)
/// - "v18.17.0" -> Version(18, 17, 0)
/// - "=2.0.0-beta.1" -> Version(2, 0, 0, pre: beta.1)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.trim();
    let version = version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('='))
        .unwrap_or(version);
    Version::parse(version).ok()
}

/// Compare two versions by semver precedence.
///
/// Build metadata does not take part in precedence.
pub fn cmp_precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch)
        .cmp(&(b.major, b.minor, b.patch))
        .then_with(|| a.pre.cmp(&b.pre))
}

/// Returns true if `a` has strictly higher precedence than `b`.
///
/// Unparseable input on either side yields false.
pub fn greater_than(a: &str, b: &str) -> bool {
    matches!(compare(a, b), Some(Ordering::Greater))
}

/// Returns true if `a` has the same or higher precedence than `b`.
pub fn greater_or_equal(a: &str, b: &str) -> bool {
    matches!(compare(a, b), Some(Ordering::Greater | Ordering::Equal))
}

fn compare(a: &str, b: &str) -> Option<Ordering> {
    Some(cmp_precedence(&parse_version(a)?, &parse_version(b)?))
}

/// Caret comparator for a base version: `^1.2.3`, `^0.2.3`, `^0.0.3`.
pub fn caret_of(base: &Version) -> Comparator {
    Comparator {
        op: Op::Caret,
        major: base.major,
        minor: Some(base.minor),
        patch: Some(base.patch),
        pre: base.pre.clone(),
    }
}

/// Check whether `version` is compatible with `^base`
///
/// - `^1.2.3` matches `>=1.2.3 <2.0.0`
/// - `^0.2.3` matches `>=0.2.3 <0.3.0`
/// - `^0.0.3` matches `=0.0.3`
///
/// A pre-release candidate only matches when the base carries a pre-release
/// on the same major.minor.patch.
pub fn satisfies_caret(version: &str, base: &str) -> bool {
    match (parse_version(version), parse_version(base)) {
        (Some(version), Some(base)) => caret_of(&base).matches(&version),
        _ => false,
    }
}
