//! Shared case-insensitive text helpers.
//!
//! Every name type in the crate compares, orders and hashes through the
//! functions in this module, so they all share one collation: ordinal
//! comparison of `char`s after simple uppercase folding.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Folds a single character for case-insensitive comparison.
///
/// Characters whose uppercase form expands to several characters (`ß`) are
/// left untouched so folding stays one-to-one.
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Case-insensitive ordinal comparison.
#[inline]
pub fn cmp_ci(a: &str, b: &str) -> Ordering {
    if a.is_ascii() && b.is_ascii() {
        return a
            .bytes()
            .map(|c| c.to_ascii_uppercase())
            .cmp(b.bytes().map(|c| c.to_ascii_uppercase()));
    }
    a.chars().map(fold_char).cmp(b.chars().map(fold_char))
}

/// Case-insensitive equality, consistent with [`cmp_ci`].
#[inline]
pub fn eq_ci(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    cmp_ci(a, b) == Ordering::Equal
}

/// Case-insensitive comparison of optional strings. `None` sorts first.
pub fn cmp_ci_opt(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp_ci(a, b),
    }
}

/// Case-insensitive equality of optional strings. Two `None`s are equal.
pub fn eq_ci_opt(a: Option<&str>, b: Option<&str>) -> bool {
    cmp_ci_opt(a, b) == Ordering::Equal
}

/// Stable case-insensitive hash of a string (FNV-1a over folded chars).
pub fn hash_ci(s: &str) -> u64 {
    let mut hash = FNV_OFFSET;
    for c in s.chars().map(fold_char) {
        for byte in (c as u32).to_le_bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
    }
    hash
}

/// Combines the case-insensitive hashes of several parts.
///
/// The chain is `acc = 17 * acc + 23 * hash(part)`, so `(a, b)` and `(b, a)`
/// hash differently.
pub fn combine_hashes_ci<I, S>(parts: I) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts.into_iter().fold(0u64, |acc, part| {
        acc.wrapping_mul(17)
            .wrapping_add(hash_ci(part.as_ref()).wrapping_mul(23))
    })
}

/// Positional case-insensitive equality of two optional lists.
///
/// Two `None`s are equal; `None` never equals `Some`, even an empty one.
pub fn list_eq_ci<A, B>(a: Option<&[A]>, b: Option<&[B]>) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| eq_ci(x.as_ref(), y.as_ref()))
        }
        _ => false,
    }
}

/// Positional case-insensitive ordering of two lists (shorter prefix first).
pub fn list_cmp_ci<A, B>(a: &[A], b: &[B]) -> Ordering
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    for (x, y) in a.iter().zip(b) {
        match cmp_ci(x.as_ref(), y.as_ref()) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Joins the parts that are neither `None` nor empty.
///
/// When every part is missing the result is an empty string, not `None`;
/// identifier formatting relies on that for its dot-joining.
pub fn join_if_not_empty<I, S>(delimiter: &str, parts: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts.into_iter().flatten() {
        let part = part.as_ref();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(delimiter);
        }
        out.push_str(part);
    }
    out
}

/// Case-insensitive starts_with check without allocating.
#[inline]
pub fn starts_with_ci(haystack: &str, needle: &str) -> bool {
    if haystack.is_ascii() && needle.is_ascii() {
        return haystack.len() >= needle.len()
            && haystack.as_bytes()[..needle.len()].eq_ignore_ascii_case(needle.as_bytes());
    }
    let mut hay = haystack.chars().map(fold_char);
    needle
        .chars()
        .map(fold_char)
        .all(|n| hay.next() == Some(n))
}

/// Owned string key that compares, orders and hashes case-insensitively.
///
/// Used where a plain name (schema, database) keys a collection. Serializes
/// as the plain string it wraps.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CiString(String);

impl CiString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl PartialEq for CiString {
    fn eq(&self, other: &Self) -> bool {
        eq_ci(&self.0, &other.0)
    }
}

impl Eq for CiString {}

impl PartialOrd for CiString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CiString {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_ci(&self.0, &other.0)
    }
}

impl Hash for CiString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hash_ci(&self.0));
    }
}

impl fmt::Debug for CiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for CiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CiString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CiString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for CiString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
