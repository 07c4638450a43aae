//! Centralized identifier quoting utilities for T-SQL names.
//!
//! These are Rust renditions of the T-SQL `QUOTENAME` family. They never
//! fail: unusable input or an unknown quote style degrades to `None`, which
//! callers must check.
//!
//! # Examples
//!
//! ```
//! use sqlschema_names::parser::identifier_utils::*;
//!
//! assert_eq!(quote_name("Object").as_deref(), Some("[Object]"));
//! assert_eq!(quote_name_with(Some("Object"), "'").as_deref(), Some("'Object'"));
//! assert_eq!(quote_name_with(Some("Object"), "??"), None);
//! assert_eq!(remove_quotes(Some("[Object]")).as_deref(), Some("Object"));
//! assert_eq!(encode_identifier("a]b"), "[a]]b]");
//! ```

use std::fmt;

/// Every delimiter character `remove_quotes` strips.
pub const QUOTE_CHARACTERS: [char; 11] = ['[', ']', '\'', '"', '(', ')', '<', '>', '{', '}', '`'];

/// Delimiter pair used when quoting an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuoteStyle {
    /// `[name]`
    #[default]
    Brackets,
    /// `'name'`
    SingleQuote,
    /// `"name"`
    DoubleQuote,
    /// `(name)`
    Parentheses,
    /// `<name>`
    AngleBrackets,
    /// `>name<`, the historical reversed spelling
    ReversedAngleBrackets,
    /// `{name}`
    Braces,
    /// `` `name` ``
    Backtick,
}

impl QuoteStyle {
    /// Looks up a style from its T-SQL `quote_character` spelling.
    ///
    /// Accepts the pair spellings (`[]`, `()`, `<>`, `{}`), either single
    /// character of a pair, the symmetric characters, and `><`.
    /// Anything else yields `None`.
    pub fn from_quote_chars(quote_chars: &str) -> Option<Self> {
        match quote_chars {
            "[]" | "[" | "]" => Some(QuoteStyle::Brackets),
            "'" => Some(QuoteStyle::SingleQuote),
            "\"" => Some(QuoteStyle::DoubleQuote),
            "()" | "(" | ")" => Some(QuoteStyle::Parentheses),
            "<>" | "<" | ">" => Some(QuoteStyle::AngleBrackets),
            "><" => Some(QuoteStyle::ReversedAngleBrackets),
            "{}" | "{" | "}" => Some(QuoteStyle::Braces),
            "`" => Some(QuoteStyle::Backtick),
            _ => None,
        }
    }

    /// Opening and closing delimiter.
    pub fn delimiters(self) -> (char, char) {
        match self {
            QuoteStyle::Brackets => ('[', ']'),
            QuoteStyle::SingleQuote => ('\'', '\''),
            QuoteStyle::DoubleQuote => ('"', '"'),
            QuoteStyle::Parentheses => ('(', ')'),
            QuoteStyle::AngleBrackets => ('<', '>'),
            QuoteStyle::ReversedAngleBrackets => ('>', '<'),
            QuoteStyle::Braces => ('{', '}'),
            QuoteStyle::Backtick => ('`', '`'),
        }
    }
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = self.delimiters();
        if open == close {
            write!(f, "{}", open)
        } else {
            write!(f, "{}{}", open, close)
        }
    }
}

/// Wraps `text` in square brackets, T-SQL `QUOTENAME(text)`.
///
/// Returns `None` for blank input.
pub fn quote_name(text: &str) -> Option<String> {
    quote_name_as(Some(text), QuoteStyle::Brackets)
}

/// T-SQL `QUOTENAME(text, quote_chars)`.
///
/// Returns `None` for missing or blank text and for an unknown quote style.
pub fn quote_name_with(text: Option<&str>, quote_chars: &str) -> Option<String> {
    let style = QuoteStyle::from_quote_chars(quote_chars)?;
    quote_name_as(text, style)
}

/// Quotes `text` with a known style.
///
/// Delimiter characters of the same style already present at either end are
/// stripped first, so quoting twice gives the same result as quoting once.
pub fn quote_name_as(text: Option<&str>, style: QuoteStyle) -> Option<String> {
    let text = text?;
    if text.trim().is_empty() {
        return None;
    }
    let (open, close) = style.delimiters();
    let inner = text.trim_matches(|c| c == open || c == close);
    let mut quoted = String::with_capacity(inner.len() + 2);
    quoted.push(open);
    quoted.push_str(inner);
    quoted.push(close);
    Some(quoted)
}

/// Strips every known delimiter character from both ends of `text`.
///
/// `None` stays `None` and the empty string stays empty.
pub fn remove_quotes(text: Option<&str>) -> Option<String> {
    text.map(|t| unquote(t).to_string())
}

/// Borrowing form of [`remove_quotes`].
pub fn unquote(text: &str) -> &str {
    text.trim_matches(|c| QUOTE_CHARACTERS.contains(&c))
}

/// Brackets a single identifier part, escaping `]` as `]]`.
///
/// Unlike [`quote_name`] this never strips or rejects anything; it is the
/// encoding used for multi-part identifiers.
pub fn encode_identifier(part: &str) -> String {
    let mut encoded = String::with_capacity(part.len() + 2);
    encoded.push('[');
    for c in part.chars() {
        if c == ']' {
            encoded.push_str("]]");
        } else {
            encoded.push(c);
        }
    }
    encoded.push(']');
    encoded
}

/// Checks if a string is a bracketed identifier (starts with `[` and ends with `]`).
pub fn is_bracketed(ident: &str) -> bool {
    let trimmed = ident.trim();
    trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']')
}
