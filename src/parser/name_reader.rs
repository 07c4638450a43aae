//! Token-based reader for multi-part T-SQL names.
//!
//! Splitting on `.` breaks for delimited parts such as `[Sales.2024].[Orders]`.
//! This reader runs the MsSql tokenizer instead, so a delimited part keeps any
//! dots it contains and bracket escapes (`]]`) are decoded.

use sqlparser::dialect::MsSqlDialect;
use sqlparser::tokenizer::{Token, TokenWithSpan, Tokenizer};

use crate::error::NameError;

/// Cursor over the tokens of a single multi-part name.
pub struct NameReader {
    tokens: Vec<TokenWithSpan>,
    pos: usize,
}

impl NameReader {
    /// Tokenize `sql` with the MsSql dialect.
    pub fn new(sql: &str) -> Result<Self, NameError> {
        let dialect = MsSqlDialect {};
        let tokens = Tokenizer::new(&dialect, sql)
            .tokenize_with_location()
            .map_err(|e| NameError::InvalidIdentifier {
                input: sql.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { tokens, pos: 0 })
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    #[inline]
    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current(), Some(Token::Whitespace(_))) {
            self.advance();
        }
    }

    /// Read every part of the name, outermost first.
    ///
    /// Consecutive dots produce empty parts (`server..object`), matching how
    /// T-SQL leaves an omitted part blank. Anything other than identifiers
    /// and dots is rejected.
    pub fn read_parts(mut self, input: &str) -> Result<Vec<String>, NameError> {
        let mut parts = Vec::new();
        let mut current: Option<String> = None;

        self.skip_whitespace();
        while let Some(token) = self.current() {
            match token {
                Token::Word(w) => {
                    if current.is_some() {
                        return Err(invalid(input, "missing '.' between name parts"));
                    }
                    current = Some(w.value.clone());
                }
                Token::Period => {
                    parts.push(current.take().unwrap_or_default());
                }
                Token::Whitespace(_) => {}
                other => {
                    return Err(invalid(input, &format!("unexpected token {}", other)));
                }
            }
            self.advance();
        }

        if current.is_none() && parts.is_empty() {
            return Ok(parts);
        }
        parts.push(current.unwrap_or_default());
        Ok(parts)
    }
}

fn invalid(input: &str, message: &str) -> NameError {
    NameError::InvalidIdentifier {
        input: input.to_string(),
        message: message.to_string(),
    }
}

/// Split a T-SQL multi-part name into its parts, outermost first.
///
/// # Examples
///
/// ```ignore
/// let parts = split_multipart_name("[Sales.2024].[dbo].[Orders]")?;
/// assert_eq!(parts, vec!["Sales.2024", "dbo", "Orders"]);
/// ```
pub fn split_multipart_name(sql: &str) -> Result<Vec<String>, NameError> {
    NameReader::new(sql)?.read_parts(sql)
}
