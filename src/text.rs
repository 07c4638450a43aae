//! Word splitting and case conversion for property and column names.
//!
//! Names split on word boundary characters and on case transitions. A run of
//! capitals is an abbreviation (`ID`, `XML`) while its length stays within the
//! abbreviation threshold; a longer run is lowercased as an ordinary word.
//!
//! ```
//! use sqlschema_names::text::{pascal_case, underscore, WordCase};
//!
//! assert_eq!(underscore("OrderID", WordCase::Lower), "order_id");
//! assert_eq!(pascal_case("TABLE_CATALOG"), "TableCatalog");
//! ```

/// Capital runs up to this length are kept as abbreviations.
pub const DEFAULT_ABBREVIATION_THRESHOLD: usize = 3;

/// Characters that separate words besides case transitions.
pub const DEFAULT_WORD_BOUNDARY_CHARS: &str = "_";

/// Casing applied to each word of an underscored name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordCase {
    #[default]
    Upper,
    Lower,
    Title,
}

/// Splitting rules shared by the case conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseConverter {
    word_boundary_chars: String,
    abbreviation_threshold: usize,
    bounded_words_only: bool,
}

impl Default for CaseConverter {
    fn default() -> Self {
        Self {
            word_boundary_chars: DEFAULT_WORD_BOUNDARY_CHARS.to_string(),
            abbreviation_threshold: DEFAULT_ABBREVIATION_THRESHOLD,
            bounded_words_only: false,
        }
    }
}

impl CaseConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_word_boundary_chars(mut self, chars: impl Into<String>) -> Self {
        self.word_boundary_chars = chars.into();
        self
    }

    pub fn with_abbreviation_threshold(mut self, threshold: usize) -> Self {
        self.abbreviation_threshold = threshold;
        self
    }

    /// Split on boundary characters only, ignoring case transitions.
    pub fn with_bounded_words_only(mut self, bounded_words_only: bool) -> Self {
        self.bounded_words_only = bounded_words_only;
        self
    }

    fn is_boundary(&self, c: char) -> bool {
        self.word_boundary_chars.contains(c)
    }

    /// Splits `value` into words without changing their case, except that a
    /// capital run longer than the threshold is lowercased.
    pub fn split_words(&self, value: &str) -> Vec<String> {
        let chars: Vec<char> = value.chars().collect();
        let Some(&first) = chars.first() else {
            return Vec::new();
        };

        let mut words = Vec::new();
        let mut start = 0;
        let mut caps_run = 0;
        let mut last = first;
        if first.is_uppercase() {
            caps_run += 1;
        }
        if self.is_boundary(first) {
            start += 1;
        }

        for (i, &c) in chars.iter().enumerate().skip(1) {
            let is_boundary = self.is_boundary(c);
            let is_upper = c.is_uppercase();
            let last_upper = last.is_uppercase();

            if is_upper && last_upper {
                caps_run += 1;
            } else if !self.bounded_words_only && last_upper && c.is_lowercase() && caps_run > 1 {
                // The last capital of the run starts the next word.
                caps_run -= 1;
                if start < i - 1 {
                    self.push_word(&mut words, &chars[start..i - 1], caps_run);
                }
                start = i - 1;
                caps_run = 0;
            } else if (!self.bounded_words_only && last.is_lowercase() && is_upper) || is_boundary {
                if start < i {
                    self.push_word(&mut words, &chars[start..i], caps_run);
                }
                start = if is_boundary { i + 1 } else { i };
                caps_run = usize::from(is_upper);
            }
            last = c;
        }

        if start < chars.len() {
            words.push(chars[start..].iter().collect());
        }
        words
    }

    fn push_word(&self, words: &mut Vec<String>, word: &[char], caps_run: usize) {
        let word: String = word.iter().collect();
        if caps_run > self.abbreviation_threshold {
            words.push(word.to_lowercase());
        } else {
            words.push(word);
        }
    }

    /// `OrderId` from `order_id`, `ORDER_ID` or `orderId`.
    pub fn pascal_case(&self, value: &str) -> String {
        self.camel_case_with(value, true)
    }

    /// `orderId` from `order_id`. A name that opens with an abbreviation keeps
    /// its leading capital.
    pub fn camel_case(&self, value: &str) -> String {
        self.camel_case_with(value, false)
    }

    fn camel_case_with(&self, value: &str, first_upper: bool) -> String {
        let words = self.split_words(value);
        let Some(first) = words.first() else {
            return String::new();
        };
        let result: String = words.iter().map(|w| title_case(&w.to_lowercase())).collect();

        let mut leading = first.chars();
        let leading_abbreviation = matches!(
            (leading.next(), leading.next()),
            (Some(a), Some(b)) if a.is_uppercase() && b.is_uppercase()
        );
        if first_upper || leading_abbreviation {
            result
        } else {
            lowercase_first(&result)
        }
    }

    /// Words joined with `_`, each cased per `case`.
    pub fn underscore(&self, value: &str, case: WordCase) -> String {
        let words = self.split_words(value);
        let cased: Vec<String> = words
            .iter()
            .map(|w| match case {
                WordCase::Upper => w.to_uppercase(),
                WordCase::Lower => w.to_lowercase(),
                WordCase::Title => title_case(w),
            })
            .collect();
        cased.join("_")
    }
}

/// Uppercases the first letter and lowercases the rest. A word with no
/// lowercase letters is an acronym and is returned unchanged.
pub fn title_case(word: &str) -> String {
    if !word.chars().any(char::is_lowercase) {
        return word.to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn lowercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn split_words(value: &str) -> Vec<String> {
    CaseConverter::default().split_words(value)
}

pub fn pascal_case(value: &str) -> String {
    CaseConverter::default().pascal_case(value)
}

pub fn camel_case(value: &str) -> String {
    CaseConverter::default().camel_case(value)
}

pub fn underscore(value: &str, case: WordCase) -> String {
    CaseConverter::default().underscore(value, case)
}
