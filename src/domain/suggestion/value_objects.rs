use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Runs of characters that carry meaning in MySQL boolean-mode full-text
    /// search. Each run is collapsed to a single space so adjacent words are
    /// not merged.
    static ref BOOLEAN_MODE_OPERATORS: regex::Regex =
        regex::Regex::new(r#"[+\-><()~*"@]+"#).unwrap();
}

pub const MIN_QUERY_LENGTH: usize = 1;
pub const MAX_QUERY_LENGTH: usize = 100;

/// A sanitized search term, safe to hand to a boolean-mode full-text query.
///
/// Construction enforces the full sanitization pipeline: trim, length gate,
/// operator stripping, and a final minimum-length re-check. Input that
/// survives none of it (too short, too long, or operators only) is not an
/// error, it is simply not searchable, so `parse` returns `None` and the
/// caller responds with an empty result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTerm {
    value: String,
}

impl SearchTerm {
    /// Parse raw user input into a searchable term.
    ///
    /// Returns `None` when the trimmed input falls outside the 1..=100
    /// character bounds, or when stripping boolean-mode operators leaves
    /// nothing searchable behind.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if !(MIN_QUERY_LENGTH..=MAX_QUERY_LENGTH).contains(&len) {
            return None;
        }

        let sanitized = BOOLEAN_MODE_OPERATORS.replace_all(trimmed, " ");
        let sanitized = sanitized.trim();
        if sanitized.chars().count() < MIN_QUERY_LENGTH {
            tracing::debug!("query became too short after boolean mode sanitization");
            return None;
        }

        Some(Self {
            value: sanitized.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The term as bound into the full-text query: sanitized text plus a
    /// trailing wildcard requesting prefix matches.
    pub fn fulltext_term(&self) -> String {
        format!("{}*", self.value)
    }
}
