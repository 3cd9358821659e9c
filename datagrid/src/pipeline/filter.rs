//! Column filters and the default filter collaborator.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::error::FilterError;
use crate::model::{Row, Value};

use super::fuzzy::FuzzyTerm;

/// A filter term entered for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "term", rename_all = "snake_case")]
pub enum FilterTerm {
    /// Case-insensitive substring match on the displayed value.
    Text(String),
    /// Comma-separated numeric rules: `5`, `>3`, `<10`, `1-4`.
    Numeric(String),
    /// Fuzzy match on the displayed value.
    Fuzzy(String),
}

impl FilterTerm {
    /// The raw term text.
    pub fn as_str(&self) -> &str {
        match self {
            FilterTerm::Text(s) | FilterTerm::Numeric(s) | FilterTerm::Fuzzy(s) => s,
        }
    }

    /// An empty term clears the column's filter.
    pub fn is_empty(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

/// A filter change for one column, as emitted by a header filter input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFilter {
    pub column_key: String,
    pub term: FilterTerm,
}

impl ColumnFilter {
    pub fn new(column_key: impl Into<String>, term: FilterTerm) -> Self {
        Self {
            column_key: column_key.into(),
            term,
        }
    }

    /// Shorthand for a text filter.
    pub fn text(column_key: impl Into<String>, term: impl Into<String>) -> Self {
        Self::new(column_key, FilterTerm::Text(term.into()))
    }

    /// Shorthand for a numeric filter.
    pub fn numeric(column_key: impl Into<String>, term: impl Into<String>) -> Self {
        Self::new(column_key, FilterTerm::Numeric(term.into()))
    }

    /// Shorthand for a fuzzy filter.
    pub fn fuzzy(column_key: impl Into<String>, term: impl Into<String>) -> Self {
        Self::new(column_key, FilterTerm::Fuzzy(term.into()))
    }
}

/// Active filters, at most one per column key. Filters compose with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    filters: BTreeMap<String, FilterTerm>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a filter change: a non-empty term replaces the column's filter,
    /// an empty term removes it.
    pub fn apply(&mut self, filter: ColumnFilter) {
        if filter.term.is_empty() {
            self.filters.remove(&filter.column_key);
        } else {
            self.filters.insert(filter.column_key, filter.term);
        }
    }

    /// Builder form of [`apply`](Self::apply).
    pub fn with(mut self, filter: ColumnFilter) -> Self {
        self.apply(filter);
        self
    }

    /// Remove every filter.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    pub fn get(&self, column_key: &str) -> Option<&FilterTerm> {
        self.filters.get(column_key)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterTerm)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Filtering collaborator: reduces a row sequence to the rows matching every
/// active filter.
///
/// An `Err` never reaches the host; the pipeline substitutes an empty sequence.
pub trait RowFilter {
    fn filter(&self, rows: Vec<Row>, filters: &FilterState) -> Result<Vec<Row>, FilterError>;
}

/// A single numeric filter rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericRule {
    Eq(f64),
    Gt(f64),
    Lt(f64),
    /// Inclusive range.
    Range(f64, f64),
}

impl NumericRule {
    fn matches(&self, n: f64) -> bool {
        match *self {
            NumericRule::Eq(v) => n == v,
            NumericRule::Gt(v) => n > v,
            NumericRule::Lt(v) => n < v,
            NumericRule::Range(lo, hi) => n >= lo && n <= hi,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if let Some(rest) = token.strip_prefix('>') {
            return rest.trim().parse().ok().map(NumericRule::Gt);
        }
        if let Some(rest) = token.strip_prefix('<') {
            return rest.trim().parse().ok().map(NumericRule::Lt);
        }
        if let Ok(v) = token.parse() {
            return Some(NumericRule::Eq(v));
        }
        // Skip a leading sign so "-5-3" splits after the first number.
        let split_at = token
            .char_indices()
            .skip(1)
            .find(|(_, c)| *c == '-')
            .map(|(i, _)| i)?;
        let lo = token[..split_at].trim().parse().ok()?;
        let hi = token[split_at + 1..].trim().parse().ok()?;
        Some(NumericRule::Range(lo, hi))
    }
}

/// Parse a comma-separated numeric filter term.
///
/// Tokens that are not a rule, such as a half-typed `>`, are skipped.
/// Returns `None` only when no token is a rule.
pub fn parse_numeric_rules(term: &str) -> Option<Vec<NumericRule>> {
    let rules: Vec<NumericRule> = term.split(',').filter_map(NumericRule::parse).collect();
    if rules.is_empty() {
        log::trace!("parse_numeric_rules: no rule in {:?}", term);
        return None;
    }
    Some(rules)
}

enum Compiled {
    Text(String),
    Numeric(Vec<NumericRule>),
    Fuzzy(FuzzyTerm),
}

/// Default [`RowFilter`]: evaluates each [`FilterTerm`] against the cell
/// under its column key. A row without that cell never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermFilter;

impl TermFilter {
    fn compile(column_key: &str, term: &FilterTerm) -> Result<Compiled, FilterError> {
        match term {
            FilterTerm::Text(s) => Ok(Compiled::Text(s.trim().to_lowercase())),
            FilterTerm::Numeric(s) => parse_numeric_rules(s)
                .map(Compiled::Numeric)
                .ok_or_else(|| FilterError::InvalidTerm {
                    column: column_key.to_string(),
                    term: s.clone(),
                }),
            FilterTerm::Fuzzy(s) => Ok(Compiled::Fuzzy(FuzzyTerm::new(s))),
        }
    }

    fn matches(compiled: &mut Compiled, value: &Value) -> bool {
        match compiled {
            Compiled::Text(needle) => value.to_string().to_lowercase().contains(needle.as_str()),
            Compiled::Numeric(rules) => {
                let n = match value {
                    Value::Text(s) => s.trim().parse::<f64>().ok(),
                    other => other.as_f64(),
                };
                n.is_some_and(|n| rules.iter().any(|r| r.matches(n)))
            }
            Compiled::Fuzzy(term) => term.matches(&value.to_string()),
        }
    }
}

impl RowFilter for TermFilter {
    fn filter(&self, rows: Vec<Row>, filters: &FilterState) -> Result<Vec<Row>, FilterError> {
        if filters.is_empty() {
            return Ok(rows);
        }

        let mut compiled = filters
            .iter()
            .map(|(key, term)| Self::compile(key, term).map(|c| (key, c)))
            .collect::<Result<Vec<_>, FilterError>>()?;

        Ok(rows
            .into_iter()
            .filter(|row| {
                compiled.iter_mut().all(|(key, c)| {
                    row.get(key).is_some_and(|value| Self::matches(c, value))
                })
            })
            .collect())
    }
}
