// src/domain/filter.rs

use crate::errors::ServerError;
use rusqlite::types::Value as SqlValue;
use std::collections::HashMap;

/// Numeric listing columns that accept min/max query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Price,
    Bedrooms,
    Bathrooms,
}

impl Column {
    pub fn sql_name(&self) -> &'static str {
        match self {
            Column::Price => "price",
            Column::Bedrooms => "bedrooms",
            Column::Bathrooms => "bathrooms",
        }
    }
}

/// One filter condition. Clauses are combined with AND; an absent
/// filter contributes no clause at all (zero clauses = full table).
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Eq(Column, i64),
    /// Inclusive on both ends.
    Between(Column, i64, i64),
    AtLeast(Column, i64),
    AtMost(Column, i64),
    StatusEq(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingFilter {
    clauses: Vec<Clause>,
}

impl ListingFilter {
    /// Build the filter from the parsed query string.
    ///
    /// Recognized: min_price/max_price, min_bed/max_bed,
    /// min_bath/max_bath, status. Empty values count as absent.
    /// Non-integer min/max values fail the whole request.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let mut clauses = Vec::new();

        for (min_key, max_key, column) in [
            ("min_price", "max_price", Column::Price),
            ("min_bed", "max_bed", Column::Bedrooms),
            ("min_bath", "max_bath", Column::Bathrooms),
        ] {
            if let Some(clause) = range_clause(params, min_key, max_key, column)? {
                clauses.push(clause);
            }
        }

        if let Some(status) = get_nonempty(params, "status") {
            clauses.push(Clause::StatusEq(status.to_string()));
        }

        Ok(Self { clauses })
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Render the conjunction as a WHERE fragment plus bind values.
    /// Returns an empty fragment when there are no clauses.
    pub fn to_sql(&self) -> (String, Vec<SqlValue>) {
        if self.clauses.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut fragments = Vec::with_capacity(self.clauses.len());
        let mut binds = Vec::new();

        for clause in &self.clauses {
            match clause {
                Clause::Eq(col, v) => {
                    fragments.push(format!("{} = ?", col.sql_name()));
                    binds.push(SqlValue::Integer(*v));
                }
                Clause::Between(col, lo, hi) => {
                    fragments.push(format!("{} BETWEEN ? AND ?", col.sql_name()));
                    binds.push(SqlValue::Integer(*lo));
                    binds.push(SqlValue::Integer(*hi));
                }
                Clause::AtLeast(col, v) => {
                    fragments.push(format!("{} >= ?", col.sql_name()));
                    binds.push(SqlValue::Integer(*v));
                }
                Clause::AtMost(col, v) => {
                    fragments.push(format!("{} <= ?", col.sql_name()));
                    binds.push(SqlValue::Integer(*v));
                }
                Clause::StatusEq(s) => {
                    fragments.push("status = ?".to_string());
                    binds.push(SqlValue::Text(s.clone()));
                }
            }
        }

        (format!("WHERE {}", fragments.join(" AND ")), binds)
    }
}

/// Pick the clause shape for one (min, max) pair.
///
/// Precedence: min == max (as parsed integers) beats everything and
/// becomes plain equality; both present becomes an inclusive range;
/// otherwise whichever bound exists; neither means no clause.
fn range_clause(
    params: &HashMap<String, String>,
    min_key: &str,
    max_key: &str,
    column: Column,
) -> Result<Option<Clause>, ServerError> {
    let min = get_nonempty(params, min_key)
        .map(|v| parse_int(min_key, v))
        .transpose()?;
    let max = get_nonempty(params, max_key)
        .map(|v| parse_int(max_key, v))
        .transpose()?;

    Ok(match (min, max) {
        (Some(lo), Some(hi)) if lo == hi => Some(Clause::Eq(column, lo)),
        (Some(lo), Some(hi)) => Some(Clause::Between(column, lo, hi)),
        (Some(lo), None) => Some(Clause::AtLeast(column, lo)),
        (None, Some(hi)) => Some(Clause::AtMost(column, hi)),
        (None, None) => None,
    })
}

/// Query parameters with empty values behave as if they were omitted.
pub(crate) fn get_nonempty<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

pub(crate) fn parse_int(name: &str, value: &str) -> Result<i64, ServerError> {
    value
        .parse::<i64>()
        .map_err(|_| ServerError::BadRequest(format!("{name} must be an integer, got {value:?}")))
}
