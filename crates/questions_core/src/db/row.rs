//! Named-field result rows.
//!
//! Values keep SQLite's native storage class (`Integer`, `Real`, `Text`,
//! `Null`). Accessors look columns up by name and fail loudly on a missing
//! column or a storage class the caller did not ask for.

use super::{DbError, DbResult};
use rusqlite::types::Value;
use rusqlite::Row;

/// One result row keyed by column name, in statement column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SqlRow {
    fields: Vec<(String, Value)>,
}

impl SqlRow {
    pub(crate) fn from_rusqlite(row: &Row<'_>, columns: &[String]) -> DbResult<Self> {
        let mut fields = Vec::with_capacity(columns.len());
        for (index, column) in columns.iter().enumerate() {
            fields.push((column.clone(), row.get::<_, Value>(index)?));
        }
        Ok(Self { fields })
    }

    /// Builds a row from explicit pairs. Lookups return the first column
    /// with a matching name.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(column, value)| (column.into(), value))
                .collect(),
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(column, _)| column.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the raw value of `column`.
    pub fn value(&self, column: &str) -> DbResult<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
            .ok_or_else(|| DbError::MissingColumn(column.to_string()))
    }

    /// Returns the first column's value, used for single-aggregate queries.
    pub fn first_value(&self) -> Option<&Value> {
        self.fields.first().map(|(_, value)| value)
    }

    pub fn integer(&self, column: &str) -> DbResult<i64> {
        match self.value(column)? {
            Value::Integer(value) => Ok(*value),
            _ => Err(unexpected(column, "an integer")),
        }
    }

    pub fn optional_integer(&self, column: &str) -> DbResult<Option<i64>> {
        match self.value(column)? {
            Value::Integer(value) => Ok(Some(*value)),
            Value::Null => Ok(None),
            _ => Err(unexpected(column, "an integer or NULL")),
        }
    }

    pub fn text(&self, column: &str) -> DbResult<String> {
        match self.value(column)? {
            Value::Text(value) => Ok(value.clone()),
            _ => Err(unexpected(column, "text")),
        }
    }

    /// Reads a numeric column as `f64`. Integers widen; `NULL` maps to `None`.
    pub fn optional_real(&self, column: &str) -> DbResult<Option<f64>> {
        match self.value(column)? {
            Value::Real(value) => Ok(Some(*value)),
            Value::Integer(value) => Ok(Some(*value as f64)),
            Value::Null => Ok(None),
            _ => Err(unexpected(column, "a number or NULL")),
        }
    }
}

fn unexpected(column: &str, expected: &'static str) -> DbError {
    DbError::UnexpectedType {
        column: column.to_string(),
        expected,
    }
}
