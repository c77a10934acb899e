// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Query filtering by UUID.
//!
//! [`ByUuid`] is the argument of the by-uuid query scope: one value means
//! equality, several mean set membership. It renders its SQL predicate
//! with numbered placeholders so hosts can splice it into a dynamically
//! built WHERE clause, and it yields its bind values in placeholder order.
//!
//! Statically typed inputs convert through `From`/`FromIterator`.
//! Dynamically typed inputs (decoded JSON) convert through
//! `TryFrom<&serde_json::Value>` (`serde` feature), which rejects
//! unsupported shapes eagerly - before any query is built or executed.
//!
//! Values are checked for *shape*, not UUID syntax: a well-typed string
//! that is not a UUID simply matches nothing.

use std::slice;

use uuid::Uuid;

#[cfg(feature = "serde")]
use crate::error::InvalidInput;

/// Argument accepted by by-uuid query filters.
///
/// # Example
///
/// ```rust
/// use entity_uuid_core::ByUuid;
/// use uuid::Uuid;
///
/// let one = ByUuid::from("67e55044-10b1-426f-9247-bb680e5fe0c8");
/// let (condition, next) = one.condition("uuid", 1);
/// assert_eq!(condition, "uuid = $1");
/// assert_eq!(next, 2);
///
/// let many: ByUuid = vec![Uuid::new_v4(), Uuid::new_v4()].into();
/// let (condition, next) = many.condition("uuid", 3);
/// assert_eq!(condition, "uuid IN ($3, $4)");
/// assert_eq!(next, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ByUuid {
    /// Match records whose UUID attribute equals the value.
    One(String),

    /// Match records whose UUID attribute is any of the values.
    Many(Vec<String>)
}

impl ByUuid {
    /// Render the SQL predicate for `column` with numbered placeholders
    /// starting at `param_idx`.
    ///
    /// Returns the predicate and the next free parameter index. An empty
    /// sequence renders a never-matching predicate and consumes no
    /// parameters.
    #[must_use]
    pub fn condition(&self, column: &str, param_idx: usize) -> (String, usize) {
        match self {
            Self::One(_) => (format!("{column} = ${param_idx}"), param_idx + 1),
            Self::Many(values) if values.is_empty() => ("1 = 0".to_string(), param_idx),
            Self::Many(values) => {
                let placeholders: Vec<String> = (0..values.len())
                    .map(|offset| format!("${}", param_idx + offset))
                    .collect();
                (
                    format!("{column} IN ({})", placeholders.join(", ")),
                    param_idx + values.len()
                )
            }
        }
    }

    /// Bind values in placeholder order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Self::One(value) => slice::from_ref(value),
            Self::Many(values) => values
        }
    }

    /// Whether the filter matches any value at all.
    ///
    /// Only an empty sequence is considered empty; a single value never
    /// is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Check whether `candidate` satisfies the filter.
    ///
    /// Equality for a single value, set membership for several. This is
    /// the in-memory counterpart of [`condition`](Self::condition).
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.values().iter().any(|value| value == candidate)
    }

    /// Bind this filter's values onto a `sqlx` query, in the order
    /// produced by [`condition`](Self::condition).
    ///
    /// ```rust,ignore
    /// let filter = ByUuid::from(uuid);
    /// let (condition, _) = filter.condition("uuid", 1);
    /// let sql = format!("SELECT {columns} FROM posts WHERE {condition}");
    /// let rows = filter
    ///     .bind_onto(sqlx::query_as::<_, PostRow>(&sql))
    ///     .fetch_all(&pool)
    ///     .await?;
    /// ```
    #[cfg(feature = "postgres")]
    #[must_use]
    pub fn bind_onto<'q, O>(
        &'q self,
        mut query: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>
    ) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
        for value in self.values() {
            query = query.bind(value.as_str());
        }
        query
    }
}

/// Append a by-uuid predicate to a host-owned condition list.
///
/// The free-function counterpart of a query-builder scope: takes the
/// conditions being assembled, pushes the rendered predicate, and returns
/// the next free parameter index.
///
/// # Example
///
/// ```rust
/// use entity_uuid_core::{ByUuid, filter_by_uuid};
///
/// let mut conditions: Vec<String> = vec!["deleted_at IS NULL".to_string()];
/// let filter = ByUuid::from("67e55044-10b1-426f-9247-bb680e5fe0c8");
///
/// let next = filter_by_uuid(&mut conditions, "uuid", &filter, 1);
/// assert_eq!(conditions.join(" AND "), "deleted_at IS NULL AND uuid = $1");
/// assert_eq!(next, 2);
/// ```
pub fn filter_by_uuid(
    conditions: &mut Vec<String>,
    column: &str,
    filter: &ByUuid,
    param_idx: usize
) -> usize {
    let (condition, next_idx) = filter.condition(column, param_idx);
    #[cfg(feature = "tracing")]
    tracing::debug!(column, %condition, "applied by-uuid filter");
    conditions.push(condition);
    next_idx
}

impl From<&str> for ByUuid {
    fn from(value: &str) -> Self {
        Self::One(value.to_owned())
    }
}

impl From<String> for ByUuid {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Uuid> for ByUuid {
    fn from(value: Uuid) -> Self {
        Self::One(value.to_string())
    }
}

impl From<&Uuid> for ByUuid {
    fn from(value: &Uuid) -> Self {
        Self::One(value.to_string())
    }
}

impl From<Vec<String>> for ByUuid {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<Uuid>> for ByUuid {
    fn from(values: Vec<Uuid>) -> Self {
        values.into_iter().collect()
    }
}

impl FromIterator<String> for ByUuid {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::Many(iter.into_iter().collect())
    }
}

impl FromIterator<Uuid> for ByUuid {
    fn from_iter<I: IntoIterator<Item = Uuid>>(iter: I) -> Self {
        Self::Many(iter.into_iter().map(|value| value.to_string()).collect())
    }
}

/// Conversion for dynamically typed input, e.g. a decoded request body.
///
/// Accepts a JSON string or an array of JSON strings. Anything else fails
/// with [`InvalidInput::UnsupportedType`] - eagerly, independent of
/// whether any record would match.
#[cfg(feature = "serde")]
impl TryFrom<&serde_json::Value> for ByUuid {
    type Error = InvalidInput;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::String(s) => Ok(Self::One(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(InvalidInput::UnsupportedType(json_kind(other)))
                })
                .collect::<Result<Vec<String>, InvalidInput>>()
                .map(Self::Many),
            other => Err(InvalidInput::UnsupportedType(json_kind(other)))
        }
    }
}

/// Human-readable JSON type name for error messages.
#[cfg(feature = "serde")]
fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object"
    }
}
