//! Dynamic cell values consumed by the built-in function registries.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single cell value as seen by aggregation, filter and sorting functions.
///
/// Deserialization is untagged, so plain JSON maps onto the natural variant.
/// RFC 3339 strings are read as [`CellValue::DateTime`].
///
/// # Example
///
/// ```
/// use tablekit::value::CellValue;
///
/// let age = CellValue::from(42);
/// let name = CellValue::from("Ada");
/// assert_eq!(age.as_f64(), Some(42.0));
/// assert_eq!(name.to_string(), "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Timestamp.
    DateTime(DateTime<Utc>),
    /// Text value.
    String(String),
    /// List of values (multi-select cells, range filter bounds).
    List(Vec<CellValue>),
}

impl CellValue {
    /// Whether this value is null, a blank string, or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::String(s) => s.trim().is_empty(),
            CellValue::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Numeric view of this value.
    ///
    /// Strings are parsed after trimming, so `" 12 "` is a number. Strings
    /// like `"inf"` or `"NaN"` are not.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(n) => Some(*n as f64),
            CellValue::Float(n) => Some(*n),
            CellValue::String(s) => s.trim().parse().ok().filter(|n: &f64| n.is_finite()),
            _ => None,
        }
    }

    /// Timestamp view of this value. Strings are parsed as RFC 3339.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            CellValue::DateTime(dt) => Some(*dt),
            CellValue::String(s) => DateTime::parse_from_rfc3339(s.trim())
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        }
    }

    /// Items of a list value, or the value itself as a one-element slice.
    pub fn as_list(&self) -> &[CellValue] {
        match self {
            CellValue::List(items) => items,
            other => std::slice::from_ref(other),
        }
    }

    /// Lowercased, trimmed text used by the case-insensitive functions.
    pub fn normalized_text(&self) -> String {
        self.to_string().trim().to_lowercase()
    }

    /// Compare two values loosely.
    ///
    /// Values are ranked by kind first: null, then anything that reads as a
    /// number, then timestamps, then everything else as lowercased text.
    /// Within a kind numbers compare with `f64::total_cmp` and timestamps
    /// chronologically. The result is a total order, so it is safe to hand to
    /// `sort_by`.
    pub fn loose_cmp(&self, other: &CellValue) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }

    fn sort_key(&self) -> SortKey {
        if matches!(self, CellValue::Null) {
            return SortKey::Null;
        }
        if let Some(n) = self.as_f64() {
            return SortKey::Number(n);
        }
        if let Some(dt) = self.as_datetime() {
            return SortKey::DateTime(dt);
        }
        SortKey::Text(self.normalized_text())
    }
}

/// Kind-ranked key behind [`CellValue::loose_cmp`]. Variant order is the rank.
#[derive(Debug)]
enum SortKey {
    Null,
    Number(f64),
    DateTime(DateTime<Utc>),
    Text(String),
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Null => 0,
            SortKey::Number(_) => 1,
            SortKey::DateTime(_) => 2,
            SortKey::Text(_) => 3,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::DateTime(a), SortKey::DateTime(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Int(n) => write!(f, "{}", n),
            CellValue::Float(n) => write!(f, "{}", n),
            CellValue::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            CellValue::String(s) => f.write_str(s),
            CellValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(value.into())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        CellValue::DateTime(value)
    }
}

impl<V: Into<CellValue>> From<Vec<V>> for CellValue {
    fn from(values: Vec<V>) -> Self {
        CellValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_deserialize() {
        let values: Vec<CellValue> =
            serde_json::from_str(r#"[null, true, 3, 1.5, "2024-01-02T03:04:05Z", "x", [1]]"#)
                .unwrap();
        assert_eq!(values[0], CellValue::Null);
        assert_eq!(values[1], CellValue::Bool(true));
        assert_eq!(values[2], CellValue::Int(3));
        assert_eq!(values[3], CellValue::Float(1.5));
        assert!(matches!(values[4], CellValue::DateTime(_)));
        assert_eq!(values[5], CellValue::from("x"));
        assert_eq!(values[6], CellValue::List(vec![CellValue::Int(1)]));
    }

    #[test]
    fn test_loose_cmp_prefers_numbers() {
        assert_eq!(
            CellValue::from("10").loose_cmp(&CellValue::from(9)),
            Ordering::Greater
        );
        assert_eq!(
            CellValue::from("b").loose_cmp(&CellValue::from("A")),
            Ordering::Greater
        );
        assert_eq!(CellValue::Null.loose_cmp(&CellValue::from(0)), Ordering::Less);
    }

    #[test]
    fn test_loose_cmp_ranks_kinds() {
        let nine = CellValue::from(9);
        let ten = CellValue::from("10");
        let mixed = CellValue::from("1a");
        assert_eq!(nine.loose_cmp(&ten), Ordering::Less);
        assert_eq!(ten.loose_cmp(&mixed), Ordering::Less);
        assert_eq!(nine.loose_cmp(&mixed), Ordering::Less);

        let when = CellValue::from("2024-01-01T00:00:00Z");
        assert_eq!(CellValue::from(1e12).loose_cmp(&when), Ordering::Less);
        assert_eq!(when.loose_cmp(&CellValue::from("abc")), Ordering::Less);

        let nan = CellValue::Float(f64::NAN);
        assert_eq!(nan.loose_cmp(&CellValue::from(1e300)), Ordering::Greater);
        assert_eq!(nan.loose_cmp(&nan), Ordering::Equal);
    }
}
