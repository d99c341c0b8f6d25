//! Field access for schemaless querying of typed records.

use std::borrow::Cow;
use std::cmp::Ordering;

use jiff::Timestamp;

/// A single field value extracted from a record for searching or sorting.
///
/// Variants compare against each other by rank (text < number < timestamp) so
/// the ordering stays total even across types, although in practice a given
/// field name always yields the same variant.
#[derive(Debug, Clone)]
pub enum FieldValue<'a> {
    /// Textual field; matched by search predicates, compared lexicographically.
    Text(Cow<'a, str>),
    /// Numeric field, compared with the IEEE 754 total order.
    Number(f64),
    /// Timestamp field.
    Timestamp(Timestamp),
}

impl FieldValue<'_> {
    /// Returns the text content if this is a textual field.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_ref()),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Text(_) => 0,
            Self::Number(_) => 1,
            Self::Timestamp(_) => 2,
        }
    }
}

impl Ord for FieldValue<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(lhs), Self::Text(rhs)) => lhs.cmp(rhs),
            (Self::Number(lhs), Self::Number(rhs)) => lhs.total_cmp(rhs),
            (Self::Timestamp(lhs), Self::Timestamp(rhs)) => lhs.cmp(rhs),
            (lhs, rhs) => lhs.rank().cmp(&rhs.rank()),
        }
    }
}

impl PartialOrd for FieldValue<'_> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FieldValue<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FieldValue<'_> {}

impl<'a> From<&'a str> for FieldValue<'a> {
    #[inline]
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<f64> for FieldValue<'_> {
    #[inline]
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i64> for FieldValue<'_> {
    #[inline]
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<Timestamp> for FieldValue<'_> {
    #[inline]
    fn from(timestamp: Timestamp) -> Self {
        Self::Timestamp(timestamp)
    }
}

/// Read access to a record's queryable fields.
///
/// Implemented by every domain record stored in a [`Collection`]. Field names
/// are the public API names used in `sortBy` values and search allow-lists,
/// not Rust struct field names (`createdAt`, not `created_at`).
///
/// [`Collection`]: crate::Collection
pub trait Record {
    /// Unique identifier of the record.
    fn id(&self) -> &str;

    /// Returns the named field, or `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_ordering() {
        let lhs = FieldValue::from("alpha");
        let rhs = FieldValue::from("beta");
        assert!(lhs < rhs);
        assert_eq!(lhs, FieldValue::from("alpha"));
    }

    #[test]
    fn number_total_order() {
        let lhs = FieldValue::from(1.5);
        let rhs = FieldValue::from(2.0);
        assert!(lhs < rhs);
        assert!(FieldValue::from(f64::NAN) > rhs);
    }

    #[test]
    fn cross_variant_rank() {
        let text = FieldValue::from("z");
        let number = FieldValue::from(0.0);
        let timestamp = FieldValue::from(Timestamp::UNIX_EPOCH);
        assert!(text < number);
        assert!(number < timestamp);
    }

    #[test]
    fn missing_fields_sort_first() {
        // Option<FieldValue> is what sorting actually compares; None must
        // order before any present value.
        let missing: Option<FieldValue<'_>> = None;
        assert!(missing < Some(FieldValue::from("")));
    }
}
