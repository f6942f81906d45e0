//! Identifying properties that records can be looked up by.

use std::fmt;

use sea_orm::Value;

/// Selector for the identifying properties shared by the Sequencescape records.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    InternalId,
    Name,
    AccessionNumber,
}

impl Property {
    pub const ALL: [Property; 3] = [Property::InternalId, Property::Name, Property::AccessionNumber];

    /// Column name used for this property in every table that has it.
    pub fn column_name(self) -> &'static str {
        match self {
            Property::InternalId => "internal_id",
            Property::Name => "name",
            Property::AccessionNumber => "accession_number",
        }
    }

    /// Whether `value` can be compared against this property.
    ///
    /// Internal ids are integers, names and accession numbers are text. Nulls
    /// never match anything and are rejected.
    pub fn accepts(self, value: &Value) -> bool {
        self.lookup_key(value).is_some()
    }

    /// Normalised, ordered form of `value`, or `None` if it is not accepted.
    pub fn lookup_key(self, value: &Value) -> Option<LookupKey> {
        match (self, value) {
            (Property::InternalId, Value::TinyInt(Some(v))) => Some(LookupKey::Integer((*v).into())),
            (Property::InternalId, Value::SmallInt(Some(v))) => Some(LookupKey::Integer((*v).into())),
            (Property::InternalId, Value::Int(Some(v))) => Some(LookupKey::Integer((*v).into())),
            (Property::InternalId, Value::BigInt(Some(v))) => Some(LookupKey::Integer((*v).into())),
            (Property::InternalId, Value::TinyUnsigned(Some(v))) => Some(LookupKey::Integer((*v).into())),
            (Property::InternalId, Value::SmallUnsigned(Some(v))) => Some(LookupKey::Integer((*v).into())),
            (Property::InternalId, Value::Unsigned(Some(v))) => Some(LookupKey::Integer((*v).into())),
            (Property::InternalId, Value::BigUnsigned(Some(v))) => Some(LookupKey::Integer((*v).into())),
            (Property::Name | Property::AccessionNumber, Value::String(Some(v))) => {
                Some(LookupKey::Text(v.as_str().to_owned()))
            }
            (Property::Name | Property::AccessionNumber, Value::Char(Some(c))) => Some(LookupKey::Text(c.to_string())),
            _ => None,
        }
    }
}

/// A lookup value reduced to what it compares as, so duplicates can be dropped.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LookupKey {
    Integer(i128),
    Text(String),
}

impl LookupKey {
    /// Value to bind in a query, or `None` for integers no stored id can equal.
    pub fn to_value(&self) -> Option<Value> {
        match self {
            LookupKey::Integer(v) => i64::try_from(*v).ok().map(Value::from),
            LookupKey::Text(v) => Some(Value::from(v.clone())),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
