//! Mapper layer between domain records and the database.
//!
//! [`Mapper`] is the storage-agnostic contract: the identifier lookups are
//! default methods built on [`Mapper::get_by_property_value_sequence`], so an
//! implementation only supplies `add`, `get_all` and the property query.
//! [`SqlMapper`] implements it over SeaORM for every [`crate::converter::Record`].

pub mod association;
pub mod sql;

use async_trait::async_trait;
use sea_orm::Value;

use crate::error::{MapperError, Result};
use crate::property::Property;

pub use sql::SqlMapper;

/// Identifier for [`Mapper::get`]. Exactly one field must be set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lookup {
    pub name: Option<String>,
    pub accession_number: Option<String>,
    pub internal_id: Option<i64>,
}

impl Lookup {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn accession_number(accession_number: impl Into<String>) -> Self {
        Self {
            accession_number: Some(accession_number.into()),
            ..Self::default()
        }
    }

    pub fn internal_id(internal_id: i64) -> Self {
        Self {
            internal_id: Some(internal_id),
            ..Self::default()
        }
    }

    /// The single property and value this lookup identifies a record by.
    pub fn identifier(&self) -> Result<(Property, Value)> {
        let mut supplied = Vec::with_capacity(1);
        if let Some(name) = &self.name {
            supplied.push((Property::Name, Value::from(name.clone())));
        }
        if let Some(accession_number) = &self.accession_number {
            supplied.push((Property::AccessionNumber, Value::from(accession_number.clone())));
        }
        if let Some(internal_id) = self.internal_id {
            supplied.push((Property::InternalId, Value::from(internal_id)));
        }

        match supplied.len() {
            0 => Err(MapperError::InvalidArgument("no identifier provided to query on".to_string())),
            1 => Ok(supplied.remove(0)),
            _ => Err(MapperError::InvalidArgument(format!(
                "exactly one identifier must be provided, got {}",
                supplied.iter().map(|(p, _)| p.to_string()).collect::<Vec<_>>().join(", ")
            ))),
        }
    }
}

/// Persistence contract for one kind of domain record.
///
/// All queries only see current rows.
#[async_trait]
pub trait Mapper<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// Persist `models` in a single transaction. An empty batch is a no-op.
    async fn add(&self, models: &[T]) -> Result<()>;

    /// Every current record.
    async fn get_all(&self) -> Result<Vec<T>>;

    /// Current records whose `property` is one of `values`.
    ///
    /// # Errors
    /// `UnsupportedOperation` if the record kind lacks `property` or an
    /// `is_current` flag, `InvalidArgument` if a value has the wrong type for
    /// `property`. An empty `values` returns an empty result without querying.
    async fn get_by_property_value_sequence(&self, property: Property, values: Vec<Value>) -> Result<Vec<T>>;

    async fn get_many_by_internal_id(&self, internal_ids: &[i64]) -> Result<Vec<T>> {
        let values = internal_ids.iter().copied().map(Value::from).collect();
        self.get_by_property_value_sequence(Property::InternalId, values).await
    }

    async fn get_many_by_name<S>(&self, names: &[S]) -> Result<Vec<T>>
    where
        S: AsRef<str> + Sync,
    {
        let values = names.iter().map(|name| Value::from(name.as_ref().to_owned())).collect();
        self.get_by_property_value_sequence(Property::Name, values).await
    }

    async fn get_many_by_accession_number<S>(&self, accession_numbers: &[S]) -> Result<Vec<T>>
    where
        S: AsRef<str> + Sync,
    {
        let values = accession_numbers
            .iter()
            .map(|accession_number| Value::from(accession_number.as_ref().to_owned()))
            .collect();
        self.get_by_property_value_sequence(Property::AccessionNumber, values).await
    }

    /// Current records whose `id_type` property is one of `ids`.
    async fn get_many_by_given_id(&self, ids: Vec<Value>, id_type: Property) -> Result<Vec<T>> {
        self.get_by_property_value_sequence(id_type, ids).await
    }

    /// The single current record matching `lookup`, if any.
    ///
    /// # Errors
    /// `InvalidArgument` unless exactly one identifier is set,
    /// `IntegrityViolation` if several current records match.
    async fn get(&self, lookup: &Lookup) -> Result<Option<T>> {
        let (property, value) = lookup.identifier()?;
        let matches = self.get_by_property_value_sequence(property, vec![value.clone()]).await?;
        expect_at_most_one(property, &value, matches)
    }

    /// One [`Mapper::get`] per `(property, value)` pair, keeping the hits.
    ///
    /// An ambiguous pair fails the whole call rather than being skipped.
    async fn get_many(&self, ids: &[(Property, Value)]) -> Result<Vec<T>> {
        let mut results = Vec::with_capacity(ids.len());
        for (property, value) in ids {
            let matches = self.get_by_property_value_sequence(*property, vec![value.clone()]).await?;
            if let Some(found) = expect_at_most_one(*property, value, matches)? {
                results.push(found);
            }
        }
        Ok(results)
    }
}

fn expect_at_most_one<T>(property: Property, value: &Value, mut matches: Vec<T>) -> Result<Option<T>> {
    match matches.len() {
        0 | 1 => Ok(matches.pop()),
        count => Err(MapperError::IntegrityViolation(format!(
            "{count} current rows share {property} {value:?}"
        ))),
    }
}
