//! SeaORM-backed mapper for any registered record kind.

use std::collections::BTreeSet;
use std::marker::PhantomData;

use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait, Value,
};

use super::Mapper;
use crate::connector::Connector;
use crate::constants::MAX_IN_LIST_VALUES;
use crate::converter::{Capabilities, ModelConverter, Record};
use crate::error::{MapperError, Result};
use crate::property::Property;

/// Mapper storing records of type `T` through SeaORM.
///
/// Every operation opens a session from the connector and closes it before
/// returning; nothing is cached between calls.
#[derive(Clone, Debug)]
pub struct SqlMapper<T: Record> {
    pub(crate) connector: Connector,
    capabilities: Capabilities,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> SqlMapper<T> {
    /// Build a mapper for `T`.
    ///
    /// # Errors
    /// `NotImplemented` if `converter` has no stored representation for `T`.
    pub fn new(connector: Connector, converter: &ModelConverter) -> Result<Self> {
        let capabilities = converter.capabilities(T::KIND)?.clone();
        Ok(Self {
            connector,
            capabilities,
            _record: PhantomData,
        })
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Every stored version of the record with `internal_id`, oldest first,
    /// current or not.
    pub async fn get_history(&self, internal_id: i64) -> Result<Vec<T>> {
        self.capabilities.ensure_queryable(Property::InternalId)?;
        let column = Self::column(Property::InternalId)?;

        let session = self.connector.create_session().await?;
        let rows = T::Entity::find()
            .filter(column.eq(internal_id))
            .order_by_asc(T::row_key_column())
            .all(&session)
            .await;
        Connector::close_session(session).await;

        Ok(rows?.into_iter().map(T::from_row).collect())
    }

    fn column(property: Property) -> Result<<T::Entity as EntityTrait>::Column> {
        T::column(property).ok_or_else(|| {
            MapperError::UnsupportedOperation(format!("{} records have no {} column", T::KIND, property))
        })
    }

    /// Current rows whose `column` is in `values`, one query per chunk.
    ///
    /// `values` must be free of duplicates so no row is returned twice.
    async fn find_current_in(
        session: &DatabaseConnection,
        column: <T::Entity as EntityTrait>::Column,
        is_current: <T::Entity as EntityTrait>::Column,
        values: &[Value],
    ) -> Result<Vec<<T::Entity as EntityTrait>::Model>> {
        let mut rows = Vec::new();
        for chunk in values.chunks(MAX_IN_LIST_VALUES) {
            let found = T::Entity::find()
                .filter(column.is_in(chunk.iter().cloned()))
                .filter(is_current.eq(true))
                .all(session)
                .await?;
            rows.extend(found);
        }
        Ok(rows)
    }

    async fn insert_all(session: &DatabaseConnection, models: &[T]) -> Result<()> {
        let txn = session.begin().await?;
        for model in models {
            T::Entity::insert(model.to_active_model()).exec(&txn).await?;
        }
        txn.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl<T: Record> Mapper<T> for SqlMapper<T> {
    async fn add(&self, models: &[T]) -> Result<()> {
        if models.is_empty() {
            debug!("Nothing to add to {}", self.capabilities.table);
            return Ok(());
        }

        let session = self.connector.create_session().await?;
        let outcome = Self::insert_all(&session, models).await;
        Connector::close_session(session).await;
        outcome?;

        info!("Added {} {} record(s)", models.len(), T::KIND);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<T>> {
        let mut query = T::Entity::find();
        if let Some(is_current) = T::is_current_column() {
            query = query.filter(is_current.eq(true));
        }

        let session = self.connector.create_session().await?;
        let rows = query.all(&session).await;
        Connector::close_session(session).await;

        Ok(rows?.into_iter().map(T::from_row).collect())
    }

    async fn get_by_property_value_sequence(&self, property: Property, values: Vec<Value>) -> Result<Vec<T>> {
        self.capabilities.ensure_queryable(property)?;

        if values.is_empty() {
            debug!("Empty {} lookup on {}, skipping query", property, self.capabilities.table);
            return Ok(Vec::new());
        }
        let mut keys = BTreeSet::new();
        for value in &values {
            let key = property.lookup_key(value).ok_or_else(|| {
                MapperError::InvalidArgument(format!("{value:?} is not a valid {property} value"))
            })?;
            keys.insert(key);
        }
        let bound: Vec<Value> = keys.iter().filter_map(|key| key.to_value()).collect();

        let column = Self::column(property)?;
        let is_current = T::is_current_column().ok_or_else(|| {
            MapperError::UnsupportedOperation(format!("{} records have no is_current column", T::KIND))
        })?;

        let session = self.connector.create_session().await?;
        let rows = Self::find_current_in(&session, column, is_current, &bound).await;
        Connector::close_session(session).await;

        let models: Vec<T> = rows?.into_iter().map(T::from_row).collect();
        debug!(
            "{} lookup on {}: {} value(s) matched {} current row(s)",
            property,
            self.capabilities.table,
            values.len(),
            models.len()
        );
        Ok(models)
    }
}
