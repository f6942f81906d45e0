//! Conversion between domain records and their stored rows.
//!
//! [`Record`] ties a domain type to its SeaORM entity and spells out which
//! column backs each identifying [`Property`]. [`ModelConverter`] is the table
//! of record kinds a mapper may be built for; it is handed to mappers at
//! construction instead of being looked up globally.

use std::collections::BTreeMap;

use sea_orm::{ActiveModelTrait, ActiveValue, EntityName, EntityTrait};

use crate::entities::{library, multiplexed_library, sample, study, well};
use crate::error::{MapperError, Result};
use crate::models::{Library, ModelKind, MultiplexedLibrary, Sample, Study, Well};
use crate::property::Property;

/// A domain record that can be persisted through a SeaORM entity.
pub trait Record: Clone + Send + Sync + 'static {
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + Send + 'static;

    const KIND: ModelKind;

    /// Column storing `property`, or `None` if this record has no such property.
    fn column(property: Property) -> Option<<Self::Entity as EntityTrait>::Column>;

    /// Column holding the currency flag, or `None` for unversioned records.
    fn is_current_column() -> Option<<Self::Entity as EntityTrait>::Column>;

    /// Auto-increment row key, ordering versions by insertion.
    fn row_key_column() -> <Self::Entity as EntityTrait>::Column;

    fn internal_id(&self) -> i64;

    fn to_active_model(&self) -> Self::ActiveModel;

    fn from_row(row: <Self::Entity as EntityTrait>::Model) -> Self;
}

/// What a registered record kind supports when queried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub kind: ModelKind,
    pub table: String,
    pub properties: Vec<Property>,
    pub is_current: bool,
}

impl Capabilities {
    /// Derive the capabilities of `T` from its column table.
    pub fn of<T: Record>() -> Self {
        Self {
            kind: T::KIND,
            table: T::Entity::default().table_name().to_owned(),
            properties: Property::ALL
                .into_iter()
                .filter(|property| T::column(*property).is_some())
                .collect(),
            is_current: T::is_current_column().is_some(),
        }
    }

    pub fn supports(&self, property: Property) -> bool {
        self.properties.contains(&property)
    }

    /// Check that records of this kind can be filtered on `property`.
    ///
    /// Property lookups always restrict to current rows, so the kind needs
    /// both the property and an `is_current` flag.
    pub fn ensure_queryable(&self, property: Property) -> Result<()> {
        if !self.is_current {
            return Err(MapperError::UnsupportedOperation(format!(
                "{} records cannot be queried by {}: the query requires an is_current property",
                self.kind, property
            )));
        }
        if !self.supports(property) {
            return Err(MapperError::UnsupportedOperation(format!(
                "{} records cannot be queried by {}: they do not have that property",
                self.kind, property
            )));
        }
        Ok(())
    }
}

/// Registry of the record kinds that have a stored representation.
#[derive(Clone, Debug, Default)]
pub struct ModelConverter {
    tables: BTreeMap<ModelKind, Capabilities>,
}

impl ModelConverter {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every Sequencescape record kind.
    pub fn standard() -> Self {
        Self::new()
            .register::<Sample>()
            .register::<Study>()
            .register::<Library>()
            .register::<MultiplexedLibrary>()
            .register::<Well>()
    }

    pub fn register<T: Record>(mut self) -> Self {
        self.tables.insert(T::KIND, Capabilities::of::<T>());
        self
    }

    pub fn is_registered(&self, kind: ModelKind) -> bool {
        self.tables.contains_key(&kind)
    }

    /// Capabilities of `kind`, failing if no stored representation is registered.
    pub fn capabilities(&self, kind: ModelKind) -> Result<&Capabilities> {
        self.tables
            .get(&kind)
            .ok_or_else(|| MapperError::NotImplemented(format!("no stored representation registered for {kind}")))
    }

    pub fn kinds(&self) -> impl Iterator<Item = ModelKind> + '_ {
        self.tables.keys().copied()
    }
}

impl From<&Sample> for sample::ActiveModel {
    fn from(model: &Sample) -> Self {
        Self {
            id: ActiveValue::NotSet,
            internal_id: ActiveValue::Set(model.internal_id),
            name: ActiveValue::Set(model.name.clone()),
            accession_number: ActiveValue::Set(model.accession_number.clone()),
            organism: ActiveValue::Set(model.organism.clone()),
            common_name: ActiveValue::Set(model.common_name.clone()),
            taxon_id: ActiveValue::Set(model.taxon_id),
            gender: ActiveValue::Set(model.gender.clone()),
            ethnicity: ActiveValue::Set(model.ethnicity.clone()),
            cohort: ActiveValue::Set(model.cohort.clone()),
            country_of_origin: ActiveValue::Set(model.country_of_origin.clone()),
            geographical_region: ActiveValue::Set(model.geographical_region.clone()),
            is_current: ActiveValue::Set(model.is_current),
        }
    }
}

impl From<sample::Model> for Sample {
    fn from(row: sample::Model) -> Self {
        Self {
            internal_id: row.internal_id,
            name: row.name,
            accession_number: row.accession_number,
            organism: row.organism,
            common_name: row.common_name,
            taxon_id: row.taxon_id,
            gender: row.gender,
            ethnicity: row.ethnicity,
            cohort: row.cohort,
            country_of_origin: row.country_of_origin,
            geographical_region: row.geographical_region,
            is_current: row.is_current,
        }
    }
}

impl From<&Study> for study::ActiveModel {
    fn from(model: &Study) -> Self {
        Self {
            id: ActiveValue::NotSet,
            internal_id: ActiveValue::Set(model.internal_id),
            name: ActiveValue::Set(model.name.clone()),
            accession_number: ActiveValue::Set(model.accession_number.clone()),
            study_type: ActiveValue::Set(model.study_type.clone()),
            description: ActiveValue::Set(model.description.clone()),
            study_title: ActiveValue::Set(model.study_title.clone()),
            study_visibility: ActiveValue::Set(model.study_visibility.clone()),
            faculty_sponsor: ActiveValue::Set(model.faculty_sponsor.clone()),
            is_current: ActiveValue::Set(model.is_current),
        }
    }
}

impl From<study::Model> for Study {
    fn from(row: study::Model) -> Self {
        Self {
            internal_id: row.internal_id,
            name: row.name,
            accession_number: row.accession_number,
            study_type: row.study_type,
            description: row.description,
            study_title: row.study_title,
            study_visibility: row.study_visibility,
            faculty_sponsor: row.faculty_sponsor,
            is_current: row.is_current,
        }
    }
}

impl From<&Library> for library::ActiveModel {
    fn from(model: &Library) -> Self {
        Self {
            id: ActiveValue::NotSet,
            internal_id: ActiveValue::Set(model.internal_id),
            name: ActiveValue::Set(model.name.clone()),
            library_type: ActiveValue::Set(model.library_type.clone()),
            is_current: ActiveValue::Set(model.is_current),
        }
    }
}

impl From<library::Model> for Library {
    fn from(row: library::Model) -> Self {
        Self {
            internal_id: row.internal_id,
            name: row.name,
            library_type: row.library_type,
            is_current: row.is_current,
        }
    }
}

impl From<&MultiplexedLibrary> for multiplexed_library::ActiveModel {
    fn from(model: &MultiplexedLibrary) -> Self {
        Self {
            id: ActiveValue::NotSet,
            internal_id: ActiveValue::Set(model.internal_id),
            name: ActiveValue::Set(model.name.clone()),
            is_current: ActiveValue::Set(model.is_current),
        }
    }
}

impl From<multiplexed_library::Model> for MultiplexedLibrary {
    fn from(row: multiplexed_library::Model) -> Self {
        Self {
            internal_id: row.internal_id,
            name: row.name,
            is_current: row.is_current,
        }
    }
}

impl From<&Well> for well::ActiveModel {
    fn from(model: &Well) -> Self {
        Self {
            id: ActiveValue::NotSet,
            internal_id: ActiveValue::Set(model.internal_id),
            name: ActiveValue::Set(model.name.clone()),
            is_current: ActiveValue::Set(model.is_current),
        }
    }
}

impl From<well::Model> for Well {
    fn from(row: well::Model) -> Self {
        Self {
            internal_id: row.internal_id,
            name: row.name,
            is_current: row.is_current,
        }
    }
}

impl Record for Sample {
    type Entity = sample::Entity;
    type ActiveModel = sample::ActiveModel;

    const KIND: ModelKind = ModelKind::Sample;

    fn column(property: Property) -> Option<sample::Column> {
        match property {
            Property::InternalId => Some(sample::Column::InternalId),
            Property::Name => Some(sample::Column::Name),
            Property::AccessionNumber => Some(sample::Column::AccessionNumber),
        }
    }

    fn is_current_column() -> Option<sample::Column> {
        Some(sample::Column::IsCurrent)
    }

    fn row_key_column() -> sample::Column {
        sample::Column::Id
    }

    fn internal_id(&self) -> i64 {
        self.internal_id
    }

    fn to_active_model(&self) -> sample::ActiveModel {
        self.into()
    }

    fn from_row(row: sample::Model) -> Self {
        row.into()
    }
}

impl Record for Study {
    type Entity = study::Entity;
    type ActiveModel = study::ActiveModel;

    const KIND: ModelKind = ModelKind::Study;

    fn column(property: Property) -> Option<study::Column> {
        match property {
            Property::InternalId => Some(study::Column::InternalId),
            Property::Name => Some(study::Column::Name),
            Property::AccessionNumber => Some(study::Column::AccessionNumber),
        }
    }

    fn is_current_column() -> Option<study::Column> {
        Some(study::Column::IsCurrent)
    }

    fn row_key_column() -> study::Column {
        study::Column::Id
    }

    fn internal_id(&self) -> i64 {
        self.internal_id
    }

    fn to_active_model(&self) -> study::ActiveModel {
        self.into()
    }

    fn from_row(row: study::Model) -> Self {
        row.into()
    }
}

impl Record for Library {
    type Entity = library::Entity;
    type ActiveModel = library::ActiveModel;

    const KIND: ModelKind = ModelKind::Library;

    fn column(property: Property) -> Option<library::Column> {
        match property {
            Property::InternalId => Some(library::Column::InternalId),
            Property::Name => Some(library::Column::Name),
            Property::AccessionNumber => None,
        }
    }

    fn is_current_column() -> Option<library::Column> {
        Some(library::Column::IsCurrent)
    }

    fn row_key_column() -> library::Column {
        library::Column::Id
    }

    fn internal_id(&self) -> i64 {
        self.internal_id
    }

    fn to_active_model(&self) -> library::ActiveModel {
        self.into()
    }

    fn from_row(row: library::Model) -> Self {
        row.into()
    }
}

impl Record for MultiplexedLibrary {
    type Entity = multiplexed_library::Entity;
    type ActiveModel = multiplexed_library::ActiveModel;

    const KIND: ModelKind = ModelKind::MultiplexedLibrary;

    fn column(property: Property) -> Option<multiplexed_library::Column> {
        match property {
            Property::InternalId => Some(multiplexed_library::Column::InternalId),
            Property::Name => Some(multiplexed_library::Column::Name),
            Property::AccessionNumber => None,
        }
    }

    fn is_current_column() -> Option<multiplexed_library::Column> {
        Some(multiplexed_library::Column::IsCurrent)
    }

    fn row_key_column() -> multiplexed_library::Column {
        multiplexed_library::Column::Id
    }

    fn internal_id(&self) -> i64 {
        self.internal_id
    }

    fn to_active_model(&self) -> multiplexed_library::ActiveModel {
        self.into()
    }

    fn from_row(row: multiplexed_library::Model) -> Self {
        row.into()
    }
}

impl Record for Well {
    type Entity = well::Entity;
    type ActiveModel = well::ActiveModel;

    const KIND: ModelKind = ModelKind::Well;

    fn column(property: Property) -> Option<well::Column> {
        match property {
            Property::InternalId => Some(well::Column::InternalId),
            Property::Name => Some(well::Column::Name),
            Property::AccessionNumber => None,
        }
    }

    fn is_current_column() -> Option<well::Column> {
        Some(well::Column::IsCurrent)
    }

    fn row_key_column() -> well::Column {
        well::Column::Id
    }

    fn internal_id(&self) -> i64 {
        self.internal_id
    }

    fn to_active_model(&self) -> well::ActiveModel {
        self.into()
    }

    fn from_row(row: well::Model) -> Self {
        row.into()
    }
}
