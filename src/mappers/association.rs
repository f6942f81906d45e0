//! Study↔sample associations through the `study_samples` join table.
//!
//! Only links flagged `is_current` count. New links are appended; existing
//! ones are never invalidated here.

use std::collections::BTreeSet;

use log::{debug, info};
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait};

use super::{Mapper, SqlMapper};
use crate::connector::Connector;
use crate::constants::MAX_IN_LIST_VALUES;
use crate::entities::study_samples_link;
use crate::error::Result;
use crate::models::{Sample, Study};

/// Which end of a link the known ids are on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum LinkSide {
    Study,
    Sample,
}

impl SqlMapper<Sample> {
    /// Current samples linked to any of `studies`.
    ///
    /// Pass a single study with `std::slice::from_ref`.
    pub async fn get_associated_with_study(&self, studies: &[Study]) -> Result<Vec<Sample>> {
        let study_ids: Vec<i64> = studies.iter().map(|study| study.internal_id).collect();
        let sample_ids = linked_ids(&self.connector, LinkSide::Study, &study_ids).await?;
        if sample_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.get_many_by_internal_id(&sample_ids).await
    }

    /// Link every sample in `samples` to `study` with a new current link row.
    pub async fn set_association_with_study(&self, samples: &[Sample], study: &Study) -> Result<()> {
        if samples.is_empty() {
            return Ok(());
        }

        let session = self.connector.create_session().await?;
        let outcome = insert_links(&session, samples, study).await;
        Connector::close_session(session).await;
        outcome?;

        info!("Linked {} sample(s) to study {}", samples.len(), study.internal_id);
        Ok(())
    }
}

impl SqlMapper<Study> {
    /// Current studies linked to any of `samples`.
    pub async fn get_associated_with_sample(&self, samples: &[Sample]) -> Result<Vec<Study>> {
        let sample_ids: Vec<i64> = samples.iter().map(|sample| sample.internal_id).collect();
        let study_ids = linked_ids(&self.connector, LinkSide::Sample, &sample_ids).await?;
        if study_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.get_many_by_internal_id(&study_ids).await
    }
}

/// Distinct ids on the opposite side of current links from `known_ids`.
async fn linked_ids(connector: &Connector, known: LinkSide, known_ids: &[i64]) -> Result<Vec<i64>> {
    if known_ids.is_empty() {
        return Ok(Vec::new());
    }

    let filter_column = match known {
        LinkSide::Study => study_samples_link::Column::StudyInternalId,
        LinkSide::Sample => study_samples_link::Column::SampleInternalId,
    };
    let known_ids: Vec<i64> = known_ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

    let session = connector.create_session().await?;
    let links = find_current_links(&session, filter_column, &known_ids).await;
    Connector::close_session(session).await;

    let linked: BTreeSet<i64> = links?
        .into_iter()
        .map(|link| match known {
            LinkSide::Study => link.sample_internal_id,
            LinkSide::Sample => link.study_internal_id,
        })
        .collect();

    debug!("{} id(s) linked to {} {:?} id(s)", linked.len(), known_ids.len(), known);
    Ok(linked.into_iter().collect())
}

async fn find_current_links(
    session: &DatabaseConnection,
    filter_column: study_samples_link::Column,
    known_ids: &[i64],
) -> Result<Vec<study_samples_link::Model>> {
    let mut links = Vec::new();
    for chunk in known_ids.chunks(MAX_IN_LIST_VALUES) {
        let found = study_samples_link::Entity::find()
            .filter(filter_column.is_in(chunk.iter().copied()))
            .filter(study_samples_link::Column::IsCurrent.eq(true))
            .all(session)
            .await?;
        links.extend(found);
    }
    Ok(links)
}

async fn insert_links(session: &DatabaseConnection, samples: &[Sample], study: &Study) -> Result<()> {
    let txn = session.begin().await?;
    for sample in samples {
        let link = study_samples_link::ActiveModel {
            id: ActiveValue::NotSet,
            study_internal_id: ActiveValue::Set(study.internal_id),
            sample_internal_id: ActiveValue::Set(sample.internal_id),
            is_current: ActiveValue::Set(true),
        };
        study_samples_link::Entity::insert(link).exec(&txn).await?;
    }
    txn.commit().await?;
    Ok(())
}
