use anyhow::Result;
use rand::seq::SliceRandom;
use sea_orm::{
    ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
};

use crate::entities::{prelude::*, verbs};
use game_types::{Verb, WordId};

// Keeps each INSERT well under SQLite's bound parameter limit.
const INSERT_BATCH_SIZE: usize = 500;

pub struct VerbRepository {
    db: DatabaseConnection,
}

impl VerbRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_verb(model: verbs::Model) -> Verb {
        Verb {
            id: model.id,
            verb: model.verb,
        }
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Verbs::find().count(&self.db).await?)
    }

    pub async fn find_by_id(&self, id: WordId) -> Result<Option<Verb>> {
        let verb_model = Verbs::find_by_id(id).one(&self.db).await?;
        Ok(verb_model.map(Self::model_to_verb))
    }

    /// Every verb id currently stored, ascending.
    pub async fn ids(&self) -> Result<Vec<WordId>> {
        let ids = Verbs::find()
            .select_only()
            .column(verbs::Column::Id)
            .order_by_asc(verbs::Column::Id)
            .into_tuple::<WordId>()
            .all(&self.db)
            .await?;

        Ok(ids)
    }

    /// Pick a verb uniformly among the stored ids. Ids need not be contiguous.
    pub async fn random_verb(&self) -> Result<Option<Verb>> {
        let ids = self.ids().await?;
        let chosen = {
            let mut rng = rand::thread_rng();
            ids.choose(&mut rng).copied()
        };
        let Some(id) = chosen else {
            tracing::warn!("Random verb requested but the verb table is empty");
            return Ok(None);
        };

        self.find_by_id(id).await
    }

    /// Insert verbs in list order, returning how many were written.
    pub async fn insert_many(&self, words: Vec<String>) -> Result<u64> {
        let mut inserted = 0;

        for chunk in words.chunks(INSERT_BATCH_SIZE) {
            let models = chunk.iter().map(|verb| verbs::ActiveModel {
                id: ActiveValue::NotSet,
                verb: ActiveValue::Set(verb.clone()),
            });

            Verbs::insert_many(models).exec(&self.db).await?;
            inserted += chunk.len() as u64;
        }

        Ok(inserted)
    }

    /// Load the initial word list, but only into an empty table.
    pub async fn seed_if_empty(&self, words: Vec<String>) -> Result<u64> {
        let existing = self.count().await?;
        if existing > 0 {
            tracing::debug!("Verb table already holds {} verbs, skipping seed", existing);
            return Ok(0);
        }

        let inserted = self.insert_many(words).await?;
        tracing::info!("Seeded {} verbs", inserted);
        Ok(inserted)
    }
}
