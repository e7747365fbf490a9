use fitharvest_entities::{heart_timeseries, resting_heart_rate, sleep, steps_timeseries};
use fitharvest_migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait,
    TransactionTrait,
};

/// Sink for assembled tables.
#[derive(Clone)]
pub struct DatabaseHandler {
    pub(crate) db: DatabaseConnection,
}

impl DatabaseHandler {
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn new<C>(path: C) -> anyhow::Result<Self>
    where
        C: Into<ConnectOptions>,
    {
        let db = Database::connect(path).await?;
        Migrator::up(&db, None).await?;

        Ok(Self { db })
    }

    /// Rows stored per output table.
    pub async fn row_counts(&self) -> anyhow::Result<Vec<(&'static str, u64)>> {
        Ok(vec![
            (
                "resting_hr",
                resting_heart_rate::Entity::find().count(&self.db).await?,
            ),
            ("sleep", sleep::Entity::find().count(&self.db).await?),
            (
                "heart_timeseries",
                heart_timeseries::Entity::find().count(&self.db).await?,
            ),
            (
                "steps_timeseries",
                steps_timeseries::Entity::find().count(&self.db).await?,
            ),
        ])
    }
}

/// Appends `models` in chunks of `batch` rows, returns the number of rows written.
///
/// All chunks share one transaction, a table is stored whole or not at all.
pub(crate) async fn insert_batched<A>(
    db: &DatabaseConnection,
    models: Vec<A>,
    batch: usize,
) -> anyhow::Result<usize>
where
    A: ActiveModelTrait,
{
    let total = models.len();
    let mut models = models.into_iter().peekable();
    let txn = db.begin().await?;

    while models.peek().is_some() {
        let chunk = models.by_ref().take(batch).collect::<Vec<_>>();
        if let Err(error) = A::Entity::insert_many(chunk).exec(&txn).await {
            txn.rollback().await?;
            return Err(error.into());
        }
    }

    txn.commit().await?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fresh_database_is_empty() {
        let db = DatabaseHandler::new("sqlite::memory:").await.unwrap();
        let counts = db.row_counts().await.unwrap();
        assert_eq!(counts.len(), 4);
        assert!(counts.iter().all(|(_, count)| *count == 0));
    }
}
