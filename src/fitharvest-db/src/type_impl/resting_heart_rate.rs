use fitharvest_entities::resting_heart_rate;
use fitharvest_types::{RestingHeartRate, Table};
use sea_orm::{ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::{DatabaseHandler, db::insert_batched};

// SQLite allows 999 bound variables per statement, 2 per row here
const RESTING_HEART_RATE_BATCH: usize = 400;

impl DatabaseHandler {
    pub async fn store_resting_heart_rate(
        &self,
        table: &Table<RestingHeartRate>,
    ) -> anyhow::Result<usize> {
        let models = table
            .iter()
            .map(|row| resting_heart_rate::ActiveModel {
                id: NotSet,
                date: Set(row.date),
                resting_hr: Set(row.resting_hr),
            })
            .collect();

        let written = insert_batched(&self.db, models, RESTING_HEART_RATE_BATCH).await?;
        debug!("stored {written} resting heart rate rows");
        Ok(written)
    }

    pub async fn get_resting_heart_rate(&self) -> anyhow::Result<Table<RestingHeartRate>> {
        Ok(resting_heart_rate::Entity::find()
            .order_by_asc(resting_heart_rate::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|model| RestingHeartRate {
                date: model.date,
                resting_hr: model.resting_hr,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[tokio::test]
    async fn stores_rows_in_order_with_gaps() {
        let db = DatabaseHandler::new("sqlite::memory:").await.unwrap();
        let table = Table::from(vec![
            RestingHeartRate {
                date: NaiveDate::from_ymd_opt(2016, 3, 9).unwrap(),
                resting_hr: Some(58),
            },
            RestingHeartRate {
                date: NaiveDate::from_ymd_opt(2016, 3, 8).unwrap(),
                resting_hr: None,
            },
        ]);

        assert_eq!(db.store_resting_heart_rate(&table).await.unwrap(), 2);
        assert_eq!(db.get_resting_heart_rate().await.unwrap(), table);
    }

    #[tokio::test]
    async fn empty_table_writes_nothing() {
        let db = DatabaseHandler::new("sqlite::memory:").await.unwrap();
        let written = db.store_resting_heart_rate(&Table::new()).await.unwrap();
        assert_eq!(written, 0);
        assert!(db.get_resting_heart_rate().await.unwrap().is_empty());
    }
}
