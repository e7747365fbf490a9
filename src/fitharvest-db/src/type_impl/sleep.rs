use fitharvest_entities::sleep;
use fitharvest_types::{SleepRecord, Table};
use sea_orm::{ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::{DatabaseHandler, db::insert_batched};

// 5 bound columns per row
const SLEEP_BATCH: usize = 180;

impl DatabaseHandler {
    pub async fn store_sleep(&self, table: &Table<SleepRecord>) -> anyhow::Result<usize> {
        let models = table
            .iter()
            .map(|row| sleep::ActiveModel {
                id: NotSet,
                date: Set(row.date),
                efficiency: Set(row.efficiency),
                hours_asleep: Set(row.hours_asleep),
                asleep_time: Set(row.asleep_time),
                awake_time: Set(row.awake_time),
            })
            .collect();

        let written = insert_batched(&self.db, models, SLEEP_BATCH).await?;
        debug!("stored {written} sleep rows");
        Ok(written)
    }

    pub async fn get_sleep(&self) -> anyhow::Result<Table<SleepRecord>> {
        Ok(sleep::Entity::find()
            .order_by_asc(sleep::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|model| SleepRecord {
                date: model.date,
                efficiency: model.efficiency,
                hours_asleep: model.hours_asleep,
                asleep_time: model.asleep_time,
                awake_time: model.awake_time,
            })
            .collect())
    }
}
