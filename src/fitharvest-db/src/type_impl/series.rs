use fitharvest_entities::{heart_timeseries, steps_timeseries};
use fitharvest_types::{IntradaySample, MetricKind, Table};
use sea_orm::{ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::{DatabaseHandler, db::insert_batched};

// 2 bound columns per row
const SERIES_BATCH: usize = 400;

impl DatabaseHandler {
    /// Appends an intraday table to the series table of `metric`.
    pub async fn store_intraday(
        &self,
        metric: MetricKind,
        table: &Table<IntradaySample>,
    ) -> anyhow::Result<usize> {
        let written = match metric {
            MetricKind::HeartRate => {
                let models = table
                    .iter()
                    .map(|sample| heart_timeseries::ActiveModel {
                        id: NotSet,
                        time: Set(sample.time),
                        value: Set(sample.value),
                    })
                    .collect();
                insert_batched(&self.db, models, SERIES_BATCH).await?
            }
            MetricKind::Steps => {
                let models = table
                    .iter()
                    .map(|sample| steps_timeseries::ActiveModel {
                        id: NotSet,
                        time: Set(sample.time),
                        value: Set(sample.value),
                    })
                    .collect();
                insert_batched(&self.db, models, SERIES_BATCH).await?
            }
        };

        debug!("stored {written} rows into {}", metric.table_name());
        Ok(written)
    }

    pub async fn get_intraday(&self, metric: MetricKind) -> anyhow::Result<Table<IntradaySample>> {
        let table = match metric {
            MetricKind::HeartRate => heart_timeseries::Entity::find()
                .order_by_asc(heart_timeseries::Column::Id)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|model| IntradaySample {
                    time: model.time,
                    value: model.value,
                })
                .collect(),
            MetricKind::Steps => steps_timeseries::Entity::find()
                .order_by_asc(steps_timeseries::Column::Id)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|model| IntradaySample {
                    time: model.time,
                    value: model.value,
                })
                .collect(),
        };

        Ok(table)
    }
}
