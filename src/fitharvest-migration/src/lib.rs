pub use sea_orm_migration::prelude::*;

pub mod m20250110_000001_resting_heart_rate;
pub mod m20250110_000002_sleep;
pub mod m20250110_000003_intraday_series;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250110_000001_resting_heart_rate::Migration),
            Box::new(m20250110_000002_sleep::Migration),
            Box::new(m20250110_000003_intraday_series::Migration),
        ]
    }
}
