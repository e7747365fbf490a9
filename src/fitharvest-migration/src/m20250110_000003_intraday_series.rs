use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(series_table(HeartTimeseries::Table))
            .await?;

        manager
            .create_table(series_table(StepsTimeseries::Table))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HeartTimeseries::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(StepsTimeseries::Table).to_owned())
            .await
    }
}

// Both series share one layout. `time` is not unique, a day fetched twice
// keeps both copies.
fn series_table<T>(table: T) -> TableCreateStatement
where
    T: Iden + 'static,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(Series::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Series::Time).date_time().not_null())
        .col(ColumnDef::new(Series::Value).double().not_null())
        .to_owned()
}

#[derive(Iden)]
pub enum HeartTimeseries {
    Table,
}

#[derive(Iden)]
pub enum StepsTimeseries {
    Table,
}

#[derive(Iden)]
enum Series {
    Id,
    Time,
    Value,
}
