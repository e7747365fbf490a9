use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RestingHeartRate::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RestingHeartRate::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RestingHeartRate::Date).date().not_null())
                    // Days without a summary value keep a row
                    .col(ColumnDef::new(RestingHeartRate::RestingHr).big_integer().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RestingHeartRate::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum RestingHeartRate {
    Table,
    Id,
    Date,
    RestingHr,
}
