use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sleep::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sleep::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sleep::Date).date().not_null())
                    .col(ColumnDef::new(Sleep::Efficiency).big_integer().not_null())
                    .col(ColumnDef::new(Sleep::HoursAsleep).double().not_null())
                    .col(ColumnDef::new(Sleep::AsleepTime).time().not_null())
                    .col(ColumnDef::new(Sleep::AwakeTime).time().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sleep::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Sleep {
    Table,
    Id,
    Date,
    Efficiency,
    HoursAsleep,
    AsleepTime,
    AwakeTime,
}
