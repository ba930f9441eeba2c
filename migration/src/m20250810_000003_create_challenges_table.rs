use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Challenges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Challenges::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // Reference to donators.id, deliberately not declared as a
                    // foreign key: inserts never verify the donator exists.
                    .col(ColumnDef::new(Challenges::DonatorId).big_integer().not_null())
                    .col(ColumnDef::new(Challenges::Name).string().not_null())
                    .col(ColumnDef::new(Challenges::Description).string().not_null())
                    .col(ColumnDef::new(Challenges::LaptopType).string().not_null())
                    .col(ColumnDef::new(Challenges::Amount).big_integer().not_null())
                    .col(ColumnDef::new(Challenges::HardwareProvided).string().not_null())
                    .col(ColumnDef::new(Challenges::Duration).string().not_null())
                    .col(
                        ColumnDef::new(Challenges::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Challenges::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Challenges::DeletedAt).timestamp_with_time_zone().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Challenges::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Challenges {
    Table,
    Id,
    DonatorId,
    Name,
    Description,
    LaptopType,
    Amount,
    HardwareProvided,
    Duration,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
