use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donators::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Donators::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Donators::Name).string().not_null())
                    .col(ColumnDef::new(Donators::Website).string().not_null())
                    .col(ColumnDef::new(Donators::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Donators::Address).string().not_null())
                    .col(
                        ColumnDef::new(Donators::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Donators::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Donators::DeletedAt).timestamp_with_time_zone().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Donators::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Donators {
    Table,
    Id,
    Name,
    Website,
    Email,
    Address,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
