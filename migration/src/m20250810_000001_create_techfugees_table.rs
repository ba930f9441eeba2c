use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Techfugees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Techfugees::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Techfugees::Name).string().not_null())
                    // Registration is keyed on email; the unique index is what
                    // makes the conditional insert race-free.
                    .col(ColumnDef::new(Techfugees::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Techfugees::Skills).string().not_null())
                    .col(ColumnDef::new(Techfugees::City).string().not_null())
                    .col(ColumnDef::new(Techfugees::Introduction).string().not_null())
                    .col(ColumnDef::new(Techfugees::Authenticated).string().not_null())
                    .col(
                        ColumnDef::new(Techfugees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Techfugees::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Techfugees::DeletedAt).timestamp_with_time_zone().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Techfugees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Techfugees {
    Table,
    Id,
    Name,
    Email,
    Skills,
    City,
    Introduction,
    Authenticated,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
