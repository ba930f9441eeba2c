use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // References to techfugees.id / challenges.id without
                    // foreign-key enforcement, same as the challenges table.
                    .col(ColumnDef::new(Applications::TechfugeeId).big_integer().not_null())
                    .col(ColumnDef::new(Applications::ChallengeId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Applications::Accepted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Applications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Applications::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Applications::DeletedAt).timestamp_with_time_zone().null())
                    .to_owned(),
            )
            .await?;

        // One application per (techfugee, challenge) pair.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-applications-techfugee-challenge")
                    .table(Applications::Table)
                    .col(Applications::TechfugeeId)
                    .col(Applications::ChallengeId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Applications {
    Table,
    Id,
    TechfugeeId,
    ChallengeId,
    Accepted,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
