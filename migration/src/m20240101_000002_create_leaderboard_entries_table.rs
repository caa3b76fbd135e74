use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeaderboardEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeaderboardEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LeaderboardEntries::Player).string().not_null())
                    .col(ColumnDef::new(LeaderboardEntries::Score).integer().not_null())
                    .col(
                        ColumnDef::new(LeaderboardEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Leaderboard reads sort by score ascending
        manager
            .create_index(
                Index::create()
                    .name("idx_leaderboard_entries_score")
                    .table(LeaderboardEntries::Table)
                    .col(LeaderboardEntries::Score)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeaderboardEntries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LeaderboardEntries {
    Table,
    Id,
    Player,
    Score,
    CreatedAt,
}
