use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserLink::Table)
                    .if_not_exists()
                    .col(pk_auto(UserLink::Id))
                    .col(string_uniq(UserLink::DiscordUserId))
                    .col(string(UserLink::CustomerId))
                    .col(timestamp_with_time_zone(UserLink::LinkedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserLink::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserLink {
    Table,
    Id,
    DiscordUserId,
    CustomerId,
    LinkedAt,
}
