use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmailRegistration::Table)
                    .if_not_exists()
                    .col(pk_auto(EmailRegistration::Id))
                    .col(string_uniq(EmailRegistration::Email))
                    .col(string(EmailRegistration::DiscordUserId))
                    .col(string(EmailRegistration::UserTag))
                    .col(string_null(EmailRegistration::GuildId))
                    .col(timestamp_with_time_zone(EmailRegistration::RegisteredAt))
                    .col(timestamp_with_time_zone(EmailRegistration::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmailRegistration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmailRegistration {
    Table,
    Id,
    Email,
    DiscordUserId,
    UserTag,
    GuildId,
    RegisteredAt,
    UpdatedAt,
}
