use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrayConfig::Table)
                    .if_not_exists()
                    .col(integer(TrayConfig::Id).primary_key())
                    .col(string(TrayConfig::ApiAddress))
                    .col(string(TrayConfig::AccessToken))
                    .col(string(TrayConfig::RefreshToken))
                    .col(string(TrayConfig::ApiHost))
                    .col(timestamp_with_time_zone(TrayConfig::AccessExpiresAt))
                    .col(timestamp_with_time_zone(TrayConfig::RefreshExpiresAt))
                    .col(string_null(TrayConfig::StoreId))
                    .col(timestamp_with_time_zone_null(TrayConfig::LastSyncAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrayConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrayConfig {
    Table,
    Id,
    ApiAddress,
    AccessToken,
    RefreshToken,
    ApiHost,
    AccessExpiresAt,
    RefreshExpiresAt,
    StoreId,
    LastSyncAt,
}
