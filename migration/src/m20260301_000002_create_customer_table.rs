use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_plan_table::Plan;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(string(Customer::Id).primary_key())
                    .col(string(Customer::Name))
                    .col(string_null(Customer::Cpf))
                    .col(string_null(Customer::BirthDate))
                    .col(string_null(Customer::Gender))
                    .col(string_null(Customer::Email))
                    .col(string_null(Customer::Cnpj))
                    .col(string_null(Customer::LastVisit))
                    .col(string_null(Customer::City))
                    .col(string_null(Customer::State))
                    .col(string_null(Customer::Newsletter))
                    .col(string_null(Customer::PlanId))
                    .col(string_null(Customer::Created))
                    .col(string_null(Customer::RegistrationDate))
                    .col(string_null(Customer::Modified))
                    .col(timestamp_with_time_zone(Customer::SyncedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customer_plan_id")
                            .from(Customer::Table, Customer::PlanId)
                            .to(Plan::Table, Plan::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_customer_email")
                    .table(Customer::Table)
                    .col(Customer::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Customer {
    Table,
    Id,
    Name,
    Cpf,
    BirthDate,
    Gender,
    Email,
    Cnpj,
    LastVisit,
    City,
    State,
    Newsletter,
    PlanId,
    Created,
    RegistrationDate,
    Modified,
    SyncedAt,
}
