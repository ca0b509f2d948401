use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_customer_table::Customer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerAddress::Table)
                    .if_not_exists()
                    .col(string(CustomerAddress::Id).primary_key())
                    .col(string(CustomerAddress::CustomerId))
                    .col(string(CustomerAddress::Address))
                    .col(string(CustomerAddress::Number))
                    .col(string(CustomerAddress::Complement))
                    .col(string(CustomerAddress::District))
                    .col(string(CustomerAddress::City))
                    .col(string(CustomerAddress::State))
                    .col(string(CustomerAddress::ZipCode))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customer_address_customer_id")
                            .from(CustomerAddress::Table, CustomerAddress::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomerAddress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CustomerAddress {
    Table,
    Id,
    CustomerId,
    Address,
    Number,
    Complement,
    District,
    City,
    State,
    ZipCode,
}
