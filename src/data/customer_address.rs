//! Customer address data repository.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::customer::LocalAddress;

pub struct CustomerAddressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerAddressRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an address or replaces every field of the stored one.
    ///
    /// # Returns
    /// - `Ok(LocalAddress)` - The stored address
    /// - `Err(DbErr)` - Database error, including a foreign key failure for an unknown customer
    pub async fn upsert(&self, address: &LocalAddress) -> Result<LocalAddress, DbErr> {
        use entity::customer_address::Column;

        let address = address.clone();
        let entity = entity::prelude::CustomerAddress::insert(entity::customer_address::ActiveModel {
            id: ActiveValue::Set(address.id),
            customer_id: ActiveValue::Set(address.customer_id),
            address: ActiveValue::Set(address.address),
            number: ActiveValue::Set(address.number),
            complement: ActiveValue::Set(address.complement),
            district: ActiveValue::Set(address.district),
            city: ActiveValue::Set(address.city),
            state: ActiveValue::Set(address.state),
            zip_code: ActiveValue::Set(address.zip_code),
        })
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([
                    Column::CustomerId,
                    Column::Address,
                    Column::Number,
                    Column::Complement,
                    Column::District,
                    Column::City,
                    Column::State,
                    Column::ZipCode,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(LocalAddress::from_entity(entity))
    }

    pub async fn get_by_customer_id(&self, customer_id: &str) -> Result<Vec<LocalAddress>, DbErr> {
        Ok(entity::prelude::CustomerAddress::find()
            .filter(entity::customer_address::Column::CustomerId.eq(customer_id))
            .order_by_asc(entity::customer_address::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(LocalAddress::from_entity)
            .collect())
    }
}
