//! Customer data repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::customer::LocalCustomer;
use crate::util::parse::normalize_email;

pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a customer or replaces every field of the stored one.
    ///
    /// The email is stored trimmed and lowercased so lookups compare it as is.
    ///
    /// # Arguments
    /// - `customer` - Customer to store; its plan must exist when set
    ///
    /// # Returns
    /// - `Ok(LocalCustomer)` - The stored customer
    /// - `Err(DbErr)` - Database error, including a foreign key failure for an unknown plan
    pub async fn upsert(&self, customer: &LocalCustomer) -> Result<LocalCustomer, DbErr> {
        use entity::customer::Column;

        let customer = customer.clone();
        let entity = entity::prelude::Customer::insert(entity::customer::ActiveModel {
            id: ActiveValue::Set(customer.id),
            name: ActiveValue::Set(customer.name),
            cpf: ActiveValue::Set(customer.cpf),
            birth_date: ActiveValue::Set(customer.birth_date),
            gender: ActiveValue::Set(customer.gender),
            email: ActiveValue::Set(customer.email.as_deref().map(normalize_email)),
            cnpj: ActiveValue::Set(customer.cnpj),
            last_visit: ActiveValue::Set(customer.last_visit),
            city: ActiveValue::Set(customer.city),
            state: ActiveValue::Set(customer.state),
            newsletter: ActiveValue::Set(customer.newsletter),
            plan_id: ActiveValue::Set(customer.plan_id),
            created: ActiveValue::Set(customer.created),
            registration_date: ActiveValue::Set(customer.registration_date),
            modified: ActiveValue::Set(customer.modified),
            synced_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([
                    Column::Name,
                    Column::Cpf,
                    Column::BirthDate,
                    Column::Gender,
                    Column::Email,
                    Column::Cnpj,
                    Column::LastVisit,
                    Column::City,
                    Column::State,
                    Column::Newsletter,
                    Column::PlanId,
                    Column::Created,
                    Column::RegistrationDate,
                    Column::Modified,
                    Column::SyncedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(LocalCustomer::from_entity(entity))
    }

    pub async fn exists(&self, customer_id: &str) -> Result<bool, DbErr> {
        Ok(entity::prelude::Customer::find_by_id(customer_id.to_string())
            .one(self.db)
            .await?
            .is_some())
    }

    pub async fn find_by_id(&self, customer_id: &str) -> Result<Option<LocalCustomer>, DbErr> {
        Ok(entity::prelude::Customer::find_by_id(customer_id.to_string())
            .one(self.db)
            .await?
            .map(LocalCustomer::from_entity))
    }

    /// Finds a customer by email, ignoring case and surrounding whitespace.
    ///
    /// Matches against the normalized email written by `upsert`. Tray does not
    /// enforce unique emails; the customer with the lowest id wins.
    ///
    /// # Returns
    /// - `Ok(Some(LocalCustomer))` - Customer found
    /// - `Ok(None)` - No customer with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<LocalCustomer>, DbErr> {
        Ok(entity::prelude::Customer::find()
            .filter(entity::customer::Column::Email.eq(normalize_email(email)))
            .order_by_asc(entity::customer::Column::Id)
            .one(self.db)
            .await?
            .map(LocalCustomer::from_entity))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Customer::find().count(self.db).await
    }
}
