use crate::{data::customer::CustomerRepository, model::customer::LocalCustomer};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_email;
mod upsert;

fn local_customer(id: &str, email: &str, plan_id: Option<&str>) -> LocalCustomer {
    LocalCustomer {
        id: id.to_string(),
        name: format!("Customer {}", id),
        cpf: None,
        birth_date: None,
        gender: None,
        email: Some(email.to_string()),
        cnpj: None,
        last_visit: None,
        city: Some("Curitiba".to_string()),
        state: Some("PR".to_string()),
        newsletter: None,
        plan_id: plan_id.map(str::to_string),
        created: None,
        registration_date: None,
        modified: None,
    }
}
