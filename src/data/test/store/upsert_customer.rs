use super::*;

/// Tests storing a customer with an empty id.
///
/// Expected: Err(TrayError::MissingRequiredField)
#[tokio::test]
async fn rejects_empty_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let store = DatabaseStore::new(db.clone());
    let customer = LocalCustomer {
        id: " ".to_string(),
        name: "Ana".to_string(),
        cpf: None,
        birth_date: None,
        gender: None,
        email: None,
        cnpj: None,
        last_visit: None,
        city: None,
        state: None,
        newsletter: None,
        plan_id: None,
        created: None,
        registration_date: None,
        modified: None,
    };

    let result = store.upsert_customer(&customer).await;

    assert!(matches!(result, Err(TrayError::MissingRequiredField(_))));

    Ok(())
}

/// Tests seeding default plans through the store.
///
/// Expected: Ok and the default plan exists
#[tokio::test]
async fn seeds_default_plans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let store = DatabaseStore::new(db.clone());
    store.ensure_default_plans().await.unwrap();

    assert!(store.plan_exists("basic").await.unwrap());
    assert!(!store.plan_exists("diamond").await.unwrap());

    Ok(())
}
