use super::*;

fn address(customer_id: &str) -> LocalAddress {
    LocalAddress {
        id: "a1".to_string(),
        customer_id: customer_id.to_string(),
        address: "Rua A".to_string(),
        number: "1".to_string(),
        complement: String::new(),
        district: "Centro".to_string(),
        city: "Recife".to_string(),
        state: "PE".to_string(),
        zip_code: "50000-000".to_string(),
    }
}

/// Tests storing an address of a stored customer.
///
/// Expected: Ok and the address is stored
#[tokio::test]
async fn stores_address_of_known_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let store = DatabaseStore::new(db.clone());

    store.upsert_address(&address(&customer.id)).await.unwrap();

    let stored = CustomerAddressRepository::new(db)
        .get_by_customer_id(&customer.id)
        .await?;
    assert_eq!(stored.len(), 1);

    Ok(())
}

/// Tests storing an address whose customer is not stored.
///
/// Expected: Err(TrayError::CustomerNotFound)
#[tokio::test]
async fn rejects_unknown_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let store = DatabaseStore::new(db.clone());

    let result = store.upsert_address(&address("missing")).await;

    assert!(matches!(result, Err(TrayError::CustomerNotFound(id)) if id == "missing"));

    Ok(())
}

/// Tests storing an address without customer id.
///
/// Expected: Err(TrayError::MissingRequiredField)
#[tokio::test]
async fn rejects_empty_customer_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let store = DatabaseStore::new(db.clone());

    let result = store.upsert_address(&address("")).await;

    assert!(matches!(result, Err(TrayError::MissingRequiredField(_))));

    Ok(())
}
