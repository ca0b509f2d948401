use super::*;

fn address(id: &str, customer_id: &str, city: &str) -> LocalAddress {
    LocalAddress {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        address: "Rua das Flores".to_string(),
        number: "12".to_string(),
        complement: String::new(),
        district: "Centro".to_string(),
        city: city.to_string(),
        state: "SP".to_string(),
        zip_code: "01000-000".to_string(),
    }
}

/// Tests storing an address and then replacing it.
///
/// Expected: Ok with a single address holding the latest city
#[tokio::test]
async fn inserts_then_replaces_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let repo = CustomerAddressRepository::new(db);

    repo.upsert(&address("a1", &customer.id, "Santos")).await?;
    repo.upsert(&address("a1", &customer.id, "Campinas")).await?;

    let stored = repo.get_by_customer_id(&customer.id).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].city, "Campinas");

    Ok(())
}

/// Tests storing an address for a customer that is not stored.
///
/// Expected: Err from the customer foreign key
#[tokio::test]
async fn fails_for_unknown_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CustomerAddressRepository::new(db)
        .upsert(&address("a1", "missing", "Santos"))
        .await;

    assert!(result.is_err());

    Ok(())
}
