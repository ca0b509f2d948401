use super::*;

/// Tests listing addresses of one customer.
///
/// Verifies that addresses of other customers are not returned.
///
/// Expected: Ok(Vec) with two addresses
#[tokio::test]
async fn returns_only_addresses_of_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let other = factory::create_customer(db).await?;
    factory::create_address(db, &customer.id).await?;
    factory::create_address(db, &customer.id).await?;
    factory::create_address(db, &other.id).await?;

    let addresses = CustomerAddressRepository::new(db)
        .get_by_customer_id(&customer.id)
        .await?;

    assert_eq!(addresses.len(), 2);
    assert!(addresses.iter().all(|a| a.customer_id == customer.id));

    Ok(())
}
