use super::*;

/// Tests finding a customer by email with different case and whitespace.
///
/// Expected: Ok(Some(LocalCustomer))
#[tokio::test]
async fn finds_customer_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    repo.upsert(&local_customer("10", " Ana.Souza@Example.com", None))
        .await?;

    let found = repo.find_by_email("  ana.souza@EXAMPLE.com ").await?;

    assert_eq!(found.map(|c| c.id).as_deref(), Some("10"));

    Ok(())
}

/// Tests an email with non-ASCII uppercase letters.
///
/// Verifies that case folding covers letters outside ASCII on both the stored
/// and the searched email.
///
/// Expected: Ok(Some(LocalCustomer)) with the email stored lowercased
#[tokio::test]
async fn finds_customer_with_non_ascii_uppercase() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    repo.upsert(&local_customer("11", "ÉLODIE@Example.com", None))
        .await?;

    let found = repo.find_by_email("élodie@example.com").await?;

    let found = found.expect("customer should match");
    assert_eq!(found.id, "11");
    assert_eq!(found.email.as_deref(), Some("élodie@example.com"));

    Ok(())
}

/// Tests two customers sharing an email.
///
/// Verifies that the customer with the lowest id is returned.
///
/// Expected: Ok(Some) with id "1"
#[tokio::test]
async fn returns_lowest_id_for_shared_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    repo.upsert(&local_customer("2", "shared@example.com", None))
        .await?;
    repo.upsert(&local_customer("1", "shared@example.com", None))
        .await?;

    let found = repo.find_by_email("shared@example.com").await?;

    assert_eq!(found.map(|c| c.id).as_deref(), Some("1"));

    Ok(())
}

/// Tests looking up an email no customer has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_customer(db).await?;

    let found = CustomerRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}
