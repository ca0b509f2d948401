use super::*;

/// Tests inserting a new customer.
///
/// Expected: Ok(LocalCustomer) and the customer is findable by id
#[tokio::test]
async fn inserts_new_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let stored = repo
        .upsert(&local_customer("10", "ana@example.com", None))
        .await?;

    assert_eq!(stored.id, "10");
    assert_eq!(repo.find_by_id("10").await?, Some(stored));
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests upserting a customer that already exists.
///
/// Verifies that the second import replaces the stored fields instead of
/// inserting a duplicate row.
///
/// Expected: Ok with one row holding the new email and plan
#[tokio::test]
async fn replaces_existing_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::create_plan(db).await?;
    let repo = CustomerRepository::new(db);
    repo.upsert(&local_customer("10", "old@example.com", None))
        .await?;

    repo.upsert(&local_customer("10", "new@example.com", Some(&plan.id)))
        .await?;

    let stored = repo.find_by_id("10").await?.unwrap();
    assert_eq!(stored.email.as_deref(), Some("new@example.com"));
    assert_eq!(stored.plan_id, Some(plan.id));
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests upserting a customer on a plan that does not exist.
///
/// Expected: Err from the plan foreign key
#[tokio::test]
async fn fails_for_unknown_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CustomerRepository::new(db)
        .upsert(&local_customer("10", "ana@example.com", Some("missing")))
        .await;

    assert!(result.is_err());

    Ok(())
}
