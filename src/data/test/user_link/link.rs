use super::*;

/// Tests linking a user to a customer.
///
/// Expected: Ok(UserLink) findable by user id
#[tokio::test]
async fn links_user_to_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let repo = UserLinkRepository::new(db);

    let link = repo.link(111, &customer.id).await?;

    assert_eq!(link.customer_id, customer.id);
    assert_eq!(repo.find_by_user_id(111).await?, Some(link));

    Ok(())
}

/// Tests relinking a user to another customer.
///
/// Verifies that a user keeps a single link.
///
/// Expected: Ok with one link pointing at the second customer
#[tokio::test]
async fn replaces_previous_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_customer(db).await?;
    let second = factory::create_customer(db).await?;
    factory::create_user_link(db, "111", &first.id).await?;

    let repo = UserLinkRepository::new(db);
    repo.link(111, &second.id).await?;

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].customer_id, second.id);

    Ok(())
}
