use super::*;

/// Tests removing an existing link.
///
/// Expected: Ok(true) and the link is gone
#[tokio::test]
async fn removes_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    factory::create_user_link(db, "111", &customer.id).await?;

    let repo = UserLinkRepository::new(db);
    let removed = repo.unlink(111).await?;

    assert!(removed);
    assert!(repo.find_by_user_id(111).await?.is_none());

    Ok(())
}

/// Tests removing a link that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let removed = UserLinkRepository::new(db).unlink(111).await?;

    assert!(!removed);

    Ok(())
}
