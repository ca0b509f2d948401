use super::*;

/// Tests deleting a user's registration.
///
/// Expected: Ok(1) and other registrations are kept
#[tokio::test]
async fn deletes_only_that_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmailRegistration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmailRegistrationRepository::new(db);
    repo.register(param("ana@example.com", 111)).await?;
    repo.register(param("bia@example.com", 222)).await?;

    let deleted = repo.delete_by_user_id(111).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_user_id(111).await?.is_none());
    assert!(repo.find_by_user_id(222).await?.is_some());

    Ok(())
}

/// Tests deleting when the user has nothing registered.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmailRegistration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = EmailRegistrationRepository::new(db)
        .delete_by_user_id(111)
        .await?;

    assert_eq!(deleted, 0);

    Ok(())
}
