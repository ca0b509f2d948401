use super::*;

/// Tests finding the email a user registered.
///
/// Expected: Ok(Some(EmailRegistration))
#[tokio::test]
async fn finds_registration_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmailRegistration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let registration = factory::email_registration::EmailRegistrationFactory::new(db)
        .discord_user_id("123456789")
        .build()
        .await?;
    factory::create_registration(db).await?;

    let found = EmailRegistrationRepository::new(db)
        .find_by_user_id(123456789)
        .await?;

    assert_eq!(found.map(|r| r.email), Some(registration.email));

    Ok(())
}

/// Tests a user without registration.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unregistered_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmailRegistration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = EmailRegistrationRepository::new(db)
        .find_by_user_id(42)
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests a stored Discord id that is not a number.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_for_invalid_stored_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmailRegistration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::email_registration::EmailRegistrationFactory::new(db)
        .email("broken@example.com")
        .discord_user_id("not-a-number")
        .build()
        .await?;

    let result = EmailRegistrationRepository::new(db)
        .find_by_email("broken@example.com")
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
