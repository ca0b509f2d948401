use super::*;

/// Tests registering a new email.
///
/// Verifies that the email is stored normalized.
///
/// Expected: Ok(EmailRegistration) findable by the lowercase email
#[tokio::test]
async fn stores_normalized_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmailRegistration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmailRegistrationRepository::new(db);
    let registration = repo.register(param(" Ana@Example.com ", 111)).await?;

    assert_eq!(registration.email, "ana@example.com");
    assert_eq!(registration.guild_id, Some(777));
    let found = repo.find_by_email("ANA@example.com").await?;
    assert_eq!(found.map(|r| r.discord_user_id), Some(111));

    Ok(())
}

/// Tests registering an email that is already stored.
///
/// Verifies that the row moves to the new user instead of duplicating.
///
/// Expected: Ok with a single registration owned by the second user
#[tokio::test]
async fn moves_existing_email_to_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmailRegistration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmailRegistrationRepository::new(db);
    repo.register(param("ana@example.com", 111)).await?;

    repo.register(param("ana@example.com", 222)).await?;

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].discord_user_id, 222);

    Ok(())
}
