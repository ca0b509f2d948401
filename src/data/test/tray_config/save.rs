use super::*;

/// Tests saving a credential and reading it back.
///
/// Expected: Ok with the loaded credential equal to the saved one
#[tokio::test]
async fn saves_and_loads_credential() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrayConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrayConfigRepository::new(db);
    let saved = credential("first");
    repo.save(&saved).await?;

    assert_eq!(repo.load().await?, Some(saved));

    Ok(())
}

/// Tests that saving again replaces the credential but keeps the last sync.
///
/// Expected: Ok with the new token and the original sync time
#[tokio::test]
async fn replaces_credential_and_keeps_last_sync() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrayConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrayConfigRepository::new(db);
    repo.save(&credential("first")).await?;
    let synced_at = Utc::now().duration_trunc(Duration::seconds(1)).unwrap();
    repo.record_last_sync(synced_at).await?;

    repo.save(&credential("second")).await?;

    assert_eq!(repo.load().await?.unwrap().access_token, "second");
    assert_eq!(repo.last_sync().await?, Some(synced_at));

    Ok(())
}
