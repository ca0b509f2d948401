use super::*;

/// Tests loading before anything was saved.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_never_saved() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrayConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let loaded = TrayConfigRepository::new(db).load().await?;

    assert!(loaded.is_none());

    Ok(())
}

/// Tests loading a credential row seeded directly.
///
/// Expected: Ok(Some(Credential)) with the stored tokens
#[tokio::test]
async fn loads_stored_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrayConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_tray_config(db, "http://127.0.0.1:9000", Duration::hours(1)).await?;

    let loaded = TrayConfigRepository::new(db).load().await?.unwrap();

    assert_eq!(loaded.access_token, "stored-access");
    assert_eq!(loaded.api_host, "http://127.0.0.1:9000");
    assert!(loaded.access_valid_at(Utc::now()));

    Ok(())
}
