use super::*;

/// Tests recording the last sync on an existing credential row.
///
/// Expected: Ok(true)
#[tokio::test]
async fn records_on_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrayConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_tray_config(db, "http://127.0.0.1:9000", Duration::hours(1)).await?;
    let at = Utc::now().duration_trunc(Duration::seconds(1)).unwrap();

    let repo = TrayConfigRepository::new(db);
    let recorded = repo.record_last_sync(at).await?;

    assert!(recorded);
    assert_eq!(repo.last_sync().await?, Some(at));

    Ok(())
}

/// Tests recording the last sync before any credential was saved.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TrayConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let recorded = TrayConfigRepository::new(db)
        .record_last_sync(Utc::now())
        .await?;

    assert!(!recorded);

    Ok(())
}
