use super::*;

/// Tests seeding the default plans into an empty table.
///
/// Verifies that every default plan is created without a Discord role.
///
/// Expected: Ok(3) and the basic plan exists
#[tokio::test]
async fn creates_missing_default_plans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanRepository::new(db);
    let created = repo.ensure_defaults().await?;

    assert_eq!(created, DEFAULT_PLANS.len() as u64);
    let basic = repo.find_by_id(DEFAULT_PLAN_ID).await?.unwrap();
    assert_eq!(basic.name, "Plano Básico");
    assert!(basic.discord_role_id.is_none());

    Ok(())
}

/// Tests that seeding twice leaves existing plans alone.
///
/// Verifies that a role configured on a default plan survives a second seed.
///
/// Expected: Ok(0) and the role is kept
#[tokio::test]
async fn keeps_existing_plans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanRepository::new(db);
    repo.ensure_defaults().await?;
    repo.update_role(DEFAULT_PLAN_ID, Some(555)).await?;

    let created = repo.ensure_defaults().await?;

    assert_eq!(created, 0);
    let basic = repo.find_by_id(DEFAULT_PLAN_ID).await?.unwrap();
    assert_eq!(basic.discord_role_id, Some(555));

    Ok(())
}
