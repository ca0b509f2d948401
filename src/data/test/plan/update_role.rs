use super::*;

/// Tests configuring the role of an existing plan.
///
/// Expected: Ok(Some(Plan)) carrying the new role
#[tokio::test]
async fn sets_role_on_existing_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::plan::PlanFactory::new(db)
        .without_role()
        .build()
        .await?;

    let repo = PlanRepository::new(db);
    let updated = repo.update_role(&plan.id, Some(987654321)).await?;

    assert_eq!(updated.unwrap().discord_role_id, Some(987654321));
    let stored = repo.find_by_id(&plan.id).await?.unwrap();
    assert_eq!(stored.discord_role_id, Some(987654321));

    Ok(())
}

/// Tests clearing a plan's role.
///
/// Expected: Ok(Some(Plan)) without a role
#[tokio::test]
async fn clears_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plan = factory::create_plan(db).await?;

    let updated = PlanRepository::new(db).update_role(&plan.id, None).await?;

    assert!(updated.unwrap().discord_role_id.is_none());

    Ok(())
}

/// Tests configuring a plan that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = PlanRepository::new(db).update_role("missing", Some(1)).await?;

    assert!(updated.is_none());

    Ok(())
}
