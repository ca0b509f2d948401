use super::*;

/// Tests finding a plan by name regardless of case.
///
/// Expected: Ok(Some(Plan))
#[tokio::test]
async fn finds_plan_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanRepository::new(db);
    repo.ensure_defaults().await?;

    let plan = repo.find_by_name("plano vip").await?;

    assert_eq!(plan.map(|p| p.id).as_deref(), Some("vip"));

    Ok(())
}

/// Tests looking up a name no plan has.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_plan(db).await?;

    let plan = PlanRepository::new(db).find_by_name("Diamond").await?;

    assert!(plan.is_none());

    Ok(())
}
