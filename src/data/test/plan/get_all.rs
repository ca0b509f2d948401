use super::*;

/// Tests listing plans.
///
/// Verifies that plans come back ordered by name.
///
/// Expected: Ok(Vec) with "Alpha" before "Zeta"
#[tokio::test]
async fn returns_plans_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::plan::PlanFactory::new(db).name("Zeta").build().await?;
    factory::plan::PlanFactory::new(db).name("Alpha").build().await?;

    let plans = PlanRepository::new(db).get_all().await?;

    let names: Vec<_> = plans.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Zeta"]);

    Ok(())
}

/// Tests listing plans from an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_without_plans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plans = PlanRepository::new(db).get_all().await?;

    assert!(plans.is_empty());

    Ok(())
}
