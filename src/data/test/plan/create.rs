use super::*;

/// Tests creating a plan from a display name.
///
/// Verifies that the id is the slug of the name and that the role is stored.
///
/// Expected: Ok(Plan) with id "plano-gold"
#[tokio::test]
async fn creates_plan_with_slug_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanRepository::new(db);
    let plan = repo
        .create(CreatePlanParam {
            name: "Plano Gold".to_string(),
            description: None,
            discord_role_id: Some(42),
        })
        .await?;

    assert_eq!(plan.id, "plano-gold");
    assert_eq!(plan.discord_role_id, Some(42));
    assert!(repo.exists("plano-gold").await?);

    Ok(())
}

/// Tests creating a plan whose id is already taken.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Plan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanRepository::new(db);
    let param = CreatePlanParam {
        name: "Gold".to_string(),
        description: None,
        discord_role_id: None,
    };
    repo.create(param.clone()).await?;

    let result = repo.create(param).await;

    assert!(result.is_err());

    Ok(())
}
