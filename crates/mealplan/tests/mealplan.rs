use mealplanner_mealplan::{Command, Query};
use mealplanner_shared::{DateRange, Error, mealplan::MealType};
use temp_dir::TempDir;
use time::macros::date;

mod helpers;

#[tokio::test]
async fn test_list_embeds_recipe() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.clone());

    let recipe_id = helpers::create_recipe(&state, "Omelette", "alice").await?;

    command
        .create(
            helpers::meal_plan_input(date!(2024 - 01 - 02), MealType::Lunch, None),
            "alice",
        )
        .await?;
    command
        .create(
            helpers::meal_plan_input(date!(2024 - 01 - 01), MealType::Dinner, Some(&recipe_id)),
            "alice",
        )
        .await?;
    command
        .create(
            helpers::meal_plan_input(date!(2024 - 01 - 08), MealType::Dinner, Some(&recipe_id)),
            "alice",
        )
        .await?;

    let plans = query
        .list(
            "alice",
            DateRange::new(date!(2024 - 01 - 01), date!(2024 - 01 - 07)),
        )
        .await?;

    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].date, date!(2024 - 01 - 01));
    let recipe = plans[0].recipe.as_ref().unwrap();
    assert_eq!(recipe.name, "Omelette");
    assert_eq!(recipe.ingredients.len(), 2);
    assert!(plans[1].recipe.is_none());

    let empty = query
        .list(
            "alice",
            DateRange::new(date!(2024 - 01 - 07), date!(2024 - 01 - 01)),
        )
        .await?;
    assert!(empty.is_empty());

    let others = query
        .list(
            "bob",
            DateRange::new(date!(2024 - 01 - 01), date!(2024 - 01 - 31)),
        )
        .await?;
    assert!(others.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_foreign_recipe_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());

    let recipe_id = helpers::create_recipe(&state, "Omelette", "alice").await?;

    let err = command
        .create(
            helpers::meal_plan_input(date!(2024 - 01 - 01), MealType::Dinner, Some(&recipe_id)),
            "bob",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    let id = command
        .create(
            helpers::meal_plan_input(date!(2024 - 01 - 01), MealType::Dinner, None),
            "bob",
        )
        .await?;

    let err = command
        .update(
            &id,
            helpers::meal_plan_input(date!(2024 - 01 - 01), MealType::Dinner, Some(&recipe_id)),
            "bob",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    Ok(())
}

#[tokio::test]
async fn test_update_and_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.clone());

    let id = command
        .create(
            helpers::meal_plan_input(date!(2024 - 01 - 01), MealType::Dinner, None),
            "alice",
        )
        .await?;

    let mut input = helpers::meal_plan_input(date!(2024 - 01 - 03), MealType::Breakfast, None);
    input.notes = Some("  leftovers  ".to_owned());

    let err = command.update(&id, input.clone(), "bob").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    command.update(&id, input, "alice").await?;
    let plan = query.find(&id, "alice").await?.unwrap();
    assert_eq!(plan.date, date!(2024 - 01 - 03));
    assert_eq!(plan.meal_type, MealType::Breakfast);
    assert_eq!(plan.notes.as_deref(), Some("leftovers"));

    let err = command.delete(&id, "bob").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    command.delete(&id, "alice").await?;
    assert!(query.find(&id, "alice").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_week_and_upcoming() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    for (date, meal_type) in [
        (date!(2024 - 01 - 02), MealType::Snack),
        (date!(2024 - 01 - 02), MealType::Breakfast),
        (date!(2023 - 12 - 31), MealType::Lunch),
        (date!(2024 - 01 - 07), MealType::Dinner),
    ] {
        command
            .create(helpers::meal_plan_input(date, meal_type, None), "alice")
            .await?;
    }

    let week = query.week("alice", date!(2024 - 01 - 03)).await?;
    assert_eq!(week.start, date!(2023 - 12 - 31));
    assert_eq!(week.end, date!(2024 - 01 - 06));
    assert_eq!(week.days[0].meals.len(), 1);
    let types = week.days[2]
        .meals
        .iter()
        .map(|m| m.meal_type)
        .collect::<Vec<_>>();
    assert_eq!(types, vec![MealType::Breakfast, MealType::Snack]);

    let upcoming = query.upcoming("alice", date!(2024 - 01 - 01), 3).await?;
    assert_eq!(upcoming.len(), 3);
    assert_eq!(upcoming[0].date, date!(2024 - 01 - 02));
    assert_eq!(upcoming[2].date, date!(2024 - 01 - 07));

    let err = query.week("alice", date!(9999 - 12 - 31)).await.unwrap_err();
    assert!(matches!(err, Error::User(_)));

    Ok(())
}
