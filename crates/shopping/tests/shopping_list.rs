use mealplanner_shared::Error;
use mealplanner_shopping::{Command, Query, ShoppingItemInput, ShoppingStats};
use temp_dir::TempDir;

mod helpers;

fn item(name: &str) -> ShoppingItemInput {
    ShoppingItemInput {
        item: name.to_owned(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_list_sorts_unchecked_first() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    let apples = command.create(item("apples"), "alice").await?;
    command.create(item("Bananas"), "alice").await?;
    command.create(item("Cherries"), "alice").await?;
    command.create(item("avocado"), "bob").await?;

    command.toggle(&apples, true, "alice").await?;

    let names = query
        .list("alice")
        .await?
        .into_iter()
        .map(|i| i.item)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Bananas", "Cherries", "apples"]);

    assert_eq!(
        query.stats("alice").await?,
        ShoppingStats {
            total: 3,
            checked: 1
        }
    );
    assert_eq!(query.stats("carol").await?, ShoppingStats::default());

    Ok(())
}

#[tokio::test]
async fn test_update_toggle_delete_require_owner() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    let id = command.create(item("Milk"), "alice").await?;

    let input = ShoppingItemInput {
        item: " Oat milk ".to_owned(),
        quantity: Some(2.0),
        unit: Some("l".to_owned()),
        checked: true,
    };

    let err = command.update(&id, input.clone(), "bob").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    let err = command.toggle(&id, true, "bob").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    let err = command.delete(&id, "bob").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    command.update(&id, input, "alice").await?;
    let items = query.list("alice").await?;
    assert_eq!(items[0].item, "Oat milk");
    assert_eq!(items[0].quantity, Some(2.0));
    assert!(items[0].checked);
    assert!(!items[0].generated);

    command.toggle(&id, false, "alice").await?;
    assert!(!query.list("alice").await?[0].checked);

    command.delete(&id, "alice").await?;
    assert!(query.list("alice").await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_create_rejects_invalid_input() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state);

    let err = command.create(item("   "), "alice").await.unwrap_err();
    assert!(matches!(err, Error::Validate(_)));

    let mut input = item("Milk");
    input.quantity = Some(-1.0);
    let err = command.create(input, "alice").await.unwrap_err();
    assert!(matches!(err, Error::Validate(_)));

    Ok(())
}
