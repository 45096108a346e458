use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    UserId,
    Name,
    Description,
    Ingredients,
    Instructions,
    PrepTime,
    CookTime,
    Servings,
    ImageUrl,
    IsFavourite,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum MealPlan {
    Table,
    Id,
    UserId,
    Date,
    MealType,
    RecipeId,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum ShoppingList {
    Table,
    Id,
    UserId,
    Item,
    Quantity,
    Unit,
    Checked,
    RecipeId,
    Generated,
    CreatedAt,
    UpdatedAt,
}
