use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Distributors,
    Products,
    Prices,
    Comparison,
    ShoppingList,
    Import,
    Backup,
}
