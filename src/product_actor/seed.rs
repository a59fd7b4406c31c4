use rust_decimal::Decimal;

use crate::domain::Product;

fn product(id: &str, name: &str, price: Decimal, category: &str, stock: i32, is_discontinued: bool) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        category: category.to_string(),
        stock,
        is_discontinued,
    }
}

/// Fixture catalog loaded into the product store at startup.
pub fn seed_products() -> Vec<Product> {
    vec![
        product("1", "Laptop", Decimal::new(99999, 2), "Electronics", 15, false),
        product("2", "Coffee Mug", Decimal::new(1250, 2), "Kitchen", 50, false),
        product("3", "Wireless Mouse", Decimal::new(2599, 2), "Electronics", 0, false),
        product("4", "Old Keyboard", Decimal::new(4500, 2), "Electronics", 5, true),
        product("5", "Desk Chair", Decimal::new(19999, 2), "Furniture", 8, false),
    ]
}
