use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ProductError;

/// Represents a product in the catalog.
///
/// `stock` is signed: the stored model accepts any count, only `is_in_stock`
/// interprets it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub stock: i32,
    pub is_discontinued: bool,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal, category: impl Into<String>, stock: i32) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            price,
            category: category.into(),
            stock,
            is_discontinued: false,
        }
    }

    /// Price after taking `percentage` percent off.
    ///
    /// # Errors
    /// Returns [`ProductError::DiscountOutOfRange`] when `percentage` is
    /// outside `[0, 100]`.
    pub fn calculate_discount_price(&self, percentage: Decimal) -> Result<Decimal, ProductError> {
        if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
            return Err(ProductError::DiscountOutOfRange(percentage));
        }
        let factor = Decimal::ONE - percentage / Decimal::ONE_HUNDRED;
        self.price
            .checked_mul(factor)
            .map(|price| price.normalize())
            .ok_or(ProductError::Overflow)
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0 && !self.is_discontinued
    }

    /// `price * stock`, the value this product contributes to an inventory total.
    pub fn stock_value(&self) -> Result<Decimal, ProductError> {
        self.price
            .checked_mul(Decimal::from(self.stock))
            .ok_or(ProductError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product::new("Laptop", Decimal::new(99999, 2), "Electronics", 15)
    }

    #[test]
    fn test_in_stock_requires_positive_stock_and_not_discontinued() {
        let mut product = laptop();
        assert!(product.is_in_stock());

        product.stock = 0;
        assert!(!product.is_in_stock());

        product.stock = -3;
        assert!(!product.is_in_stock());

        product.stock = 5;
        product.is_discontinued = true;
        assert!(!product.is_in_stock());
    }

    #[test]
    fn test_discount_price_is_exact() {
        let product = laptop();
        assert_eq!(
            product.calculate_discount_price(Decimal::from(20)).unwrap(),
            Decimal::new(799992, 3)
        );
        assert_eq!(product.calculate_discount_price(Decimal::ZERO).unwrap(), product.price);
        assert_eq!(
            product.calculate_discount_price(Decimal::ONE_HUNDRED).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            product.calculate_discount_price(Decimal::new(125, 1)).unwrap(),
            Decimal::new(87499125, 5)
        );
    }

    #[test]
    fn test_discount_out_of_range_is_rejected() {
        let product = laptop();
        assert_eq!(
            product.calculate_discount_price(Decimal::from(150)),
            Err(ProductError::DiscountOutOfRange(Decimal::from(150)))
        );
        assert!(product.calculate_discount_price(Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_stock_value_reports_overflow() {
        assert_eq!(laptop().stock_value(), Ok(Decimal::new(1499985, 2)));

        let mut vault = laptop();
        vault.price = Decimal::MAX;
        vault.stock = 2;
        assert_eq!(vault.stock_value(), Err(ProductError::Overflow));
    }

    #[test]
    fn test_json_uses_camel_case_and_defaults() {
        let product: Product =
            serde_json::from_str(r#"{"name":"Pen","price":1.25,"category":"Office","isDiscontinued":true}"#).unwrap();
        assert_eq!(product.id, "");
        assert_eq!(product.price, Decimal::new(125, 2));
        assert_eq!(product.stock, 0);
        assert!(product.is_discontinued);

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["isDiscontinued"], true);
        assert_eq!(json["price"], "1.25");
    }
}
