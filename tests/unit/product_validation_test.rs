// Property-based tests for product validation and form binding
//
// Column limits: Name VARCHAR(200), Color VARCHAR(50), Price DECIMAL(18,2)

use product_catalog::products::models::{
    COLOR_MAX_LENGTH, NAME_MAX_LENGTH, PRICE_MAX_INTEGER_DIGITS, PRICE_SCALE,
};
use product_catalog::products::{Product, ProductForm};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn product_with(name: String, price: Decimal, color: Option<String>) -> Product {
    Product::new(name, price, 1, color)
}

proptest! {
    #[test]
    fn test_names_within_limit_are_accepted(name in "[a-zA-ZçğıöşüÇĞİÖŞÜ]{1,200}") {
        let product = product_with(name, Decimal::ONE, None);
        prop_assert!(product.validate().is_valid());
    }

    #[test]
    fn test_names_over_limit_are_rejected(extra in 1usize..50) {
        let name = "a".repeat(NAME_MAX_LENGTH + extra);
        let product = product_with(name, Decimal::ONE, None);
        prop_assert!(product.validate().error_for("name").is_some());
    }

    #[test]
    fn test_colors_over_limit_are_rejected(extra in 1usize..50) {
        let color = "b".repeat(COLOR_MAX_LENGTH + extra);
        let product = product_with("Kalem".to_string(), Decimal::ONE, Some(color));
        prop_assert!(product.validate().error_for("color").is_some());
    }

    #[test]
    fn test_prices_with_two_decimals_are_accepted(
        units in 0i64..10_000_000_000i64,
        cents in 0i64..100i64,
        negative in any::<bool>()
    ) {
        let mut price = Decimal::new(units * 100 + cents, PRICE_SCALE);
        if negative {
            price = -price;
        }
        let product = product_with("Kalem".to_string(), price, None);
        prop_assert!(product.validate().is_valid(), "price {} rejected", price);
    }

    #[test]
    fn test_prices_with_three_significant_decimals_are_rejected(
        units in 0i64..1_000_000i64,
        mills in 0i64..1000i64
    ) {
        prop_assume!(mills % 10 != 0);
        let price = Decimal::new(units * 1000 + mills, 3);
        let product = product_with("Kalem".to_string(), price, None);
        prop_assert!(product.validate().error_for("price").is_some());
    }

    #[test]
    fn test_prices_with_too_many_integer_digits_are_rejected(extra in 0u32..3) {
        let price = Decimal::from(10i64.pow(PRICE_MAX_INTEGER_DIGITS + extra));
        let product = product_with("Kalem".to_string(), price, None);
        prop_assert!(product.validate().error_for("price").is_some());
    }

    #[test]
    fn test_bind_parses_any_valid_stock(stock in any::<i32>()) {
        let form = ProductForm {
            id: None,
            name: "Defter".to_string(),
            price: "200".to_string(),
            stock: stock.to_string(),
            color: String::new(),
        };
        let product = form.bind().unwrap();
        prop_assert_eq!(product.stock, stock);
        prop_assert_eq!(product.id, 0);
    }

    #[test]
    fn test_bind_never_accepts_non_numeric_price(price in "[a-zA-Z]{1,10}") {
        let form = ProductForm {
            id: None,
            name: "Defter".to_string(),
            price,
            stock: "1".to_string(),
            color: String::new(),
        };
        let errors = form.bind().unwrap_err();
        prop_assert!(errors.error_for("price").is_some());
        prop_assert_eq!(errors.errors().len(), 1);
    }
}

#[test]
fn test_form_round_trip_keeps_values() {
    let product = Product {
        id: 7,
        name: "Kalem".to_string(),
        price: Decimal::new(1999, 2),
        stock: 3,
        color: Some("Yeşil".to_string()),
    };

    let form = ProductForm::from_product(&product);
    assert_eq!(form.price, "19.99");
    assert_eq!(form.posted_id(), Some(7));

    let mut bound = form.bind().unwrap();
    bound.id = 7;
    assert_eq!(bound, product);
}
