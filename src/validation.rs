//! # Validation
//!
//! Pure normalization rules for catalog payloads. Nothing here touches the
//! store: each function is a function of its input, returning the normalized
//! value or the first [`ValidationError`] found.
//!
//! ## Rules
//! - Text is trimmed, must be non-empty and is converted to title case.
//!   Length limits count characters of the normalized text.
//! - Prices must be finite, `0 < price <= 10000`, and are stored rounded
//!   half away from zero to 2 decimal places.
//! - Stock must be within `0..=10000`.
//! - A product carries 1 to 10 categories whose names differ ignoring case.

use std::collections::HashSet;

use crate::domain::{Category, CategoryInput, ProductFields, ProductInput};
use crate::error::ValidationError;

pub const CATEGORY_NAME_MAX_CHARS: usize = 50;
pub const CATEGORY_DESCRIPTION_MAX_CHARS: usize = 200;
pub const PRODUCT_NAME_MAX_CHARS: usize = 100;
pub const PRICE_MAX: f64 = 10_000.0;
pub const STOCK_MAX: i64 = 10_000;
pub const CATEGORIES_MAX: usize = 10;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Text
// =============================================================================

/// Converts text to title case.
///
/// A cased character is upper-cased when it does not follow another cased
/// character and lower-cased otherwise, so word boundaries are any non-letter:
/// `"o'neil farms"` becomes `"O'Neil Farms"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;
    for c in text.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased && !previous_cased {
            // Multi-char uppercase expansions ("ß" -> "SS") keep only their lead upper.
            let mut upper = c.to_uppercase();
            if let Some(lead) = upper.next() {
                out.push(lead);
            }
            out.extend(upper.flat_map(char::to_lowercase));
        } else if cased {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        previous_cased = cased;
    }
    out
}

fn normalize_name(raw: &str, field: &str, max: usize) -> ValidationResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField {
            field: field.to_string(),
        });
    }
    let name = title_case(trimmed);
    check_length(&name, field, max)?;
    Ok(name)
}

fn check_length(text: &str, field: &str, max: usize) -> ValidationResult<()> {
    let actual = text.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
            actual,
        });
    }
    Ok(())
}

// =============================================================================
// Categories
// =============================================================================

/// Normalizes a single category.
///
/// The name is trimmed, checked and title-cased; the description is only
/// trimmed. An absent description stays absent.
pub fn normalize_category(raw: &CategoryInput) -> ValidationResult<Category> {
    normalize_category_at(raw, "category")
}

fn normalize_category_at(raw: &CategoryInput, path: &str) -> ValidationResult<Category> {
    let name = normalize_name(
        &raw.name,
        &format!("{path}.name"),
        CATEGORY_NAME_MAX_CHARS,
    )?;
    let description = match raw.description.as_deref() {
        Some(text) => {
            let trimmed = text.trim();
            check_length(
                trimmed,
                &format!("{path}.description"),
                CATEGORY_DESCRIPTION_MAX_CHARS,
            )?;
            Some(trimmed.to_string())
        }
        None => None,
    };
    Ok(Category { name, description })
}

fn normalize_categories(raw: &[CategoryInput]) -> ValidationResult<Vec<Category>> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyField {
            field: "categories".to_string(),
        });
    }
    if raw.len() > CATEGORIES_MAX {
        return Err(ValidationError::TooMany {
            field: "categories".to_string(),
            max: CATEGORIES_MAX,
            actual: raw.len(),
        });
    }

    let categories = raw
        .iter()
        .enumerate()
        .map(|(index, category)| normalize_category_at(category, &format!("categories[{index}]")))
        .collect::<ValidationResult<Vec<_>>>()?;

    let mut seen = HashSet::with_capacity(categories.len());
    for category in &categories {
        if !seen.insert(category.name.to_lowercase()) {
            return Err(ValidationError::DuplicateCategory {
                name: category.name.clone(),
            });
        }
    }
    Ok(categories)
}

// =============================================================================
// Numbers
// =============================================================================

/// Rounds half away from zero to 2 decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Checks `0 < price <= 10000` and rounds to cents.
///
/// A positive price below half a cent rounds to zero and is rejected, so a
/// stored price is always strictly positive.
pub fn normalize_price(price: f64) -> ValidationResult<f64> {
    let out_of_range = |reason: String| ValidationError::OutOfRange {
        field: "price".to_string(),
        reason,
    };
    if !price.is_finite() {
        return Err(out_of_range(format!("must be a finite number, got {price}")));
    }
    if price <= 0.0 {
        return Err(out_of_range(format!("must be greater than 0, got {price}")));
    }
    if price > PRICE_MAX {
        return Err(out_of_range(format!(
            "must not exceed {PRICE_MAX}, got {price}"
        )));
    }
    let rounded = round_to_cents(price);
    if rounded <= 0.0 {
        return Err(out_of_range(format!("rounds to 0.00, got {price}")));
    }
    Ok(rounded)
}

pub fn normalize_stock(stock: i64) -> ValidationResult<u32> {
    let out_of_range = |reason: String| ValidationError::OutOfRange {
        field: "stock".to_string(),
        reason,
    };
    if stock < 0 {
        return Err(out_of_range(format!("must not be negative, got {stock}")));
    }
    if stock > STOCK_MAX {
        return Err(out_of_range(format!(
            "must not exceed {STOCK_MAX}, got {stock}"
        )));
    }
    u32::try_from(stock).map_err(|_| out_of_range(format!("not representable: {stock}")))
}

// =============================================================================
// Products
// =============================================================================

/// Normalizes a product payload.
///
/// Fields are checked in order name, price, stock, categories; the first
/// failure is returned.
pub fn normalize_product(raw: &ProductInput) -> ValidationResult<ProductFields> {
    let name = normalize_name(&raw.name, "name", PRODUCT_NAME_MAX_CHARS)?;
    let price = normalize_price(raw.price)?;
    let stock = normalize_stock(raw.stock)?;
    let categories = normalize_categories(&raw.categories)?;
    Ok(ProductFields {
        name,
        price,
        stock,
        categories,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use proptest::test_runner::Config;

    fn category_names(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<String>> {
        prop::collection::hash_set("[a-z]{1,12}", len)
            .prop_map(|names| names.into_iter().collect())
    }

    proptest! {
        #![proptest_config(Config::with_cases(128))]

        #[test]
        fn cent_prices_are_stored_exactly(cents in 1u32..=1_000_000) {
            let price = f64::from(cents) / 100.0;
            prop_assert_eq!(normalize_price(price).unwrap(), price);
        }

        #[test]
        fn sub_cent_prices_round_to_nearest_cent(cents in 1u32..1_000_000, up in any::<bool>()) {
            let (offset, expected) = if up { (0.7, cents + 1) } else { (0.3, cents) };
            let price = (f64::from(cents) + offset) / 100.0;
            prop_assert_eq!(normalize_price(price).unwrap(), f64::from(expected) / 100.0);
        }

        #[test]
        fn non_positive_prices_are_rejected(price in -1.0e6f64..=0.0) {
            prop_assert!(normalize_price(price).is_err());
        }

        #[test]
        fn prices_above_max_are_rejected(price in 10_000.0001f64..1.0e9) {
            prop_assert!(normalize_price(price).is_err());
        }

        #[test]
        fn stock_is_rejected_only_outside_range(stock in -20_000i64..20_000) {
            let accepted = normalize_stock(stock).is_ok();
            prop_assert_eq!(accepted, (0..=STOCK_MAX).contains(&stock));
        }

        #[test]
        fn distinct_category_lists_up_to_ten_are_accepted(names in category_names(1..11)) {
            let raw = ProductInput::new(
                "Producto",
                10.0,
                1,
                names.iter().map(CategoryInput::new).collect(),
            );
            let fields = normalize_product(&raw).unwrap();
            prop_assert_eq!(fields.categories.len(), names.len());
        }

        #[test]
        fn category_lists_over_ten_are_rejected(names in category_names(11..20)) {
            let raw = ProductInput::new(
                "Producto",
                10.0,
                1,
                names.iter().map(CategoryInput::new).collect(),
            );
            let is_too_many = matches!(
                normalize_product(&raw),
                Err(ValidationError::TooMany { .. })
            );
            prop_assert!(is_too_many);
        }

        #[test]
        fn normalization_is_idempotent(
            name in "[ ]{0,3}[a-zA-Z][a-zA-Z0-9' -]{0,40}[ ]{0,3}",
            description in proptest::option::of("[ ]{0,2}[a-zA-Z ]{0,60}"),
        ) {
            let raw = CategoryInput { name: name.clone(), description };
            let once = normalize_category(&raw).unwrap();
            let twice = normalize_category(&CategoryInput::from(once.clone())).unwrap();
            prop_assert_eq!(&once, &twice);

            let product = ProductInput::new(name, 12.345, 3, vec![CategoryInput::from(once)]);
            let first = normalize_product(&product).unwrap();
            let again = ProductInput::new(
                first.name.clone(),
                first.price,
                i64::from(first.stock),
                first.categories.iter().cloned().map(CategoryInput::from).collect(),
            );
            prop_assert_eq!(normalize_product(&again).unwrap(), first);
        }
    }
}
