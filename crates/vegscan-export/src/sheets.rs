//! Row-oriented projections of the product list, one per output sheet.

use chrono::SecondsFormat;
use vegscan_core::Product;

use crate::cooking::suggest_cooking_methods;

pub const PRODUCTS_SHEET: &str = "Products";
pub const COOKING_SHEET: &str = "Cooking Methods";

pub const PRODUCTS_HEADERS: [&str; 7] = [
    "Product Name",
    "Type of Product",
    "Main Ingredient",
    "Brand",
    "Sale location",
    "On-line Reference",
    "Date visited",
];

pub const COOKING_HEADERS: [&str; 3] = ["Name of product", "Suggested cooking method(s)", "URL"];

/// A named table of string cells. Every row has `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    fn new(name: &str, headers: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            headers: headers.iter().map(|h| (*h).to_owned()).collect(),
            rows: Vec::new(),
        }
    }
}

/// Raw field table. Absent values become empty cells.
#[must_use]
pub fn products_sheet(products: &[Product]) -> Sheet {
    let mut sheet = Sheet::new(PRODUCTS_SHEET, &PRODUCTS_HEADERS);
    sheet.rows = products
        .iter()
        .map(|p| {
            vec![
                p.name.clone(),
                p.product_type.clone().unwrap_or_default(),
                p.main_ingredient.clone().unwrap_or_default(),
                p.brand.clone().unwrap_or_default(),
                p.sale_location.clone().unwrap_or_default(),
                p.online_reference.clone(),
                p.date_accessed.to_rfc3339_opts(SecondsFormat::Millis, true),
            ]
        })
        .collect();
    sheet
}

/// Name, inferred cooking advice and detail reference per product.
#[must_use]
pub fn cooking_sheet(products: &[Product]) -> Sheet {
    let mut sheet = Sheet::new(COOKING_SHEET, &COOKING_HEADERS);
    sheet.rows = products
        .iter()
        .map(|p| {
            vec![
                p.name.clone(),
                suggest_cooking_methods(p),
                p.online_reference.clone(),
            ]
        })
        .collect();
    sheet
}
