use chrono::NaiveDate;
use thiserror::Error;

use crate::model::Product;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecSheetError {
    #[error("No specifications available for this product")]
    NoSpecifications,
}

/// Plain-text specification export for one product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSheet {
    pub file_name: String,
    pub body: String,
}

/// "leadTime" -> "Lead Time"
fn spaced_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    let mut chars = out.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => out,
    }
}

fn file_name(product_name: &str) -> String {
    let stem: String = product_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}_specifications.txt", stem)
}

pub fn spec_sheet(product: &Product, generated_on: NaiveDate) -> Result<SpecSheet, SpecSheetError> {
    if product.specifications.is_empty() {
        return Err(SpecSheetError::NoSpecifications);
    }

    let mut body = format!("{} - Technical Specifications\n", product.name);
    body.push_str(&"=".repeat(50));
    body.push_str("\n\n");
    for (key, value) in &product.specifications {
        if value.is_blank() {
            continue;
        }
        body.push_str(&format!("{}: {}\n", spaced_key(key), value));
    }
    body.push_str(&format!(
        "\nGenerated on: {}\n",
        generated_on.format("%-m/%-d/%Y")
    ));

    Ok(SpecSheet {
        file_name: file_name(&product.name),
        body,
    })
}
