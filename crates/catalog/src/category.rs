//! Category and product configuration.

use serde::{Deserialize, Serialize};

use scoopstock_core::{DomainError, DomainResult, Quantity};

/// How quantities are entered for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// A single non-negative whole count.
    Unit,
    /// Six pail fill selections summed into kilos.
    WeighedPails,
}

/// One category: a name, an input mode, and an ordered product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    name: String,
    input_mode: InputMode,
    products: Vec<String>,
}

impl CategorySpec {
    pub fn new(
        name: impl Into<String>,
        input_mode: InputMode,
        products: Vec<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("category name cannot be empty"));
        }
        for (i, product) in products.iter().enumerate() {
            if product.trim().is_empty() {
                return Err(DomainError::validation("product name cannot be empty"));
            }
            if products[..i].contains(product) {
                return Err(DomainError::validation(format!(
                    "duplicate product {product:?} in category {name:?}"
                )));
            }
        }
        Ok(Self {
            name,
            input_mode,
            products,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    /// The zero quantity in this category's unit.
    pub fn initial_quantity(&self) -> Quantity {
        match self.input_mode {
            InputMode::Unit => Quantity::Count(0),
            InputMode::WeighedPails => Quantity::Kilos(0.0),
        }
    }
}

/// The full, ordered category configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<CategorySpec>,
}

impl Catalog {
    pub fn new(categories: Vec<CategorySpec>) -> DomainResult<Self> {
        for (i, category) in categories.iter().enumerate() {
            if categories[..i].iter().any(|c| c.name == category.name) {
                return Err(DomainError::validation(format!(
                    "duplicate category {:?}",
                    category.name
                )));
            }
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[CategorySpec] {
        &self.categories
    }

    pub fn get(&self, name: &str) -> Option<&CategorySpec> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// The reference shop configuration: impulse buys and extras are
    /// unit-counted, ice cream flavors are weighed in pails.
    pub fn reference() -> Self {
        fn spec(name: &str, input_mode: InputMode, products: &[&str]) -> CategorySpec {
            CategorySpec {
                name: name.to_string(),
                input_mode,
                products: products.iter().map(|p| p.to_string()).collect(),
            }
        }
        // Statically well-formed, so constructed without re-validation.
        Self {
            categories: vec![
                spec(
                    "Impulsivo",
                    InputMode::Unit,
                    &["Galletas", "Chicles", "Snack Salado"],
                ),
                spec(
                    "Por Kilos",
                    InputMode::WeighedPails,
                    &["Helado Vainilla", "Helado Chocolate", "Helado Fresa"],
                ),
                spec(
                    "Extras",
                    InputMode::Unit,
                    &["Vasos", "Cucharas", "Servilletas"],
                ),
            ],
        }
    }
}
