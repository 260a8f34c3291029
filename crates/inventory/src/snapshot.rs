//! The inventory snapshot: current quantities for every catalog product.

use serde::{Deserialize, Serialize};

use scoopstock_catalog::Catalog;
use scoopstock_core::{DomainError, DomainResult, Quantity};

/// Current stock of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStock {
    name: String,
    quantity: Quantity,
}

impl ProductStock {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
}

/// Current stock of one category, products in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStock {
    name: String,
    products: Vec<ProductStock>,
}

impl CategoryStock {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn products(&self) -> &[ProductStock] {
        &self.products
    }
}

/// The complete current quantity state across all categories.
///
/// An owned value: the update rule mutates it and the caller decides when
/// to persist. Quantities never go negative through any accepted update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    categories: Vec<CategoryStock>,
}

impl Snapshot {
    /// A fresh snapshot with every product at its zero quantity.
    ///
    /// This is a deep copy of the catalog defaults; mutating the snapshot
    /// never touches the catalog.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let categories = catalog
            .categories()
            .iter()
            .map(|spec| CategoryStock {
                name: spec.name().to_string(),
                products: spec
                    .products()
                    .iter()
                    .map(|product| ProductStock {
                        name: product.clone(),
                        quantity: spec.initial_quantity(),
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    pub fn categories(&self) -> &[CategoryStock] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&CategoryStock> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn quantity(&self, category: &str, product: &str) -> Option<Quantity> {
        self.category(category)?
            .products
            .iter()
            .find(|p| p.name == product)
            .map(|p| p.quantity)
    }

    /// Overwrite one product's quantity. Errors when the slot is unknown;
    /// quantity validation happens in the update rule before this point.
    pub(crate) fn set_quantity(
        &mut self,
        category: &str,
        product: &str,
        quantity: Quantity,
    ) -> DomainResult<()> {
        let slot = self
            .categories
            .iter_mut()
            .find(|c| c.name == category)
            .ok_or_else(|| DomainError::unknown_category(category))?
            .products
            .iter_mut()
            .find(|p| p.name == product)
            .ok_or_else(|| DomainError::unknown_product(category, product))?;
        slot.quantity = quantity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_snapshot_mirrors_catalog_shape() {
        let catalog = Catalog::reference();
        let snapshot = Snapshot::from_catalog(&catalog);

        assert_eq!(snapshot.categories().len(), catalog.categories().len());
        for (stock, spec) in snapshot.categories().iter().zip(catalog.categories()) {
            assert_eq!(stock.name(), spec.name());
            let names: Vec<_> = stock.products().iter().map(|p| p.name()).collect();
            assert_eq!(names, spec.products());
            assert!(stock.products().iter().all(|p| p.quantity().is_zero()));
        }
    }

    #[test]
    fn mutating_a_snapshot_does_not_leak_into_the_catalog() {
        let catalog = Catalog::reference();
        let mut snapshot = Snapshot::from_catalog(&catalog);

        snapshot
            .set_quantity("Extras", "Vasos", Quantity::Count(40))
            .unwrap();

        assert_eq!(
            Snapshot::from_catalog(&catalog).quantity("Extras", "Vasos"),
            Some(Quantity::Count(0))
        );
    }

    #[test]
    fn unknown_slots_are_typed_errors() {
        let mut snapshot = Snapshot::from_catalog(&Catalog::reference());
        assert!(matches!(
            snapshot.set_quantity("Bebidas", "Cola", Quantity::Count(1)),
            Err(DomainError::UnknownCategory(_))
        ));
        assert!(matches!(
            snapshot.set_quantity("Extras", "Cola", Quantity::Count(1)),
            Err(DomainError::UnknownProduct { .. })
        ));
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut snapshot = Snapshot::from_catalog(&Catalog::reference());
        snapshot
            .set_quantity("Por Kilos", "Helado Fresa", Quantity::Kilos(2.5))
            .unwrap();
        snapshot
            .set_quantity("Impulsivo", "Chicles", Quantity::Count(12))
            .unwrap();

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
    }
}
