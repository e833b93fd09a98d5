//! Read-only product catalog.

use rust_decimal::Decimal;

use crate::domain::{Category, Product, ProductId};

/// Calorie threshold below which a product counts as "low calorie".
pub const DEFAULT_LOW_CALORIE_THRESHOLD: u32 = 300;

/// Narrowing options for [`Catalog::filter`]. Unset fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub category: Option<Category>,
    /// Keep products with strictly fewer calories than this.
    pub calories_below: Option<u32>,
}

impl CatalogFilter {
    pub fn matches(&self, product: &Product) -> bool {
        self.category.map_or(true, |category| product.category == category)
            && self
                .calories_below
                .map_or(true, |threshold| product.calories < threshold)
    }
}

/// The product table, loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The breakfast menu.
    pub fn breakfast() -> Self {
        Self::new(vec![
            Product::new(
                1,
                "Croissant + Coffee",
                Category::Prepackaged,
                420,
                Decimal::new(590, 2),
            ),
            Product::new(
                2,
                "Muesli Bowl",
                Category::Prepackaged,
                380,
                Decimal::new(650, 2),
            ),
            Product::new(
                3,
                "Orange Juice",
                Category::Prepackaged,
                110,
                Decimal::new(290, 2),
            ),
            Product::new(4, "Croissant", Category::Simple, 250, Decimal::new(220, 2)),
            Product::new(5, "Coffee", Category::Simple, 5, Decimal::new(350, 2)),
            Product::new(6, "Ham", Category::Simple, 80, Decimal::new(120, 2)),
            Product::new(7, "Butter", Category::Simple, 100, Decimal::new(80, 2)),
        ])
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn filter(&self, filter: CatalogFilter) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| filter.matches(product))
            .cloned()
            .collect()
    }

    pub fn by_category(&self, category: Category) -> Vec<Product> {
        self.filter(CatalogFilter {
            category: Some(category),
            ..CatalogFilter::default()
        })
    }

    pub fn below_calories(&self, threshold: u32) -> Vec<Product> {
        self.filter(CatalogFilter {
            calories_below: Some(threshold),
            ..CatalogFilter::default()
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::breakfast()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::breakfast();
        let muesli = catalog.get(ProductId(2)).expect("muesli bowl");
        assert_eq!(muesli.name, "Muesli Bowl");
        assert_eq!(muesli.price, Decimal::new(650, 2));
        assert!(catalog.get(ProductId(99)).is_none());
    }

    #[test]
    fn test_low_calorie_filter_is_strict() {
        let catalog = Catalog::breakfast();
        assert_eq!(
            ids(&catalog.below_calories(DEFAULT_LOW_CALORIE_THRESHOLD)),
            vec![3, 4, 5, 6, 7]
        );
        // Croissant has exactly 250 kcal.
        assert_eq!(ids(&catalog.below_calories(250)), vec![3, 5, 6, 7]);
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::breakfast();
        assert_eq!(ids(&catalog.by_category(Category::Prepackaged)), vec![1, 2, 3]);
        assert_eq!(ids(&catalog.by_category(Category::Simple)), vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_combined_filter() {
        let catalog = Catalog::breakfast();
        let filter = CatalogFilter {
            category: Some(Category::Prepackaged),
            calories_below: Some(300),
        };
        assert_eq!(ids(&catalog.filter(filter)), vec![3]);
        assert_eq!(catalog.filter(CatalogFilter::default()), catalog.all());
    }
}
