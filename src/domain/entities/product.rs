//! Product entity and its category tag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::store::Store;

/// Category tag of a product.
///
/// Only the two literal tags below are accepted, compared case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "Perecedero")]
    Perishable,
    #[serde(rename = "No perecedero")]
    NonPerishable,
}

impl ProductType {
    pub const PERISHABLE: &'static str = "Perecedero";
    pub const NON_PERISHABLE: &'static str = "No perecedero";

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Perishable => Self::PERISHABLE,
            ProductType::NonPerishable => Self::NON_PERISHABLE,
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the accepted tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProductType(pub String);

impl fmt::Display for UnknownProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown product type '{}'", self.0)
    }
}

impl std::error::Error for UnknownProductType {}

impl FromStr for ProductType {
    type Err = UnknownProductType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::PERISHABLE => Ok(ProductType::Perishable),
            Self::NON_PERISHABLE => Ok(ProductType::NonPerishable),
            other => Err(UnknownProductType(other.to_string())),
        }
    }
}

/// A catalogue product.
///
/// `stores` is the ordered association set. It is only populated when the
/// product was loaded with its relations; membership is always decided by
/// store id.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: String,
    pub product_type: ProductType,
    pub stores: Vec<Store>,
}

impl Product {
    pub fn new(
        id: Uuid,
        name: String,
        price: String,
        product_type: ProductType,
        stores: Vec<Store>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            product_type,
            stores,
        }
    }

    /// Returns the associated store with the given id, if any.
    pub fn find_store(&self, store_id: Uuid) -> Option<&Store> {
        self.stores.iter().find(|s| s.id == store_id)
    }

    /// Ids of the associated stores, in association order.
    pub fn store_ids(&self) -> Vec<Uuid> {
        self.stores.iter().map(|s| s.id).collect()
    }
}

/// Raw input for creating or updating a product.
///
/// `product_type` is kept as text here; the service validates it against
/// [`ProductType`].
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: String,
    pub product_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(name: &str) -> Store {
        Store::new(
            Uuid::new_v4(),
            name.to_string(),
            "MED".to_string(),
            "Calle 1".to_string(),
        )
    }

    #[test]
    fn test_product_type_parses_exact_tags() {
        assert_eq!(
            "Perecedero".parse::<ProductType>(),
            Ok(ProductType::Perishable)
        );
        assert_eq!(
            "No perecedero".parse::<ProductType>(),
            Ok(ProductType::NonPerishable)
        );
    }

    #[test]
    fn test_product_type_is_case_sensitive() {
        assert!("perecedero".parse::<ProductType>().is_err());
        assert!("No Perecedero".parse::<ProductType>().is_err());
        assert!("Frozen".parse::<ProductType>().is_err());
    }

    #[test]
    fn test_product_type_serde_uses_tags() {
        let json = serde_json::to_string(&ProductType::NonPerishable).unwrap();
        assert_eq!(json, "\"No perecedero\"");

        let parsed: ProductType = serde_json::from_str("\"Perecedero\"").unwrap();
        assert_eq!(parsed, ProductType::Perishable);
    }

    #[test]
    fn test_find_store_by_id() {
        let a = store("A");
        let b = store("B");
        let product = Product::new(
            Uuid::new_v4(),
            "Milk".to_string(),
            "3.50".to_string(),
            ProductType::Perishable,
            vec![a.clone(), b.clone()],
        );

        assert_eq!(product.find_store(b.id), Some(&b));
        assert!(product.find_store(Uuid::new_v4()).is_none());
        assert_eq!(product.store_ids(), vec![a.id, b.id]);
    }
}
