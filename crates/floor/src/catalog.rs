use serde::{Deserialize, Serialize};

use pickwalk_core::{DomainError, DomainResult, Entity};

use crate::location::{LocationCode, Rack};

/// A stocked product and the slot it lives in.
///
/// Identity is the name, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    location: LocationCode,
}

impl Product {
    pub fn new(name: impl Into<String>, location: LocationCode) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation(format!(
                "product at {location} has an empty name"
            )));
        }
        Ok(Self { name, location })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> LocationCode {
        self.location
    }

    /// Case-insensitive exact name match.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

impl Entity for Product {
    type Key = String;

    fn key(&self) -> Self::Key {
        self.name.to_lowercase()
    }
}

/// The reference stock: 30 products, one per slot of racks a, b and c.
const SAMPLE: &[(&str, Rack, u32)] = &[
    ("bath fizzers", Rack::B, 7),
    ("blouse", Rack::A, 3),
    ("bookmark", Rack::A, 7),
    ("candy wrapper", Rack::C, 8),
    ("chalk", Rack::C, 3),
    ("cookie jar", Rack::B, 10),
    ("deodorant", Rack::B, 9),
    ("drill press", Rack::C, 2),
    ("face wash", Rack::C, 6),
    ("glow stick", Rack::A, 9),
    ("hanger", Rack::A, 4),
    ("leg warmers", Rack::C, 10),
    ("model car", Rack::A, 8),
    ("nail filer", Rack::B, 5),
    ("needle", Rack::A, 1),
    ("paint brush", Rack::C, 7),
    ("photo album", Rack::B, 4),
    ("picture frame", Rack::B, 3),
    ("rubber band", Rack::A, 10),
    ("rubber duck", Rack::A, 5),
    ("rusty nail", Rack::C, 1),
    ("sharpie", Rack::B, 2),
    ("shoe lace", Rack::C, 9),
    ("shovel", Rack::A, 6),
    ("stop sign", Rack::A, 2),
    ("thermometer", Rack::C, 5),
    ("tyre swing", Rack::B, 1),
    ("tissue box", Rack::B, 8),
    ("tooth paste", Rack::B, 6),
    ("word search", Rack::C, 4),
];

/// Immutable list of products, in load order.
///
/// Construction only checks each product on its own. Whether the products
/// tile the floor is checked when a [`PathIndex`](crate::index::PathIndex)
/// is built from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let products = products
            .into_iter()
            .map(|p| Product::new(p.name, p.location))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self { products })
    }

    /// Load from a JSON array of `{"name": .., "location": ..}` objects.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("catalog: {e}")))?;
        Self::new(products)
    }

    pub fn sample() -> Self {
        Self {
            products: SAMPLE
                .iter()
                .map(|&(name, rack, slot)| Product {
                    name: name.to_string(),
                    location: LocationCode::from_parts(rack, slot),
                })
                .collect(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First product whose name matches, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.is_named(name))
    }
}
