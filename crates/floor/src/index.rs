use pickwalk_core::{DomainError, DomainResult};

use crate::catalog::{Catalog, Product};
use crate::layout::FloorLayout;
use crate::location::PathPosition;

/// Products in walking order, addressable by path position.
///
/// Built only from catalogs that tile positions `0..len` with exactly one
/// product each, so `get(position)` is a plain array lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathIndex {
    products: Vec<Product>,
}

impl PathIndex {
    /// Sort `catalog` along the route described by `layout`.
    ///
    /// Fails with [`DomainError::CatalogIntegrity`] if a product sits outside
    /// the layout, two products share a location, or a location inside the
    /// covered range is empty.
    pub fn build(catalog: &Catalog, layout: &FloorLayout) -> DomainResult<Self> {
        let mut placed = catalog
            .products()
            .iter()
            .map(|p| {
                layout
                    .position(&p.location())
                    .map(|pos| (pos, p))
                    .map_err(|e| integrity_error(format!("{}: {e}", p.name())))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        // Stable, so the first of two clashing products is reported first.
        placed.sort_by_key(|(pos, _)| *pos);

        for (i, (pos, product)) in placed.iter().enumerate() {
            let expected = route_position(i)?;
            if *pos < expected {
                let (_, holder) = placed[i - 1];
                return Err(integrity_error(format!(
                    "{} holds both {:?} and {:?}",
                    product.location(),
                    holder.name(),
                    product.name()
                )));
            }
            if *pos > expected {
                let missing = layout
                    .location_at(expected)
                    .map(|code| code.to_string())
                    .unwrap_or_else(|| format!("position {expected}"));
                return Err(integrity_error(format!("{missing} holds no product")));
            }
        }

        tracing::debug!(products = placed.len(), "built path index");

        Ok(Self {
            products: placed.into_iter().map(|(_, p)| p.clone()).collect(),
        })
    }

    pub fn get(&self, position: PathPosition) -> Option<&Product> {
        self.products.get(position.value() as usize)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in walking order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

/// Position of the `i`-th product along the route.
fn route_position(i: usize) -> DomainResult<PathPosition> {
    u32::try_from(i)
        .map(PathPosition)
        .map_err(|_| integrity_error(format!("product #{i} is past the last route position")))
}

fn integrity_error(msg: String) -> DomainError {
    tracing::warn!(reason = %msg, "rejected catalog");
    DomainError::catalog_integrity(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{RackRun, Walk};
    use crate::location::{LocationCode, Rack};

    fn product(name: &str, code: &str) -> Product {
        Product::new(name, code.parse().unwrap()).unwrap()
    }

    #[test]
    fn sample_index_starts_at_entrance_and_ends_at_exit() {
        let index = PathIndex::build(&Catalog::sample(), &FloorLayout::standard()).unwrap();
        assert_eq!(index.len(), 30);
        assert_eq!(index.get(PathPosition(0)).unwrap().name(), "rubber band");
        assert_eq!(index.get(PathPosition(9)).unwrap().name(), "needle");
        assert_eq!(index.get(PathPosition(10)).unwrap().name(), "rusty nail");
        assert_eq!(index.get(PathPosition(29)).unwrap().name(), "cookie jar");
        assert!(index.get(PathPosition(30)).is_none());
    }

    #[test]
    fn empty_catalog_builds_empty_index() {
        let index = PathIndex::build(&Catalog::default(), &FloorLayout::standard()).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn shared_location_is_rejected() {
        let catalog = Catalog::new(vec![
            product("rubber band", "a10"),
            product("hanger", "a9"),
            product("shovel", "a9"),
        ])
        .unwrap();
        let err = PathIndex::build(&catalog, &FloorLayout::standard()).unwrap_err();
        assert_eq!(
            err,
            DomainError::catalog_integrity("a9 holds both \"hanger\" and \"shovel\"")
        );
    }

    #[test]
    fn gap_is_rejected() {
        let catalog =
            Catalog::new(vec![product("rubber band", "a10"), product("hanger", "a8")]).unwrap();
        let err = PathIndex::build(&catalog, &FloorLayout::standard()).unwrap_err();
        assert_eq!(err, DomainError::catalog_integrity("a9 holds no product"));
    }

    #[test]
    fn product_off_the_floor_is_rejected() {
        let layout =
            FloorLayout::new(vec![RackRun::new(Rack::A, 0, 2, Walk::Ascending)]).unwrap();
        let catalog =
            Catalog::new(vec![product("needle", "a1"), product("sharpie", "b2")]).unwrap();
        let err = PathIndex::build(&catalog, &layout).unwrap_err();
        assert!(matches!(err, DomainError::CatalogIntegrity(_)));
    }

    #[test]
    fn custom_layout_orders_by_its_own_route() {
        let layout = FloorLayout::new(vec![
            RackRun::new(Rack::B, 0, 2, Walk::Descending),
            RackRun::new(Rack::A, 2, 1, Walk::Ascending),
        ])
        .unwrap();
        let catalog = Catalog::new(vec![
            product("needle", "a1"),
            product("sharpie", "b2"),
            product("tyre swing", "b1"),
        ])
        .unwrap();
        let index = PathIndex::build(&catalog, &layout).unwrap();
        let names: Vec<_> = index.iter().map(Product::name).collect();
        assert_eq!(names, ["sharpie", "tyre swing", "needle"]);
    }

    #[test]
    fn route_positions_stop_at_u32() {
        assert_eq!(route_position(29).unwrap(), PathPosition(29));
        assert_eq!(route_position(u32::MAX as usize).unwrap(), PathPosition(u32::MAX));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn route_position_past_u32_is_an_integrity_error() {
        let err = route_position(u32::MAX as usize + 1).unwrap_err();
        assert!(matches!(err, DomainError::CatalogIntegrity(_)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Load order never matters: every product lands at its own position.
            #[test]
            fn every_product_sits_at_its_position(
                products in Just(Catalog::sample().products().to_vec()).prop_shuffle()
            ) {
                let layout = FloorLayout::standard();
                let catalog = Catalog::new(products).unwrap();
                let index = PathIndex::build(&catalog, &layout).unwrap();
                for p in catalog.products() {
                    let pos = layout.position(&p.location()).unwrap();
                    prop_assert_eq!(index.get(pos), Some(p));
                }
            }

            /// Moving any product onto another's slot breaks the catalog.
            #[test]
            fn any_double_booking_is_detected(from in 0usize..30, to in 0usize..30) {
                prop_assume!(from != to);
                let mut products = Catalog::sample().products().to_vec();
                let target: LocationCode = products[to].location();
                products[from] = Product::new(products[from].name(), target).unwrap();

                let catalog = Catalog::new(products).unwrap();
                let err = PathIndex::build(&catalog, &FloorLayout::standard()).unwrap_err();
                prop_assert!(matches!(err, DomainError::CatalogIntegrity(_)));
            }
        }
    }
}
