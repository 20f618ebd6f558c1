use serde::{Deserialize, Serialize};

use pickwalk_core::{DomainError, DomainResult};

use crate::catalog::Catalog;
use crate::index::PathIndex;
use crate::layout::FloorLayout;
use crate::location::{LocationCode, PathPosition};
use crate::parse::{parse_location_list, parse_name_list};

/// Answer to a location query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationMatch {
    /// Product at each requested location, in request order.
    pub product_names: Vec<String>,
    /// Path steps between the closest and farthest requested locations.
    pub distance: u32,
}

/// Read-only view of one warehouse floor: catalog, layout and the index
/// joining them.
///
/// Nothing here mutates after construction, so a `Warehouse` can be shared
/// across threads behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct Warehouse {
    catalog: Catalog,
    layout: FloorLayout,
    index: PathIndex,
    /// Path position of each catalog product, in catalog order.
    placements: Vec<PathPosition>,
}

impl Warehouse {
    /// Fails if the catalog does not fill the layout one product per slot.
    pub fn new(catalog: Catalog, layout: FloorLayout) -> DomainResult<Self> {
        let index = PathIndex::build(&catalog, &layout)?;
        let placements = catalog
            .products()
            .iter()
            .map(|p| layout.position(&p.location()))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self {
            catalog,
            layout,
            index,
            placements,
        })
    }

    /// The reference catalog on the standard floor.
    pub fn sample() -> DomainResult<Self> {
        Self::new(Catalog::sample(), FloorLayout::standard())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn layout(&self) -> &FloorLayout {
        &self.layout
    }

    pub fn index(&self) -> &PathIndex {
        &self.index
    }

    /// Path position of a location code on this floor.
    pub fn position(&self, code: &LocationCode) -> DomainResult<PathPosition> {
        self.layout.position(code)
    }

    /// Products stored at `locations`, plus the walking distance they span.
    ///
    /// Returns `Ok(None)` when no locations are given. Fails with
    /// [`DomainError::InvalidLocation`] for codes that are malformed or off the
    /// floor, and [`DomainError::NotFound`] for slots past the stocked range.
    pub fn find_products_by_locations<I, S>(
        &self,
        locations: I,
    ) -> DomainResult<Option<LocationMatch>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut product_names = Vec::new();
        let mut nearest: Option<PathPosition> = None;
        let mut farthest: Option<PathPosition> = None;

        for raw in locations {
            let code: LocationCode = raw.as_ref().parse()?;
            let position = self.layout.position(&code)?;
            let product = self
                .index
                .get(position)
                .ok_or_else(|| DomainError::not_found(format!("no product stored at {code}")))?;

            nearest = Some(nearest.map_or(position, |p| p.min(position)));
            farthest = Some(farthest.map_or(position, |p| p.max(position)));
            product_names.push(product.name().to_string());
        }

        let (Some(nearest), Some(farthest)) = (nearest, farthest) else {
            return Ok(None);
        };

        let found = LocationMatch {
            product_names,
            distance: nearest.steps_to(farthest),
        };
        tracing::debug!(
            locations = found.product_names.len(),
            distance = found.distance,
            "resolved products by location"
        );
        Ok(Some(found))
    }

    /// Free-text form of [`Warehouse::find_products_by_locations`], e.g.
    /// `"b3, c7, c9 and a3"`.
    pub fn find_products_by_location_list(
        &self,
        text: &str,
    ) -> DomainResult<Option<LocationMatch>> {
        self.find_products_by_locations(parse_location_list(text))
    }

    /// Locations of the named products, in walking order.
    ///
    /// Matching ignores case. Names with no product are skipped.
    pub fn find_locations_by_product_names<I, S>(&self, names: I) -> Vec<LocationCode>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut found: Vec<(PathPosition, LocationCode)> = Vec::new();
        let mut missed = 0usize;

        for name in names {
            let name = name.as_ref();
            let hit = self
                .catalog
                .products()
                .iter()
                .zip(&self.placements)
                .find(|(product, _)| product.is_named(name));
            let Some((product, position)) = hit else {
                tracing::debug!(name, "no product with this name");
                missed += 1;
                continue;
            };
            found.push((*position, product.location()));
        }

        found.sort_by_key(|(position, _)| *position);
        tracing::debug!(
            found = found.len(),
            missed,
            "resolved locations by product name"
        );
        found.into_iter().map(|(_, code)| code).collect()
    }

    /// Free-text form of [`Warehouse::find_locations_by_product_names`], e.g.
    /// `"hanger, deodorant, candy wrapper"`.
    pub fn find_locations_by_product_name_list(&self, text: &str) -> Vec<LocationCode> {
        self.find_locations_by_product_names(parse_name_list(text))
    }
}
