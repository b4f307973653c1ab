use std::collections::HashSet;

use arrow_array::Int8Array;

use crate::array::GeometryArray;
use crate::datatypes::GeometryType;
use crate::scalar::Geometry;

/// Calculation of the geometry types within a GeometryArray
pub trait GeomTypeId {
    type Output;

    /// Return the geometry types stored in this array
    ///
    /// The integer values of this return type match that of GEOS and Shapely:
    ///
    /// - None (missing) is -1
    /// - POINT is 0
    /// - LINESTRING is 1
    /// - LINEARRING is 2
    /// - POLYGON is 3
    /// - MULTIPOINT is 4
    /// - MULTILINESTRING is 5
    /// - MULTIPOLYGON is 6
    /// - GEOMETRYCOLLECTION is 7
    fn geom_type_id(&self) -> Self::Output;
}

impl GeomTypeId for Geometry {
    type Output = i8;

    fn geom_type_id(&self) -> i8 {
        self.geom_type().into()
    }
}

impl GeomTypeId for GeometryArray {
    type Output = Int8Array;

    fn geom_type_id(&self) -> Int8Array {
        let values: Vec<i8> = self
            .iter()
            .map(|maybe_g| maybe_g.map_or(-1, |g| g.geom_type_id()))
            .collect();
        values.into()
    }
}

impl GeometryArray {
    /// Return the unique geometry types stored in this array, ignoring nulls.
    pub fn unique_geom_types(&self) -> HashSet<GeometryType> {
        self.iter().flatten().map(|g| g.geom_type()).collect()
    }
}
