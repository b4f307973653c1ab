//! Polygon overlay: intersection, union, difference and symmetric difference.
//!
//! Both operands must be Polygons or MultiPolygons. A result with exactly one polygon is returned
//! as a Polygon, a result with none as an empty Polygon, and anything else as a MultiPolygon. The
//! results are two-dimensional.

use geo::BooleanOps as _BooleanOps;

use crate::algorithm::broadcasting::BroadcastableGeometry;
use crate::algorithm::native::binary::try_binary;
use crate::array::GeometryArray;
use crate::error::{GeoVecError, Result};
use crate::scalar::Geometry;

pub(crate) fn to_multi_polygon(geom: &Geometry) -> Result<geo::MultiPolygon> {
    if !geom.geom_type().is_polygonal() {
        return Err(GeoVecError::IncorrectGeometryType(format!(
            "overlay is only defined for Polygon and MultiPolygon, got {}",
            geom.geom_type()
        )));
    }
    let polygons = match geom.as_geo() {
        geo::Geometry::Polygon(poly) => vec![poly.clone()],
        geo::Geometry::MultiPolygon(mp) => mp.0.clone(),
        _ => vec![],
    };
    Ok(geo::MultiPolygon::new(
        polygons
            .into_iter()
            .filter(|poly| !poly.exterior().0.is_empty())
            .collect(),
    ))
}

pub(crate) fn from_multi_polygon(mut mp: geo::MultiPolygon) -> Geometry {
    match mp.0.len() {
        0 => Geometry::empty_polygon(),
        1 => match mp.0.pop() {
            Some(poly) => poly.into(),
            None => Geometry::empty_polygon(),
        },
        _ => mp.into(),
    }
}

#[derive(Debug, Clone, Copy)]
enum OverlayOp {
    Intersection,
    Union,
    Difference,
    SymmetricDifference,
}

fn overlay(a: &Geometry, b: &Geometry, op: OverlayOp) -> Result<Geometry> {
    let a = to_multi_polygon(a)?;
    let b = to_multi_polygon(b)?;
    let result = match op {
        OverlayOp::Intersection => a.intersection(&b),
        OverlayOp::Union => a.union(&b),
        OverlayOp::Difference => a.difference(&b),
        OverlayOp::SymmetricDifference => a.xor(&b),
    };
    Ok(from_multi_polygon(result))
}

fn overlay_impl(
    a: BroadcastableGeometry,
    b: BroadcastableGeometry,
    op: OverlayOp,
) -> Result<GeometryArray> {
    let result = try_binary(&a, &b, |a, b| overlay(a, b, op).map(Some))?;
    Ok(result.into())
}

macro_rules! overlay_trait {
    ($(#[$attr:meta])* $trait_name:ident, $method:ident, $op:expr) => {
        $(#[$attr])*
        pub trait $trait_name<Rhs = Self> {
            type Output;

            fn $method(&self, rhs: &Rhs) -> Self::Output;
        }

        impl $trait_name for Geometry {
            type Output = Result<Geometry>;

            fn $method(&self, rhs: &Self) -> Self::Output {
                overlay(self, rhs, $op)
            }
        }

        impl $trait_name<GeometryArray> for Geometry {
            type Output = Result<GeometryArray>;

            fn $method(&self, rhs: &GeometryArray) -> Self::Output {
                overlay_impl(self.into(), rhs.into(), $op)
            }
        }

        impl $trait_name<Geometry> for GeometryArray {
            type Output = Result<GeometryArray>;

            fn $method(&self, rhs: &Geometry) -> Self::Output {
                overlay_impl(self.into(), rhs.into(), $op)
            }
        }

        impl $trait_name for GeometryArray {
            type Output = Result<GeometryArray>;

            fn $method(&self, rhs: &Self) -> Self::Output {
                overlay_impl(self.into(), rhs.into(), $op)
            }
        }
    };
}

overlay_trait!(
    /// The area shared by both geometries.
    ///
    /// ```
    /// use geovec::algorithm::geo::{Equals, Intersection};
    /// use geovec::scalar::Geometry;
    ///
    /// let a = Geometry::rect(0.0, 0.0, 10.0, 10.0);
    /// let b = Geometry::rect(5.0, 5.0, 20.0, 20.0);
    ///
    /// let shared = a.intersection(&b).unwrap();
    /// assert!(shared.equals(&Geometry::rect(5.0, 5.0, 10.0, 10.0)));
    /// ```
    Intersection,
    intersection,
    OverlayOp::Intersection
);

overlay_trait!(
    /// The area covered by either geometry.
    Union,
    union,
    OverlayOp::Union
);

overlay_trait!(
    /// The area of `self` not covered by `rhs`.
    Difference,
    difference,
    OverlayOp::Difference
);

overlay_trait!(
    /// The area covered by exactly one of the geometries.
    SymmetricDifference,
    symmetric_difference,
    OverlayOp::SymmetricDifference
);

/// Union of all non-null geometries in an array into a single geometry.
pub trait UnaryUnion {
    fn unary_union(&self) -> Result<Geometry>;
}

/// Union of many multipolygons, merging neighbours pairwise until one is left.
pub(crate) fn cascaded_union(mut polygons: Vec<geo::MultiPolygon>) -> geo::MultiPolygon {
    while polygons.len() > 1 {
        let mut merged = Vec::with_capacity(polygons.len() / 2 + 1);
        let mut iter = polygons.into_iter();
        while let Some(a) = iter.next() {
            match iter.next() {
                Some(b) => merged.push(a.union(&b)),
                None => merged.push(a),
            }
        }
        polygons = merged;
    }
    polygons
        .pop()
        .unwrap_or_else(|| geo::MultiPolygon::new(vec![]))
}

impl UnaryUnion for GeometryArray {
    fn unary_union(&self) -> Result<Geometry> {
        let polygons = self
            .iter()
            .flatten()
            .map(to_multi_polygon)
            .collect::<Result<Vec<_>>>()?;
        Ok(from_multi_polygon(cascaded_union(polygons)))
    }
}
