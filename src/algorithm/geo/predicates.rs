//! Binary spatial predicates.
//!
//! Every predicate is a trait parameterized by its right-hand side, implemented for each
//! combination of [`Geometry`] and [`GeometryArray`]. Two scalars give a `bool`; any array operand
//! gives a [`BooleanArray`] after broadcasting, with nulls wherever either operand is null.
//!
//! Empty geometries are disjoint from everything, so every other predicate is `false` for them,
//! except that two empty geometries are equal. Empty parts inside multi geometries and
//! collections are ignored.

use arrow_array::BooleanArray;
use geo::relate::IntersectionMatrix;
use geo::{Intersects as _Intersects, Relate};

use crate::algorithm::broadcasting::BroadcastableGeometry;
use crate::algorithm::geo::utils::without_empty_parts;
use crate::algorithm::native::binary::binary;
use crate::array::GeometryArray;
use crate::error::Result;
use crate::scalar::Geometry;

fn relate_predicate(a: &Geometry, b: &Geometry, matrix_cb: fn(&IntersectionMatrix) -> bool) -> bool {
    match (without_empty_parts(a.as_geo()), without_empty_parts(b.as_geo())) {
        (Some(a), Some(b)) => matrix_cb(&a.relate(&b)),
        _ => false,
    }
}

fn equals(a: &Geometry, b: &Geometry) -> bool {
    if a.is_empty() && b.is_empty() {
        return true;
    }
    relate_predicate(a, b, IntersectionMatrix::is_equal_topo)
}

fn intersects(a: &Geometry, b: &Geometry) -> bool {
    !a.is_empty() && !b.is_empty() && a.as_geo().intersects(b.as_geo())
}

fn disjoint(a: &Geometry, b: &Geometry) -> bool {
    !intersects(a, b)
}

fn predicate_boolean(
    a: BroadcastableGeometry,
    b: BroadcastableGeometry,
    op: impl Fn(&Geometry, &Geometry) -> bool,
) -> Result<BooleanArray> {
    let values = binary(&a, &b, |a, b| op(a, b))?;
    Ok(BooleanArray::from(values))
}

macro_rules! predicate {
    ($(#[$attr:meta])* $trait_name:ident, $method:ident, $op:expr) => {
        $(#[$attr])*
        pub trait $trait_name<Rhs = Self> {
            type Output;

            fn $method(&self, rhs: &Rhs) -> Self::Output;
        }

        impl $trait_name for Geometry {
            type Output = bool;

            fn $method(&self, rhs: &Self) -> bool {
                $op(self, rhs)
            }
        }

        impl $trait_name<GeometryArray> for Geometry {
            type Output = Result<BooleanArray>;

            fn $method(&self, rhs: &GeometryArray) -> Self::Output {
                predicate_boolean(self.into(), rhs.into(), $op)
            }
        }

        impl $trait_name<Geometry> for GeometryArray {
            type Output = Result<BooleanArray>;

            fn $method(&self, rhs: &Geometry) -> Self::Output {
                predicate_boolean(self.into(), rhs.into(), $op)
            }
        }

        impl $trait_name for GeometryArray {
            type Output = Result<BooleanArray>;

            fn $method(&self, rhs: &Self) -> Self::Output {
                predicate_boolean(self.into(), rhs.into(), $op)
            }
        }
    };
}

predicate!(
    /// Whether the two geometries share no point at all.
    ///
    /// ```
    /// use geovec::algorithm::geo::Disjoint;
    /// use geovec::scalar::Geometry;
    ///
    /// let point = Geometry::point([0.0, 0.0]).unwrap();
    /// let square = Geometry::rect(2.0, 2.0, 4.0, 4.0);
    /// assert!(point.disjoint(&square));
    /// ```
    Disjoint,
    disjoint,
    disjoint
);

predicate!(
    /// Whether the two geometries share at least one point. The inverse of [`Disjoint`].
    Intersects,
    intersects,
    intersects
);

predicate!(
    /// Whether the geometries share boundary points but no interior points.
    Touches,
    touches,
    |a: &Geometry, b: &Geometry| relate_predicate(a, b, IntersectionMatrix::is_touches)
);

predicate!(
    /// Whether `self` lies in the interior of `rhs`: no point of `self` is outside `rhs` and the
    /// interiors intersect.
    ///
    /// `a.within(b)` iff `b.contains(a)`.
    Within,
    within,
    |a: &Geometry, b: &Geometry| relate_predicate(a, b, IntersectionMatrix::is_within)
);

predicate!(
    /// Whether no point of `rhs` lies outside `self` and the interiors intersect.
    Contains,
    contains,
    |a: &Geometry, b: &Geometry| relate_predicate(a, b, IntersectionMatrix::is_contains)
);

predicate!(
    /// Whether the geometries share some but not all interior points, and the dimension of the
    /// shared interior is lower than the highest input dimension.
    Crosses,
    crosses,
    |a: &Geometry, b: &Geometry| relate_predicate(a, b, IntersectionMatrix::is_crosses)
);

predicate!(
    /// Whether the geometries have the same dimension and share some but not all points.
    Overlaps,
    overlaps,
    |a: &Geometry, b: &Geometry| relate_predicate(a, b, IntersectionMatrix::is_overlaps)
);

predicate!(
    /// Whether no point of `rhs` lies outside `self`. Unlike [`Contains`], boundary contact alone
    /// is enough.
    Covers,
    covers,
    |a: &Geometry, b: &Geometry| relate_predicate(a, b, IntersectionMatrix::is_covers)
);

predicate!(
    /// Whether no point of `self` lies outside `rhs`.
    ///
    /// `a.covered_by(b)` iff `b.covers(a)`.
    CoveredBy,
    covered_by,
    |a: &Geometry, b: &Geometry| relate_predicate(a, b, IntersectionMatrix::is_coveredby)
);

predicate!(
    /// Topological equality: the geometries cover the same point set, regardless of vertex order
    /// or redundant vertices. Two empty geometries are equal.
    Equals,
    equals,
    equals
);
