use arrow_array::types::Int32Type;
use arrow_array::Int32Array;

use crate::algorithm::native::Unary;
use crate::array::GeometryArray;
use crate::scalar::Geometry;

/// The number of points in a LineString or LinearRing.
///
/// Every other geometry type has zero points by this definition; use [`NumCoordinates`] to count
/// all coordinates.
pub trait NumPoints {
    type Output;

    fn get_num_points(&self) -> Self::Output;
}

impl NumPoints for Geometry {
    type Output = usize;

    fn get_num_points(&self) -> usize {
        if self.geom_type().is_linear() {
            self.num_coords()
        } else {
            0
        }
    }
}

impl NumPoints for GeometryArray {
    type Output = Int32Array;

    fn get_num_points(&self) -> Int32Array {
        self.unary_primitive::<_, Int32Type>(|geom| geom.get_num_points() as i32)
    }
}

/// The total number of coordinates of a geometry, including every ring and part.
pub trait NumCoordinates {
    type Output;

    fn get_num_coordinates(&self) -> Self::Output;
}

impl NumCoordinates for Geometry {
    type Output = usize;

    fn get_num_coordinates(&self) -> usize {
        self.num_coords()
    }
}

impl NumCoordinates for GeometryArray {
    type Output = Int32Array;

    fn get_num_coordinates(&self) -> Int32Array {
        self.unary_primitive::<_, Int32Type>(|geom| geom.num_coords() as i32)
    }
}

/// The number of parts of a multi geometry or collection.
///
/// Single geometries count as one part, or zero when empty.
pub trait NumGeometries {
    type Output;

    fn get_num_geometries(&self) -> Self::Output;
}

impl NumGeometries for Geometry {
    type Output = usize;

    fn get_num_geometries(&self) -> usize {
        if self.geom_type().is_collection() {
            self.parts().len()
        } else if self.is_empty() {
            0
        } else {
            1
        }
    }
}

impl NumGeometries for GeometryArray {
    type Output = Int32Array;

    fn get_num_geometries(&self) -> Int32Array {
        self.unary_primitive::<_, Int32Type>(|geom| geom.get_num_geometries() as i32)
    }
}
