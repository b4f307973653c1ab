//! Conversion of geometries to and from text formats.

pub mod geojson;
mod wkt;

/// Reads the Z values of a geometry in coordinate order.
pub(crate) struct ZCursor<'a> {
    z: Option<&'a [f64]>,
    offset: usize,
}

impl<'a> ZCursor<'a> {
    pub(crate) fn new(z: Option<&'a [f64]>) -> Self {
        Self { z, offset: 0 }
    }

    /// The Z value of the next coordinate, or `None` for a two-dimensional geometry.
    pub(crate) fn next_z(&mut self) -> Option<f64> {
        let z = self.z?.get(self.offset).copied();
        self.offset += 1;
        z
    }
}
