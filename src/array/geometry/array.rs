use arrow_array::{Array, StringArray};
use arrow_buffer::NullBuffer;

use crate::scalar::Geometry;

/// An ordered, fixed-length array of geometry handles, where any slot may be null.
///
/// All vectorized operations in this crate take and return these arrays. Slots hold
/// [`Geometry`] handles, so cloning an array clones reference counts, not coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryArray {
    geoms: Vec<Option<Geometry>>,
}

impl GeometryArray {
    /// Create a new array from optional geometries, where `None` is a null slot.
    pub fn new(geoms: Vec<Option<Geometry>>) -> Self {
        Self { geoms }
    }

    /// The number of slots in this array, including nulls.
    pub fn len(&self) -> usize {
        self.geoms.len()
    }

    /// Whether this array has no slots.
    pub fn is_empty(&self) -> bool {
        self.geoms.is_empty()
    }

    /// Access the geometry at slot `i`, or `None` if the slot is null.
    ///
    /// # Panics
    ///
    /// Panics iff `i >= self.len()`.
    pub fn get(&self, i: usize) -> Option<&Geometry> {
        self.geoms[i].as_ref()
    }

    /// Returns whether slot `i` is null.
    ///
    /// # Panics
    ///
    /// Panics iff `i >= self.len()`.
    pub fn is_null(&self, i: usize) -> bool {
        self.geoms[i].is_none()
    }

    /// The number of null slots.
    pub fn null_count(&self) -> usize {
        self.geoms.iter().filter(|g| g.is_none()).count()
    }

    /// The validity of this array as an Arrow [`NullBuffer`], or `None` if no slot is null.
    pub fn nulls(&self) -> Option<NullBuffer> {
        if self.null_count() == 0 {
            return None;
        }
        let validity: Vec<bool> = self.geoms.iter().map(Option::is_some).collect();
        Some(NullBuffer::from(validity))
    }

    /// Iterate over the slots of this array.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Geometry>> + '_ {
        self.geoms.iter().map(Option::as_ref)
    }

    /// A slice of this array. Only the handles are cloned, not their coordinates.
    ///
    /// # Panics
    ///
    /// Panics iff `offset + length > self.len()`.
    pub fn slice(&self, offset: usize, length: usize) -> Self {
        Self::new(self.geoms[offset..offset + length].to_vec())
    }

    /// Consume this array, returning its slots.
    pub fn into_inner(self) -> Vec<Option<Geometry>> {
        self.geoms
    }

    /// Render each geometry as WKT, keeping nulls.
    pub fn to_wkt(&self) -> StringArray {
        let array: StringArray = self
            .iter()
            .map(|maybe_g| maybe_g.map(|g| g.to_string()))
            .collect();
        debug_assert_eq!(array.null_count(), self.null_count());
        array
    }
}

impl From<Vec<Option<Geometry>>> for GeometryArray {
    fn from(value: Vec<Option<Geometry>>) -> Self {
        Self::new(value)
    }
}

impl From<Vec<Geometry>> for GeometryArray {
    fn from(value: Vec<Geometry>) -> Self {
        value.into_iter().map(Some).collect()
    }
}

impl From<Geometry> for GeometryArray {
    fn from(value: Geometry) -> Self {
        Self::new(vec![Some(value)])
    }
}

impl FromIterator<Option<Geometry>> for GeometryArray {
    fn from_iter<T: IntoIterator<Item = Option<Geometry>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geoms;

    #[test]
    fn nulls_follow_slots() {
        let arr = GeometryArray::new(vec![Some(geoms::point()), None, Some(geoms::polygon())]);
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.null_count(), 1);
        assert!(arr.is_null(1));

        let nulls = arr.nulls().unwrap();
        assert!(nulls.is_valid(0));
        assert!(nulls.is_null(1));
        assert!(nulls.is_valid(2));
    }

    #[test]
    fn no_null_buffer_without_nulls() {
        let arr: GeometryArray = vec![geoms::point(), geoms::point_z()].into();
        assert!(arr.nulls().is_none());
    }

    #[test]
    fn slice_shares_handles() {
        let arr: GeometryArray = vec![geoms::point(), geoms::line_string(), geoms::polygon()].into();
        let sliced = arr.slice(1, 2);
        assert_eq!(sliced.len(), 2);
        assert_eq!(sliced.get(0), Some(&geoms::line_string()));
    }

    #[test]
    fn wkt_keeps_nulls() {
        let arr = GeometryArray::new(vec![Some(geoms::point()), None]);
        let wkt = arr.to_wkt();
        assert_eq!(wkt.value(0), "POINT (2 2)");
        assert!(wkt.is_null(1));
    }
}
