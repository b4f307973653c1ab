//! Vectorized geometry constructors.
//!
//! Coordinate operands broadcast against each other like the operands of any other operation
//! (see [`broadcasting`][crate::algorithm::broadcasting]); a null in any operand gives a null
//! geometry.

use arrow_array::types::Float64Type;

use crate::algorithm::broadcasting::{broadcast_len, Broadcast, BroadcastablePrimitive};
use crate::algorithm::native::binary::{try_binary, try_ternary};
use crate::array::GeometryArray;
use crate::error::Result;
use crate::scalar::Geometry;

/// Create Points from separate x, y and optional z values.
///
/// ```
/// use geovec::construction::points;
///
/// let arr = points(2.0, vec![0.0, 1.0, 2.0], None).unwrap();
/// assert_eq!(arr.len(), 3);
/// assert_eq!(arr.to_wkt().value(2), "POINT (2 2)");
/// ```
pub fn points(
    x: impl Into<BroadcastablePrimitive<Float64Type>>,
    y: impl Into<BroadcastablePrimitive<Float64Type>>,
    z: Option<BroadcastablePrimitive<Float64Type>>,
) -> Result<GeometryArray> {
    let x = x.into();
    let y = y.into();
    let geoms = match z {
        Some(z) => try_ternary(&x, &y, &z, |x, y, z| Geometry::point([x, y, z]).map(Some))?,
        None => try_binary(&x, &y, |x, y| Geometry::point([x, y]).map(Some))?,
    };
    Ok(geoms.into())
}

/// Create one Point per coordinate row. Each row must hold 2 (XY) or 3 (XYZ) values.
pub fn points_from_coords<C: AsRef<[f64]>>(coords: &[C]) -> Result<GeometryArray> {
    coords
        .iter()
        .map(|coord| Geometry::point(coord).map(Some))
        .collect::<Result<Vec<_>>>()
        .map(GeometryArray::new)
}

/// Create rectangular Polygons from their bounds.
///
/// Each polygon is counter-clockwise, starting at `(xmax, ymin)`.
pub fn boxes(
    xmin: impl Into<BroadcastablePrimitive<Float64Type>>,
    ymin: impl Into<BroadcastablePrimitive<Float64Type>>,
    xmax: impl Into<BroadcastablePrimitive<Float64Type>>,
    ymax: impl Into<BroadcastablePrimitive<Float64Type>>,
) -> Result<GeometryArray> {
    let bounds = [xmin.into(), ymin.into(), xmax.into(), ymax.into()];
    let lens: Vec<Option<usize>> = bounds.iter().map(Broadcast::broadcast_len).collect();
    let len = broadcast_len(&lens)?;

    Ok((0..len)
        .map(|i| {
            let [xmin, ymin, xmax, ymax] = [0, 1, 2, 3].map(|b| bounds[b].value_at(i));
            Some(Geometry::rect(xmin?, ymin?, xmax?, ymax?))
        })
        .collect())
}
