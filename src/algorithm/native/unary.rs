use arrow_array::types::ArrowPrimitiveType;
use arrow_array::{BooleanArray, PrimitiveArray};
use arrow_buffer::{ArrowNativeType, BooleanBufferBuilder, BufferBuilder};

use crate::array::GeometryArray;
use crate::error::Result;
use crate::scalar::Geometry;

/// Element-wise kernels over a [`GeometryArray`].
///
/// Null slots in the input are null in the output and `op` is never called for them.
pub trait Unary {
    // Note: This is derived from arrow-rs here:
    // https://github.com/apache/arrow-rs/blob/3ed7cc61d4157263ef2ab5c2d12bc7890a5315b3/arrow-array/src/array/primitive_array.rs#L753-L767
    fn unary_primitive<F, O>(&self, op: F) -> PrimitiveArray<O>
    where
        O: ArrowPrimitiveType,
        F: Fn(&Geometry) -> O::Native;

    fn unary_boolean<F>(&self, op: F) -> BooleanArray
    where
        F: Fn(&Geometry) -> bool;

    fn unary_geometry<F>(&self, op: F) -> GeometryArray
    where
        F: Fn(&Geometry) -> Option<Geometry>;

    fn try_unary_geometry<F>(&self, op: F) -> Result<GeometryArray>
    where
        F: Fn(&Geometry) -> Result<Option<Geometry>>;
}

impl Unary for GeometryArray {
    fn unary_primitive<F, O>(&self, op: F) -> PrimitiveArray<O>
    where
        O: ArrowPrimitiveType,
        F: Fn(&Geometry) -> O::Native,
    {
        let nulls = self.nulls();
        let mut builder = BufferBuilder::<O::Native>::new(self.len());
        self.iter().for_each(|maybe_g| match maybe_g {
            Some(geom) => builder.append(op(geom)),
            None => builder.append(O::Native::usize_as(0)),
        });
        let buffer = builder.finish();
        PrimitiveArray::new(buffer.into(), nulls)
    }

    fn unary_boolean<F>(&self, op: F) -> BooleanArray
    where
        F: Fn(&Geometry) -> bool,
    {
        let nulls = self.nulls();
        let mut builder = BooleanBufferBuilder::new(self.len());
        self.iter()
            .for_each(|maybe_g| builder.append(maybe_g.map_or(false, &op)));
        BooleanArray::new(builder.finish(), nulls)
    }

    fn unary_geometry<F>(&self, op: F) -> GeometryArray
    where
        F: Fn(&Geometry) -> Option<Geometry>,
    {
        self.iter().map(|maybe_g| maybe_g.and_then(&op)).collect()
    }

    fn try_unary_geometry<F>(&self, op: F) -> Result<GeometryArray>
    where
        F: Fn(&Geometry) -> Result<Option<Geometry>>,
    {
        let geoms = self
            .iter()
            .map(|maybe_g| maybe_g.map_or(Ok(None), &op))
            .collect::<Result<Vec<_>>>()?;
        Ok(geoms.into())
    }
}
