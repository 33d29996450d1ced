use bytemuck::Pod;

use super::{FloatBuffer, MathError};

/// Capability shared by the fixed-size vector types.
///
/// All mutators work in place and hand back `&mut Self` so calls chain left to right:
/// `v.set_negated().set_normalized()`.
pub trait Vector: Pod {
    /// Number of components.
    const LEN: usize;

    fn length_squared(&self) -> f32;

    #[inline]
    fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    fn set_zero(&mut self) -> &mut Self;

    fn set_negated(&mut self) -> &mut Self;

    /// Divides every component by the length.
    ///
    /// A zero-length vector turns into `NaN`s. Use
    /// [`try_set_normalized`](Self::try_set_normalized) to reject that case.
    fn set_normalized(&mut self) -> &mut Self;

    /// Like [`set_normalized`](Self::set_normalized), but leaves the vector untouched
    /// and reports [`MathError::ZeroLength`] when the length is zero or not finite.
    fn try_set_normalized(&mut self) -> Result<&mut Self, MathError> {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            return Err(MathError::ZeroLength { length });
        }
        Ok(self.set_normalized())
    }

    /// Components in declaration order.
    #[inline]
    fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(core::slice::from_ref(self))
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.as_floats().iter().all(|c| c.is_finite())
    }

    /// Writes the components at the buffer position, then flips the buffer.
    fn store(&self, buf: &mut FloatBuffer) -> Result<&Self, MathError> {
        buf.put_slice(self.as_floats())?;
        buf.flip();
        Ok(self)
    }
}

/// Capability shared by the fixed-size square matrix types.
///
/// Elements are named `mCR` (column `C`, row `R`) and laid out column-major, so
/// [`as_floats`](Self::as_floats) and [`store`](Self::store) produce the order
/// GPU APIs expect.
pub trait Matrix: Pod {
    /// Number of rows (and columns).
    const DIM: usize;

    fn set_zero(&mut self) -> &mut Self;

    fn set_negated(&mut self) -> &mut Self;

    fn set_identity(&mut self) -> &mut Self;

    fn set_transposed(&mut self) -> &mut Self;

    /// Elements in column-major order.
    #[inline]
    fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(core::slice::from_ref(self))
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.as_floats().iter().all(|e| e.is_finite())
    }

    /// Writes the elements column-major at the buffer position, then flips the buffer.
    fn store(&self, buf: &mut FloatBuffer) -> Result<&Self, MathError> {
        buf.put_slice(self.as_floats())?;
        buf.flip();
        Ok(self)
    }
}
