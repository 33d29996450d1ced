use bytemuck::{Pod, Zeroable};

use super::Matrix;

/// 2x2 `f32` matrix, column-major. `mCR` is column `C`, row `R`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat2 {
    pub m00: f32,
    pub m01: f32,
    pub m10: f32,
    pub m11: f32,
}

impl Mat2 {
    /// Elements in column-major order.
    #[inline]
    pub const fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self { m00, m01, m10, m11 }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        bytemuck::cast(self)
    }

    #[inline]
    pub fn from_array(a: [f32; 4]) -> Self {
        bytemuck::cast(a)
    }

    pub fn add_mat(&mut self, other: &Mat2) -> &mut Self {
        self.m00 += other.m00;
        self.m01 += other.m01;
        self.m10 += other.m10;
        self.m11 += other.m11;
        self
    }

    pub fn sub_mat(&mut self, other: &Mat2) -> &mut Self {
        self.m00 -= other.m00;
        self.m01 -= other.m01;
        self.m10 -= other.m10;
        self.m11 -= other.m11;
        self
    }

    /// `self = self × other`.
    pub fn multiply(&mut self, other: &Mat2) -> &mut Self {
        let a = *self;
        self.m00 = a.m00 * other.m00 + a.m10 * other.m01;
        self.m01 = a.m01 * other.m00 + a.m11 * other.m01;
        self.m10 = a.m00 * other.m10 + a.m10 * other.m11;
        self.m11 = a.m01 * other.m10 + a.m11 * other.m11;
        self
    }
}

impl Matrix for Mat2 {
    const DIM: usize = 2;

    fn set_zero(&mut self) -> &mut Self {
        *self = Self::zero();
        self
    }

    fn set_negated(&mut self) -> &mut Self {
        self.m00 = -self.m00;
        self.m01 = -self.m01;
        self.m10 = -self.m10;
        self.m11 = -self.m11;
        self
    }

    fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    #[cfg(not(feature = "legacy_quirks"))]
    fn set_transposed(&mut self) -> &mut Self {
        core::mem::swap(&mut self.m01, &mut self.m10);
        self
    }

    /// Historical behaviour kept behind `legacy_quirks`: no swap, the matrix is unchanged.
    #[cfg(feature = "legacy_quirks")]
    fn set_transposed(&mut self) -> &mut Self {
        self
    }
}

impl_matrix_ops!(Mat2);
