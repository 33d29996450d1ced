use bytemuck::{Pod, Zeroable};

use super::Matrix;

/// 3x3 `f32` matrix, column-major. `mCR` is column `C`, row `R`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat3 {
    pub m00: f32,
    pub m01: f32,
    pub m02: f32,
    pub m10: f32,
    pub m11: f32,
    pub m12: f32,
    pub m20: f32,
    pub m21: f32,
    pub m22: f32,
}

impl Mat3 {
    /// Elements in column-major order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub const fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Self {
        Self { m00, m01, m02, m10, m11, m12, m20, m21, m22 }
    }

    #[rustfmt::skip]
    #[inline]
    pub const fn identity() -> Self {
        Self::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::from_cols([[0.0; 3]; 3])
    }

    #[rustfmt::skip]
    #[inline]
    pub const fn from_cols(c: [[f32; 3]; 3]) -> Self {
        Self::new(
            c[0][0], c[0][1], c[0][2],
            c[1][0], c[1][1], c[1][2],
            c[2][0], c[2][1], c[2][2],
        )
    }

    #[inline]
    pub fn to_cols(self) -> [[f32; 3]; 3] {
        bytemuck::cast(self)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 9] {
        bytemuck::cast(self)
    }

    #[inline]
    pub fn from_array(a: [f32; 9]) -> Self {
        bytemuck::cast(a)
    }

    pub fn add_mat(&mut self, other: &Mat3) -> &mut Self {
        let mut a = self.to_array();
        for (e, o) in a.iter_mut().zip(other.to_array()) {
            *e += o;
        }
        *self = Self::from_array(a);
        self
    }

    pub fn sub_mat(&mut self, other: &Mat3) -> &mut Self {
        let mut a = self.to_array();
        for (e, o) in a.iter_mut().zip(other.to_array()) {
            *e -= o;
        }
        *self = Self::from_array(a);
        self
    }

    /// `self = self × other`.
    pub fn multiply(&mut self, other: &Mat3) -> &mut Self {
        let a = self.to_cols();
        let b = other.to_cols();
        let mut out = [[0.0f32; 3]; 3];
        for (c, col) in out.iter_mut().enumerate() {
            for (r, e) in col.iter_mut().enumerate() {
                *e = a[0][r] * b[c][0] + a[1][r] * b[c][1] + a[2][r] * b[c][2];
            }
        }
        *self = Self::from_cols(out);
        self
    }
}

impl Matrix for Mat3 {
    const DIM: usize = 3;

    fn set_zero(&mut self) -> &mut Self {
        *self = Self::zero();
        self
    }

    fn set_negated(&mut self) -> &mut Self {
        let mut a = self.to_array();
        for e in &mut a {
            *e = -*e;
        }
        *self = Self::from_array(a);
        self
    }

    fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    fn set_transposed(&mut self) -> &mut Self {
        core::mem::swap(&mut self.m01, &mut self.m10);
        core::mem::swap(&mut self.m02, &mut self.m20);
        core::mem::swap(&mut self.m12, &mut self.m21);
        self
    }
}

impl_matrix_ops!(Mat3);
