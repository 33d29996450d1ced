use bytemuck::{Pod, Zeroable};

use super::{Vec3, Vector};

/// 4-component `f32` vector, typically a homogeneous point (`w = 1`) or direction (`w = 0`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn point(p: Vec3) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }

    #[inline]
    pub const fn direction(d: Vec3) -> Self {
        Self::new(d.x, d.y, d.z, 0.0)
    }

    #[inline]
    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn dot(self, other: Vec4) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn add_scalar(&mut self, value: f32) -> &mut Self {
        self.x += value;
        self.y += value;
        self.z += value;
        self.w += value;
        self
    }

    pub fn add_vec(&mut self, other: Vec4) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self.w += other.w;
        self
    }

    pub fn sub_scalar(&mut self, value: f32) -> &mut Self {
        self.x -= value;
        self.y -= value;
        self.z -= value;
        self.w -= value;
        self
    }

    pub fn sub_vec(&mut self, other: Vec4) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self.w -= other.w;
        self
    }

    pub fn mul_scalar(&mut self, value: f32) -> &mut Self {
        self.x *= value;
        self.y *= value;
        self.z *= value;
        self.w *= value;
        self
    }

    pub fn mul_vec(&mut self, other: Vec4) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
        self.w *= other.w;
        self
    }

    pub fn div_scalar(&mut self, value: f32) -> &mut Self {
        self.x /= value;
        self.y /= value;
        self.z /= value;
        self.w /= value;
        self
    }

    pub fn div_vec(&mut self, other: Vec4) -> &mut Self {
        self.x /= other.x;
        self.y /= other.y;
        self.z /= other.z;
        self.w /= other.w;
        self
    }
}

impl Vector for Vec4 {
    const LEN: usize = 4;

    #[inline]
    fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    fn set_zero(&mut self) -> &mut Self {
        *self = Self::zero();
        self
    }

    fn set_negated(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self.w = -self.w;
        self
    }

    fn set_normalized(&mut self) -> &mut Self {
        let length = self.length();
        self.div_scalar(length)
    }
}

impl_vector_ops!(Vec4);

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::FloatBuffer;

    #[test]
    fn normalize_includes_w() {
        let mut v = Vec4::new(1.0, 1.0, 1.0, 1.0);
        v.set_normalized();
        assert_eq!(v, Vec4::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn set_zero_after_arithmetic() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        v.mul_vec(Vec4::new(2.0, 2.0, 2.0, 2.0)).set_zero();
        assert_eq!(v, Vec4::zero());
    }

    #[test]
    fn store_writes_four_floats() {
        let mut buf = FloatBuffer::allocate(4);
        Vec4::new(1.0, 2.0, 3.0, 4.0).store(&mut buf).unwrap();
        assert_eq!(buf.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(buf.position(), 0);
    }

    #[test]
    fn point_and_direction_set_w() {
        let p = Vec4::point(Vec3::ONE);
        let d = Vec4::direction(Vec3::ONE);
        assert_eq!(p.w, 1.0);
        assert_eq!(d.w, 0.0);
        assert_eq!(p.xyz(), d.xyz());
    }
}
