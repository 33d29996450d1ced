use bytemuck::{Pod, Zeroable};

use super::Vector;

/// 3-component `f32` vector.
///
/// Also used as the parameter type of the [`Mat4`](super::Mat4) transform builders, where
/// rotations are Euler angles in degrees.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const UNIT_X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const UNIT_Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const UNIT_Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product. Returns a new vector; `self` is unchanged.
    #[inline]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            other.x * self.z - other.z * self.x,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn add_scalar(&mut self, value: f32) -> &mut Self {
        self.x += value;
        self.y += value;
        self.z += value;
        self
    }

    pub fn add_vec(&mut self, other: Vec3) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self
    }

    pub fn sub_scalar(&mut self, value: f32) -> &mut Self {
        self.x -= value;
        self.y -= value;
        self.z -= value;
        self
    }

    pub fn sub_vec(&mut self, other: Vec3) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self
    }

    pub fn mul_scalar(&mut self, value: f32) -> &mut Self {
        self.x *= value;
        self.y *= value;
        self.z *= value;
        self
    }

    pub fn mul_vec(&mut self, other: Vec3) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
        self
    }

    pub fn div_scalar(&mut self, value: f32) -> &mut Self {
        self.x /= value;
        self.y /= value;
        self.z /= value;
        self
    }

    pub fn div_vec(&mut self, other: Vec3) -> &mut Self {
        self.x /= other.x;
        self.y /= other.y;
        self.z /= other.z;
        self
    }
}

impl Vector for Vec3 {
    const LEN: usize = 3;

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
        self
    }

    #[cfg(not(feature = "legacy_quirks"))]
    fn set_normalized(&mut self) -> &mut Self {
        let length = self.length();
        self.div_scalar(length)
    }

    /// Bit-compatible with older hosts: `y` is divided twice, `z` never.
    #[cfg(feature = "legacy_quirks")]
    fn set_normalized(&mut self) -> &mut Self {
        let length = self.length();
        self.x /= length;
        self.y /= length;
        self.y /= length;
        self
    }
}

impl_vector_ops!(Vec3);

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}
