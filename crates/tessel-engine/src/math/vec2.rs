use bytemuck::{Pod, Zeroable};

use super::Vector;

/// 2-component `f32` vector.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    pub fn add_scalar(&mut self, value: f32) -> &mut Self {
        self.x += value;
        self.y += value;
        self
    }

    pub fn add_vec(&mut self, other: Vec2) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    pub fn sub_scalar(&mut self, value: f32) -> &mut Self {
        self.x -= value;
        self.y -= value;
        self
    }

    pub fn sub_vec(&mut self, other: Vec2) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    pub fn mul_scalar(&mut self, value: f32) -> &mut Self {
        self.x *= value;
        self.y *= value;
        self
    }

    pub fn mul_vec(&mut self, other: Vec2) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self
    }

    pub fn div_scalar(&mut self, value: f32) -> &mut Self {
        self.x /= value;
        self.y /= value;
        self
    }

    pub fn div_vec(&mut self, other: Vec2) -> &mut Self {
        self.x /= other.x;
        self.y /= other.y;
        self
    }
}

impl Vector for Vec2 {
    const LEN: usize = 2;

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
        self
    }

    fn set_normalized(&mut self) -> &mut Self {
        let length = self.length();
        self.div_scalar(length)
    }
}

impl_vector_ops!(Vec2);

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_calls_apply_left_to_right() {
        let mut v = Vec2::new(1.0, 2.0);
        v.add_scalar(1.0).mul_scalar(2.0).sub_vec(Vec2::new(1.0, 1.0));
        assert_eq!(v, Vec2::new(3.0, 5.0));
    }

    #[test]
    fn operators_match_methods() {
        let a = Vec2::new(3.0, -4.0);
        let b = Vec2::new(0.5, 2.0);
        assert_eq!(a + b, Vec2::new(3.5, -2.0));
        assert_eq!(a - b, Vec2::new(2.5, -6.0));
        assert_eq!(a * b, Vec2::new(1.5, -8.0));
        assert_eq!(a / b, Vec2::new(6.0, -2.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, -8.0));
        assert_eq!(-a, Vec2::new(-3.0, 4.0));
    }

    #[test]
    fn length_of_3_4_is_5() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn normalize_zero_length_is_nan() {
        let mut v = Vec2::zero();
        v.set_normalized();
        assert!(v.x.is_nan() && v.y.is_nan());
    }

    #[test]
    fn try_normalize_rejects_zero_length() {
        let mut v = Vec2::zero();
        assert!(v.try_set_normalized().is_err());
        assert_eq!(v, Vec2::zero());
    }

    #[test]
    fn divide_by_zero_scalar_is_infinite() {
        let mut v = Vec2::new(1.0, -1.0);
        v.div_scalar(0.0);
        assert_eq!(v, Vec2::new(f32::INFINITY, f32::NEG_INFINITY));
    }
}
