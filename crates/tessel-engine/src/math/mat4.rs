use bytemuck::{Pod, Zeroable};

use super::{MathError, Matrix, Vec3, Vec4};

/// 4x4 `f32` matrix, column-major. `mCR` is column `C`, row `R`.
///
/// Columns 0..3 are the basis (local X, Y, Z axes); column 3 (`m30..m33`) is the
/// translation. Besides plain arithmetic, this type builds model, view and
/// OpenGL-style perspective matrices in place.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub m00: f32,
    pub m01: f32,
    pub m02: f32,
    pub m03: f32,
    pub m10: f32,
    pub m11: f32,
    pub m12: f32,
    pub m13: f32,
    pub m20: f32,
    pub m21: f32,
    pub m22: f32,
    pub m23: f32,
    pub m30: f32,
    pub m31: f32,
    pub m32: f32,
    pub m33: f32,
}

impl Mat4 {
    /// Elements in column-major order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            m00, m01, m02, m03,
            m10, m11, m12, m13,
            m20, m21, m22, m23,
            m30, m31, m32, m33,
        }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::from_cols([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::from_cols([[0.0; 4]; 4])
    }

    #[inline]
    pub const fn from_cols(c: [[f32; 4]; 4]) -> Self {
        Self {
            m00: c[0][0],
            m01: c[0][1],
            m02: c[0][2],
            m03: c[0][3],
            m10: c[1][0],
            m11: c[1][1],
            m12: c[1][2],
            m13: c[1][3],
            m20: c[2][0],
            m21: c[2][1],
            m22: c[2][2],
            m23: c[2][3],
            m30: c[3][0],
            m31: c[3][1],
            m32: c[3][2],
            m33: c[3][3],
        }
    }

    #[inline]
    pub fn to_cols(self) -> [[f32; 4]; 4] {
        bytemuck::cast(self)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 16] {
        bytemuck::cast(self)
    }

    #[inline]
    pub fn from_array(a: [f32; 16]) -> Self {
        bytemuck::cast(a)
    }

    pub fn add_mat(&mut self, other: &Mat4) -> &mut Self {
        let mut a = self.to_array();
        for (e, o) in a.iter_mut().zip(other.to_array()) {
            *e += o;
        }
        *self = Self::from_array(a);
        self
    }

    pub fn sub_mat(&mut self, other: &Mat4) -> &mut Self {
        let mut a = self.to_array();
        for (e, o) in a.iter_mut().zip(other.to_array()) {
            *e -= o;
        }
        *self = Self::from_array(a);
        self
    }

    /// `self = self × other`.
    pub fn multiply(&mut self, other: &Mat4) -> &mut Self {
        let a = self.to_cols();
        let b = other.to_cols();
        let mut out = [[0.0f32; 4]; 4];
        for (c, col) in out.iter_mut().enumerate() {
            for (r, e) in col.iter_mut().enumerate() {
                *e = a[0][r] * b[c][0]
                    + a[1][r] * b[c][1]
                    + a[2][r] * b[c][2]
                    + a[3][r] * b[c][3];
            }
        }
        *self = Self::from_cols(out);
        self
    }

    /// Applies the matrix to a column vector.
    pub fn transform(&self, v: Vec4) -> Vec4 {
        let m = self.to_cols();
        let row = |r: usize| m[0][r] * v.x + m[1][r] * v.y + m[2][r] * v.z + m[3][r] * v.w;
        Vec4::new(row(0), row(1), row(2), row(3))
    }

    // ── transform building ────────────────────────────────────────────────

    /// Moves the origin by `t` measured along the current basis columns, so an
    /// already rotated or scaled matrix translates in its own local frame.
    pub fn translate(&mut self, t: Vec3) -> &mut Self {
        self.m30 += self.m00 * t.x + self.m10 * t.y + self.m20 * t.z;
        self.m31 += self.m01 * t.x + self.m11 * t.y + self.m21 * t.z;
        self.m32 += self.m02 * t.x + self.m12 * t.y + self.m22 * t.z;
        self.m33 += self.m03 * t.x + self.m13 * t.y + self.m23 * t.z;
        self
    }

    /// Rotates the basis by `angle_degrees` around `axis` (Rodrigues).
    ///
    /// `axis` must already be unit length; it is not normalized here. Only the three
    /// basis columns change; the translation column stays where it is.
    pub fn rotate(&mut self, angle_degrees: f32, axis: Vec3) -> &mut Self {
        let radians = f64::from(angle_degrees).to_radians();
        let cosine = radians.cos() as f32;
        let sine = radians.sin() as f32;
        let omc = 1.0 - cosine;

        let Vec3 { x, y, z } = axis;
        let (xy, yz, xz) = (x * y, y * z, x * z);
        let (xs, ys, zs) = (x * sine, y * sine, z * sine);

        // Columns of the rotation factor.
        let f = [
            [x * x * omc + cosine, xy * omc + zs, xz * omc - ys],
            [xy * omc - zs, y * y * omc + cosine, yz * omc + xs],
            [xz * omc + ys, yz * omc - xs, z * z * omc + cosine],
        ];

        let mut m = self.to_cols();
        let a = m;
        for (col, fc) in m.iter_mut().take(3).zip(f) {
            for (r, e) in col.iter_mut().enumerate() {
                *e = a[0][r] * fc[0] + a[1][r] * fc[1] + a[2][r] * fc[2];
            }
        }
        *self = Self::from_cols(m);
        self
    }

    /// Scales basis column 0 by `s.x`, column 1 by `s.y` and column 2 by `s.z`.
    pub fn scale(&mut self, s: Vec3) -> &mut Self {
        self.m00 *= s.x;
        self.m01 *= s.x;
        self.m02 *= s.x;
        self.m03 *= s.x;
        self.m10 *= s.y;
        self.m11 *= s.y;
        self.m12 *= s.y;
        self.m13 *= s.y;
        self.m20 *= s.z;
        self.m21 *= s.z;
        self.m22 *= s.z;
        self.m23 *= s.z;
        self
    }

    /// Model matrix: identity, then translate, rotate X, Y, Z (degrees), then scale.
    ///
    /// The order is fixed; changing it changes the result.
    pub fn recreate_into_transformation(
        &mut self,
        translation: Vec3,
        rotation: Vec3,
        scale: Vec3,
    ) -> &mut Self {
        self.set_identity()
            .translate(translation)
            .rotate(rotation.x, Vec3::UNIT_X)
            .rotate(rotation.y, Vec3::UNIT_Y)
            .rotate(rotation.z, Vec3::UNIT_Z)
            .scale(scale)
    }

    /// Camera matrix: identity, rotate X, Y, Z (degrees), then translate by `-translation`.
    pub fn recreate_into_view(&mut self, translation: Vec3, rotation: Vec3) -> &mut Self {
        self.set_identity()
            .rotate(rotation.x, Vec3::UNIT_X)
            .rotate(rotation.y, Vec3::UNIT_Y)
            .rotate(rotation.z, Vec3::UNIT_Z)
            .translate(-translation)
    }

    /// OpenGL-style perspective projection with a vertical field of view in degrees.
    ///
    /// Degenerate input is not rejected. `height == 0` with a non-zero width collapses
    /// `m00` to `0.0` and leaves the matrix finite; `width == height == 0` (a `0/0`
    /// aspect) or `near == far` produce `NaN`/`inf` entries. See
    /// [`try_recreate_into_perspective`](Self::try_recreate_into_perspective) for a
    /// checked variant.
    pub fn recreate_into_perspective(
        &mut self,
        width: i32,
        height: i32,
        fov_degrees: f32,
        near: f32,
        far: f32,
    ) -> &mut Self {
        let aspect = width as f32 / height as f32;
        let scale_y = (1.0 / f64::from(fov_degrees / 2.0).to_radians().tan()) as f32;
        let scale_x = scale_y / aspect;
        let frustum_length = far - near;

        self.set_identity();
        self.m00 = scale_x;
        self.m11 = scale_y;
        self.m22 = -((near + far) / frustum_length);
        self.m23 = -1.0;
        self.m32 = -(2.0 * near * far / frustum_length);
        self.m33 = 0.0;
        self
    }

    /// Checked [`recreate_into_perspective`](Self::recreate_into_perspective).
    ///
    /// Rejects zero viewport sides, `near == far` and non-finite parameters, and
    /// reports [`MathError::NonFinite`] if the result still is not finite (e.g. a zero
    /// field of view). On error `self` is unchanged.
    pub fn try_recreate_into_perspective(
        &mut self,
        width: i32,
        height: i32,
        fov_degrees: f32,
        near: f32,
        far: f32,
    ) -> Result<&mut Self, MathError> {
        let finite = fov_degrees.is_finite() && near.is_finite() && far.is_finite();
        if width == 0 || height == 0 || near == far || !finite {
            return Err(MathError::DegeneratePerspective { width, height, near, far });
        }

        let mut out = *self;
        out.recreate_into_perspective(width, height, fov_degrees, near, far);
        if !out.is_finite() {
            return Err(MathError::NonFinite);
        }

        *self = out;
        Ok(self)
    }
}

impl Matrix for Mat4 {
    const DIM: usize = 4;

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
        let c = self.to_cols();
        let mut t = [[0.0f32; 4]; 4];
        for (i, col) in t.iter_mut().enumerate() {
            for (j, e) in col.iter_mut().enumerate() {
                *e = c[j][i];
            }
        }
        *self = Self::from_cols(t);
        self
    }
}

impl_matrix_ops!(Mat4);

impl core::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::FloatBuffer;

    const EPS: f32 = 1e-5;

    fn approx_eq16(a: Mat4, b: Mat4) {
        let (a, b) = (a.to_array(), b.to_array());
        for i in 0..16 {
            assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
        }
    }

    fn approx_eq4(a: Vec4, b: Vec4) {
        let (a, b) = (a.to_array(), b.to_array());
        for i in 0..4 {
            assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
        }
    }

    fn sample() -> Mat4 {
        Mat4::from_array(core::array::from_fn(|i| i as f32 + 1.0))
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn identity_transposed_is_identity() {
        let mut m = Mat4::identity();
        m.set_transposed();
        assert_eq!(m, Mat4::identity());
    }

    #[test]
    fn transpose_twice_restores() {
        let mut m = sample();
        m.set_transposed();
        assert_eq!(m.m01, sample().m10);
        assert_eq!(m.m32, sample().m23);
        m.set_transposed();
        assert_eq!(m, sample());
    }

    #[test]
    fn multiply_matches_hand_computed_translation_product() {
        let mut a = Mat4::identity();
        a.translate(Vec3::new(1.0, 2.0, 3.0));
        let mut b = Mat4::identity();
        b.scale(Vec3::new(2.0, 2.0, 2.0));

        // T × S keeps T's translation and S's basis.
        let ts = a * b;
        assert_eq!(ts.to_cols()[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(ts.to_cols()[0], [2.0, 0.0, 0.0, 0.0]);

        // S × T scales the translation too.
        let st = b * a;
        assert_eq!(st.to_cols()[3], [2.0, 4.0, 6.0, 1.0]);
    }

    #[test]
    #[rustfmt::skip]
    fn new_takes_columns_in_order() {
        let m = Mat4::new(
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        );
        assert_eq!(m, sample());
        assert_eq!(m.to_cols()[1], [5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn mul_assign_matches_operator() {
        let mut a = sample();
        a *= &Mat4::identity();
        assert_eq!(a, sample());
    }

    #[test]
    fn store_writes_sixteen_floats_column_major() {
        let mut buf = FloatBuffer::allocate(16);
        let mut m = Mat4::identity();
        m.translate(Vec3::new(5.0, 6.0, 7.0));
        m.store(&mut buf).unwrap();
        assert_eq!(buf.position(), 0);
        assert_eq!(&buf.as_slice()[12..], &[5.0, 6.0, 7.0, 1.0]);
    }

    // ── translate / rotate / scale ────────────────────────────────────────

    #[test]
    fn translate_moves_origin() {
        let mut m = Mat4::identity();
        m.translate(Vec3::new(1.0, -2.0, 3.0));
        approx_eq4(m * Vec4::point(Vec3::zero()), Vec4::new(1.0, -2.0, 3.0, 1.0));
        // Directions ignore translation.
        approx_eq4(m * Vec4::direction(Vec3::UNIT_X), Vec4::direction(Vec3::UNIT_X));
    }

    #[test]
    fn translate_follows_local_axes() {
        let mut m = Mat4::identity();
        m.rotate(90.0, Vec3::UNIT_Z).translate(Vec3::UNIT_X);
        // Local X now points along world Y.
        approx_eq4(m * Vec4::point(Vec3::zero()), Vec4::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn rotate_z_maps_x_to_y() {
        let mut m = Mat4::identity();
        m.rotate(90.0, Vec3::UNIT_Z);
        approx_eq4(m * Vec4::direction(Vec3::UNIT_X), Vec4::direction(Vec3::UNIT_Y));
    }

    #[test]
    fn rotate_y_maps_z_to_x() {
        let mut m = Mat4::identity();
        m.rotate(90.0, Vec3::UNIT_Y);
        approx_eq4(m * Vec4::direction(Vec3::UNIT_Z), Vec4::direction(Vec3::UNIT_X));
    }

    #[test]
    fn rotate_x_maps_y_to_z() {
        let mut m = Mat4::identity();
        m.rotate(90.0, Vec3::UNIT_X);
        approx_eq4(m * Vec4::direction(Vec3::UNIT_Y), Vec4::direction(Vec3::UNIT_Z));
    }

    #[test]
    fn rotations_compose() {
        let mut twice = Mat4::identity();
        twice.rotate(45.0, Vec3::UNIT_Z).rotate(45.0, Vec3::UNIT_Z);
        let mut once = Mat4::identity();
        once.rotate(90.0, Vec3::UNIT_Z);
        approx_eq16(twice, once);
    }

    #[test]
    fn rotate_leaves_translation_column() {
        let mut m = Mat4::identity();
        m.translate(Vec3::new(4.0, 5.0, 6.0)).rotate(33.0, Vec3::UNIT_Y);
        assert_eq!(m.to_cols()[3], [4.0, 5.0, 6.0, 1.0]);
    }

    #[test]
    fn rotate_does_not_normalize_axis() {
        // m00 = x² (1 - cos) + cos: a unit X axis gives 1, (2, 0, 0) gives 4 * 2 - 1.
        let mut m = Mat4::identity();
        m.rotate(180.0, Vec3::new(2.0, 0.0, 0.0));
        assert!((m.m00 - 7.0).abs() < EPS);
    }

    #[test]
    fn scale_leaves_translation_column() {
        let mut m = Mat4::identity();
        m.translate(Vec3::new(1.0, 1.0, 1.0)).scale(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(m.m00, 2.0);
        assert_eq!(m.m11, 3.0);
        assert_eq!(m.m22, 4.0);
        assert_eq!(m.to_cols()[3], [1.0, 1.0, 1.0, 1.0]);
    }

    // ── recreate_into_* ───────────────────────────────────────────────────

    #[test]
    fn transformation_matches_manual_sequence() {
        let t = Vec3::new(1.0, 2.0, 3.0);
        let r = Vec3::new(10.0, 20.0, 30.0);
        let s = Vec3::new(2.0, 0.5, 1.5);

        let mut expected = Mat4::identity();
        expected
            .translate(t)
            .rotate(r.x, Vec3::UNIT_X)
            .rotate(r.y, Vec3::UNIT_Y)
            .rotate(r.z, Vec3::UNIT_Z)
            .scale(s);

        let mut m = sample();
        m.recreate_into_transformation(t, r, s);
        assert_eq!(m, expected);
    }

    #[test]
    fn transformation_order_is_translate_then_scale() {
        let mut m = Mat4::identity();
        m.recreate_into_transformation(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::zero(),
            Vec3::new(3.0, 3.0, 3.0),
        );
        // Translation is not scaled because it is applied first.
        approx_eq4(m * Vec4::point(Vec3::UNIT_X), Vec4::new(4.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn view_moves_camera_position_to_origin() {
        let eye = Vec3::new(3.0, -1.0, 7.0);
        let mut view = Mat4::identity();
        view.recreate_into_view(eye, Vec3::zero());
        approx_eq4(view * Vec4::point(eye), Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn view_rotates_before_translating() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let mut view = Mat4::identity();
        view.recreate_into_view(eye, Vec3::new(0.0, 90.0, 0.0));
        // The camera position still maps to the origin under a pure rotation.
        approx_eq4(view * Vec4::point(eye), Vec4::new(0.0, 0.0, 0.0, 1.0));
        // Translation column is R × (-eye).
        approx_eq4(Vec4::from(view.to_cols()[3]), Vec4::new(-5.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn perspective_matches_closed_form() {
        let (w, h, fov, near, far) = (800, 600, 60.0f32, 0.1f32, 1000.0f32);
        let mut m = sample();
        m.recreate_into_perspective(w, h, fov, near, far);

        let scale_y = 1.0 / (fov / 2.0).to_radians().tan();
        let scale_x = scale_y / (800.0 / 600.0);
        assert!((m.m00 - scale_x).abs() < EPS);
        assert!((m.m11 - scale_y).abs() < EPS);
        assert!((m.m22 - -((near + far) / (far - near))).abs() < EPS);
        assert!((m.m32 - -(2.0 * near * far / (far - near))).abs() < EPS);
        assert_eq!(m.m23, -1.0);
        assert_eq!(m.m33, 0.0);
        // Everything else is reset to identity/zero.
        assert_eq!(m.m01, 0.0);
        assert_eq!(m.m30, 0.0);
    }

    #[test]
    fn perspective_zero_height_collapses_x_scale() {
        let mut m = Mat4::identity();
        m.recreate_into_perspective(800, 0, 60.0, 0.1, 100.0);
        // 800 / 0 is an infinite aspect, so the x scale divides down to zero.
        assert_eq!(m.m00, 0.0);
        assert!(m.is_finite());
    }

    #[test]
    fn perspective_empty_viewport_is_not_finite() {
        let mut m = Mat4::identity();
        m.recreate_into_perspective(0, 0, 60.0, 0.1, 100.0);
        assert!(m.m00.is_nan());
        assert!(!m.is_finite());
    }

    #[test]
    fn perspective_equal_planes_is_not_finite() {
        let mut m = Mat4::identity();
        m.recreate_into_perspective(800, 600, 60.0, 1.0, 1.0);
        assert!(m.m22.is_infinite());
        assert!(m.m32.is_infinite());
        assert!(!m.is_finite());
    }

    #[test]
    fn try_perspective_rejects_degenerate_input() {
        let mut m = sample();
        let err = m.try_recreate_into_perspective(800, 600, 60.0, 1.0, 1.0).unwrap_err();
        assert!(matches!(err, MathError::DegeneratePerspective { .. }));
        assert_eq!(m, sample());

        assert!(m.try_recreate_into_perspective(800, 0, 60.0, 0.1, 100.0).is_err());
        let err = m.try_recreate_into_perspective(800, 600, 0.0, 0.1, 100.0).unwrap_err();
        assert_eq!(err, MathError::NonFinite);
        assert_eq!(m, sample());
    }

    #[test]
    fn try_perspective_accepts_valid_input() {
        let mut checked = Mat4::identity();
        checked.try_recreate_into_perspective(800, 600, 60.0, 0.1, 1000.0).unwrap();
        let mut plain = Mat4::identity();
        plain.recreate_into_perspective(800, 600, 60.0, 0.1, 1000.0);
        assert_eq!(checked, plain);
    }
}
