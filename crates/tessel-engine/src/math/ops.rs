//! Operator overloads, expressed through the chaining methods so both spellings
//! always agree.

macro_rules! impl_vector_ops {
    ($ty:ident) => {
        impl core::ops::Add for $ty {
            type Output = $ty;
            #[inline]
            fn add(mut self, rhs: $ty) -> $ty {
                self.add_vec(rhs);
                self
            }
        }

        impl core::ops::Sub for $ty {
            type Output = $ty;
            #[inline]
            fn sub(mut self, rhs: $ty) -> $ty {
                self.sub_vec(rhs);
                self
            }
        }

        /// Componentwise product.
        impl core::ops::Mul for $ty {
            type Output = $ty;
            #[inline]
            fn mul(mut self, rhs: $ty) -> $ty {
                self.mul_vec(rhs);
                self
            }
        }

        /// Componentwise quotient.
        impl core::ops::Div for $ty {
            type Output = $ty;
            #[inline]
            fn div(mut self, rhs: $ty) -> $ty {
                self.div_vec(rhs);
                self
            }
        }

        impl core::ops::Mul<f32> for $ty {
            type Output = $ty;
            #[inline]
            fn mul(mut self, rhs: f32) -> $ty {
                self.mul_scalar(rhs);
                self
            }
        }

        impl core::ops::Div<f32> for $ty {
            type Output = $ty;
            #[inline]
            fn div(mut self, rhs: f32) -> $ty {
                self.div_scalar(rhs);
                self
            }
        }

        impl core::ops::Neg for $ty {
            type Output = $ty;
            #[inline]
            fn neg(mut self) -> $ty {
                $crate::math::Vector::set_negated(&mut self);
                self
            }
        }

        impl core::ops::AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: $ty) {
                self.add_vec(rhs);
            }
        }

        impl core::ops::SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: $ty) {
                self.sub_vec(rhs);
            }
        }

        impl core::ops::MulAssign<f32> for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                self.mul_scalar(rhs);
            }
        }

        impl core::ops::DivAssign<f32> for $ty {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                self.div_scalar(rhs);
            }
        }
    };
}

macro_rules! impl_matrix_ops {
    ($ty:ident) => {
        impl Default for $ty {
            /// Identity.
            #[inline]
            fn default() -> Self {
                Self::identity()
            }
        }

        impl core::ops::Add for $ty {
            type Output = $ty;
            #[inline]
            fn add(mut self, rhs: $ty) -> $ty {
                self.add_mat(&rhs);
                self
            }
        }

        impl core::ops::Sub for $ty {
            type Output = $ty;
            #[inline]
            fn sub(mut self, rhs: $ty) -> $ty {
                self.sub_mat(&rhs);
                self
            }
        }

        impl core::ops::Mul for $ty {
            type Output = $ty;
            #[inline]
            fn mul(mut self, rhs: $ty) -> $ty {
                self.multiply(&rhs);
                self
            }
        }

        impl core::ops::MulAssign for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: $ty) {
                self.multiply(&rhs);
            }
        }

        impl core::ops::MulAssign<&$ty> for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: &$ty) {
                self.multiply(rhs);
            }
        }

        impl core::ops::Neg for $ty {
            type Output = $ty;
            #[inline]
            fn neg(mut self) -> $ty {
                $crate::math::Matrix::set_negated(&mut self);
                self
            }
        }
    };
}
