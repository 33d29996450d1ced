//! Fixed-size single-precision math.
//!
//! Conventions:
//! - vectors and matrices are plain `#[repr(C)]` `Pod` values
//! - matrices are column-major; element `mCR` is column `C`, row `R`
//! - mutators work in place and return `&mut Self` for chaining
//! - arithmetic follows IEEE semantics; only `try_*` methods and buffer writes fail
//!
//! The `legacy_quirks` feature restores two historical defects
//! (`Mat2::set_transposed` is a no-op, `Vec3::set_normalized` skips `z`).

#[macro_use]
mod ops;

mod buffer;
mod error;
mod mat2;
mod mat3;
mod mat4;
mod traits;
mod vec2;
mod vec3;
mod vec4;

pub use buffer::FloatBuffer;
pub use error::MathError;
pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use traits::{Matrix, Vector};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
