use thiserror::Error;

/// Errors reported by the validated math paths.
///
/// The plain arithmetic methods never fail; they follow IEEE semantics and let
/// `inf`/`NaN` propagate. Only the `try_*` variants and buffer writes report
/// errors.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum MathError {
    /// Normalizing a vector whose length is zero or not finite.
    #[error("cannot normalize a vector of length {length}")]
    ZeroLength { length: f32 },

    /// A validated operation produced a non-finite component.
    #[error("operation produced a non-finite value")]
    NonFinite,

    /// Perspective parameters that would divide by zero or carry non-finite values.
    #[error("degenerate perspective: {width}x{height}, near {near}, far {far}")]
    DegeneratePerspective {
        width: i32,
        height: i32,
        near: f32,
        far: f32,
    },

    /// Not enough room left in a `FloatBuffer` for the write.
    #[error("float buffer overflow: need {needed} floats, {remaining} remaining")]
    BufferOverflow { needed: usize, remaining: usize },
}
