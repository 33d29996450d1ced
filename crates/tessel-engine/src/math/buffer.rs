use super::MathError;

/// Fixed-capacity `f32` buffer with a read/write cursor.
///
/// Cursor model:
/// - `position` is where the next `put`/`get` happens
/// - `limit` is the first index that must not be touched
/// - `capacity` never changes after allocation
///
/// `flip` turns a freshly written region into a readable one: the limit moves to
/// the current position and the position goes back to 0. Every `store` on the
/// math types ends with a flip, so the buffer is ready to be read or uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatBuffer {
    data: Box<[f32]>,
    position: usize,
    limit: usize,
}

impl FloatBuffer {
    /// Allocates a zero-filled buffer with `capacity` floats, position 0 and limit = capacity.
    pub fn allocate(capacity: usize) -> Self {
        Self {
            data: vec![0.0; capacity].into_boxed_slice(),
            position: 0,
            limit: capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Floats between the position and the limit.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    #[inline]
    pub fn has_remaining(&self) -> bool {
        self.position < self.limit
    }

    /// Moves the cursor. Positions past the limit are clamped to it.
    pub fn set_position(&mut self, position: usize) -> &mut Self {
        self.position = position.min(self.limit);
        self
    }

    /// Writes one float at the position and advances it.
    pub fn put(&mut self, value: f32) -> Result<&mut Self, MathError> {
        self.put_slice(&[value])
    }

    /// Writes all of `values` or nothing.
    pub fn put_slice(&mut self, values: &[f32]) -> Result<&mut Self, MathError> {
        let remaining = self.remaining();
        if values.len() > remaining {
            return Err(MathError::BufferOverflow {
                needed: values.len(),
                remaining,
            });
        }

        let end = self.position + values.len();
        self.data[self.position..end].copy_from_slice(values);
        self.position = end;
        Ok(self)
    }

    /// Reads the float at the position and advances it, or `None` at the limit.
    pub fn get(&mut self) -> Option<f32> {
        if !self.has_remaining() {
            return None;
        }
        let v = self.data[self.position];
        self.position += 1;
        Some(v)
    }

    /// Limit := position, position := 0.
    pub fn flip(&mut self) -> &mut Self {
        self.limit = self.position;
        self.position = 0;
        self
    }

    /// Position := 0; the limit is kept.
    pub fn rewind(&mut self) -> &mut Self {
        self.position = 0;
        self
    }

    /// Position := 0, limit := capacity. Contents are left in place.
    pub fn clear(&mut self) -> &mut Self {
        self.position = 0;
        self.limit = self.capacity();
        self
    }

    /// The readable region `[0, limit)`.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data[..self.limit]
    }

    /// The readable region as native-endian bytes, ready for a GPU upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }
}
