//! Dense per-stage scalar field.

/// A dense `width × height` field of scalar values, row-major.
///
/// Each edge stage reads one field and allocates the next, so a stage never
/// observes its own partially written output.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> ScalarField<T> {
    /// A field filled with `T::default()`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }

    /// Build a field by evaluating `f(x, y)` for every cell.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap existing row-major data.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "field data length must match {width}x{height}"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Field width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Value at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[y * self.width + x]
    }

    /// Value at `(x, y)` with coordinates clamped into bounds.
    #[inline]
    pub fn get_clamped(&self, x: isize, y: isize) -> T {
        let cx = x.clamp(0, self.width as isize - 1) as usize;
        let cy = y.clamp(0, self.height as isize - 1) as usize;
        self.get(cx, cy)
    }

    /// Overwrite the value at `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        self.data[y * self.width + x] = value;
    }

    /// Row-major values.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}
