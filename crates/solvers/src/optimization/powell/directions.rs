/// The set of search directions swept by each Powell iteration.
///
/// Always holds exactly `N` directions of length `N`. A search starts from the
/// coordinate axes and replaces at most one direction per sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionSet<const N: usize> {
    directions: [[f64; N]; N],
}

impl<const N: usize> DirectionSet<N> {
    /// Creates the standard basis, where direction `i` is the `i`-th unit vector.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            directions: std::array::from_fn(|i| {
                std::array::from_fn(|j| if i == j { 1.0 } else { 0.0 })
            }),
        }
    }

    /// Returns the number of directions, which is always `N`.
    #[must_use]
    pub fn len(&self) -> usize {
        N
    }

    /// Returns `true` for the zero-dimensional set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the direction in slot `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[f64; N]> {
        self.directions.get(index)
    }

    /// Iterates over the directions in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64; N]> {
        self.directions.iter()
    }

    /// Returns the directions as a dense array.
    #[must_use]
    pub fn as_array(&self) -> &[[f64; N]; N] {
        &self.directions
    }

    /// Overwrites the direction in slot `index`.
    pub(super) fn replace(&mut self, index: usize, direction: [f64; N]) {
        self.directions[index] = direction;
    }
}

impl<const N: usize> Default for DirectionSet<N> {
    fn default() -> Self {
        Self::identity()
    }
}
