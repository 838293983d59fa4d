use crate::color::PackedColor;
use crate::types::SequenceError;
use heapless::Vec;

/// An ordered, non-empty list of target colors for one rendering pass.
///
/// The sequencer splits the strip into equal blocks, one per color, in
/// order. Pixels left over by the integer split take the last color.
///
/// # Type Parameters
/// * `N` - Maximum number of colors this sequence can hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSequence<const N: usize> {
    colors: Vec<PackedColor, N>,
}

impl<const N: usize> ColorSequence<N> {
    /// Creates a new sequence builder.
    pub fn builder() -> SequenceBuilder<N> {
        SequenceBuilder::new()
    }

    /// Builds a sequence holding `color` `count` times.
    pub fn repeat(color: PackedColor, count: usize) -> Result<Self, SequenceError> {
        (0..count)
            .try_fold(Self::builder(), |builder, _| builder.color(color))?
            .build()
    }

    /// Returns the colors in order.
    pub fn colors(&self) -> &[PackedColor] {
        &self.colors
    }

    /// Returns the number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the last color, which also covers any leftover pixels.
    pub fn last(&self) -> PackedColor {
        // Non-empty by construction.
        self.colors[self.colors.len() - 1]
    }
}

/// Builder for constructing validated color sequences.
#[derive(Debug)]
pub struct SequenceBuilder<const N: usize> {
    colors: Vec<PackedColor, N>,
}

impl<const N: usize> SequenceBuilder<N> {
    /// Creates a new empty sequence builder.
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Appends a color.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The sequence already holds `N` colors
    pub fn color(mut self, color: PackedColor) -> Result<Self, SequenceError> {
        self.colors
            .push(color)
            .map_err(|_| SequenceError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds and validates the sequence.
    ///
    /// # Errors
    /// * `EmptySequence` - No colors were added
    pub fn build(self) -> Result<ColorSequence<N>, SequenceError> {
        if self.colors.is_empty() {
            return Err(SequenceError::EmptySequence);
        }

        Ok(ColorSequence {
            colors: self.colors,
        })
    }
}

impl<const N: usize> Default for SequenceBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TryFrom<&[PackedColor]> for ColorSequence<N> {
    type Error = SequenceError;

    fn try_from(colors: &[PackedColor]) -> Result<Self, Self::Error> {
        colors
            .iter()
            .try_fold(Self::builder(), |builder, &color| builder.color(color))?
            .build()
    }
}
