//! Per-side values.

/// A value for each side of a box.
///
/// # Example
///
/// ```
/// use tinct::style::Sides;
///
/// // One to four values, in CSS shorthand order
/// assert_eq!(Sides::from_shorthand(&[1]), Some(Sides::uniform(1)));
/// assert_eq!(Sides::from_shorthand(&[1, 2]), Some(Sides::symmetric(1, 2)));
/// assert_eq!(Sides::from_shorthand(&[1, 2, 3]), Some(Sides::new(1, 2, 3, 2)));
/// assert_eq!(Sides::from_shorthand(&[1, 2, 3, 4]), Some(Sides::new(1, 2, 3, 4)));
/// assert_eq!(Sides::<u8>::from_shorthand(&[]), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Clone> Sides<T> {
    /// Create sides from 4 values (top, right, bottom, left).
    pub fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same value on every side.
    pub fn uniform(value: T) -> Self {
        Self::new(value.clone(), value.clone(), value.clone(), value)
    }

    /// Create symmetric sides (vertical, horizontal).
    pub fn symmetric(vertical: T, horizontal: T) -> Self {
        Self::new(vertical.clone(), horizontal.clone(), vertical, horizontal)
    }

    /// Expand CSS shorthand. Returns `None` for zero or more than four values.
    pub fn from_shorthand(values: &[T]) -> Option<Self> {
        match values {
            [all] => Some(Self::uniform(all.clone())),
            [vertical, horizontal] => Some(Self::symmetric(vertical.clone(), horizontal.clone())),
            [top, horizontal, bottom] => Some(Self::new(
                top.clone(),
                horizontal.clone(),
                bottom.clone(),
                horizontal.clone(),
            )),
            [top, right, bottom, left] => Some(Self::new(
                top.clone(),
                right.clone(),
                bottom.clone(),
                left.clone(),
            )),
            _ => None,
        }
    }
}

impl Sides<usize> {
    /// Sum of left and right.
    pub fn horizontal(&self) -> usize {
        self.left + self.right
    }

    /// Sum of top and bottom.
    pub fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}
