/// Minimum and maximum extents of a rectangular region.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T> {
    /// Minimum extent in the x direction, the left side of a region.
    pub x_min: T,
    /// Minimum extent in the y direction. In a Y-up coordinate system,
    /// which is used by fonts, this represents the bottom of a region.
    pub y_min: T,
    /// Maximum extent in the x direction, the right side of a region.
    pub x_max: T,
    /// Maximum extent in the y direction.
    pub y_max: T,
}

impl<T> BoundingBox<T> {
    /// Maps `BoundingBox<T>` to `BoundingBox<U>` by applying a function to
    /// each extent.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> BoundingBox<U> {
        BoundingBox {
            x_min: f(self.x_min),
            y_min: f(self.y_min),
            x_max: f(self.x_max),
            y_max: f(self.y_max),
        }
    }
}
