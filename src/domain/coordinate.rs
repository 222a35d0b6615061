use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2D point on the board or screen.
/// Used both as an absolute position and as a delta (mouse movement, pan).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Coordinate {
    pub left: f32,
    pub top: f32,
}

impl Coordinate {
    /// Origin of both world and screen space
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.left + rhs.left, self.top + rhs.top)
    }
}

impl AddAssign for Coordinate {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.left - rhs.left, self.top - rhs.top)
    }
}

impl Neg for Coordinate {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.left, -self.top)
    }
}

impl Mul<f32> for Coordinate {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.left * scalar, self.top * scalar)
    }
}

impl From<(f32, f32)> for Coordinate {
    fn from((left, top): (f32, f32)) -> Self {
        Self::new(left, top)
    }
}
