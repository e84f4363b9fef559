use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Height of the scene frame in scene units.
pub const FRAME_HEIGHT: f64 = 8.0;
/// Width of the 16:9 scene frame in scene units.
pub const FRAME_WIDTH: f64 = FRAME_HEIGHT * 16.0 / 9.0;

/// A point or direction in scene coordinates. Serialized as `[x, y, z]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_origin(&self) -> bool {
        *self == ORIGIN
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        [p.x, p.y, p.z]
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Point3 {
    fn add_assign(&mut self, rhs: Point3) {
        *self = *self + rhs;
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, rhs: f64) -> Point3 {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Point3 {
    type Output = Point3;

    fn neg(self) -> Point3 {
        self * -1.0
    }
}

pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);
pub const UP: Point3 = Point3::new(0.0, 1.0, 0.0);
pub const DOWN: Point3 = Point3::new(0.0, -1.0, 0.0);
pub const LEFT: Point3 = Point3::new(-1.0, 0.0, 0.0);
pub const RIGHT: Point3 = Point3::new(1.0, 0.0, 0.0);
pub const UL: Point3 = Point3::new(-1.0, 1.0, 0.0);
pub const UR: Point3 = Point3::new(1.0, 1.0, 0.0);
pub const DL: Point3 = Point3::new(-1.0, -1.0, 0.0);
pub const DR: Point3 = Point3::new(1.0, -1.0, 0.0);

/// Axis aligned box in the xy plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub center: Point3,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(center: Point3, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Point on the box boundary in `direction`. Each axis of `direction`
    /// only contributes its sign, so `UR` yields the top right corner.
    pub fn critical_point(&self, direction: Point3) -> Point3 {
        Point3::new(
            self.center.x + sign(direction.x) * self.width / 2.0,
            self.center.y + sign(direction.y) * self.height / 2.0,
            self.center.z,
        )
    }

    pub fn top(&self) -> f64 {
        self.center.y + self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.center.y - self.height / 2.0
    }

    pub fn left(&self) -> f64 {
        self.center.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center.x + self.width / 2.0
    }

    /// Smallest box containing all of `boxes`. `None` when empty.
    pub fn union<'a>(boxes: impl IntoIterator<Item = &'a BoundingBox>) -> Option<BoundingBox> {
        let mut iter = boxes.into_iter();
        let first = iter.next()?;
        let (mut left, mut right, mut bottom, mut top) =
            (first.left(), first.right(), first.bottom(), first.top());
        for b in iter {
            left = left.min(b.left());
            right = right.max(b.right());
            bottom = bottom.min(b.bottom());
            top = top.max(b.top());
        }
        Some(BoundingBox::new(
            Point3::new((left + right) / 2.0, (bottom + top) / 2.0, first.center.z),
            right - left,
            top - bottom,
        ))
    }
}

/// Like `f64::signum`, but zero stays zero.
pub(crate) fn sign(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value.signum()
    }
}
