//! This module contains a struct, [`Coord`](coord::Coord), that models a point with three channels
//! and supports the limited math that color conversion needs: scaling by a scalar, componentwise
//! maps, and applying a 3x3 matrix. Every three-channel space goes through it on the way from sRGB.

use std::ops::{Add, Div, Mul, Sub};

use num::{self, Num, NumCast};

use crate::consts::Matrix3;

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space. The axes are called `x`, `y`, and `z` and carry no meaning of their own: a
/// color maps its channels onto them in the order of the letters in its name, so `HSLColor` puts hue
/// on `x`, saturation on `y`, and lightness on `z`.
///
/// # Example
/// ```
/// # use colorati::coord::Coord;
/// let point = Coord{x: 0.2, y: 0.5, z: 1.};
/// let scaled = point * 100u8;
/// assert_eq!(scaled.to_array(), [20., 50., 100.]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// Scalar multiplication and division: (a, b, c) * s = (sa, sb, sc). Not commutative, but it'll do.
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap_or(f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    fn div(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap_or(f64::NAN);
        Coord {
            x: self.x / r,
            y: self.y / r,
            z: self.z / r,
        }
    }
}

impl From<[f64; 3]> for Coord {
    fn from(arr: [f64; 3]) -> Coord {
        Coord {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}

impl Coord {
    /// Applies `f` to every axis, returning a new Coord.
    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> Coord {
        Coord {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }
    /// Divides each axis by the matching entry of `divisors`, as done when normalizing XYZ by a white
    /// point.
    pub fn scale_by(self, divisors: [f64; 3]) -> Coord {
        Coord {
            x: self.x / divisors[0],
            y: self.y / divisors[1],
            z: self.z / divisors[2],
        }
    }
    /// Multiplies a row-major matrix by this point taken as a column vector.
    /// # Example
    /// ```
    /// # use colorati::coord::Coord;
    /// let identity = [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]];
    /// let point = Coord{x: 3., y: 2., z: 1.};
    /// assert_eq!(point.transform(&identity), point);
    /// ```
    pub fn transform(self, mat: &Matrix3) -> Coord {
        let row = |r: &[f64; 3]| r[0] * self.x + r[1] * self.y + r[2] * self.z;
        Coord {
            x: row(&mat[0]),
            y: row(&mat[1]),
            z: row(&mat[2]),
        }
    }
    /// The axes as an array, in order.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
    /// The polar form of the `y`/`z` plane: `(radius, angle)`, with the angle in degrees wrapped into
    /// `[0, 360)`. This is how LCH is built from Lab.
    pub fn polar_yz(self) -> (f64, f64) {
        let radius = self.z.hypot(self.y);
        let angle = self.z.atan2(self.y).to_degrees();
        (radius, wrap_degrees(angle))
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
