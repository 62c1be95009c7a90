//! This file provides the constants used for color space conversion: the matrices that move linear
//! sRGB into CIE XYZ and into the OkLab cone space, the D65 white point, and the luminance weights
//! from WCAG. They are written out as row-major 3x3 arrays and applied through
//! [`Coord::transform`](../coord/struct.Coord.html#method.transform), so each constant can be checked
//! against its published source at a glance.

/// Row-major 3x3 matrix.
pub type Matrix3 = [[f64; 3]; 3];

/// Linear sRGB (0-1) to CIE XYZ, scaled so that Y of white is 1.
pub const STANDARD_RGB_TO_XYZ: Matrix3 = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// The D65 white point, normalized so that Y is 100. Matches the divisors CSS uses for Lab.
pub const D65_WHITE_POINT: [f64; 3] = [95.047, 100.000, 108.883];

/// Linear sRGB to the approximate cone responses (LMS) that OkLab is built on.
pub const OKLAB_LMS_MAT: Matrix3 = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Nonlinear LMS to OkLab L, a, and b.
pub const OKLAB_MIX_MAT: Matrix3 = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

/// WCAG 2 relative luminance weights for linear R, G, and B.
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// The threshold below which the sRGB transfer function is linear when computing relative
/// luminance. WCAG keeps the older 0.03928 rather than 0.04045.
pub const LUMINANCE_LINEAR_CUTOFF: f64 = 0.03928;

/// Same cutoff as used by CSS for decoding sRGB before Lab and OkLab conversion.
pub const SRGB_LINEAR_CUTOFF: f64 = 0.04045;
