//! 3x3 matrix used for the RGB→XYZ step of the Lab pipeline

/// A 3x3 matrix, row-major: `m[row][col]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    /// Matrix elements in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Returns M × v
    #[inline]
    pub fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        let [r0, r1, r2] = self.m;
        [
            r0[0] * v[0] + r0[1] * v[1] + r0[2] * v[2],
            r1[0] * v[0] + r1[1] * v[1] + r1[2] * v[2],
            r2[0] * v[0] + r2[1] * v[1] + r2[2] * v[2],
        ]
    }
}

/// Linear sRGB (D65) to XYZ, four-digit coefficients.
///
/// Palette distances and recipe rankings are computed with exactly these
/// rounded numbers.
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
]);
