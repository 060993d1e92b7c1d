//! Vector algebra
//!
//! Fixed-arity numeric tuples with component-wise arithmetic. Every operation
//! is written once against [`Components`] (create / unary / binary over the
//! components) and blanket-implemented through [`VectorApi`], so 1D to 4D
//! share a single implementation.
//!
//! Division is not guarded: dividing by a zero component follows IEEE 754
//! (`inf` / `NaN`) and avoiding it is the caller's responsibility.

use std::fmt;

/// Lerp that is exact at both ends and monotonic in `t`
///
/// Mathematically `start + (end - start) * t`, but `lerp(a, b, 0.0) == a` and
/// `lerp(a, b, 1.0) == b` hold bit-for-bit, and `lerp(a, a, t) == a`.
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    if (start <= 0.0 && end >= 0.0) || (start >= 0.0 && end <= 0.0) {
        return t * end + (1.0 - t) * start;
    }
    if t == 1.0 {
        return end;
    }
    let x = start + t * (end - start);
    if (t > 1.0) == (end > start) {
        x.max(end)
    } else {
        x.min(end)
    }
}

/// Operations on the components of a vector
pub trait Components: Copy + fmt::Debug + PartialEq {
    /// Broadcast a scalar to every component
    fn create(initial: f64) -> Self;

    /// Map an operation over every component
    fn unary(self, operation: impl Fn(f64) -> f64) -> Self;

    /// Combine two vectors component by component
    fn binary(self, right: Self, operation: impl Fn(f64, f64) -> f64) -> Self;
}

/// Vector arithmetic derived from [`Components`]
pub trait VectorApi: Components {
    fn zero() -> Self {
        Self::create(0.0)
    }

    fn one() -> Self {
        Self::create(1.0)
    }

    /// Component-wise `start + (end - start) * progress`, unclamped
    fn interpolate(start: Self, end: Self, progress: f64) -> Self {
        start.binary(end, |l, r| lerp(l, r, progress))
    }

    fn add(self, right: Self) -> Self {
        self.binary(right, |l, r| l + r)
    }

    fn subtract(self, right: Self) -> Self {
        self.binary(right, |l, r| l - r)
    }

    fn multiply(self, right: Self) -> Self {
        self.binary(right, |l, r| l * r)
    }

    fn divide(self, right: Self) -> Self {
        self.binary(right, |l, r| l / r)
    }

    fn add_scalar(self, right: f64) -> Self {
        self.unary(|l| l + right)
    }

    fn multiply_scalar(self, right: f64) -> Self {
        self.unary(|l| l * right)
    }
}

impl<T: Components> VectorApi for T {}

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t
    fn lerp(&self, other: &Self, t: f64) -> Self;

    /// Check if two values are approximately equal
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool;
}

impl Interpolate for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        lerp(*self, *other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self - other).abs() < epsilon
    }
}

// ============================================================================
// Vector<N>
// ============================================================================

/// An N-component vector
#[derive(Clone, Copy, PartialEq)]
pub struct Vector<const N: usize> {
    components: [f64; N],
}

pub type Vector1D = Vector<1>;
pub type Vector2D = Vector<2>;
pub type Vector3D = Vector<3>;
pub type Vector4D = Vector<4>;

impl<const N: usize> Vector<N> {
    pub const ZERO: Self = Self {
        components: [0.0; N],
    };
    pub const ONE: Self = Self {
        components: [1.0; N],
    };

    pub const fn from_array(components: [f64; N]) -> Self {
        Self { components }
    }

    pub fn components(&self) -> [f64; N] {
        self.components
    }

    /// Component at `index`, if the vector has that many components
    pub fn get(&self, index: usize) -> Option<f64> {
        self.components.get(index).copied()
    }
}

impl<const N: usize> Components for Vector<N> {
    fn create(initial: f64) -> Self {
        Self {
            components: [initial; N],
        }
    }

    fn unary(self, operation: impl Fn(f64) -> f64) -> Self {
        Self {
            components: std::array::from_fn(|i| operation(self.components[i])),
        }
    }

    fn binary(self, right: Self, operation: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            components: std::array::from_fn(|i| {
                operation(self.components[i], right.components[i])
            }),
        }
    }
}

impl<const N: usize> Interpolate for Vector<N> {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Self::interpolate(*self, *other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.components
            .iter()
            .zip(other.components.iter())
            .all(|(l, r)| (l - r).abs() < epsilon)
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [&str; 4] = ["x", "y", "z", "w"];
        let mut s = f.debug_struct("Vector");
        for (i, value) in self.components.iter().enumerate() {
            s.field(NAMES.get(i).copied().unwrap_or("_"), value);
        }
        s.finish()
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    fn from(components: [f64; N]) -> Self {
        Self::from_array(components)
    }
}

impl<const N: usize> std::ops::Add for Vector<N> {
    type Output = Self;

    fn add(self, right: Self) -> Self {
        VectorApi::add(self, right)
    }
}

impl<const N: usize> std::ops::Sub for Vector<N> {
    type Output = Self;

    fn sub(self, right: Self) -> Self {
        self.subtract(right)
    }
}

impl<const N: usize> std::ops::Mul for Vector<N> {
    type Output = Self;

    fn mul(self, right: Self) -> Self {
        self.multiply(right)
    }
}

impl<const N: usize> std::ops::Div for Vector<N> {
    type Output = Self;

    fn div(self, right: Self) -> Self {
        self.divide(right)
    }
}

impl<const N: usize> std::ops::Mul<f64> for Vector<N> {
    type Output = Self;

    fn mul(self, right: f64) -> Self {
        self.multiply_scalar(right)
    }
}

impl<const N: usize> std::ops::Neg for Vector<N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.unary(|v| -v)
    }
}

// ============================================================================
// Named constructors and accessors
// ============================================================================

impl Vector<1> {
    pub const fn new(x: f64) -> Self {
        Self::from_array([x])
    }

    pub fn x(&self) -> f64 {
        self.components[0]
    }
}

impl Vector<2> {
    pub const fn new(x: f64, y: f64) -> Self {
        Self::from_array([x, y])
    }

    pub fn x(&self) -> f64 {
        self.components[0]
    }

    pub fn y(&self) -> f64 {
        self.components[1]
    }
}

impl Vector<3> {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_array([x, y, z])
    }

    pub fn x(&self) -> f64 {
        self.components[0]
    }

    pub fn y(&self) -> f64 {
        self.components[1]
    }

    pub fn z(&self) -> f64 {
        self.components[2]
    }
}

impl Vector<4> {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self::from_array([x, y, z, w])
    }

    pub fn x(&self) -> f64 {
        self.components[0]
    }

    pub fn y(&self) -> f64 {
        self.components[1]
    }

    pub fn z(&self) -> f64 {
        self.components[2]
    }

    pub fn w(&self) -> f64 {
        self.components[3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 9] = [0.0, 0.1, 0.3, -2.5, 1e-9, 7.25, -0.0, 1e12, -3.0];

    #[test]
    fn test_lerp_exact_at_ends() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                assert_eq!(lerp(a, b, 0.0), a, "lerp({a}, {b}, 0)");
                assert_eq!(lerp(a, b, 1.0), b, "lerp({a}, {b}, 1)");
                assert_eq!(lerp(a, a, 0.37), a);
            }
        }
    }

    #[test]
    fn test_lerp_extrapolates() {
        assert!((lerp(0.0, 10.0, 1.5) - 15.0).abs() < 1e-12);
        assert!((lerp(2.0, 4.0, -1.0) - 0.0).abs() < 1e-12);
        assert!((lerp(1.0, 3.0, 0.5) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_create_broadcasts() {
        let v = Vector3D::create(2.5);
        assert_eq!(v, Vector3D::new(2.5, 2.5, 2.5));
        assert_eq!(Vector2D::zero(), Vector2D::ZERO);
        assert_eq!(Vector4D::one(), Vector4D::ONE);
    }

    #[test]
    fn test_interpolate_endpoints() {
        let a = Vector3D::new(0.1, -4.0, 3.0);
        let b = Vector3D::new(0.3, 2.0, 3.0);
        assert_eq!(Vector3D::interpolate(a, b, 0.0), a);
        assert_eq!(Vector3D::interpolate(a, b, 1.0), b);
        let mid = Vector3D::interpolate(a, b, 0.5);
        assert!(mid.approx_eq(&Vector3D::new(0.2, -1.0, 3.0), 1e-12));
    }

    #[test]
    fn test_add_is_binary_plus() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(0.5, -3.0);
        assert_eq!(VectorApi::add(a, b), a.binary(b, |l, r| l + r));
        assert_eq!(a + b, Vector2D::new(1.5, -1.0));
        assert_eq!(a - b, Vector2D::new(0.5, 5.0));
        assert_eq!(-a, Vector2D::new(-1.0, -2.0));
    }

    #[test]
    fn test_multiply_divide_inverse() {
        let a = Vector4D::new(1.0, -2.0, 3.5, 8.0);
        let b = Vector4D::new(4.0, 0.5, -2.0, 0.25);
        assert!(a.multiply(b).divide(b).approx_eq(&a, 1e-12));
        assert!(a.divide(b).multiply(b).approx_eq(&a, 1e-12));
    }

    #[test]
    fn test_divide_by_zero_is_unguarded() {
        let v = Vector2D::new(1.0, 0.0).divide(Vector2D::ZERO);
        assert!(v.x().is_infinite());
        assert!(v.y().is_nan());
    }

    #[test]
    fn test_scalar_api() {
        let v = Vector1D::new(2.0);
        assert_eq!(v.add_scalar(1.0).x(), 3.0);
        assert_eq!(v.multiply_scalar(3.0).x(), 6.0);
        assert_eq!((v * 0.5).x(), 1.0);
    }

    #[test]
    fn test_accessors() {
        let v = Vector4D::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.get(2), Some(3.0));
        assert_eq!(v.get(4), None);
        assert_eq!(v.components(), [1.0, 2.0, 3.0, 4.0]);
    }
}
