/// Defines a type that can check if it's approximately equal to another value
pub trait ApproxEq : Sized {
    /// Check if `self` is approximately equal to another value, given an `epsilon`
    fn is_close_to(self, rhs: Self, epsilon: f64) -> bool;

    /// Check if `self` is approximately equal to another, using the machine epsilon
    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, f64::EPSILON)
    }
}

impl ApproxEq for f64 {
    fn is_close_to(self, rhs: Self, epsilon: f64) -> bool {
        (self - rhs).abs() <= epsilon
    }
}

/// Defines a type that can check if it's approximately equal to it's zero identity
pub trait ApproxZero : Sized {
    /// Check if `self` is approximately equal to 0, given an `epsilon`
    fn is_close_to_zero(self, epsilon: f64) -> bool;

    /// Check if `self` is approximately equal to 0, using the machine epsilon
    fn is_zero(self) -> bool {
        self.is_close_to_zero(f64::EPSILON)
    }
}

impl ApproxZero for f64 {
    fn is_close_to_zero(self, epsilon: f64) -> bool {
        self.abs() <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_f64() {
        assert!(1.0f64.is_close_to(1.05, 0.1));
        assert!(!1.0f64.is_close_to(1.2, 0.1));
        assert!((0.1f64 + 0.2).is_approx_eq(0.3));
        assert!(!f64::NAN.is_close_to(f64::NAN, 1.0));

        assert!(1e-17f64.is_zero());
        assert!(!1e-3f64.is_zero());
        assert!((-0.05f64).is_close_to_zero(0.1));
    }
}
