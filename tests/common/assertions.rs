//! Custom test assertions
//!
//! Provides domain-specific assertions for pricing breakdowns.

use janitor_pricing::PricingBreakdown;

/// Assertions for PricingBreakdown
pub trait BreakdownAssertions {
    /// Assert every amount is rounded to the cent and non-negative
    fn assert_well_formed(&self);

    /// Assert total equals subtotal plus overhead plus margin, to the cent
    fn assert_total_consistent(&self);
}

fn is_cents(value: f64) -> bool {
    ((value * 100.0).round() - value * 100.0).abs() < 1e-6
}

impl BreakdownAssertions for PricingBreakdown {
    fn assert_well_formed(&self) {
        for (name, value) in [
            ("base_price", self.base_price),
            ("subtotal", self.subtotal),
            ("labor_cost", self.labor_cost),
            ("overhead_amount", self.overhead_amount),
            ("margin_amount", self.margin_amount),
            ("total", self.total),
        ] {
            assert!(value >= 0.0, "{} is negative: {}", name, value);
            assert!(is_cents(value), "{} is not rounded to cents: {}", name, value);
        }
        assert!(self.complexity_factor >= 1.0);
        assert!(self.labor_hours >= 1.0);
    }

    fn assert_total_consistent(&self) {
        let expected = self.subtotal + self.overhead_amount + self.margin_amount;
        assert!(
            (self.total - expected).abs() <= 0.02,
            "total {} differs from parts {}",
            self.total,
            expected
        );
    }
}

/// Assert two values are approximately equal (for floats)
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        assert_approx_eq!($left, $right, 1e-6_f64)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {
        let left_val: f64 = $left as f64;
        let right_val: f64 = $right as f64;
        let diff = (left_val - right_val).abs();
        assert!(
            diff < $epsilon,
            "assertion failed: `(left ~ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` (epsilon: `{:?}`)",
            left_val,
            right_val,
            diff,
            $epsilon
        );
    };
}
