//! The immutable order value object.

use rl_core::{ensure, Decimal, Natural, Result};

/// A shipment order: weight in kilograms, order total in dollars, and
/// delivery distance in kilometres.
///
/// Immutable once constructed; the constructor rejects negative weights and
/// amounts (the distance is unsigned by type).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    weight: Decimal,
    total_amount: Decimal,
    distance: Natural,
}

impl Order {
    /// Create an order, validating that weight and amount are non-negative.
    pub fn new(weight: Decimal, total_amount: Decimal, distance: Natural) -> Result<Self> {
        ensure!(weight >= 0.0, "order weight must be non-negative, got {weight}");
        ensure!(
            total_amount >= 0.0,
            "order total must be non-negative, got {total_amount}"
        );
        Ok(Self {
            weight,
            total_amount,
            distance,
        })
    }

    /// Shipment weight.
    pub fn weight(&self) -> Decimal {
        self.weight
    }

    /// Order total.
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// Delivery distance.
    pub fn distance(&self) -> Natural {
        self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_round_trip() {
        let order = Order::new(15.0, 150.0, 120).unwrap();
        assert_eq!(order.weight(), 15.0);
        assert_eq!(order.total_amount(), 150.0);
        assert_eq!(order.distance(), 120);
    }

    #[test]
    fn negative_fields_are_rejected() {
        assert!(Order::new(-1.0, 10.0, 0).is_err());
        assert!(Order::new(1.0, -10.0, 0).is_err());
        assert!(Order::new(0.0, 0.0, 0).is_ok());
    }
}
