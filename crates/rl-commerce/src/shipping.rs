//! Shipment cost strategies.
//!
//! Three interchangeable cost formulas behind one [`ShippingStrategy`]
//! trait, a [`ShippingCalculator`] context, and the [`ShippingMethod`]
//! token policy.  Costs are deliberately never clamped: the express
//! discount can drive the result negative, and callers get that value
//! as-is.

use std::str::FromStr;
use std::sync::Arc;

use rl_core::{Decimal, Error, Result, StrategyHandle};

use crate::order::Order;

/// An interchangeable shipment cost formula.
pub trait ShippingStrategy: std::fmt::Debug + Send + Sync {
    /// Compute the shipping cost for `order`.
    fn cost(&self, order: &Order) -> Decimal;
}

/// Standard shipping: `weight × 1.5`, with a 10 % discount over 10 kg.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardShipping;

impl ShippingStrategy for StandardShipping {
    fn cost(&self, order: &Order) -> Decimal {
        let mut cost = order.weight() * 1.5;
        if order.weight() > 10.0 {
            cost *= 0.9;
        }
        cost
    }
}

/// Express shipping: `weight × 3.0`, $5 off for orders over $100.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressShipping;

impl ShippingStrategy for ExpressShipping {
    fn cost(&self, order: &Order) -> Decimal {
        let mut cost = order.weight() * 3.0;
        if order.total_amount() > 100.0 {
            cost -= 5.0;
        }
        cost
    }
}

/// Next-day shipping: `weight × 4.5`, $10 surcharge beyond 100 km.
#[derive(Debug, Clone, Copy, Default)]
pub struct NextDayShipping;

impl ShippingStrategy for NextDayShipping {
    fn cost(&self, order: &Order) -> Decimal {
        let mut cost = order.weight() * 4.5;
        if order.distance() > 100 {
            cost += 10.0;
        }
        cost
    }
}

/// Delegates cost calculation to whichever strategy is currently bound.
#[derive(Debug)]
pub struct ShippingCalculator {
    strategy: StrategyHandle<dyn ShippingStrategy>,
}

impl ShippingCalculator {
    /// Create a calculator bound to `strategy`.
    pub fn new(strategy: Arc<dyn ShippingStrategy>) -> Self {
        Self {
            strategy: StrategyHandle::new(strategy),
        }
    }

    /// Replace the bound strategy; takes effect for the next calculation.
    pub fn set_strategy(&self, strategy: Arc<dyn ShippingStrategy>) {
        self.strategy.relink(strategy);
    }

    /// Compute the cost of `order` with the currently bound strategy.
    pub fn cost(&self, order: &Order) -> Decimal {
        self.strategy.current().cost(order)
    }
}

/// The shipping methods a token can select.
///
/// An unrecognised token is a user error: [`from_token`][Self::from_token]
/// fails with [`Error::UnsupportedMethod`] rather than defaulting silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingMethod {
    /// [`StandardShipping`].
    Standard,
    /// [`ExpressShipping`].
    Express,
    /// [`NextDayShipping`].
    NextDay,
}

impl ShippingMethod {
    /// Map a method token to its variant.
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "Standard" => Ok(ShippingMethod::Standard),
            "Express" => Ok(ShippingMethod::Express),
            "NextDay" => Ok(ShippingMethod::NextDay),
            _ => Err(Error::UnsupportedMethod {
                method: token.into(),
            }),
        }
    }

    /// The canonical token for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard",
            ShippingMethod::Express => "Express",
            ShippingMethod::NextDay => "NextDay",
        }
    }

    /// Construct the strategy this method names.
    pub fn strategy(&self) -> Arc<dyn ShippingStrategy> {
        match self {
            ShippingMethod::Standard => Arc::new(StandardShipping),
            ShippingMethod::Express => Arc::new(ExpressShipping),
            ShippingMethod::NextDay => Arc::new(NextDayShipping),
        }
    }
}

impl FromStr for ShippingMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_token(s)
    }
}
