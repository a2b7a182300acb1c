//! # rl-commerce
//!
//! The commerce-facing strategy families: shipment cost calculation and
//! payment execution, each behind a runtime-swappable context, plus the
//! [`Order`] value object they operate on.
//!
//! Strategy selection is asymmetric on purpose: an unrecognised shipping
//! token is a user error ([`ShippingMethod::from_token`] fails), while an
//! unrecognised payment selection simply leaves the bound strategy unchanged
//! ([`PaymentKind::from_selection`] returns `None`).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The immutable order value object.
pub mod order;

/// Payment strategies, the shopping-cart context, and numeric selection.
pub mod payment;

/// Shipping strategies, the calculator context, and token selection.
pub mod shipping;

pub use order::Order;
pub use payment::{
    CreditCardPayment, CryptocurrencyPayment, PayPalPayment, PaymentKind, PaymentStrategy,
    ShoppingCart,
};
pub use shipping::{
    ExpressShipping, NextDayShipping, ShippingCalculator, ShippingMethod, ShippingStrategy,
    StandardShipping,
};
