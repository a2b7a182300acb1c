//! Payment execution strategies.
//!
//! Three interchangeable payment methods behind one [`PaymentStrategy`]
//! trait and the [`ShoppingCart`] context.  The reference strategies never
//! fail a well-formed payment — they validate the amount and report
//! success — but the operation is typed `Result<bool>` so a real gateway
//! adapter can fail through the same seam.

use std::sync::Arc;

use rl_core::{ensure, Decimal, Result, StrategyHandle};

/// An interchangeable payment method.
pub trait PaymentStrategy: std::fmt::Debug + Send + Sync {
    /// Execute a payment of `amount`.
    ///
    /// `amount` must be non-negative.  Credential fields are never mutated.
    fn pay(&self, amount: Decimal) -> Result<bool>;
}

/// Payment by credit card.
#[derive(Debug, Clone)]
pub struct CreditCardPayment {
    card_number: String,
    holder: String,
    cvv: String,
    expiry: String,
}

impl CreditCardPayment {
    /// Create a credit-card payment method.
    pub fn new(
        card_number: impl Into<String>,
        holder: impl Into<String>,
        cvv: impl Into<String>,
        expiry: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            holder: holder.into(),
            cvv: cvv.into(),
            expiry: expiry.into(),
        }
    }

    /// The card number this method charges.
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// The cardholder name.
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// The card verification value.
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// The card expiry date.
    pub fn expiry(&self) -> &str {
        &self.expiry
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: Decimal) -> Result<bool> {
        ensure!(amount >= 0.0, "payment amount must be non-negative, got {amount}");
        Ok(true)
    }
}

/// Payment through a PayPal account.
#[derive(Debug, Clone)]
pub struct PayPalPayment {
    email: String,
    #[allow(dead_code)]
    password: String,
}

impl PayPalPayment {
    /// Create a PayPal payment method.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// The account this method debits.
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: Decimal) -> Result<bool> {
        ensure!(amount >= 0.0, "payment amount must be non-negative, got {amount}");
        Ok(true)
    }
}

/// Payment from a cryptocurrency wallet.
#[derive(Debug, Clone)]
pub struct CryptocurrencyPayment {
    wallet_address: String,
}

impl CryptocurrencyPayment {
    /// Create a cryptocurrency payment method.
    pub fn new(wallet_address: impl Into<String>) -> Self {
        Self {
            wallet_address: wallet_address.into(),
        }
    }

    /// The wallet this method spends from.
    pub fn wallet_address(&self) -> &str {
        &self.wallet_address
    }
}

impl PaymentStrategy for CryptocurrencyPayment {
    fn pay(&self, amount: Decimal) -> Result<bool> {
        ensure!(amount >= 0.0, "payment amount must be non-negative, got {amount}");
        Ok(true)
    }
}

/// A cart that checks out through whichever payment strategy is bound.
#[derive(Debug)]
pub struct ShoppingCart {
    payment: StrategyHandle<dyn PaymentStrategy>,
    total: Decimal,
}

impl ShoppingCart {
    /// Create an empty cart bound to `strategy`.
    pub fn new(strategy: Arc<dyn PaymentStrategy>) -> Self {
        Self {
            payment: StrategyHandle::new(strategy),
            total: 0.0,
        }
    }

    /// Add an item price to the cart total.
    pub fn add_item(&mut self, amount: Decimal) -> Result<()> {
        ensure!(amount >= 0.0, "item price must be non-negative, got {amount}");
        self.total += amount;
        Ok(())
    }

    /// The current cart total.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Replace the bound payment strategy; takes effect at the next checkout.
    pub fn set_payment_strategy(&self, strategy: Arc<dyn PaymentStrategy>) {
        self.payment.relink(strategy);
    }

    /// Pay the cart total with the currently bound strategy.
    pub fn checkout(&self) -> Result<bool> {
        self.payment.current().pay(self.total)
    }
}

/// The payment variants a numeric selection can choose.
///
/// Selections map 1 → credit card, 2 → PayPal, 3 → cryptocurrency.  Any
/// other selection yields `None`, meaning "leave the bound strategy
/// unchanged" — deliberately laxer than the shipping token policy, which
/// treats an unknown token as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentKind {
    /// [`CreditCardPayment`].
    CreditCard,
    /// [`PayPalPayment`].
    PayPal,
    /// [`CryptocurrencyPayment`].
    Cryptocurrency,
}

impl PaymentKind {
    /// Map a user selection to a variant, or `None` for "no strategy change".
    pub fn from_selection(selection: u32) -> Option<Self> {
        match selection {
            1 => Some(PaymentKind::CreditCard),
            2 => Some(PaymentKind::PayPal),
            3 => Some(PaymentKind::Cryptocurrency),
            _ => None,
        }
    }
}
