//! Simulated mobile-money charges.
//!
//! A real deployment would call a backend that drives the provider's open
//! API; here the push is a timer plus a weighted coin flip. The randomness
//! sits behind [`ChanceSource`] so tests can script outcomes.

use crate::config::SimulatorConfig;
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionId(pub String);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Payment failed or timed out by user")]
    Declined,
}

/// Source of uniform rolls in [0, 1) driving charge outcomes.
pub trait ChanceSource: Send + Sync {
    fn roll(&self) -> f64;
}

/// Default source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngChance;

impl ChanceSource for ThreadRngChance {
    fn roll(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

pub struct MobileMoneySimulator {
    delay: Duration,
    success_rate: f64,
    chance: Box<dyn ChanceSource>,
}

impl MobileMoneySimulator {
    pub fn new(delay: Duration, success_rate: f64) -> Self {
        Self::with_chance(delay, success_rate, Box::new(ThreadRngChance))
    }

    pub fn with_chance(delay: Duration, success_rate: f64, chance: Box<dyn ChanceSource>) -> Self {
        Self {
            delay,
            success_rate,
            chance,
        }
    }

    pub fn from_config(config: &SimulatorConfig) -> Self {
        Self::new(config.payment_delay, config.payment_success_rate)
    }

    /// Push a charge to the given number and wait out the USSD interaction.
    ///
    /// Inputs are taken as-is; there is no retry and no idempotency key, so
    /// every call is an independent attempt.
    pub async fn charge(
        &self,
        phone_number: &str,
        amount_minor_units: u64,
    ) -> Result<TransactionId, PaymentError> {
        info!(
            phone = phone_number,
            amount = amount_minor_units,
            "initiating mobile money charge"
        );

        tokio::time::sleep(self.delay).await;

        if self.chance.roll() < self.success_rate {
            let reference = (self.chance.roll() * 1_000.0) as u32;
            let transaction = TransactionId(format!(
                "MOMO-{}-{reference:03}",
                Utc::now().timestamp_millis()
            ));
            info!(%transaction, "charge approved");
            Ok(transaction)
        } else {
            info!(phone = phone_number, "charge declined");
            Err(PaymentError::Declined)
        }
    }
}

impl fmt::Debug for MobileMoneySimulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MobileMoneySimulator")
            .field("delay", &self.delay)
            .field("success_rate", &self.success_rate)
            .finish_non_exhaustive()
    }
}
