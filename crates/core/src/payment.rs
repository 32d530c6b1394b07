//! Shared payment vocabulary.
//!
//! Sales, supplier settlements, and payroll all record how money moved, so
//! the method enums live here rather than in any one ledger crate.

use serde::{Deserialize, Serialize};

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Bank,
    MobileBanking,
    #[default]
    Cash,
}

/// Mobile banking provider, carried only when the method is `MobileBanking`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobileProvider {
    GPay,
    Bkash,
    Rocket,
    Nagad,
}

impl core::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PaymentMethod::Bank => write!(f, "Bank"),
            PaymentMethod::MobileBanking => write!(f, "Mobile Banking"),
            PaymentMethod::Cash => write!(f, "Cash"),
        }
    }
}
