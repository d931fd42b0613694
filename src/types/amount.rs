//! Ledger amounts
//!
//! Amounts are passed through to the ledger client untouched. The native
//! form is the client's own string notation (e.g. `"10XLM"`, or a count of
//! stroops); issued amounts name a currency and its issuing account.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount of an issued (non-native) currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedAmount {
    /// Quantity of the currency
    pub value: Decimal,
    /// Currency code (e.g. `USD`)
    pub currency: String,
    /// Account that issues the currency
    pub issuer: String,
}

/// An amount as understood by the ledger client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// Native amount in the client's string notation
    Native(String),
    /// Issued currency amount
    Issued(IssuedAmount),
}

impl Amount {
    /// Create an issued currency amount
    pub fn issued(value: Decimal, currency: impl Into<String>, issuer: impl Into<String>) -> Self {
        Amount::Issued(IssuedAmount {
            value,
            currency: currency.into(),
            issuer: issuer.into(),
        })
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Native(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Amount::Native(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Native(s) => f.write_str(s),
            Amount::Issued(a) => write!(f, "{}/{}/{}", a.value, a.currency, a.issuer),
        }
    }
}
