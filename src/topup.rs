use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

pub const CURRENCY_PREFIX: &str = "Nu";
pub const MIN_PHONE_LEN: usize = 8;
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopUpError {
    #[error("Invalid phone number `{0}`")]
    InvalidPhoneNumber(String),
    #[error("Amount must be positive")]
    InvalidAmount,
}

/// Phone number made of at least [`MIN_PHONE_LEN`] ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = TopUpError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.len() >= MIN_PHONE_LEN && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(TopUpError::InvalidPhoneNumber(raw.to_owned()))
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopUpReceipt {
    pub phone: PhoneNumber,
    pub amount: Decimal,
}

impl TopUpReceipt {
    /// Validates the phone number first, then the amount.
    pub fn new(phone: &str, amount: Decimal) -> Result<Self, TopUpError> {
        let phone = phone.parse()?;
        if amount <= Decimal::zero() {
            return Err(TopUpError::InvalidAmount);
        }
        Ok(Self { phone, amount })
    }
}

impl fmt::Display for TopUpReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display pads to the requested precision but truncates past it
        let amount = self.amount.round_dp(DISPLAY_DECIMAL_PLACES);
        write!(
            f,
            "Topped up {CURRENCY_PREFIX}{amount:.places$} to {}",
            self.phone,
            places = DISPLAY_DECIMAL_PLACES as usize
        )
    }
}

pub fn top_up_mobile(phone: &str, amount: Decimal) -> Result<String, TopUpError> {
    TopUpReceipt::new(phone, amount).map(|receipt| receipt.to_string())
}
