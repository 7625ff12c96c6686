use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::account::OwnerName;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Open,
    Deposit,
    Withdraw,
    Transfer,
    Topup,
}

/// Raw, untyped ledger request. Fields a given kind doesn't use are left empty.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerRequest {
    #[serde(rename = "type")]
    pub kind: RequestKind,
    pub account: Option<OwnerName>,
    pub target: Option<OwnerName>,
    pub phone: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub amount: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceAction {
    Deposit,
    Withdraw,
}

#[derive(Debug, Clone)]
pub struct BalanceCommand {
    pub action: BalanceAction,
    pub amount: Decimal,
}

impl BalanceCommand {
    pub fn deposit(amount: Decimal) -> Self {
        Self {
            action: BalanceAction::Deposit,
            amount,
        }
    }

    pub fn withdraw(amount: Decimal) -> Self {
        Self {
            action: BalanceAction::Withdraw,
            amount,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountCommandError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: RequestKind },
    #[error("Account is required for {kind:?}")]
    AccountRequired { kind: RequestKind },
    #[error("Target account is required for Transfer")]
    TargetRequired,
    #[error("Phone number is required for Topup")]
    PhoneRequired,
}

/// Amounts are carried as given; range checks belong to the account and top-up rules,
/// which decide the order errors surface in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    Open {
        owner: OwnerName,
        initial_balance: Decimal,
    },
    Balance {
        owner: OwnerName,
        action: BalanceAction,
        amount: Decimal,
    },
    Transfer {
        source: OwnerName,
        target: OwnerName,
        amount: Decimal,
    },
    TopUp {
        phone: String,
        amount: Decimal,
    },
}

impl LedgerCommand {
    pub fn parse_command(request: LedgerRequest) -> Result<Self, AccountCommandError> {
        let LedgerRequest {
            kind,
            account,
            target,
            phone,
            amount,
        } = request;
        let amount = amount.ok_or(AccountCommandError::AmountRequired { kind })?;

        match kind {
            RequestKind::Open => Ok(Self::Open {
                owner: Self::require_account(kind, account)?,
                initial_balance: amount,
            }),
            RequestKind::Deposit => Ok(Self::Balance {
                owner: Self::require_account(kind, account)?,
                action: BalanceAction::Deposit,
                amount,
            }),
            RequestKind::Withdraw => Ok(Self::Balance {
                owner: Self::require_account(kind, account)?,
                action: BalanceAction::Withdraw,
                amount,
            }),
            RequestKind::Transfer => Ok(Self::Transfer {
                source: Self::require_account(kind, account)?,
                target: target.ok_or(AccountCommandError::TargetRequired)?,
                amount,
            }),
            RequestKind::Topup => Ok(Self::TopUp {
                phone: phone.ok_or(AccountCommandError::PhoneRequired)?,
                amount,
            }),
        }
    }

    fn require_account(
        kind: RequestKind,
        account: Option<OwnerName>,
    ) -> Result<OwnerName, AccountCommandError> {
        account.ok_or(AccountCommandError::AccountRequired { kind })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    fn request(kind: RequestKind) -> LedgerRequest {
        LedgerRequest {
            kind,
            account: Some("Karma".to_string()),
            target: Some("Dema".to_string()),
            phone: Some("12345678".to_string()),
            amount: Some(Decimal::from_u32(10).unwrap()),
        }
    }

    #[test]
    fn parse_complete_requests() {
        let amount = Decimal::from_u32(10).unwrap();
        assert_eq!(
            LedgerCommand::parse_command(request(RequestKind::Open)).unwrap(),
            LedgerCommand::Open {
                owner: "Karma".to_string(),
                initial_balance: amount,
            }
        );
        assert_eq!(
            LedgerCommand::parse_command(request(RequestKind::Withdraw)).unwrap(),
            LedgerCommand::Balance {
                owner: "Karma".to_string(),
                action: BalanceAction::Withdraw,
                amount,
            }
        );
        assert_eq!(
            LedgerCommand::parse_command(request(RequestKind::Transfer)).unwrap(),
            LedgerCommand::Transfer {
                source: "Karma".to_string(),
                target: "Dema".to_string(),
                amount,
            }
        );
        assert_eq!(
            LedgerCommand::parse_command(request(RequestKind::Topup)).unwrap(),
            LedgerCommand::TopUp {
                phone: "12345678".to_string(),
                amount,
            }
        );
    }

    #[test]
    fn negative_amount_is_passed_through() {
        let cmd = LedgerCommand::parse_command(LedgerRequest {
            amount: Some(Decimal::from_i32(-5).unwrap()),
            ..request(RequestKind::Deposit)
        })
        .unwrap();
        assert!(matches!(cmd, LedgerCommand::Balance { amount, .. } if amount.is_sign_negative()));
    }

    #[test]
    fn missing_fields() {
        let err = LedgerCommand::parse_command(LedgerRequest {
            amount: None,
            ..request(RequestKind::Deposit)
        })
        .unwrap_err();
        assert_eq!(
            err,
            AccountCommandError::AmountRequired {
                kind: RequestKind::Deposit
            }
        );
        assert_eq!(err.to_string(), "Amount is required for Deposit");

        let err = LedgerCommand::parse_command(LedgerRequest {
            account: None,
            ..request(RequestKind::Transfer)
        })
        .unwrap_err();
        assert_eq!(
            err,
            AccountCommandError::AccountRequired {
                kind: RequestKind::Transfer
            }
        );

        let err = LedgerCommand::parse_command(LedgerRequest {
            target: None,
            ..request(RequestKind::Transfer)
        })
        .unwrap_err();
        assert_eq!(err, AccountCommandError::TargetRequired);

        let err = LedgerCommand::parse_command(LedgerRequest {
            phone: None,
            ..request(RequestKind::Topup)
        })
        .unwrap_err();
        assert_eq!(err, AccountCommandError::PhoneRequired);

        // top-up doesn't need an account
        LedgerCommand::parse_command(LedgerRequest {
            account: None,
            ..request(RequestKind::Topup)
        })
        .unwrap();
    }
}
