use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;
use tracing::debug;

use crate::command::{BalanceAction, BalanceCommand};

pub type OwnerName = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountEventKind {
    Deposited,
    Withdrawn,
    TransferSent { to: OwnerName },
    TransferReceived { from: OwnerName },
}

#[derive(Debug)]
pub struct AccountEvent {
    amount: Decimal,
    kind: AccountEventKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Amount must be positive")]
    InvalidAmount,
    #[error("Insufficient funds")]
    InsufficientFunds,
    #[error("Invalid account")]
    InvalidTransferTarget,
    #[error("Balance would exceed the largest representable amount")]
    BalanceOverflow,
}

#[derive(Debug)]
pub struct Account {
    owner_name: OwnerName,
    balance: Decimal,
}

impl Account {
    /// Opens an account with an initial balance, which can be zero but not negative.
    pub fn open(owner_name: impl Into<OwnerName>, balance: Decimal) -> Result<Self, AccountError> {
        if balance < Decimal::zero() {
            return Err(AccountError::InvalidAmount);
        }
        Ok(Self {
            owner_name: owner_name.into(),
            balance,
        })
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn apply(&mut self, event: &AccountEvent) {
        debug!(owner = %self.owner_name, kind = ?event.kind, amount = %event.amount, "applying event");
        match event.kind {
            AccountEventKind::Deposited | AccountEventKind::TransferReceived { .. } => {
                self.balance += event.amount;
            }
            AccountEventKind::Withdrawn | AccountEventKind::TransferSent { .. } => {
                self.balance -= event.amount;
            }
        }
    }

    pub fn handle_balance_command(
        &self,
        command: &BalanceCommand,
    ) -> Result<AccountEvent, AccountError> {
        if command.amount <= Decimal::zero() {
            return Err(AccountError::InvalidAmount);
        }

        match command.action {
            BalanceAction::Deposit => {
                // apply adds unchecked, so the sum must be known to fit here
                if self.balance.checked_add(command.amount).is_none() {
                    return Err(AccountError::BalanceOverflow);
                }
                Ok(AccountEvent {
                    amount: command.amount,
                    kind: AccountEventKind::Deposited,
                })
            }
            BalanceAction::Withdraw => {
                if self.balance >= command.amount {
                    Ok(AccountEvent {
                        amount: command.amount,
                        kind: AccountEventKind::Withdrawn,
                    })
                } else {
                    Err(AccountError::InsufficientFunds)
                }
            }
        }
    }

    /// Produces the pair of events moving `amount` from `self` into `target`.
    /// The first event belongs to `self`, the second to `target`. The receiving
    /// side goes through the deposit rule, so it can fail with `BalanceOverflow`.
    pub fn handle_transfer(
        &self,
        target: &Account,
        amount: Decimal,
    ) -> Result<(AccountEvent, AccountEvent), AccountError> {
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds);
        }
        let sent = self.handle_balance_command(&BalanceCommand::withdraw(amount))?;
        let received = target.handle_balance_command(&BalanceCommand::deposit(amount))?;
        Ok((
            AccountEvent {
                kind: AccountEventKind::TransferSent {
                    to: target.owner_name.clone(),
                },
                ..sent
            },
            AccountEvent {
                kind: AccountEventKind::TransferReceived {
                    from: self.owner_name.clone(),
                },
                ..received
            },
        ))
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let evt = self.handle_balance_command(&BalanceCommand::deposit(amount))?;
        self.apply(&evt);
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let evt = self.handle_balance_command(&BalanceCommand::withdraw(amount))?;
        self.apply(&evt);
        Ok(())
    }

    /// Moves `amount` into `target`. Both events are validated before either is applied.
    pub fn transfer(&mut self, target: &mut Account, amount: Decimal) -> Result<(), AccountError> {
        let (sent, received) = self.handle_transfer(target, amount)?;
        self.apply(&sent);
        target.apply(&received);
        Ok(())
    }
}
