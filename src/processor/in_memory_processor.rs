use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    account::{Account, AccountError, OwnerName},
    command::{BalanceAction, LedgerCommand, LedgerRequest},
    topup::top_up_mobile,
};

use super::{LedgerOutcome, LedgerProcessError, LedgerProcessor};

/// Accounts are kept ordered by owner name, so listing them is deterministic.
#[derive(Default)]
pub struct InMemoryLedgerProcessor {
    pub accounts: BTreeMap<OwnerName, Account>,
}

impl InMemoryLedgerProcessor {
    fn account_mut(&mut self, owner: &str) -> Result<&mut Account, LedgerProcessError> {
        self.accounts
            .get_mut(owner)
            .ok_or_else(|| LedgerProcessError::UnknownAccount {
                owner: owner.to_owned(),
            })
    }

    fn transfer(
        &mut self,
        source: OwnerName,
        target: &str,
        amount: Decimal,
    ) -> Result<(), LedgerProcessError> {
        let Some(mut source_acc) = self.accounts.remove(&source) else {
            return Err(LedgerProcessError::UnknownAccount { owner: source });
        };
        // source is out of the map here, so a self-transfer resolves to no target
        let result = match self.accounts.get_mut(target) {
            Some(target_acc) => source_acc.transfer(target_acc, amount).map_err(Into::into),
            None => Err(AccountError::InvalidTransferTarget.into()),
        };
        self.accounts.insert(source, source_acc);
        result
    }
}

impl LedgerProcessor for InMemoryLedgerProcessor {
    fn process_request(
        &mut self,
        request: LedgerRequest,
    ) -> Result<LedgerOutcome, LedgerProcessError> {
        match LedgerCommand::parse_command(request)? {
            LedgerCommand::Open {
                owner,
                initial_balance,
            } => {
                if self.accounts.contains_key(&owner) {
                    return Err(LedgerProcessError::DuplicateAccount { owner });
                }
                let acc = Account::open(owner.clone(), initial_balance)?;
                debug!(%owner, balance = %initial_balance, "account opened");
                self.accounts.insert(owner, acc);
            }
            LedgerCommand::Balance {
                owner,
                action,
                amount,
            } => {
                let acc = self.account_mut(&owner)?;
                match action {
                    BalanceAction::Deposit => acc.deposit(amount)?,
                    BalanceAction::Withdraw => acc.withdraw(amount)?,
                }
            }
            LedgerCommand::Transfer {
                source,
                target,
                amount,
            } => self.transfer(source, &target, amount)?,
            LedgerCommand::TopUp { phone, amount } => {
                return Ok(LedgerOutcome::Receipt(top_up_mobile(&phone, amount)?));
            }
        };
        Ok(LedgerOutcome::Applied)
    }
}
