use thiserror::Error;

use crate::{
    account::{AccountError, OwnerName},
    command::{AccountCommandError, LedgerRequest},
    topup::TopUpError,
};

pub mod in_memory_processor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerProcessError {
    #[error(transparent)]
    CommandErr(#[from] AccountCommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
    #[error(transparent)]
    TopUpErr(#[from] TopUpError),
    #[error("Account `{owner}` doesn't exist")]
    UnknownAccount { owner: OwnerName },
    #[error("Account `{owner}` already exists")]
    DuplicateAccount { owner: OwnerName },
}

/// Outcome of a successfully processed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerOutcome {
    Applied,
    /// Confirmation message of a mobile top-up.
    Receipt(String),
}

pub trait LedgerProcessor {
    fn process_request(
        &mut self,
        request: LedgerRequest,
    ) -> Result<LedgerOutcome, LedgerProcessError>;
}
