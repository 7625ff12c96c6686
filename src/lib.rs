/// Account balance rules: deposit, withdraw and transfer.
/// State is modified using events, which are created by handling commands
pub mod account;

/// Raw ledger requests and the commands parsed from them.
pub mod command;

/// Mobile top-up validation and confirmation messages.
pub mod topup;

/// Ledger processor interface, plus "in memory" implementation that owns
/// accounts by owner name and resolves transfer targets.
pub mod processor;

/// CSV batch service, shared by the binary and the integration tests.
pub mod bin_utils;

pub use account::{Account, AccountError};
pub use topup::{TopUpError, top_up_mobile};
