//! Bootstraps [`crate::processor`] as a CSV batch service. The binary and the
//! integration tests both drive the ledger through it.

use std::io::{Read, Write};

use crate::processor::{
    LedgerOutcome, LedgerProcessError, LedgerProcessor,
    in_memory_processor::InMemoryLedgerProcessor,
};
use anyhow::Result;
use csv_parser::CsvRequestParser;
use csv_printer::{AccountBalance, print_balances};
use thiserror::Error;
use tracing::warn;
pub mod csv_parser;
pub mod csv_printer;

#[derive(Debug, Error)]
pub enum RowError {
    #[error("Malformed row: {0}")]
    Malformed(#[from] csv::Error),
    #[error(transparent)]
    Rejected(#[from] LedgerProcessError),
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, RowError)>,
    pub receipt_printer: Box<dyn FnMut(u64, String)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvRequestParser::new(self.input);

        let mut processor = InMemoryLedgerProcessor::default();

        for (line, row) in parser {
            let outcome = row
                .map_err(RowError::from)
                .and_then(|request| processor.process_request(request).map_err(RowError::from));
            match outcome {
                Ok(LedgerOutcome::Applied) => {}
                Ok(LedgerOutcome::Receipt(receipt)) => (self.receipt_printer)(line, receipt),
                Err(err) => {
                    warn!(line, %err, "request not applied");
                    (self.error_printer)(line, err);
                }
            }
        }

        print_balances(
            self.output,
            processor
                .accounts
                .iter()
                .map(|(owner, acc)| AccountBalance {
                    owner: owner.clone(),
                    balance: acc.balance(),
                }),
        )
    }
}
