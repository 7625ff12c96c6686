use std::io::Read;

use crate::command::LedgerRequest;
use csv::{DeserializeRecordsIntoIter, Trim};

/// Parses ledger requests in CSV format, `type,account,target,phone,amount`.
///
/// Rows that cannot be deserialized are yielded as errors, so the caller can
/// report them and carry on with the next row.
pub struct CsvRequestParser<R> {
    iter: DeserializeRecordsIntoIter<R, LedgerRequest>,
}

impl<R> CsvRequestParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvRequestParser<R>
where
    R: Read,
{
    type Item = (u64, Result<LedgerRequest, csv::Error>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}
