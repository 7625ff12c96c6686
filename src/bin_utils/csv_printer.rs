use std::io::Write;

use crate::account::OwnerName;
use anyhow::Context;
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AccountBalance {
    pub owner: OwnerName,
    pub balance: Decimal,
}

/// Writes `owner,balance` rows in the order given.
pub fn print_balances<W>(
    output: &mut W,
    balances: impl IntoIterator<Item = AccountBalance>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for row in balances {
        let owner = row.owner.clone();
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write balance of `{owner}`"))?;
    }
    writer.flush().context("Failed to flush balances")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_rows() {
        let mut output = Vec::new();
        print_balances(
            &mut output,
            [
                AccountBalance {
                    owner: "Dema".to_string(),
                    balance: Decimal::new(90050, 2),
                },
                AccountBalance {
                    owner: "Karma".to_string(),
                    balance: Decimal::MAX,
                },
            ],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "owner,balance\nDema,900.50\nKarma,79228162514264337593543950335\n"
        );
    }
}
