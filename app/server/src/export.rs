use crate::protocol::Transaction;

/// `txid,block_time` per transaction, one per line, in fetch order.
///
/// No header and no trailing newline. Unconfirmed transactions get an empty
/// `block_time`.
pub fn transactions_csv(transactions: &[Transaction]) -> String {
    transactions
        .iter()
        .map(|tx| match tx.block_time {
            Some(t) => format!("{},{}", tx.txid, t),
            None => format!("{},", tx.txid),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(txid: &str, block_time: Option<u64>) -> Transaction {
        Transaction {
            txid: txid.to_string(),
            confirmed: block_time.is_some(),
            block_time,
        }
    }

    #[test]
    fn one_line_per_transaction() {
        let csv = transactions_csv(&[
            tx("abc", Some(1_700_000_000)),
            tx("def", None),
            tx("ghi", Some(1_600_000_000)),
        ]);
        assert_eq!(csv, "abc,1700000000\ndef,\nghi,1600000000");
    }

    #[test]
    fn export_is_not_capped() {
        let txs: Vec<_> = (0..25).map(|i| tx(&format!("t{}", i), None)).collect();
        assert_eq!(transactions_csv(&txs).lines().count(), 25);
    }

    #[test]
    fn empty_list_is_empty_csv() {
        assert_eq!(transactions_csv(&[]), "");
    }
}
