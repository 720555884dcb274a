//! Satoshi amounts and their BTC rendering

use bitcoin::SignedAmount;

const SATS_PER_BTC: u64 = 100_000_000;

/// Render a signed satoshi amount as BTC with exactly 8 decimals.
///
/// Integer arithmetic only, so `123456789` always renders as `1.23456789`
/// and `-100` as `-0.00000100`.
pub fn format_btc(amount: SignedAmount) -> String {
    let sats = amount.to_sat();
    let sign = if sats < 0 { "-" } else { "" };
    let abs = sats.unsigned_abs();
    format!("{}{}.{:08}", sign, abs / SATS_PER_BTC, abs % SATS_PER_BTC)
}
