//! Address screening
//!
//! A syntactic check for mainnet segwit (`bc1...`) addresses. No bech32
//! checksum or witness-version validation is done here; anything that looks
//! like `bc1` followed by six or more alphanumerics is accepted.

use once_cell::sync::Lazy;
use regex::Regex;

// Constant pattern; compilation cannot fail at runtime.
static BC1_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^bc1[0-9a-z]{6,}$").expect("address pattern compiles"));

/// Check if a string looks like a mainnet segwit address.
///
/// Surrounding whitespace is ignored. Empty or whitespace-only input is
/// never valid.
pub fn is_valid_address(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty() && BC1_ADDRESS.is_match(trimmed)
}

/// Whether the typed input matches the configured admin address.
///
/// This only drives a badge in the view. It proves nothing about who is
/// typing.
pub fn is_admin(input: &str, admin_address: &str) -> bool {
    !input.is_empty() && input.trim().eq_ignore_ascii_case(admin_address.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bc1_with_six_or_more_alphanumerics() {
        assert!(is_valid_address("bc1q2ld78maaw2qkc8usgqtcpvq2ua6x47lt3u0lsu"));
        assert!(is_valid_address("bc1abcdef"));
        assert!(is_valid_address("BC1QABCDEF"));
        assert!(is_valid_address("  bc1qabcdef\n"));
    }

    #[test]
    fn stays_permissive_about_checksums() {
        // Not a real address, but syntactically acceptable.
        assert!(is_valid_address("bc1zzzzzzzzzzzzzzz"));
        assert!(is_valid_address("bc1OOOOOO"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("   "));
        assert!(!is_valid_address("notbech32"));
        assert!(!is_valid_address("bc1abcde"));
        assert!(!is_valid_address("tb1qabcdefgh"));
        assert!(!is_valid_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"));
        assert!(!is_valid_address("bc1qabc-def"));
        assert!(!is_valid_address("bc1 qabcdef"));
        assert!(!is_valid_address("xbc1qabcdef"));
    }

    #[test]
    fn admin_flag_is_a_plain_comparison() {
        let admin = "bc1q2ld78maaw2qkc8usgqtcpvq2ua6x47lt3u0lsu";
        assert!(is_admin(admin, admin));
        assert!(is_admin("  BC1Q2LD78MAAW2QKC8USGQTCPVQ2UA6X47LT3U0LSU ", admin));
        assert!(!is_admin("", admin));
        assert!(!is_admin("bc1qsomebodyelse", admin));
    }
}
