//! # Permit Validator — HK/Macau Travel-Permit Patterns
//!
//! Pattern-only validation for the travel-permit formats carried by
//! Hong Kong and Macau residents. Neither format has a digit-weighting
//! scheme; these are fixed regular-language matches, nothing more.
//!
//! The two validators are deliberately separate entry points: the permit
//! check is reachable from [`crate::validate::is_valid_card`], while the
//! Home-Return-Permit check is its own call site.

use crate::shape;

/// Validate the HK/Macau permit form: one letter in `{H,h,M,m}` followed
/// by exactly 8 numeric digits.
pub fn is_valid_hk_mo(id: &str) -> bool {
    shape::is_permit_pattern(id, 8)
}

/// Validate the Home-Return-Permit form: one letter in `{H,h,M,m}`
/// followed by exactly 8 or exactly 10 numeric digits.
///
/// The first 8 digits are the lifelong personal identifier; the optional
/// trailing 2 digits are the renewal counter, `"00"` meaning first issue.
pub fn is_valid_home_return(id: &str) -> bool {
    shape::is_permit_pattern(id, 8) || shape::is_permit_pattern(id, 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hk_mo_accepts_both_markers() {
        assert!(is_valid_hk_mo("H12345678"));
        assert!(is_valid_hk_mo("h12345678"));
        assert!(is_valid_hk_mo("M12345678"));
        assert!(is_valid_hk_mo("m12345678"));
    }

    #[test]
    fn test_hk_mo_rejects_wrong_digit_count() {
        assert!(!is_valid_hk_mo("H1234567"));
        assert!(!is_valid_hk_mo("H123456789"));
    }

    #[test]
    fn test_hk_mo_rejects_wrong_prefix() {
        assert!(!is_valid_hk_mo("X12345678"));
        assert!(!is_valid_hk_mo("112345678"));
    }

    #[test]
    fn test_home_return_with_renewal_counter() {
        assert!(is_valid_home_return("H1234567800"));
        assert!(is_valid_home_return("M1234567801"));
    }

    #[test]
    fn test_home_return_without_renewal_counter() {
        assert!(is_valid_home_return("H12345678"));
        assert!(is_valid_home_return("m12345678"));
    }

    #[test]
    fn test_home_return_rejects_bad_prefix_and_length() {
        assert!(!is_valid_home_return("X1234567800"));
        assert!(!is_valid_home_return("H123"));
        // 9 digits sits between the two legal widths.
        assert!(!is_valid_home_return("H123456789"));
    }

    #[test]
    fn test_non_digit_tail_rejected() {
        assert!(!is_valid_hk_mo("H1234567a"));
        assert!(!is_valid_home_return("H12345678aa"));
    }

    #[test]
    fn test_empty_input() {
        assert!(!is_valid_hk_mo(""));
        assert!(!is_valid_home_return(""));
    }
}
