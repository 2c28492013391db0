//! CPF (Cadastro de Pessoas Físicas) check-digit validation.
//!
//! A CPF is an 11-digit Brazilian taxpayer number whose last two digits are
//! check digits derived from the preceding ones by a weighted-sum modulo 11
//! rule. Input may carry any formatting (`123.456.789-09`, spaces, etc.);
//! every non-digit character is dropped before validation.
//!
//! "Digit" means any Unicode decimal digit (general category `Nd`), so
//! fullwidth or Arabic-Indic digits count with their numeric value.

use regex::Regex;
use std::sync::LazyLock;

/// Number of digits in a normalized CPF.
pub const CPF_LENGTH: usize = 11;

/// Zero-based positions of the two check digits.
const CHECK_POSITIONS: [usize; 2] = [9, 10];

/// A single Unicode decimal digit (`\d` is `\p{Nd}` in Unicode mode).
static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("decimal digit pattern is valid"));

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of a Unicode decimal digit, `None` for anything else.
///
/// `Nd` characters are assigned in contiguous runs of complete `0..=9`
/// blocks, so the value is the offset from the start of the run modulo 10.
fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }

    Some((c as u32 - start) % 10)
}

/// The digit sequence of `input`, in order.
fn digit_sequence(input: &str) -> Vec<u32> {
    input.chars().filter_map(digit_value).collect()
}

/// Keeps only the decimal digits of `input`, in their original order, as
/// ASCII digits.
///
/// # Examples
///
/// ```
/// use fan_registry::utils::cpf::normalize_cpf;
///
/// assert_eq!(normalize_cpf("529.982.247-25"), "52998224725");
/// assert_eq!(normalize_cpf("５２９"), "529");
/// assert_eq!(normalize_cpf("abc"), "");
/// ```
pub fn normalize_cpf(input: &str) -> String {
    digit_sequence(input)
        .into_iter()
        .filter_map(|d| char::from_digit(d, 10))
        .collect()
}

/// Formats a CPF as `XXX.XXX.XXX-XX`.
///
/// Returns `None` when the digit sequence is not exactly 11 digits long.
/// Formatting does not imply validity.
pub fn format_cpf(input: &str) -> Option<String> {
    let digits = normalize_cpf(input);
    if digits.len() != CPF_LENGTH {
        return None;
    }

    Some(format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    ))
}

/// Masks all but the last two digits, for log output.
pub fn mask_cpf(input: &str) -> String {
    let digits = normalize_cpf(input);
    let visible = digits.len().saturating_sub(2);
    digits
        .chars()
        .enumerate()
        .map(|(i, c)| if i < visible { '*' } else { c })
        .collect()
}

/// Validates a CPF number.
///
/// The function is total: any string yields a boolean, never a panic.
///
/// # Rules
///
/// 1. After stripping non-digits, exactly 11 digits must remain
/// 2. The digits must not all be the same (`111.111.111-11` passes the
///    arithmetic but is a placeholder, not a real CPF)
/// 3. Both check digits must match the weighted-sum rule
///
/// # Examples
///
/// ```
/// use fan_registry::utils::cpf::validate_cpf;
///
/// assert!(validate_cpf("529.982.247-25"));
/// assert!(!validate_cpf("529.982.247-24"));
/// assert!(!validate_cpf("000.000.000-00"));
/// ```
pub fn validate_cpf(input: &str) -> bool {
    let digits = digit_sequence(input);

    if digits.len() != CPF_LENGTH || is_uniform(&digits) {
        return false;
    }

    CHECK_POSITIONS
        .iter()
        .all(|&position| check_digit(&digits, position) == digits[position])
}

/// True when every digit equals the first one.
fn is_uniform(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// Expected check digit for `position`, computed over `digits[..position]`.
///
/// Digit `j` carries weight `position + 1 - j`, so the second pass picks up
/// the first check digit as an ordinary weighted digit.
fn check_digit(digits: &[u32], position: usize) -> u32 {
    let sum: u32 = digits[..position]
        .iter()
        .enumerate()
        .map(|(j, &d)| d * (position + 1 - j) as u32)
        .sum();

    (sum * 10 % 11) % 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_cpf() {
        assert!(validate_cpf("52998224725"));
    }

    #[test]
    fn test_corrupted_second_check_digit() {
        assert!(!validate_cpf("52998224724"));
    }

    #[test]
    fn test_corrupted_first_check_digit() {
        assert!(!validate_cpf("52998224735"));
    }

    #[test]
    fn test_corrupted_body_digit() {
        assert!(!validate_cpf("52998224625"));
    }

    #[test]
    fn test_other_valid_cpfs() {
        assert!(validate_cpf("12345678909"));
        assert!(validate_cpf("11144477735"));
        assert!(validate_cpf("39053344705"));
    }

    #[test]
    fn test_formatted_input_matches_plain_digits() {
        assert_eq!(validate_cpf("123.456.789-09"), validate_cpf("12345678909"));
        assert_eq!(validate_cpf("529.982.247-24"), validate_cpf("52998224724"));
        assert!(validate_cpf("529.982.247-25"));
        assert!(validate_cpf(" 529 982 247 25 "));
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(!validate_cpf(""));
        assert!(!validate_cpf("5299822472"));
        assert!(!validate_cpf("529982247250"));
        assert!(!validate_cpf("123"));
        assert!(!validate_cpf("not a cpf"));
    }

    #[test]
    fn test_uniform_digits_rejected() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(11);
            assert!(!validate_cpf(&cpf), "{cpf} should be rejected");
        }
        assert!(!validate_cpf("111.111.111-11"));
    }

    #[test]
    fn test_uniform_digits_would_pass_arithmetic() {
        let digits = [1u32; 11];
        assert_eq!(check_digit(&digits, 9), 1);
        assert_eq!(check_digit(&digits, 10), 1);
    }

    #[test]
    fn test_unicode_decimal_digits_count() {
        assert!(validate_cpf("٥٢٩٩٨٢٢٤٧٢٥"));
        assert!(validate_cpf("５２９．９８２．２４７－２５"));
        assert!(!validate_cpf("٥٢٩٩٨٢٢٤٧٢٤"));
        assert_eq!(validate_cpf("１２３４５６７８９０９"), validate_cpf("12345678909"));
    }

    #[test]
    fn test_normalize_maps_unicode_digits_to_ascii() {
        assert_eq!(normalize_cpf("٥2٩9"), "5299");
        assert_eq!(normalize_cpf("５２９９８２２４７２５"), "52998224725");
        assert_eq!(
            format_cpf("٥٢٩٩٨٢٢٤٧٢٥").as_deref(),
            Some("529.982.247-25")
        );
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(digit_value('7'), Some(7));
        assert_eq!(digit_value('٠'), Some(0));
        assert_eq!(digit_value('٩'), Some(9));
        assert_eq!(digit_value('７'), Some(7));
        // mathematical digits are five adjacent 0..=9 blocks
        assert_eq!(digit_value('\u{1D7D8}'), Some(0));
        assert_eq!(digit_value('\u{1D7E1}'), Some(9));
        assert_eq!(digit_value('\u{1D7FF}'), Some(9));
        assert_eq!(digit_value('a'), None);
        assert_eq!(digit_value('²'), None);
        assert_eq!(digit_value('Ⅻ'), None);
    }

    #[test]
    fn test_check_digit_values() {
        let digits = [5, 2, 9, 9, 8, 2, 2, 4, 7, 2, 5];
        assert_eq!(check_digit(&digits, 9), 2);
        assert_eq!(check_digit(&digits, 10), 5);
    }

    #[test]
    fn test_format_cpf() {
        assert_eq!(
            format_cpf("52998224725").as_deref(),
            Some("529.982.247-25")
        );
        assert_eq!(
            format_cpf("529.982.247-25").as_deref(),
            Some("529.982.247-25")
        );
        assert_eq!(format_cpf("5299822472"), None);
    }

    #[test]
    fn test_mask_cpf() {
        assert_eq!(mask_cpf("529.982.247-25"), "*********25");
        assert_eq!(mask_cpf("7"), "7");
        assert_eq!(mask_cpf(""), "");
    }
}
