//! Value transforms applied to raw field input.
//!
//! The card number is the interesting case: the user may type, paste, or
//! edit mid-string, and the displayed value must always be the digit
//! content regrouped in 4s. `card_number_transform` is idempotent, so
//! feeding a displayed value back through it is a no-op.

use smallvec::SmallVec;

/// Digits on a full card number.
pub const CARD_NUMBER_DIGITS: usize = 16;

/// Digits per displayed group.
pub const CARD_GROUP_SIZE: usize = 4;

/// Strip every character that is not an ASCII digit.
#[must_use]
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Truncate to at most `max` characters.
#[must_use]
pub fn clamp_chars(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}

/// Insert a single space after every `group` digits, no trailing space.
///
/// Expects digit-only input; any other content is grouped as-is.
#[must_use]
pub fn group_digits(digits: &str, group: usize) -> String {
    assert!(group > 0, "Group size must be positive");

    // ASCII digits are single bytes, so byte chunks are char chunks.
    let groups: SmallVec<[&str; 4]> = digits
        .as_bytes()
        .chunks(group)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect();

    groups.join(" ")
}

/// The full card-number transform: digit filter, 16-digit clamp,
/// grouping in 4s.
///
/// ```
/// use card_entry::input::card_number_transform;
///
/// assert_eq!(
///     card_number_transform("4242424242424242"),
///     "4242 4242 4242 4242"
/// );
/// assert_eq!(card_number_transform("4242-4242"), "4242 4242");
/// ```
#[must_use]
pub fn card_number_transform(input: &str) -> String {
    let digits = digits_only(input);
    let digits = clamp_chars(&digits, CARD_NUMBER_DIGITS);
    group_digits(&digits, CARD_GROUP_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only_strips_everything_else() {
        assert_eq!(digits_only("4242-4242 4242x4242"), "4242424242424242");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only(""), "");
        assert_eq!(digits_only("١٢٣"), ""); // non-ASCII digits are stripped
    }

    #[test]
    fn test_clamp_chars() {
        assert_eq!(clamp_chars("12345", 3), "123");
        assert_eq!(clamp_chars("12", 3), "12");
        assert_eq!(clamp_chars("", 3), "");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("4242424242424242", 4), "4242 4242 4242 4242");
        assert_eq!(group_digits("42424", 4), "4242 4");
        assert_eq!(group_digits("4242", 4), "4242");
        assert_eq!(group_digits("42", 4), "42");
        assert_eq!(group_digits("", 4), "");
    }

    #[test]
    fn test_card_number_transform_full_entry() {
        assert_eq!(
            card_number_transform("4242424242424242"),
            "4242 4242 4242 4242"
        );
    }

    #[test]
    fn test_card_number_transform_strips_then_groups() {
        assert_eq!(
            card_number_transform("4242 4242 4242 4242"),
            "4242 4242 4242 4242"
        );
        assert_eq!(card_number_transform("4x2y4z2"), "4242");
    }

    #[test]
    fn test_card_number_transform_clamps_to_sixteen_digits() {
        assert_eq!(
            card_number_transform("12345678901234567890"),
            "1234 5678 9012 3456"
        );
    }

    #[test]
    fn test_card_number_transform_idempotent() {
        let once = card_number_transform("424242424242424");
        let twice = card_number_transform(&once);
        assert_eq!(once, twice);
    }
}
