//! Field validation rules for the onboarding forms

/// Minimum password length at signup
pub const SIGNUP_PASSWORD_MIN: usize = 6;

/// Minimum password length in the wizard security step
pub const WIZARD_PASSWORD_MIN: usize = 8;

/// Single `@`, non-empty local part, dot somewhere in the domain, no
/// whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty() && !domain.contains('@') && domain.contains('.') && !domain.ends_with('.')
}

/// Exactly 10 ASCII digits
pub fn is_valid_mobile(mobile: &str) -> bool {
    mobile.len() == 10 && mobile.bytes().all(|b| b.is_ascii_digit())
}

/// PAN shape: 5 uppercase letters, 4 digits, 1 uppercase letter
/// (e.g. ABCDE1234F)
pub fn is_valid_pan(pan: &str) -> bool {
    let bytes = pan.as_bytes();
    bytes.len() == 10
        && bytes[..5].iter().all(u8::is_ascii_uppercase)
        && bytes[5..9].iter().all(u8::is_ascii_digit)
        && bytes[9].is_ascii_uppercase()
}

/// Exactly 6 ASCII digits
pub fn is_valid_pin_code(pin: &str) -> bool {
    pin.len() == 6 && pin.bytes().all(|b| b.is_ascii_digit())
}

/// 11 characters
pub fn is_valid_ifsc(ifsc: &str) -> bool {
    ifsc.chars().count() == 11
}

/// At least 9 characters
pub fn is_valid_account_no(account_no: &str) -> bool {
    account_no.len() >= 9
}

/// Exactly 6 ASCII digits
pub fn is_valid_otp(otp: &str) -> bool {
    otp.len() == 6 && otp.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules() {
        assert!(is_valid_email("asha@example.com"));
        assert!(is_valid_email("a.b+tag@mail.co.in"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("a@example."));
    }

    #[test]
    fn mobile_rules() {
        assert!(is_valid_mobile("9876543210"));
        assert!(!is_valid_mobile("987654321"));
        assert!(!is_valid_mobile("98765432100"));
        assert!(!is_valid_mobile("98765abc10"));
    }

    #[test]
    fn pan_rules() {
        assert!(is_valid_pan("ABCDE1234F"));
        assert!(!is_valid_pan("abcde1234f"));
        assert!(!is_valid_pan("ABCD51234F"));
        assert!(!is_valid_pan("ABCDE12345"));
        assert!(!is_valid_pan("ABCDE1234FX"));
    }

    #[test]
    fn pin_ifsc_account_rules() {
        assert!(is_valid_pin_code("560001"));
        assert!(!is_valid_pin_code("5600"));
        assert!(!is_valid_pin_code("56000a"));

        assert!(is_valid_ifsc("HDFC0001234"));
        assert!(!is_valid_ifsc("HDFC001234"));

        assert!(is_valid_account_no("123456789"));
        assert!(!is_valid_account_no("12345678"));
    }

    #[test]
    fn otp_rules() {
        assert!(is_valid_otp("123456"));
        assert!(!is_valid_otp("12345"));
        assert!(!is_valid_otp("12345a"));
    }
}
