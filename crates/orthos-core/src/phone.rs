use crate::error::CoreError;

/// Country-specific numbering policy: the bare country code that may
/// prefix a national number, and the leading digits that mark a valid
/// 10-digit subscriber number (mobile and landline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialPlan {
    pub country_code: String,
    pub mobile_marker: char,
    pub landline_marker: char,
}

impl Default for DialPlan {
    fn default() -> Self {
        // Greece: +30, mobiles start with 6, landlines with 2.
        Self {
            country_code: "30".to_string(),
            mobile_marker: '6',
            landline_marker: '2',
        }
    }
}

impl DialPlan {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.country_code.is_empty() || !self.country_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::InvalidDialPlan(format!(
                "country code must be digits, got {:?}",
                self.country_code
            )));
        }
        for marker in [self.mobile_marker, self.landline_marker] {
            if !marker.is_ascii_digit() {
                return Err(CoreError::InvalidDialPlan(format!(
                    "subscriber marker must be a digit, got {:?}",
                    marker
                )));
            }
        }
        Ok(())
    }

    fn is_marker(&self, ch: char) -> bool {
        ch == self.mobile_marker || ch == self.landline_marker
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneConfig {
    pub enabled: bool,
    pub country_prefixes: Vec<String>,
    pub dial_plan: DialPlan,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            country_prefixes: vec!["+30".to_string(), "0030".to_string()],
            dial_plan: DialPlan::default(),
        }
    }
}

impl PhoneConfig {
    /// Prefixes are literal strings: digits, optionally led by `+`.
    pub fn validate(&self) -> Result<(), CoreError> {
        for prefix in &self.country_prefixes {
            let digits = prefix.strip_prefix('+').unwrap_or(prefix);
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(CoreError::InvalidCountryPrefix(prefix.clone()));
            }
        }
        self.dial_plan.validate()
    }
}

/// National subscriber numbers are ten digits, displayed 3-3-4.
const NATIONAL_LEN: usize = 10;

/// Canonicalizes a raw phone number into national format. Never fails:
/// numbers that do not match the dial plan come back cleaned but
/// ungrouped, so a foreign or malformed number cannot block submission.
pub fn normalize_phone(raw: &str, config: &PhoneConfig) -> String {
    if !config.enabled || raw.is_empty() {
        return raw.to_string();
    }

    let cleaned = strip_formatting(raw);
    let cleaned = strip_country_prefix(&cleaned, &config.country_prefixes);
    let cleaned = strip_bare_country_code(cleaned, &config.dial_plan);
    let digits = cleaned.trim_start_matches('0');

    match group_national(digits, &config.dial_plan) {
        Some(grouped) => grouped,
        None => digits.to_string(),
    }
}

/// Keeps digits and a `+` in the very first position; everything else
/// (spaces, dashes, parentheses, stray `+`) is dropped.
fn strip_formatting(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for (i, ch) in raw.char_indices() {
        if ch.is_ascii_digit() || (ch == '+' && i == 0) {
            out.push(ch);
        }
    }
    out
}

/// First configured prefix that matches wins; the rest are not tried.
fn strip_country_prefix<'a>(cleaned: &'a str, prefixes: &[String]) -> &'a str {
    for prefix in prefixes {
        if let Some(rest) = cleaned.strip_prefix(prefix.as_str()) {
            return rest;
        }
    }
    cleaned
}

/// Recovers numbers entered with a bare country code (no `+`/`00`), e.g.
/// "30 694…" for Greece: country code followed by a full national number
/// whose first digit is a known subscriber marker.
fn strip_bare_country_code<'a>(cleaned: &'a str, plan: &DialPlan) -> &'a str {
    if cleaned.len() != plan.country_code.len() + NATIONAL_LEN {
        return cleaned;
    }
    if !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return cleaned;
    }
    match cleaned.strip_prefix(plan.country_code.as_str()) {
        Some(rest) if rest.chars().next().is_some_and(|c| plan.is_marker(c)) => rest,
        _ => cleaned,
    }
}

fn group_national(digits: &str, plan: &DialPlan) -> Option<String> {
    if digits.len() != NATIONAL_LEN || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if !plan.is_marker(digits.chars().next()?) {
        return None;
    }
    Some(format!(
        "{} {} {}",
        &digits[..3],
        &digits[3..6],
        &digits[6..]
    ))
}

#[cfg(test)]
mod tests {
    use super::{normalize_phone, DialPlan, PhoneConfig};

    fn config() -> PhoneConfig {
        PhoneConfig::default()
    }

    #[test]
    fn mobile_with_plus_country_code() {
        let value = normalize_phone("+30 694 123 4567", &config());
        assert_eq!(value, "694 123 4567");
    }

    #[test]
    fn mobile_with_double_zero_prefix() {
        let value = normalize_phone("0030 (694) 123-4567", &config());
        assert_eq!(value, "694 123 4567");
    }

    #[test]
    fn bare_country_code_is_recovered() {
        let value = normalize_phone("30 694 1234567", &config());
        assert_eq!(value, "694 123 4567");
    }

    #[test]
    fn bare_country_code_requires_subscriber_marker() {
        // 12 digits starting with 30 but the third digit is no marker.
        let value = normalize_phone("309941234567", &config());
        assert_eq!(value, "309941234567");
    }

    #[test]
    fn landline_is_grouped() {
        let value = normalize_phone("210-724-5000", &config());
        assert_eq!(value, "210 724 5000");
    }

    #[test]
    fn leading_zeros_are_dropped() {
        let value = normalize_phone("0 694 123 4567", &config());
        assert_eq!(value, "694 123 4567");
    }

    #[test]
    fn unrecognized_length_passes_through() {
        let value = normalize_phone("12345", &config());
        assert_eq!(value, "12345");
    }

    #[test]
    fn foreign_number_is_cleaned_but_not_grouped() {
        let value = normalize_phone("+44 20 7946 0958", &config());
        assert_eq!(value, "+442079460958");
    }

    #[test]
    fn plus_only_allowed_at_start() {
        let value = normalize_phone("694+123+4567", &config());
        assert_eq!(value, "694 123 4567");
    }

    #[test]
    fn empty_input_is_unchanged() {
        assert_eq!(normalize_phone("", &config()), "");
    }

    #[test]
    fn disabled_config_is_identity() {
        let config = PhoneConfig {
            enabled: false,
            ..PhoneConfig::default()
        };
        assert_eq!(normalize_phone("+30 694", &config), "+30 694");
    }

    #[test]
    fn first_matching_prefix_wins() {
        let config = PhoneConfig {
            country_prefixes: vec!["0030".to_string(), "00".to_string()],
            ..PhoneConfig::default()
        };
        let value = normalize_phone("00306941234567", &config);
        assert_eq!(value, "694 123 4567");
    }

    #[test]
    fn validate_rejects_bad_prefix() {
        let config = PhoneConfig {
            country_prefixes: vec!["+3a".to_string()],
            ..PhoneConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_dial_plan() {
        let plan = DialPlan {
            country_code: String::new(),
            ..DialPlan::default()
        };
        assert!(plan.validate().is_err());
    }
}
