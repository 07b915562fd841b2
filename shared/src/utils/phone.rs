//! Phone number utilities

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is plausible: optional leading `+`, then 8 to 15
/// digits. A `+`-prefixed number must not continue with `0` (E.164 country
/// codes never do); national formats with a leading `0` are accepted. The
/// service does not attempt carrier-grade validation; delivery is the
/// notification collaborator's problem.
pub fn is_plausible_phone(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    let international = normalized.starts_with('+');
    let digits = normalized.strip_prefix('+').unwrap_or(&normalized);
    digits.len() >= 8
        && digits.len() <= 15
        && digits.chars().all(|c| c.is_ascii_digit())
        && !(international && digits.starts_with('0'))
}

/// Mask a phone number for logging (e.g. `+1555***1234`)
pub fn mask_phone(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() <= 4 {
        return "***".to_string();
    }
    let (head, tail) = normalized.split_at(normalized.len() - 4);
    let visible_head = if head.len() > 4 { &head[..4] } else { "" };
    format!("{}***{}", visible_head, tail)
}
