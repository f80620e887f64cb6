//! Minor-unit currency amounts and US-dollar formatting.
//!
//! Amounts stay integral (smallest currency unit, e.g. cents) everywhere in
//! the domain; this module only owns the presentation policy.

/// Minor units per major currency unit (cents per dollar).
pub const MINOR_UNITS_PER_MAJOR: u64 = 100;

/// Format an amount of minor units as a US-dollar string.
///
/// Exactly two decimal places and thousands separators:
/// `usd(173_000)` renders as `"$1,730.00"`.
pub fn usd(minor_units: u64) -> String {
    let major = minor_units / MINOR_UNITS_PER_MAJOR;
    let cents = minor_units % MINOR_UNITS_PER_MAJOR;
    format!("${}.{cents:02}", group_thousands(major))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
