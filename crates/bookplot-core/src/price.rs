//! Price text normalization.
//!
//! Two stripping rules exist and are kept separate: catalogue markup carries
//! a fixed two-byte currency marker ahead of the amount, while rows read back
//! from the store may or may not carry a symbol at all. The rules differ on
//! unprefixed input.

/// Normalize a price as it appears in catalogue markup, e.g. `"£51.77"`.
///
/// Drops the two-byte currency marker and parses the remainder. Returns
/// `None` for input shorter than the marker, a cut that lands inside a
/// multi-byte character, or a non-numeric remainder.
pub fn from_catalog_text(raw: &str) -> Option<f64> {
    raw.get(2..)?.parse::<f64>().ok()
}

/// Normalize a price as read back from the favorites table.
///
/// Strips every currency symbol wherever it appears and trims whitespace
/// before parsing.
pub fn from_stored_text(raw: &str) -> Option<f64> {
    raw.replace('£', "").trim().parse::<f64>().ok()
}
