use bookplot_core::price;

#[test]
fn catalog_rule_parses_prefixed_price() {
    assert_eq!(price::from_catalog_text("£51.77"), Some(51.77));
}

#[test]
fn catalog_rule_returns_none_for_non_numeric_remainder() {
    assert_eq!(price::from_catalog_text("N/A"), None);
}

#[test]
fn catalog_rule_returns_none_for_input_shorter_than_the_marker() {
    assert_eq!(price::from_catalog_text(""), None);
    assert_eq!(price::from_catalog_text("£"), None);
}

#[test]
fn catalog_rule_never_panics_inside_a_multibyte_character() {
    // "€" is three bytes; the two-byte cut lands inside it.
    assert_eq!(price::from_catalog_text("€51.77"), None);
}

#[test]
fn stored_rule_parses_with_and_without_symbol() {
    assert_eq!(price::from_stored_text("£51.77"), Some(51.77));
    assert_eq!(price::from_stored_text("51.77"), Some(51.77));
    assert_eq!(price::from_stored_text(" £12.50 "), Some(12.5));
}

#[test]
fn stored_rule_returns_none_for_unparsable_text() {
    assert_eq!(price::from_stored_text("N/A"), None);
    assert_eq!(price::from_stored_text(""), None);
}

#[test]
fn rules_diverge_on_unprefixed_input() {
    // The catalogue rule assumes a two-byte marker and mangles bare numbers;
    // the stored rule accepts them. Both behaviors are intentional.
    assert_eq!(price::from_catalog_text("12.99"), Some(0.99));
    assert_eq!(price::from_stored_text("12.99"), Some(12.99));
}
