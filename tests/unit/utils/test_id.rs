use binance_futures_cli::constants::ORDER_REF_LEN;
use binance_futures_cli::utils::id::order_ref;

#[test]
fn order_ref_has_expected_length_and_alphabet() {
    let reference = order_ref();
    assert_eq!(reference.len(), ORDER_REF_LEN);
    assert!(
        reference
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    );
}

#[test]
fn order_refs_are_unique() {
    let a = order_ref();
    let b = order_ref();
    assert_ne!(a, b);
}
