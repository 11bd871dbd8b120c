use crate::constants::ORDER_REF_LEN;

/// Generates a client order reference for the `newClientOrderId` parameter.
///
/// The exchange echoes the reference back in order responses. Uppercase
/// letters and digits only, collision-resistant via `nanoid`.
pub fn order_ref() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(ORDER_REF_LEN, &alphabet)
}
