use rand::RngExt;

pub(crate) const USER_ID_LENGTH: usize = 10;

/// Draws a fresh 10-digit identifier from the process RNG.
///
/// Repeated calls are independent; collisions are absorbed by the
/// upsert-by-id semantics of the user store, not here.
pub(crate) fn generate_user_id() -> String {
    let mut rng = rand::rng();
    (0..USER_ID_LENGTH)
        .map(|_| char::from(b'0' + rng.random_range(0..10)))
        .collect()
}

pub(crate) fn is_valid_user_id(candidate: &str) -> bool {
    candidate.len() == USER_ID_LENGTH && candidate.bytes().all(|b| b.is_ascii_digit())
}
