pub mod client;
pub mod order;
pub mod restaurant;

/// Minimum age a client must have reached before joining a restaurant.
/// Checked at membership time only, never at client creation.
pub const MIN_MEMBER_AGE: i32 = 18;
