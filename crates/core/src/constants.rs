//! Application-wide constants.

use rust_decimal::Decimal;

/// Remaining fraction at or below which a contract item is classified
/// `Critical` (10% of the contracted quantity left).
pub const BALANCE_CRITICAL_THRESHOLD: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Remaining fraction at or below which a contract item is classified
/// `Warning` (30% of the contracted quantity left).
pub const BALANCE_WARNING_THRESHOLD: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Window, in days, for the dashboard "upcoming due" count.
pub const UPCOMING_DUE_WINDOW_DAYS: i64 = 7;

/// Number of calendar months averaged for the spending forecast.
pub const FORECAST_WINDOW_MONTHS: u32 = 3;

/// Maximum serialized size of an organization profile, in bytes. Profiles
/// embed logo images as data URLs; anything beyond this is rejected with a
/// payload-too-large error.
pub const ORG_ENTITY_MAX_BYTES: usize = 900_000;

/// Default unit of measure for catalog items.
pub const DEFAULT_UNIT: &str = "un";
