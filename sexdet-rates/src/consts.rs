// Expected ratios: females X/A ~ 1.0 and Y/A ~ 0, males X/A ~ 0.5 and Y/A clearly above 0.

/// Minimum X rate for a Female call.
pub const FEMALE_MIN_RATE_X: f64 = 0.8;
/// Y rate must be strictly below this for a Female call.
pub const FEMALE_MAX_RATE_Y: f64 = 0.05;

/// Inclusive X rate band for a Male call.
pub const MALE_MIN_RATE_X: f64 = 0.35;
pub const MALE_MAX_RATE_X: f64 = 0.65;
/// Minimum Y rate for a Male call.
pub const MALE_MIN_RATE_Y: f64 = 0.1;
