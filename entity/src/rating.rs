//! Starting point of a player's skill rating. The rating update itself is
//! computed outside this workspace.

pub const INITIAL_MU: f64 = 25.0;
pub const INITIAL_SIGMA: f64 = INITIAL_MU / 3.0;
/// Conservative skill estimate shown for an unrated player.
pub const INITIAL_TRUESKILL: f64 = INITIAL_MU - 3.0 * INITIAL_SIGMA;
