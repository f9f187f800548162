pub const ARENA_SIZE: u8 = 28;

/// Lane boundaries for the reference arena, as fractions of the width.
/// `x < width * 9 / 28` is the left lane and `x >= width * 19 / 28` is the right lane.
pub const LEFT_LANE_END_NUMERATOR: u32 = 9;
pub const RIGHT_LANE_START_NUMERATOR: u32 = 19;
pub const LANE_DENOMINATOR: u32 = 28;

/// Destroyed-structure count a lane must reach before the planner switches
/// from the opening build to reinforcing that lane.
pub const REINFORCE_THRESHOLD: u32 = 3;

/// Bits that must be banked before an attack wave is sent once the
/// opening turns are over.
pub const STOCKPILE_THRESHOLD: f32 = 12.0;

/// Turns (counted from 0) during which mobile units are deployed as soon
/// as they are affordable.
pub const OPENING_TURNS: u32 = 2;

/// Turns between opponent-health checks for attack side rotation.
pub const STALL_WINDOW: u32 = 4;

/// Hard cap on deployments in a single turn.
pub const MAX_DEPLOYMENTS_PER_TURN: u32 = 64;

/// Default costs used when the match config does not carry them.
/// Structures are paid in cores and mobile units in bits.
pub const DEFAULT_WALL_COST: f32 = 1.0;
pub const DEFAULT_SHIELD_COST: f32 = 4.0;
pub const DEFAULT_TURRET_COST: f32 = 3.0;
pub const DEFAULT_SCOUT_COST: f32 = 1.0;
pub const DEFAULT_DEMOLISHER_COST: f32 = 3.0;
pub const DEFAULT_INTERCEPTOR_COST: f32 = 1.0;
