/// Game tuning parameters for air hockey
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Rink
    pub const RINK_WIDTH: f32 = 500.0;
    pub const RINK_HEIGHT: f32 = 800.0;
    pub const WALL_THICKNESS: f32 = 10.0;

    // Paddle
    pub const PADDLE_RADIUS: f32 = 40.0;
    pub const PADDLE_MASS: f32 = 100.0;
    pub const PADDLE_FRICTION_AIR: f32 = 0.15;
    pub const PADDLE_START_OFFSET: f32 = 100.0; // distance from own goal line

    // Puck
    pub const PUCK_RADIUS: f32 = 30.0;
    pub const PUCK_MASS: f32 = 1.0; // engine usually derives it from the area
    pub const PUCK_RESTITUTION: f32 = 1.0;
    pub const PUCK_FRICTION_AIR: f32 = 0.001;

    // Forces
    pub const KEY_FORCE: f32 = 0.5;
    pub const CONFINEMENT_STIFFNESS: f32 = 0.05;

    // AI
    pub const AI_FORCE: f32 = 0.5;
    pub const AI_RMIN: f32 = -0.3; // 1 = never misses, -1 = fully erratic
    pub const AI_HOME_Y: f32 = 200.0; // 50 makes it a lot stronger
    pub const AI_CENTER_TOLERANCE: f32 = 30.0;
    pub const AI_LOST_PUCK_MARGIN: f32 = 50.0;
    pub const AI_FLUSTER_SPREAD: f32 = 4.0;

    // Re-serve
    pub const RESPAWN_X_MARGIN: f32 = 10.0;
    pub const RESPAWN_Y_MIN: f32 = 40.0;
    pub const RESPAWN_Y_MAX_MARGIN: f32 = 80.0;
    pub const RESPAWN_MAX_SPEED: f32 = 10.0;
}
