// Playfield geometry (world pixels, origin top-left)
pub const SCREEN_WIDTH: i32 = 400;
pub const SCREEN_HEIGHT: i32 = 300;
pub const BAR_Y: i32 = SCREEN_HEIGHT / 2;
pub const BAR_START_X: i32 = 10;
pub const BAR_END_X: i32 = SCREEN_WIDTH - 20;

// Gap between the bar and anything resting beside it
pub const BAR_GAP: i32 = 10;

// Player token
pub const PLAYER_SIZE: i32 = 20;
pub const PLAYER_X: i32 = SCREEN_WIDTH / 2 - PLAYER_SIZE / 2;
pub const PLAYER_TOP_Y: i32 = BAR_Y - PLAYER_SIZE;
pub const PLAYER_BOTTOM_Y: i32 = BAR_Y + BAR_GAP;

// Obstacles
pub const OBSTACLE_SIZE: i32 = 20;
pub const OBSTACLE_ABOVE_Y: i32 = BAR_Y - OBSTACLE_SIZE - BAR_GAP;
pub const OBSTACLE_BELOW_Y: i32 = BAR_Y + BAR_GAP;
pub const MAX_OBSTACLES_PER_SPAWN: usize = 2;

// Difficulty curve defaults
pub const DEFAULT_INITIAL_SPEED: i32 = 3;
pub const DEFAULT_SPAWN_INTERVAL_FRAMES: u64 = 30;
pub const DEFAULT_SPEED_UP_EVERY: u32 = 5;
pub const DEFAULT_REVERSE_EVERY: u32 = 25;

// Tick and timing
pub const DEFAULT_FRAME_MS: u64 = 30; // ~33 FPS
pub const MIN_FRAME_MS: u64 = 5;
pub const MAX_FRAME_MS: u64 = 200;
pub const MAX_TICK_DT_MS: u64 = 100;
pub const REALTIME_POLL_MS: u64 = 16;

// Persistence
pub const DATA_DIR_NAME: &str = ".barhopper";
pub const CONFIG_FILENAME: &str = "config.json";
pub const HIGHSCORES_FILENAME: &str = "highscores.json";
pub const LOG_FILENAME: &str = "barhopper.log";
pub const MAX_HIGH_SCORES: usize = 10;
