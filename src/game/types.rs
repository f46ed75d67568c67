//! Bar Hopper data structures.
//!
//! All positions are in world pixels on a fixed 400×300 playfield; the UI
//! scales them to whatever terminal area it gets.

use crate::core::config::GameConfig;
use crate::core::constants::*;
use rand::Rng;

/// Axis-aligned rectangle in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// True if the interiors overlap. Rectangles that only share an edge
    /// do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Which side of the bar something sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Above,
    Below,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Self::Above => Self::Below,
            Self::Below => Self::Above,
        }
    }

    /// Top edge of an obstacle placed on this side.
    pub fn obstacle_y(self) -> i32 {
        match self {
            Self::Above => OBSTACLE_ABOVE_Y,
            Self::Below => OBSTACLE_BELOW_Y,
        }
    }

    /// Fair coin flip between the two sides.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Self::Above
        } else {
            Self::Below
        }
    }
}

/// Horizontal travel direction of the obstacles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Multiplier applied to the speed each frame.
    pub fn sign(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// X where new obstacles appear: just past the edge they enter from.
    pub fn spawn_x(self) -> i32 {
        match self {
            Self::Left => SCREEN_WIDTH,
            Self::Right => -OBSTACLE_SIZE,
        }
    }

    /// False once an obstacle at `x` has fully left through the trailing edge.
    pub fn keeps(self, x: i32) -> bool {
        match self {
            Self::Left => x > -OBSTACLE_SIZE,
            Self::Right => x < SCREEN_WIDTH,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Left => "←",
            Self::Right => "→",
        }
    }
}

/// The player token. Its x never changes; y follows `on_top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Player {
    pub on_top: bool,
}

impl Player {
    pub fn side(&self) -> Side {
        if self.on_top {
            Side::Above
        } else {
            Side::Below
        }
    }

    pub fn y(&self) -> i32 {
        if self.on_top {
            PLAYER_TOP_Y
        } else {
            PLAYER_BOTTOM_Y
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(PLAYER_X, self.y(), PLAYER_SIZE, PLAYER_SIZE)
    }

    /// Jump to the other side of the bar.
    pub fn hop(&mut self) {
        self.on_top = !self.on_top;
    }
}

/// A single obstacle sliding along one side of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    /// Left edge in world pixels. May be negative while entering/leaving.
    pub x: i32,
    pub side: Side,
}

impl Obstacle {
    pub fn new(x: i32, side: Side) -> Self {
        Self { x, side }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.side.obstacle_y(), OBSTACLE_SIZE, OBSTACLE_SIZE)
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarHopperResult {
    /// An obstacle hit the player.
    Crashed,
    /// The player quit mid-run.
    Quit,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct BarHopperGame {
    pub game_result: Option<BarHopperResult>,
    /// True until the player presses Space to begin. Frames paused while waiting.
    pub waiting_to_start: bool,
    pub paused: bool,

    pub player: Player,
    pub obstacles: Vec<Obstacle>,

    // -- Progression --
    /// One point per spawn cycle survived.
    pub score: u32,
    /// Obstacle speed in pixels per frame.
    pub speed: i32,
    pub direction: Direction,

    // -- Timing --
    /// Frames simulated so far. Spawn cycles run when this is a multiple of
    /// the spawn interval, so the very first frame spawns.
    pub frame_count: u64,
    /// Sub-frame time accumulator (milliseconds).
    pub accumulated_time_ms: u64,

    // -- Cached config --
    pub frame_ms: u64,
    pub spawn_interval: u64,
    pub speed_up_every: u32,
    pub reverse_every: u32,
}

impl BarHopperGame {
    /// Create a new run with the given tuning.
    pub fn new(config: &GameConfig) -> Self {
        let config = config.sanitized();
        Self {
            game_result: None,
            waiting_to_start: true,
            paused: false,

            player: Player::default(),
            obstacles: Vec::new(),

            score: 0,
            speed: config.initial_speed,
            direction: Direction::Left,

            frame_count: 0,
            accumulated_time_ms: 0,

            frame_ms: config.frame_ms,
            spawn_interval: config.spawn_interval,
            speed_up_every: config.speed_up_every,
            reverse_every: config.reverse_every,
        }
    }

    /// True while frames should advance.
    pub fn is_running(&self) -> bool {
        self.game_result.is_none() && !self.waiting_to_start && !self.paused
    }

    /// Points remaining until the next direction reversal.
    pub fn points_until_reversal(&self) -> u32 {
        self.reverse_every - self.score % self.reverse_every
    }

    /// Push one or two obstacles at the leading edge, never two on the same
    /// side. Returns how many were spawned.
    pub fn spawn_obstacles<R: Rng>(&mut self, rng: &mut R) -> usize {
        let count = rng.gen_range(1..=MAX_OBSTACLES_PER_SPAWN);
        let x = self.direction.spawn_x();
        let mut used: Vec<Side> = Vec::with_capacity(MAX_OBSTACLES_PER_SPAWN);

        for _ in 0..count {
            let preferred = Side::random(rng);
            let side = if used.contains(&preferred) {
                preferred.opposite()
            } else {
                preferred
            };
            self.obstacles.push(Obstacle::new(x, side));
            used.push(side);
        }

        count
    }
}

impl Default for BarHopperGame {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
