/// Game entity types and the small amount of geometry they share — no
/// game logic lives here.

// ── Field constants ───────────────────────────────────────────────────────────

/// Logical play-field size.  All entity rectangles live in this coordinate
/// space; the display scales it down to terminal cells.
pub const FIELD_WIDTH: i32 = 1100;
pub const FIELD_HEIGHT: i32 = 650;

/// Per-axis displacement magnitude shared by player movement, projectile
/// velocity and the hazards' initial velocity.
pub const STEP: i32 = 5;

/// Hazards spawned at session start.  Destroyed hazards never respawn.
pub const NUM_HAZARDS: usize = 5;

// Entity sizes, in field units.
pub const PLAYER_SIZE: i32 = 60;
pub const PROJECTILE_WIDTH: i32 = 40;
pub const PROJECTILE_HEIGHT: i32 = 20;
pub const HAZARD_SIZE: i32 = 20;
pub const EXPLOSION_SIZE: i32 = 40;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle: top-left corner + size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn from_center(cx: i32, cy: i32, w: i32, h: i32) -> Rect {
        Rect { x: cx - w / 2, y: cy - h / 2, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// The same rectangle moved by (dx, dy).
    pub fn shifted(&self, dx: i32, dy: i32) -> Rect {
        Rect { x: self.x + dx, y: self.y + dy, ..*self }
    }

    /// Strict overlap test — rectangles that merely touch edges do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

// ── Facing ────────────────────────────────────────────────────────────────────

/// The eight fixed player orientations, keyed by the exact movement delta
/// that produces them.  The display keeps one precomputed glyph per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Facing {
    /// Movement delta for this orientation, (±STEP, ±STEP) per axis.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Facing::Right => (STEP, 0),
            Facing::UpRight => (STEP, -STEP),
            Facing::Up => (0, -STEP),
            Facing::UpLeft => (-STEP, -STEP),
            Facing::Left => (-STEP, 0),
            Facing::DownLeft => (-STEP, STEP),
            Facing::Down => (0, STEP),
            Facing::DownRight => (STEP, STEP),
        }
    }

    /// Inverse of `delta`.  Returns `None` for (0, 0) — a zero move keeps
    /// the previous facing — and for any pair that is not one of the eight
    /// key-sum combinations.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Facing> {
        match (dx, dy) {
            (d, 0) if d == STEP => Some(Facing::Right),
            (d, e) if d == STEP && e == -STEP => Some(Facing::UpRight),
            (0, e) if e == -STEP => Some(Facing::Up),
            (d, e) if d == -STEP && e == -STEP => Some(Facing::UpLeft),
            (d, 0) if d == -STEP => Some(Facing::Left),
            (d, e) if d == -STEP && e == STEP => Some(Facing::DownLeft),
            (0, e) if e == STEP => Some(Facing::Down),
            (d, e) if d == STEP && e == STEP => Some(Facing::DownRight),
            _ => None,
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Which sprite the player shows.  `Happy` (set when a hazard is destroyed)
/// and `Defeated` (set on game over) override the directional sprite;
/// `Happy` reverts to `Normal` on the next nonzero movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerVariant {
    Normal,
    Happy,
    Defeated,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub rect: Rect,
    /// Persists across frames while no movement key is held.
    pub facing: Facing,
    pub variant: PlayerVariant,
}

// ── Moving entities ───────────────────────────────────────────────────────────

/// Velocity is fixed at spawn (copied from the player's facing) and never
/// changes afterwards.
#[derive(Clone, Debug)]
pub struct Projectile {
    pub rect: Rect,
    pub vx: i32,
    pub vy: i32,
}

/// A bouncing circular hazard, carried as its bounding square.  Velocity
/// sign flips independently per axis on wall contact.
#[derive(Clone, Debug)]
pub struct Hazard {
    pub rect: Rect,
    pub vx: i32,
    pub vy: i32,
}

/// Transient flicker effect left behind by a destroyed hazard.
#[derive(Clone, Debug)]
pub struct Explosion {
    pub rect: Rect,
    /// Starts at 50, decremented each frame; removed once negative.
    pub life: i32,
}

impl Explosion {
    /// Flicker phase: the top half of each 6-frame cycle shows the bright
    /// sprite, the bottom half the dim one.
    pub fn bright(&self) -> bool {
        self.life.rem_euclid(6) >= 3
    }
}

// ── Score ─────────────────────────────────────────────────────────────────────

/// Integer score plus its cached text rendering, regenerated whenever the
/// value changes.
#[derive(Clone, Debug)]
pub struct Score {
    pub value: u32,
    pub text: String,
}

impl Score {
    pub fn new(value: u32) -> Score {
        Score { value, text: format!("score:{}", value) }
    }

    /// Replace the stored count and re-render the display text.
    pub fn update(&mut self, value: u32) {
        self.value = value;
        self.text = format!("score:{}", value);
    }
}

// ── Input snapshot ────────────────────────────────────────────────────────────

/// The movement keys held this frame, sampled once per frame by the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub hazards: Vec<Hazard>,
    pub projectiles: Vec<Projectile>,
    pub explosions: Vec<Explosion>,
    pub score: Score,
    pub status: GameStatus,
    pub frame: u64,
}
