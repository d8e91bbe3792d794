/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, for `init_state`, an RNG handle) and returns a
/// brand-new `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::entities::{
    Explosion, Facing, GameState, GameStatus, Hazard, HeldKeys, Player, PlayerVariant,
    Projectile, Rect, Score, EXPLOSION_SIZE, FIELD_HEIGHT, FIELD_WIDTH, HAZARD_SIZE,
    NUM_HAZARDS, PLAYER_SIZE, PROJECTILE_HEIGHT, PROJECTILE_WIDTH, STEP,
};

/// Frames an explosion stays on screen.
const EXPLOSION_LIFE: i32 = 50;

// ── Bounds check ─────────────────────────────────────────────────────────────

/// Whether `rect` lies fully inside the field, per axis:
/// `(horizontally_inside, vertically_inside)`.
///
/// Used three ways: to revert the player's move, to despawn projectiles,
/// and to decide which hazard velocity component to reflect.
pub fn check_bound(rect: &Rect) -> (bool, bool) {
    let horiz = rect.left() >= 0 && rect.right() <= FIELD_WIDTH;
    let vert = rect.top() >= 0 && rect.bottom() <= FIELD_HEIGHT;
    (horiz, vert)
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: player centred at (300, 200) facing right,
/// NUM_HAZARDS hazards at uniformly random positions (field edges included)
/// all moving (+STEP, +STEP).
pub fn init_state(rng: &mut impl Rng) -> GameState {
    let hazards = (0..NUM_HAZARDS)
        .map(|_| Hazard {
            rect: Rect::from_center(
                rng.gen_range(0..=FIELD_WIDTH),
                rng.gen_range(0..=FIELD_HEIGHT),
                HAZARD_SIZE,
                HAZARD_SIZE,
            ),
            vx: STEP,
            vy: STEP,
        })
        .collect();

    GameState {
        player: Player {
            rect: Rect::from_center(300, 200, PLAYER_SIZE, PLAYER_SIZE),
            facing: Facing::Right,
            variant: PlayerVariant::Normal,
        },
        hazards,
        projectiles: Vec::new(),
        explosions: Vec::new(),
        score: Score::new(0),
        status: GameStatus::Playing,
        frame: 0,
    }
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

/// Move the player by the sum of the held direction keys.
///
/// The move is atomic: if the summed displacement would leave the field on
/// either axis, the position is left untouched (no per-axis clamping).  A
/// nonzero sum still updates the facing and restores the directional
/// sprite, even when the position was reverted.
pub fn move_player(state: &GameState, keys: &HeldKeys) -> GameState {
    let mut dx = 0;
    let mut dy = 0;
    if keys.up {
        dy -= STEP;
    }
    if keys.down {
        dy += STEP;
    }
    if keys.left {
        dx -= STEP;
    }
    if keys.right {
        dx += STEP;
    }

    let moved = state.player.rect.shifted(dx, dy);
    let rect = if check_bound(&moved) == (true, true) {
        moved
    } else {
        state.player.rect
    };

    let (facing, variant) = match Facing::from_delta(dx, dy) {
        Some(f) => (f, PlayerVariant::Normal),
        None => (state.player.facing, state.player.variant),
    };

    GameState {
        player: Player { rect, facing, variant },
        ..state.clone()
    }
}

/// Fire one projectile from the player's leading edge.
///
/// Velocity is the facing delta, so diagonal shots are faster in Euclidean
/// terms than axial ones — deliberate, not normalized.
pub fn fire_projectile(state: &GameState) -> GameState {
    let (vx, vy) = state.player.facing.delta();
    let (cx, cy) = state.player.rect.center();
    let rect = Rect::from_center(
        cx + state.player.rect.w / 2 * vx / STEP,
        cy + state.player.rect.h / 2 * vy / STEP,
        PROJECTILE_WIDTH,
        PROJECTILE_HEIGHT,
    );

    let mut projectiles = state.projectiles.clone();
    projectiles.push(Projectile { rect, vx, vy });
    GameState {
        projectiles,
        ..state.clone()
    }
}

// ── Per-frame tick (pure) ────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Collisions are resolved first, against the previous frame's resolved
/// positions; movement and lifetime updates follow.  Destroyed entities are
/// filtered out before this function returns, so the collections never
/// carry placeholders between frames.
pub fn tick(state: &GameState) -> GameState {
    let frame = state.frame + 1;

    // ── 1. Player ↔ hazards: terminal transition ─────────────────────────────
    if state
        .hazards
        .iter()
        .any(|h| h.rect.intersects(&state.player.rect))
    {
        return GameState {
            player: Player {
                variant: PlayerVariant::Defeated,
                ..state.player.clone()
            },
            status: GameStatus::GameOver,
            frame,
            ..state.clone()
        };
    }

    // ── 2. Projectiles ↔ hazards: first match per projectile wins ───────────
    let mut hit_hazards: Vec<usize> = Vec::new();
    let mut used_projectiles: Vec<usize> = Vec::new();
    let mut explosions = state.explosions.clone();

    for (pi, projectile) in state.projectiles.iter().enumerate() {
        for (hi, hazard) in state.hazards.iter().enumerate() {
            if !hit_hazards.contains(&hi) && projectile.rect.intersects(&hazard.rect) {
                hit_hazards.push(hi);
                used_projectiles.push(pi);
                let (cx, cy) = hazard.rect.center();
                explosions.push(Explosion {
                    rect: Rect::from_center(cx, cy, EXPLOSION_SIZE, EXPLOSION_SIZE),
                    life: EXPLOSION_LIFE,
                });
                break;
            }
        }
    }

    let score_gain = hit_hazards.len() as u32;

    let hazards: Vec<Hazard> = state
        .hazards
        .iter()
        .enumerate()
        .filter(|(i, _)| !hit_hazards.contains(i))
        .map(|(_, h)| h.clone())
        .collect();

    let projectiles: Vec<Projectile> = state
        .projectiles
        .iter()
        .enumerate()
        .filter(|(i, _)| !used_projectiles.contains(i))
        .map(|(_, p)| p.clone())
        .collect();

    // ── 3. Projectiles advance while fully in bounds ─────────────────────────
    // An out-of-bounds projectile is dropped without moving.
    let projectiles: Vec<Projectile> = projectiles
        .into_iter()
        .filter_map(|p| {
            if check_bound(&p.rect) == (true, true) {
                Some(Projectile {
                    rect: p.rect.shifted(p.vx, p.vy),
                    ..p
                })
            } else {
                None
            }
        })
        .collect();

    // ── 4. Hazards reflect per axis, then always move ────────────────────────
    // Position is not clamped before the flip, so a hazard can overshoot the
    // wall slightly on the frame it bounces.
    let hazards: Vec<Hazard> = hazards
        .into_iter()
        .map(|h| {
            let (horiz, vert) = check_bound(&h.rect);
            let vx = if horiz { h.vx } else { -h.vx };
            let vy = if vert { h.vy } else { -h.vy };
            Hazard {
                rect: h.rect.shifted(vx, vy),
                vx,
                vy,
            }
        })
        .collect();

    // ── 5. Explosions: expired ones out first, survivors burn down one step ──
    let explosions: Vec<Explosion> = explosions
        .into_iter()
        .filter(|e| e.life >= 0)
        .map(|e| Explosion {
            life: e.life - 1,
            ..e
        })
        .collect();

    // ── 6. Score & player sprite ─────────────────────────────────────────────
    let player = if score_gain > 0 {
        Player {
            variant: PlayerVariant::Happy,
            ..state.player.clone()
        }
    } else {
        state.player.clone()
    };

    let mut score = state.score.clone();
    if score_gain > 0 {
        score.update(score.value + score_gain);
    }

    GameState {
        player,
        hazards,
        projectiles,
        explosions,
        score,
        status: GameStatus::Playing,
        frame,
    }
}
