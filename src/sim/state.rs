//! Game state and session lifecycle
//!
//! One `GameState` owns everything the frame loop mutates: the ship, both
//! entity groups, the session counters and the seeded RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Sprite;
use super::group::Group;
use super::ship::Ship;
use crate::consts::*;

/// Frame loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a click on the splash image; rocks don't spawn
    #[default]
    Splash,
    /// Active gameplay
    Playing,
}

/// Things that happened during a tick that the host may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    GameOver { score: u32, high_score: u32 },
    ThrustOn,
    ThrustOff,
    MissileFired,
    RocksDestroyed { hits: u32 },
    ShipHit { rocks: u32 },
}

/// Score and lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub score: u32,
    pub high_score: u32,
    /// May dip below zero for the rest of a tick with several ship hits
    pub lives: i32,
    pub phase: Phase,
    /// Frame clock driving the background scroll
    pub time: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            score: 0,
            high_score: 0,
            lives: STARTING_LIVES,
            phase: Phase::Splash,
            time: START_TIME,
        }
    }
}

impl Session {
    pub fn is_started(&self) -> bool {
        self.phase == Phase::Playing
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was built from
    pub seed: u64,
    pub session: Session,
    pub ship: Ship,
    pub rocks: Group<Sprite>,
    pub missiles: Group<Sprite>,
    pub rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            session: Session::default(),
            ship: Ship::default(),
            rocks: Group::new(),
            missiles: Group::new(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every event raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Splash -> Playing
    pub fn start(&mut self) {
        if self.session.is_started() {
            return;
        }
        self.session.phase = Phase::Playing;
        self.session.score = 0;
        self.push_event(GameEvent::GameStarted);
        log::info!("Game started (high score {})", self.session.high_score);
    }

    /// Playing -> Splash after the last life is lost
    pub fn game_over(&mut self) {
        self.session.phase = Phase::Splash;
        self.rocks.clear();
        self.session.high_score = self.session.high_score.max(self.session.score);
        self.session.lives = STARTING_LIVES;
        self.push_event(GameEvent::GameOver {
            score: self.session.score,
            high_score: self.session.high_score,
        });
        log::info!(
            "Game over: score {}, high score {}",
            self.session.score,
            self.session.high_score
        );
    }
}
