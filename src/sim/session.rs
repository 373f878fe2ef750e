//! Session/score state machine
//!
//! Owns the run lifecycle (`Idle -> Running -> Over -> Running`) and reduces
//! simulation events into score and lives. This reducer is the only code
//! path that mutates score, lives or phase, which keeps scoring auditable
//! independent of everything else.

use crate::highscores::HighScoreStore;
use crate::tuning::Tuning;

use super::state::{GameEvent, GamePhase, GameState};
use super::tick::{TickInput, tick};

/// A playable session: game state plus the best-score store seam.
///
/// The external driver calls [`Session::step`] once per fixed tick and reads
/// the state snapshot back for rendering; audio/UI layers observe
/// [`Session::last_events`].
#[derive(Debug)]
pub struct Session<S> {
    state: GameState,
    store: S,
    best: u32,
    events: Vec<GameEvent>,
}

impl<S: HighScoreStore> Session<S> {
    /// New idle session; loads the persisted best score from the store
    pub fn new(seed: u64, store: S) -> Self {
        Self::with_tuning(seed, Tuning::default(), store)
    }

    /// New idle session with custom balance
    pub fn with_tuning(seed: u64, tuning: Tuning, mut store: S) -> Self {
        let best = store.load();
        Self {
            state: GameState::with_tuning(seed, tuning),
            store,
            best,
            events: Vec::new(),
        }
    }

    /// Start (or restart) a run.
    ///
    /// Valid from any phase; restarting mid-run is a forced reset. All
    /// per-run state is reinitialized so nothing leaks between runs; the
    /// best score survives.
    pub fn start(&mut self) {
        if self.state.phase == GamePhase::Running {
            log::info!("restart requested mid-run, forcing reset");
        }
        self.state.reset_run();
        self.events.clear();
        log::info!("run started (seed {})", self.state.seed);
    }

    /// Advance one tick and reduce the resulting events.
    ///
    /// A no-op unless the phase is `Running`; the driver is expected to gate
    /// on status but the core declines to mutate state regardless.
    pub fn step(&mut self, input: &TickInput) -> &[GameEvent] {
        self.events.clear();
        if self.state.phase != GamePhase::Running {
            return &self.events;
        }

        let mut events = tick(&mut self.state, input);
        self.reduce(&mut events);
        self.events = events;
        &self.events
    }

    /// Apply score/lives transitions for this tick's events.
    ///
    /// `PickupCollected` is the only way score grows; `PlayerHit` is the
    /// only way lives shrink. Lives reaching zero ends the run, appends
    /// `GameOver` and persists the best score iff this run beat it.
    fn reduce(&mut self, events: &mut Vec<GameEvent>) {
        for event in events.iter() {
            match *event {
                GameEvent::PickupCollected { value, .. } => {
                    self.state.score += value;
                }
                GameEvent::PlayerHit if self.state.lives > 0 => {
                    self.state.lives -= 1;
                    if self.state.lives == 0 {
                        self.state.phase = GamePhase::Over;
                    }
                }
                _ => {}
            }
        }

        if self.state.phase == GamePhase::Over {
            let score = self.state.score;
            let new_best = score > self.best;
            if new_best {
                self.best = score;
                self.store.save(score);
            }
            log::info!(
                "game over at tick {}: score {} (best {})",
                self.state.time_ticks,
                score,
                self.best
            );
            events.push(GameEvent::GameOver { score, new_best });
        }
    }

    /// Full state snapshot for the render consumer
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Events raised by the most recent step
    pub fn last_events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Best score seen across runs (monotonic max)
    pub fn best_score(&self) -> u32 {
        self.best
    }

    /// The underlying store, mainly for inspection
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryStore;
    use crate::sim::particles::EXPLOSION_COUNT;
    use crate::sim::state::{Body, Hazard, HazardKind, Pickup};
    use glam::Vec2;

    fn hazard_on_player(session: &Session<MemoryStore>) -> Hazard {
        Hazard {
            id: 9000 + session.state.hazards.len() as u32,
            kind: HazardKind::Fireball,
            body: Body::new(session.state.player.body.pos, Vec2::splat(30.0)),
        }
    }

    fn coin_on_player(session: &Session<MemoryStore>) -> Pickup {
        Pickup {
            id: 9500,
            body: Body::new(session.state.player.body.pos, Vec2::splat(25.0)),
            value: 10,
            collected: false,
            rotation: 0.0,
            pulse_scale: 1.0,
        }
    }

    #[test]
    fn lifecycle_idle_running_over() {
        let mut session = Session::new(1, MemoryStore::default());
        assert_eq!(session.phase(), GamePhase::Idle);

        session.start();
        assert_eq!(session.phase(), GamePhase::Running);
        assert_eq!(session.state().lives, 3);
        assert_eq!(session.state().score, 0);
    }

    #[test]
    fn hit_costs_one_life_and_bursts() {
        // Scenario: hazard overlapping the player on its spawn tick
        let mut session = Session::new(2, MemoryStore::default());
        session.start();
        let hazard = hazard_on_player(&session);
        session.state.hazards.push(hazard);

        let events = session.step(&TickInput::default()).to_vec();
        assert!(events.contains(&GameEvent::PlayerHit));
        assert_eq!(session.state().lives, 2);
        assert!(session.state().hazards.is_empty());
        assert_eq!(session.state().particles.len(), EXPLOSION_COUNT);
        assert_eq!(session.phase(), GamePhase::Running);
    }

    #[test]
    fn collection_scores_exactly_once() {
        let mut session = Session::new(3, MemoryStore::default());
        session.start();
        let coin = coin_on_player(&session);
        session.state.pickups.push(coin);

        session.step(&TickInput::default());
        assert_eq!(session.state().score, 10);

        // Overlap would persist; the latch must hold the score steady
        session.step(&TickInput::default());
        assert_eq!(session.state().score, 10);
        assert!(session.state().pickups.is_empty());
    }

    #[test]
    fn score_is_monotonic_over_a_run() {
        let mut session = Session::new(4, MemoryStore::default());
        session.start();
        let mut last = 0;
        for i in 0..2000 {
            let input = TickInput {
                left: i % 7 < 3,
                right: i % 11 < 4,
                jump: i % 13 == 0,
            };
            session.step(&input);
            assert!(session.state().score >= last);
            last = session.state().score;
            if session.phase() == GamePhase::Over {
                break;
            }
        }
    }

    #[test]
    fn third_hit_ends_the_run() {
        let mut session = Session::new(5, MemoryStore::default());
        session.start();

        for expected_lives in [2, 1] {
            let hazard = hazard_on_player(&session);
            session.state.hazards.push(hazard);
            session.step(&TickInput::default());
            assert_eq!(session.state().lives, expected_lives);
            assert_eq!(session.phase(), GamePhase::Running);
        }

        let hazard = hazard_on_player(&session);
        session.state.hazards.push(hazard);
        let events = session.step(&TickInput::default()).to_vec();
        assert_eq!(session.state().lives, 0);
        assert_eq!(session.phase(), GamePhase::Over);
        assert!(
            events
                .iter()
                .any(|e| matches!(e, GameEvent::GameOver { .. }))
        );
    }

    #[test]
    fn game_over_saves_only_a_new_best() {
        // Prior best of 50 is not beaten by a scoreless run
        let mut session = Session::new(6, MemoryStore::with_best(50));
        session.start();
        for _ in 0..3 {
            let hazard = hazard_on_player(&session);
            session.state.hazards.push(hazard);
            session.step(&TickInput::default());
        }
        assert_eq!(session.phase(), GamePhase::Over);
        assert_eq!(session.store().saves, 0);
        assert_eq!(session.best_score(), 50);

        // A run that scores before dying does beat it
        let mut session = Session::new(7, MemoryStore::with_best(5));
        session.start();
        let coin = coin_on_player(&session);
        session.state.pickups.push(coin);
        session.step(&TickInput::default());
        for _ in 0..3 {
            let hazard = hazard_on_player(&session);
            session.state.hazards.push(hazard);
            session.step(&TickInput::default());
        }
        assert_eq!(session.phase(), GamePhase::Over);
        assert_eq!(session.store().saves, 1);
        assert_eq!(session.store().best, 10);
        assert_eq!(session.best_score(), 10);

        let events = session.last_events();
        assert!(events.contains(&GameEvent::GameOver {
            score: 10,
            new_best: true
        }));
    }

    #[test]
    fn nothing_mutates_after_game_over() {
        let mut session = Session::new(8, MemoryStore::default());
        session.start();
        for _ in 0..3 {
            let hazard = hazard_on_player(&session);
            session.state.hazards.push(hazard);
            session.step(&TickInput::default());
        }
        assert_eq!(session.phase(), GamePhase::Over);

        let score = session.state().score;
        let lives = session.state().lives;
        let pos = session.state().player.body.pos;
        let ticks = session.state().time_ticks;

        for _ in 0..50 {
            let events = session.step(&TickInput {
                right: true,
                jump: true,
                ..Default::default()
            });
            assert!(events.is_empty());
        }
        assert_eq!(session.state().score, score);
        assert_eq!(session.state().lives, lives);
        assert_eq!(session.state().player.body.pos, pos);
        assert_eq!(session.state().time_ticks, ticks);
    }

    #[test]
    fn restart_clears_prior_run_entities() {
        let mut session = Session::new(9, MemoryStore::default());
        session.start();
        let hazard = hazard_on_player(&session);
        session.state.hazards.push(hazard);
        let coin = coin_on_player(&session);
        session.state.pickups.push(coin);
        session.step(&TickInput::default());
        assert!(session.state().score > 0 || session.state().lives < 3);

        // Restart while running is a forced reset
        session.start();
        assert_eq!(session.phase(), GamePhase::Running);
        assert!(session.state().hazards.is_empty());
        assert!(session.state().pickups.is_empty());
        assert!(session.state().particles.is_empty());
        assert_eq!(session.state().score, 0);
        assert_eq!(session.state().lives, 3);
        assert_eq!(session.state().time_ticks, 0);
    }

    #[test]
    fn particle_layer_does_not_affect_outcome() {
        let mut plain = Tuning::default();
        plain.particles_enabled = false;

        let mut with_fx = Session::new(10, MemoryStore::default());
        let mut without_fx = Session::with_tuning(10, plain, MemoryStore::default());
        with_fx.start();
        without_fx.start();

        for i in 0..3000u32 {
            let input = TickInput {
                left: i % 5 == 0,
                right: i % 3 == 0,
                jump: i % 60 < 2,
            };
            with_fx.step(&input);
            without_fx.step(&input);
        }

        assert_eq!(with_fx.state().score, without_fx.state().score);
        assert_eq!(with_fx.state().lives, without_fx.state().lives);
        assert_eq!(with_fx.phase(), without_fx.phase());
    }
}
