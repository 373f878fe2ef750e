//! Sky Runner entry point
//!
//! Headless demo driver: the external collaborator side of the core's
//! contract. Owns the tick cadence and the input script, steps the session,
//! and reacts to events the way a UI/audio layer would.

use std::time::{SystemTime, UNIX_EPOCH};

use sky_runner::consts::TICK_HZ;
use sky_runner::{GameEvent, GamePhase, JsonFileStore, Session, TickInput};

/// Scripted input: wander left and right, hop every second and a half
fn scripted_input(tick: u64) -> TickInput {
    let phase = tick % 240;
    TickInput {
        left: phase < 100,
        right: (120..220).contains(&phase),
        jump: tick % 90 < 2,
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    log::info!("Sky Runner starting with seed {seed}");

    let store = JsonFileStore::new("sky_runner_highscore.json");
    let mut session = Session::new(seed, store);
    session.start();

    // Cap the demo at five simulated minutes
    let max_ticks = 300 * TICK_HZ as u64;
    let mut tick_no = 0u64;

    while session.phase() == GamePhase::Running && tick_no < max_ticks {
        tick_no += 1;
        let events = session.step(&scripted_input(tick_no)).to_vec();
        for event in events {
            match event {
                GameEvent::PlayerHit => {
                    log::info!(
                        "tick {tick_no}: hit, {} lives left",
                        session.state().lives
                    );
                }
                GameEvent::PickupCollected { value, .. } => {
                    log::info!(
                        "tick {tick_no}: collected {value}, score {}",
                        session.state().score
                    );
                }
                GameEvent::GameOver { score, new_best } => {
                    log::info!("tick {tick_no}: game over, score {score} (new best: {new_best})");
                }
                _ => {}
            }
        }
    }

    let state = session.state();
    println!(
        "run finished after {} ticks: score {}, lives {}, best {}",
        state.time_ticks,
        state.score,
        state.lives,
        session.best_score()
    );
}
