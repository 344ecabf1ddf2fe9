//! Frogger Road headless runner
//!
//! Drives a road with two bot players: the main thread ticks at the
//! configured cadence while each bot sends moves from its own thread.
//!
//! Usage: `frogger-road [config.json] [seed]`

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use frogger_road::consts::LANE_COUNT;
use frogger_road::sim::{Car, FrogMove, Road, StateChange};
use frogger_road::{RoadConfig, RoadError};

/// Give up after this many ticks without a winner
const MAX_TICKS: u64 = 6000;
/// Bots move once every this many ticks
const BOT_MOVE_EVERY_TICKS: u32 = 4;

fn log_change(source: &str, change: &StateChange) {
    if log::log_enabled!(log::Level::Trace) {
        match serde_json::to_string(change) {
            Ok(json) => log::trace!("{}: {}", source, json),
            Err(e) => log::warn!("{}: failed to encode change: {}", source, e),
        }
    }
}

/// Mostly hops forward, sometimes sideways, rarely back
fn bot_move(rng: &mut Pcg32) -> FrogMove {
    match rng.random_range(0..10) {
        0..=4 => FrogMove::Up,
        5 | 6 => FrogMove::Left,
        7 | 8 => FrogMove::Right,
        _ => FrogMove::Down,
    }
}

fn run_bot(
    road: Arc<Road>,
    first: bool,
    seed: u64,
    stop: Arc<AtomicBool>,
    winner: Arc<OnceLock<bool>>,
) {
    let mut rng = Pcg32::seed_from_u64(seed);
    let pause_ms = road.config().tick_ms as u64 * u64::from(BOT_MOVE_EVERY_TICKS);
    let pause = Duration::from_millis(pause_ms);
    let name = if first { "frog 1" } else { "frog 2" };

    while !stop.load(Ordering::Acquire) {
        let mv = bot_move(&mut rng);
        let mut sink = |change: StateChange| log_change(name, &change);
        let won = road.update_frog(first, mv, &mut sink);
        if won {
            if winner.set(first).is_ok() {
                log::info!("{} crossed the road!", name);
            }
            stop.store(true, Ordering::Release);
        }
        thread::sleep(pause);
    }
}

fn main() -> Result<(), RoadError> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Frogger Road (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => RoadConfig::load(path)?,
        None => RoadConfig::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345u64);
    log::info!("Bot seed: {}", seed);

    let road = Arc::new(Road::with_config(config)?);
    for lane in 0..LANE_COUNT {
        let width = road.config().block_size * (1 + lane % 3) as f32;
        road.add_car(Car::new(width), lane)?;
    }
    let lanes = road.lanes();
    for lane in 0..lanes.len() {
        log::debug!(
            "Lane {} ({}): y={:?} speed={:?}",
            lane,
            if lanes.is_top(lane) { "top" } else { "bottom" },
            lanes.y(lane),
            lanes.speed(lane)
        );
    }
    log::info!("{} cars on the road", road.car_count());
    road.add_frog()?;
    road.add_frog()?;

    let stop = Arc::new(AtomicBool::new(false));
    let winner = Arc::new(OnceLock::new());
    let bots: Vec<_> = [true, false]
        .into_iter()
        .map(|first| {
            let road = Arc::clone(&road);
            let stop = Arc::clone(&stop);
            let winner = Arc::clone(&winner);
            let bot_seed = seed.wrapping_add(u64::from(first));
            thread::spawn(move || run_bot(road, first, bot_seed, stop, winner))
        })
        .collect();

    let tick_len = Duration::from_millis(road.config().tick_ms as u64);
    let mut ticks = 0;
    while ticks < MAX_TICKS && !stop.load(Ordering::Acquire) {
        let change = road.tick();
        if !change.frogs_unchanged() {
            log::info!(
                "Tick {}: deaths {} / {}",
                ticks,
                road.frog_deaths(true),
                road.frog_deaths(false)
            );
        }
        log_change("tick", &change);
        ticks += 1;
        thread::sleep(tick_len);
    }
    stop.store(true, Ordering::Release);

    for bot in bots {
        if bot.join().is_err() {
            log::error!("Bot thread panicked");
        }
    }

    match winner.get() {
        Some(first) => log::info!("Winner: frog {}", if *first { 1 } else { 2 }),
        None => log::info!("No winner after {} ticks", ticks),
    }
    log::info!(
        "Final deaths: frog 1 = {}, frog 2 = {}",
        road.frog_deaths(true),
        road.frog_deaths(false)
    );
    Ok(())
}
