//! grid4 — four orders on a 7×7 grid.
//!
//! Enumerates the 33 states of the model, exports the full transition table
//! and one episode per policy to `output/grid4/`, then compares the routes.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use tm_core::Action;
use tm_episode::{FixedOrder, NearestPickup, Policy, RandomPolicy, Rollout};
use tm_mdp::{TransitionTable, TransportationMdp};
use tm_output::{CsvWriter, EpisodeOutputObserver, OutputWriter, TransitionRow};
use tm_scenario::load_scenario_reader;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64  = 42;
const OUTPUT_DIR:      &str = "output/grid4";
const RANDOM_EPISODES: u64  = 5;

// ── Scenario ──────────────────────────────────────────────────────────────────

// Passengers are upper-case, drop-off locations lower-case; the order list
// refers to locations by upper-case name.
const SCENARIO_JSON: &str = r#"{
    "driver_start_point": [0, 0],
    "destinations": [["A", "X"], ["B", "Y"], ["C", "Z"], ["D", "W"]],
    "passengers": { "A": [1, 2], "B": [4, 1], "C": [2, 5], "D": [6, 6] },
    "locations":  { "x": [3, 3], "y": [0, 5], "z": [5, 0], "w": [6, 2] }
}"#;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== grid4 — single-driver pickup and delivery ===");
    println!();

    // 1. Model.
    let config = load_scenario_reader(Cursor::new(SCENARIO_JSON))?;
    let mdp = TransportationMdp::new(config)?;
    println!(
        "Orders: {}  |  States: {}  |  Start: {}",
        mdp.order_count(),
        mdp.state_count(),
        mdp.config().driver_start_point,
    );
    println!();

    // 2. State space.
    println!("{:<6} {:<12} {:<10} {:<8}", "Index", "Slots", "Car", "Actions");
    println!("{}", "-".repeat(40));
    for s in mdp.all_states() {
        let actions: Vec<String> = mdp
            .possible_actions(s)?
            .iter()
            .map(Action::to_string)
            .collect();
        println!(
            "{:<6} {:<12} {:<10} {:<8}",
            s.0,
            mdp.index_to_state(s)?.to_string(),
            mdp.car_position(s)?.to_string(),
            if actions.is_empty() { "-".to_owned() } else { actions.join(",") },
        );
    }
    println!();

    // 3. Transition table.
    let t0 = Instant::now();
    let table = TransitionTable::build(&mdp)?;
    println!(
        "Transition table: {} (state, action) pairs in {:.3} ms",
        table.len(),
        t0.elapsed().as_secs_f64() * 1e3
    );

    let mut writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    writer.write_transitions(&TransitionRow::collect(&table, mdp.space())?)?;

    // 4. Episodes.
    let mut obs = EpisodeOutputObserver::new(writer);
    let rollout = Rollout::new(&mdp, SEED);
    let policies: Vec<(Box<dyn Policy>, u64)> = vec![
        (Box::new(FixedOrder::ascending(mdp.order_count() as u8)), 1),
        (Box::new(NearestPickup), 1),
        (Box::new(RandomPolicy), RANDOM_EPISODES),
    ];

    println!();
    println!("{:<10} {:<8} {:<10} {:<10} {:<12}", "Policy", "Episode", "Reward", "Distance", "Order");
    println!("{}", "-".repeat(52));
    let mut episode = 0;
    for (policy, count) in &policies {
        for _ in 0..*count {
            let summary = rollout.run(episode, policy.as_ref(), &mut obs)?;
            let order: Vec<String> = summary.actions().iter().map(Action::to_string).collect();
            println!(
                "{:<10} {:<8} {:<10} {:<10} {:<12}",
                summary.policy,
                summary.episode,
                summary.total_reward,
                summary.distance(),
                order.join(" → "),
            );
            episode += 1;
        }
    }

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    obs.into_writer().finish()?;

    println!();
    println!("Output written to {OUTPUT_DIR}/ (episode_steps.csv, transitions.csv)");
    Ok(())
}
