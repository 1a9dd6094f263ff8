use grid_astar::map::load_map;
use grid_astar::scenario::{load_scenarios, run_scenarios, save_results};
use grid_astar::solver::astar::AstarSolver;
use grid_astar::{Heuristic, MOVING_AI_HEADER_LINES};
use std::time::{Duration, Instant};

// Runs every query of a Moving AI scenario file on its map with both heuristics and writes one CSV
// record per query (results.csv unless an output path is given):
//
//     cargo run --release --example benchmark_runner -- maps/arena.map scenarios/arena.map.scen [output.csv]

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    if !(3..=4).contains(&args.len()) {
        eprintln!("Usage: <map_file> <scen_file> [output_csv]");
        std::process::exit(1);
    }
    let output = args.get(3).map_or("results.csv", String::as_str);
    let pathing_grid = load_map(&args[1], MOVING_AI_HEADER_LINES).expect("Could not load map");
    let scenarios = load_scenarios(&args[2]).expect("Could not load scenarios");
    println!(
        "Map: {}x{}, {} scenarios",
        pathing_grid.rows(),
        pathing_grid.cols(),
        scenarios.len()
    );

    let mut results = Vec::new();
    let mut total_time = Duration::ZERO;
    for heuristic in [Heuristic::Euclidean, Heuristic::Manhattan] {
        let solver = AstarSolver::new(heuristic);
        let number_of_scenarios = scenarios.len().max(1) as u32;
        let before = Instant::now();
        let records = run_scenarios(&solver, &heuristic.to_string(), &pathing_grid, &scenarios);
        let elapsed = before.elapsed();
        let found = records.iter().filter(|r| r.path_length.is_some()).count();
        println!(
            "\t{heuristic}: {found} paths, {} without path; elapsed time: {:.2?}; per scenario: {:.2?}",
            records.len() - found,
            elapsed,
            elapsed / number_of_scenarios
        );
        total_time += elapsed;
        results.extend(records);
    }
    println!("\tTotal benchmark time: {:.2?}", total_time);

    save_results(output, &results).expect("Could not write results");
    println!("Wrote {} results to {output}", results.len());
}
