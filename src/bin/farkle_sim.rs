use std::time::Instant;

use farkle_sim::{simulate_batch, sweep_cutoffs, SimulationConfig, TurnStats};

struct Args {
    config: SimulationConfig,
    sweep: Option<Vec<u32>>,
}

const USAGE: &str = "Usage: farkle-sim [--turns N] [--seed S] [--cutoff C] [--sweep C1,C2,...]";

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    let Some(value) = value else {
        eprintln!("Missing value for {}", flag);
        std::process::exit(1);
    };
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {} value: {}", flag, value);
        std::process::exit(1);
    })
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimulationConfig::default();
    let mut sweep = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--turns" => {
                i += 1;
                config.turns = parse_value("--turns", args.get(i));
            }
            "--seed" => {
                i += 1;
                config.seed = parse_value("--seed", args.get(i));
            }
            "--cutoff" => {
                i += 1;
                config = config.with_cutoff(parse_value("--cutoff", args.get(i)));
            }
            "--sweep" => {
                i += 1;
                let list: String = parse_value("--sweep", args.get(i));
                let cutoffs = list
                    .split(',')
                    .map(|c| {
                        c.trim().parse::<u32>().unwrap_or_else(|_| {
                            eprintln!("Invalid --sweep cutoff: {}", c);
                            std::process::exit(1);
                        })
                    })
                    .collect();
                sweep = Some(cutoffs);
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                println!();
                println!("Options:");
                println!("  --turns N          Number of turns to simulate (default: 10000)");
                println!("  --seed S           RNG seed (default: 42)");
                println!("  --cutoff C         Stop once the turn score exceeds C (default: none)");
                println!("  --sweep C1,C2,...  Run one batch per cutoff");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args { config, sweep }
}

fn init_threads() -> usize {
    let num_threads = std::env::var("RAYON_NUM_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    if rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .is_err()
    {
        eprintln!("Thread pool already initialized");
    }
    rayon::current_num_threads()
}

fn print_stats(stats: &TurnStats) {
    println!("  Mean:       {:.1}", stats.mean);
    println!("  Std dev:    {:.1}", stats.std_dev);
    println!("  Median:     {:.1}", stats.median);
    println!("  Mode:       {}", stats.mode);
    println!("  Min / Max:  {} / {}", stats.min, stats.max);
    println!("  Bust rate:  {:.2}%", stats.bust_rate() * 100.0);
    println!("  Zero rate:  {:.2}%", stats.zero_rate() * 100.0);
    println!("  Mean rolls: {:.2}", stats.mean_rolls);
}

fn main() {
    let Args { config, sweep } = parse_args();
    let threads = init_threads();

    println!("Farkle Simulation ({} turns, seed {}, {} threads)", config.turns, config.seed, threads);

    let t0 = Instant::now();
    match sweep {
        Some(cutoffs) => {
            let points = sweep_cutoffs(&config, &cutoffs).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            println!("{:>8} {:>10} {:>10} {:>8}", "cutoff", "mean", "median", "bust%");
            for point in &points {
                println!(
                    "{:>8} {:>10.1} {:>10.1} {:>7.2}%",
                    point.cutoff,
                    point.stats.mean,
                    point.stats.median,
                    point.stats.bust_rate() * 100.0
                );
            }
        }
        None => {
            let report = simulate_batch(&config).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            match config.turn.cutoff() {
                Some(cutoff) => println!("  Cutoff:     {}", cutoff),
                None => println!("  Cutoff:     none"),
            }
            print_stats(&report.stats);
        }
    }
    println!("Done in {:.2}s", t0.elapsed().as_secs_f64());
}
