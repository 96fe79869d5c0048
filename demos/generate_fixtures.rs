use clap::Parser;
use clip_regress::{generate_workload_with_count, FixtureStore, LoadProfile};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate clip workload fixtures", long_about = None)]
struct Args {
    /// Directory the fixtures are written to
    #[arg(short, long, default_value = "data")]
    output: PathBuf,

    /// Seed for reproducible fixtures (entropy-seeded when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Override the per-profile record count
    #[arg(long)]
    count: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let store = FixtureStore::new(&args.output);
    for profile in LoadProfile::ALL {
        let count = args.count.unwrap_or_else(|| profile.path_count());
        println!("Generating {} records for {}", count, profile);

        let records = generate_workload_with_count(profile, count, &mut rng);
        let path = store.save(profile.fixture_name(), &records)?;
        println!("Wrote {:?}", path);
    }

    Ok(())
}
