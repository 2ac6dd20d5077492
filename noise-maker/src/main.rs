mod args;
mod generator;
mod serve;

use args::CliArgs;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use serve::serve;
use std::fs;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    let log = generator::generate_log(&mut rng, *args.rows());

    match args.serve() {
        Some(port) => serve(log, *port).await?,
        None if args.out() == "-" => print!("{log}"),
        None => {
            fs::write(args.out(), &log)?;
            println!("Wrote {} rows to {}", args.rows(), args.out());
        }
    }
    Ok(())
}
