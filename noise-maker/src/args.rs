use clap::Parser;
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate fake web log traffic for testing", long_about = None)]
pub struct CliArgs {
    #[arg(long, default_value_t = 1000)]
    rows: usize,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "-")]
    out: String,

    #[arg(long)]
    serve: Option<u16>,
}
