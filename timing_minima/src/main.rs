use std::path::PathBuf;

use clap::Parser;
use timing_minima::{config::ReportConfig, error::Error, generate};

/// Reports the smallest encryption, decryption, EvalSum and EvalScal timings
/// of one parameter set, with the N / t values and paired timings at each.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Scheme: 1 = Basic, 2 = BasicPlus, 3 = Variant, 4 = VariantPlus
    scheme: String,

    /// Conductor directory
    #[arg(allow_hyphen_values = true)]
    conductor: String,

    /// Discriminant directory, usually negative
    #[arg(allow_hyphen_values = true)]
    discriminant: String,

    /// Exponent length: f = full, s = short
    exponent_length: String,

    /// Directory holding the <scheme>/<conductor>/<discriminant> tree
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn run(args: &Args) -> Result<String, Error> {
    let config = ReportConfig::from_codes(
        &args.scheme,
        &args.conductor,
        &args.discriminant,
        &args.exponent_length,
        &args.root,
    )?;

    generate(&config)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            for cause in e.iter().skip(1) {
                eprintln!("caused by: {cause}");
            }
            std::process::exit(1);
        }
    }
}
