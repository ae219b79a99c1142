use error_chain::ChainedError;

use digestr::args::{self, Args};
use digestr::{commands, errors};

fn run() -> errors::Result<()> {
    match args::parse_args()? {
        Args::Digest(args) => commands::digest::main(&args),
        Args::Enzymes(args) => commands::enzymes::main(&args),
        Args::None => Ok(()),
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e.display_chain());

        ::std::process::exit(1);
    }
}
