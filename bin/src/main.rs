#[macro_use]
extern crate log;

use api::*;
use base::app::*;
use clap::Parser;

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    // Invalid options exit here with a usage message.
    let options = Options::parse();

    if let Err(e) = render(&options) {
        error!("{e}");
        std::process::exit(1);
    }
}
