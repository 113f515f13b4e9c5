/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for hydrogen-wf

use clap::Parser;
use hydrogen_wf::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("hydrogen-wf v{}", hydrogen_wf::VERSION);

    run(Cli::parse())
}
