// src/bin/cli.rs
use fashion_console::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    fashion_console::log::init();
    cli::run()
}
