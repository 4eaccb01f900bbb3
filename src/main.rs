use clap::Parser;

use product_browser::cli::Cli;
use product_browser::config::Config;
use product_browser::{logging, print, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_from(&cli.config_path())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    logging::init_tracing(&config.log)?;
    tracing::info!(url = %config.source.url, "Starting product-browser");

    let presets = cli.presets();
    if cli.print {
        return print::run(&config, &presets, cli.page);
    }
    ui::run(&config, presets)
}
