mod cli;
mod commands;
mod logging;

use clap::Parser;
use console::Style;

use cli::{Cli, Commands};
use commands::{invoice, shapes, vehicles};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level)?;

    let (title, body) = match &cli.command {
        Commands::Invoice(args) => ("Single responsibility: invoice", invoice::run(args)?),
        Commands::Vehicles(args) => ("Open-closed: vehicle filter", vehicles::run(args)?),
        Commands::Shapes => ("Liskov substitution: shapes", shapes::run()),
    };

    println!("{}", Style::new().bold().cyan().apply_to(title));
    print!("{body}");
    Ok(())
}
