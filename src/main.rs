//! docstore CLI entry point.

use clap::Parser;

use docstore::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args, cli.json).await,
        Commands::Serve(args) => commands::serve::execute(args, config_path).await,
        Commands::Document(args) => commands::document::execute(args, config_path, cli.json).await,
        Commands::Config(args) => commands::config::execute(args, config_path, cli.json),
    };

    if let Err(err) = result {
        docstore::cli::handle_error(err, cli.json);
    }
}
