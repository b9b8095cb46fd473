use clap::Parser;
use pwdmanager::cli::{Cli, Commands, Context};

fn main() {
    let cli = Cli::parse();
    pwdmanager::logging::init();

    // Completions need neither settings nor a database.
    if let Some(Commands::Completions { shell }) = cli.command {
        if let Err(e) = pwdmanager::cli::commands::completions::execute(shell) {
            pwdmanager::cli::output::error(&e.to_string());
            std::process::exit(1);
        }
        return;
    }

    let ctx = match Context::from_cli(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            pwdmanager::cli::output::error(&e.to_string());
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        None => pwdmanager::cli::commands::menu::run(&ctx),
        Some(Commands::Generate { length, ref save }) => {
            pwdmanager::cli::commands::generate::execute(&ctx, length, save.as_deref())
        }
        Some(Commands::Save {
            ref keyword,
            ref value,
        }) => pwdmanager::cli::commands::save::execute(&ctx, keyword, value.as_deref()),
        Some(Commands::Update {
            ref keyword,
            ref value,
        }) => pwdmanager::cli::commands::update::execute(&ctx, keyword, value.as_deref()),
        Some(Commands::View { ref keyword }) => {
            pwdmanager::cli::commands::view::execute(&ctx, keyword)
        }
        Some(Commands::Delete { ref keyword, force }) => {
            pwdmanager::cli::commands::delete::execute(&ctx, keyword, force)
        }
        Some(Commands::Completions { .. }) => Ok(()),
    };

    if let Err(e) = result {
        pwdmanager::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
