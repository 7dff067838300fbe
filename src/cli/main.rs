//! Command-line interface entry point for `CampusPortal`

mod args;
mod commands;
mod console;

use std::process::ExitCode;

use args::{Cli, Command};
use campus_portal::config::Config;
use campus_portal::filter::FilterState;
use campus_portal::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use campus_portal::models::{Credentials, Registration};
use campus_portal::{error, info};
use clap::Parser;
use console::Console;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));
    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let result = dispatch(args.command, &mut config, &defaults).await;
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            eprintln!("✗ {message}");
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(command: Command, config: &mut Config, defaults: &Config) -> Result<(), String> {
    let console = Console::default();
    let sessions = commands::session::open(config);

    match command {
        Command::Config { subcommand } => commands::config::run(subcommand, config, defaults),
        Command::Welcome => {
            commands::welcome::run(&sessions, config.portal.splash_delay_ms, &console).await;
            Ok(())
        }
        Command::Login {
            student_id,
            password,
        } => {
            let password = password.unwrap_or_else(|| console.prompt("Password"));
            commands::session::login(
                &sessions,
                &Credentials::new(&student_id, &password),
                &console,
            )
        }
        Command::Logout { yes } => commands::session::logout(&sessions, &Console::new(yes)),
        Command::Register {
            full_name,
            email,
            phone,
            student_id,
            course,
            password,
            confirm_password,
        } => {
            let password = password.unwrap_or_else(|| console.prompt("Password"));
            let confirm_password =
                confirm_password.unwrap_or_else(|| console.prompt("Confirm password"));
            let registration = Registration {
                full_name,
                email,
                phone,
                student_id,
                course,
                password,
                confirm_password,
            };
            commands::session::register(&sessions, &registration, &console)
        }
        Command::Whoami => {
            commands::session::whoami(&sessions);
            Ok(())
        }
        Command::Home => {
            commands::home::show(&sessions);
            Ok(())
        }
        Command::Go { id } => commands::home::go(&id, &console),
        Command::Courses { search, department } => {
            commands::academics::courses(&FilterState::new(
                search.as_deref(),
                department.as_deref(),
            ));
            Ok(())
        }
        Command::Departments => {
            commands::academics::departments();
            Ok(())
        }
        Command::News { search, category } => {
            commands::news::list(&FilterState::new(search.as_deref(), category.as_deref()));
            Ok(())
        }
        Command::Share { id } => commands::news::share(&id, &console),
        Command::Services { search, category } => {
            commands::student::list(
                &FilterState::new(search.as_deref(), category.as_deref()),
                &sessions,
            );
            Ok(())
        }
        Command::Service { id } => commands::student::open(&id, &sessions, &console),
        Command::Contacts => {
            commands::more::contacts();
            Ok(())
        }
        Command::Contact { kind } => commands::more::contact(&kind, &console),
        Command::Menu => {
            commands::more::menu();
            Ok(())
        }
        Command::MenuItem { id } => commands::more::menu_item(&id, &console),
    }
}
