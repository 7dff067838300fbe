//! CLI argument definitions for `CampusPortal`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use campus_portal::config::ConfigOverrides;
use campus_portal::logger::Level;

/// CLI log level argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (e.g., `level`, `data_dir`, `splash_delay_ms`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show the welcome screen.
    ///
    /// Waits the splash delay, then goes home when a session exists.
    /// Ctrl-C cancels the wait.
    Welcome,
    /// Log in with a student ID and password.
    Login {
        /// Student ID
        #[arg(long, value_name = "ID", default_value = "")]
        student_id: String,

        /// Password; prompted on stdin when omitted
        #[arg(long, value_name = "PASSWORD")]
        password: Option<String>,
    },
    /// Clear the saved session.
    Logout {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Create a student account and log in.
    Register {
        /// Full name
        #[arg(long, value_name = "NAME", default_value = "")]
        full_name: String,
        /// Email address
        #[arg(long, value_name = "EMAIL", default_value = "")]
        email: String,
        /// Phone number
        #[arg(long, value_name = "PHONE", default_value = "")]
        phone: String,
        /// Student ID
        #[arg(long, value_name = "ID", default_value = "")]
        student_id: String,
        /// Course title
        #[arg(long, value_name = "COURSE", default_value = "")]
        course: String,
        /// Password; prompted on stdin when omitted
        #[arg(long, value_name = "PASSWORD")]
        password: Option<String>,
        /// Password again; prompted on stdin when omitted
        #[arg(long, value_name = "PASSWORD")]
        confirm_password: Option<String>,
    },
    /// Show the logged-in student's profile.
    Whoami,
    /// Show the home screen: greeting, quick actions and latest news.
    Home,
    /// Follow a home-screen quick action.
    Go {
        /// Quick action id
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List courses.
    Courses {
        /// Case-insensitive search over title and description
        #[arg(short, long, value_name = "TEXT")]
        search: Option<String>,
        /// Department id (`all` for every department)
        #[arg(short, long, value_name = "DEPARTMENT")]
        department: Option<String>,
    },
    /// List department selector values.
    Departments,
    /// List news articles.
    News {
        /// Case-insensitive search over title, summary and content
        #[arg(short, long, value_name = "TEXT")]
        search: Option<String>,
        /// Category id (`all` for every category)
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<String>,
    },
    /// Share a news article.
    Share {
        /// Article id
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List student services.
    Services {
        /// Case-insensitive search over title and description
        #[arg(short, long, value_name = "TEXT")]
        search: Option<String>,
        /// Category id (`all` for every category)
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<String>,
    },
    /// Open a student service (some require login).
    Service {
        /// Service id
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List institution contacts.
    Contacts,
    /// Open a contact channel (phone, email, website, location).
    Contact {
        /// Contact kind
        #[arg(value_name = "KIND")]
        kind: String,
    },
    /// List "More" menu entries.
    Menu,
    /// Open a "More" menu entry.
    MenuItem {
        /// Menu entry id
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "campusportal",
    about = "Campus portal command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the data directory holding the session file
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override the data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the splash delay in milliseconds
    #[arg(long = "splash-delay-ms", value_name = "MS")]
    pub splash_delay_ms: Option<u64>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--data-dir`) take precedence over long-form
    /// flags (e.g., `--config-data-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .or(self.config_data_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
            splash_delay_ms: self.splash_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_data_dir: None,
            data_dir: None,
            splash_delay_ms: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli().to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.data_dir.is_none());
        assert!(overrides.splash_delay_ms.is_none());
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let cli = Cli {
            config_data_dir: Some(PathBuf::from("/long/data")),
            data_dir: Some(PathBuf::from("/short/data")),
            ..bare_cli()
        };
        assert_eq!(
            cli.to_config_overrides().data_dir,
            Some("/short/data".to_string())
        );
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let cli = Cli {
            config_level: Some(LogLevelArg::Debug),
            config_data_dir: Some(PathBuf::from("/long/data")),
            splash_delay_ms: Some(0),
            ..bare_cli()
        };
        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.data_dir, Some("/long/data".to_string()));
        assert_eq!(overrides.splash_delay_ms, Some(0));
    }

    #[test]
    fn test_login_password_is_optional() {
        let cli = Cli::parse_from(["campusportal", "login", "--student-id", "KP123"]);
        match cli.command {
            Command::Login {
                student_id,
                password,
            } => {
                assert_eq!(student_id, "KP123");
                assert!(password.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_courses_with_filters() {
        let cli = Cli::parse_from(["campusportal", "courses", "-s", "comp", "-d", "ict"]);
        match cli.command {
            Command::Courses { search, department } => {
                assert_eq!(search.as_deref(), Some("comp"));
                assert_eq!(department.as_deref(), Some("ict"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
