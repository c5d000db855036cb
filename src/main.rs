//! AuthPortal - Client-Side Demo Authentication Portal
//!
//! Demo CLI harness around the portal core. Each invocation plays the
//! part of one browser navigation or form submission against a
//! file-backed storage state, so the whole page-load pipeline (seed,
//! guard, hydration) can be exercised from a terminal.

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use authportal::config::ConfigManager;
use authportal::forms::{Field, FormRenderer, LoginForm, LoginOutcome, RegisterForm, RegisterOutcome};
use authportal::guard::Navigator;
use authportal::hydrate::{self, PartialContent, PartialFetcher};
use authportal::{FileStorage, Portal};

/// CLI arguments for AuthPortal
#[derive(Parser, Debug)]
#[command(name = "authportal")]
#[command(about = "AuthPortal - Client-side demo authentication portal")]
#[command(version)]
#[command(long_about = "
AuthPortal - Client-side demo authentication portal

Registers users, authenticates them, persists a session, and gates
access to interior pages, with all state in one local JSON file.

Configuration priority (highest to lowest):
1. Command-line arguments
2. Configuration file
3. Environment variables
4. Built-in defaults

Environment variables:
  AUTHPORTAL_STATE_FILE       - Path of the local storage state file
  AUTHPORTAL_USERS_KEY        - Storage slot holding user records
  AUTHPORTAL_SESSION_KEY      - Storage slot holding the session
  AUTHPORTAL_PASSWORD_HASHING - Store salted digests instead of plain text
  AUTHPORTAL_REDIRECT_DELAY   - Post-registration redirect delay (e.g. 1200ms)
  AUTHPORTAL_SEED_EMAIL       - Seed administrator email
  AUTHPORTAL_SEED_PASSWORD    - Seed administrator password
")]
pub struct CliArgs {
    /// Configuration file path
    #[arg(
        short,
        long,
        default_value = "portal.toml",
        help = "Path to configuration file"
    )]
    pub config: PathBuf,

    /// Storage state file (overrides config file)
    #[arg(short, long, help = "Path of the local storage state file")]
    pub state: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", help = "Log level")]
    pub log_level: String,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Store salted password digests instead of plain text
    #[arg(long, help = "Enable the password hashing policy")]
    pub hash_passwords: bool,

    /// Post-registration redirect delay in milliseconds
    #[arg(long, help = "Post-registration redirect delay in milliseconds")]
    pub redirect_delay_ms: Option<u64>,

    /// Validate configuration and exit
    #[arg(long, help = "Validate configuration and exit")]
    pub validate_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One browser action against the portal
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a page through the access guard
    Open {
        /// Page to navigate to (e.g. home.html)
        page: String,
    },
    /// Submit the login form on the entry page
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Submit the registration form
    Register {
        #[arg(long)]
        fullname: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },
    /// Clear the active session
    Logout,
    /// Show the active session
    Session,
}

/// Navigator that reports redirects on stdout
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn redirect_to(&self, page: &str) {
        println!("-> redirected to {}", page);
    }
}

/// Renderer that prints field errors and banners to the terminal
struct ConsoleRenderer;

fn field_label(field: Field) -> &'static str {
    match field {
        Field::FullName => "full name",
        Field::Email => "email",
        Field::Password => "password",
        Field::ConfirmPassword => "confirm password",
    }
}

impl FormRenderer for ConsoleRenderer {
    fn mark_field_error(&mut self, field: Field, message: &str) {
        println!("!  {}: {}", field_label(field), message);
    }

    fn clear_field_error(&mut self, _field: Field) {}

    fn show_form_message(&mut self, message: &str, is_error: bool) {
        if is_error {
            println!("!  {}", message);
        } else {
            println!("   {}", message);
        }
    }

    fn clear_form_message(&mut self) {}
}

/// Partial fetcher reading template files from the partials directory
struct FilePartialFetcher {
    root: PathBuf,
}

#[async_trait]
impl PartialFetcher for FilePartialFetcher {
    async fn fetch_partial(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        tokio::fs::read_to_string(&full)
            .await
            .with_context(|| format!("Failed to fetch partial: {}", full.display()))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize tracing
    init_tracing(&args)?;

    info!("Starting AuthPortal v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration with priority: CLI args > config file > environment > defaults
    let mut config = if args.config.exists() {
        ConfigManager::load_from_file(&args.config)?
    } else {
        info!("Config file not found, checking environment variables");
        ConfigManager::load_from_env()?
    };

    // Apply CLI argument overrides (highest priority)
    config.merge_with_cli_args(args.state.as_deref(), args.hash_passwords, args.redirect_delay_ms);

    // Final validation after all overrides
    config
        .validate()
        .context("Final configuration validation failed")?;

    // If validate-config flag is set, just validate and exit
    if args.validate_config {
        println!("Configuration is valid");
        println!("  State file: {}", config.storage.state_file.display());
        println!("  Users slot: {}", config.storage.users_key);
        println!("  Session slot: {}", config.storage.session_key);
        println!("  Interior pages: {}", config.pages.interior.join(", "));
        println!("  Public entry: {}", config.pages.public_entry);
        println!(
            "  Password hashing: {}",
            if config.policy.password_hashing {
                "enabled"
            } else {
                "disabled"
            }
        );
        return Ok(());
    }

    let storage = Arc::new(FileStorage::open(&config.storage.state_file));
    let partials_dir = config.storage.partials_dir.clone();
    let entry_page = config.pages.public_entry.clone();
    let portal = Portal::new(config, storage);

    let nav = ConsoleNavigator;
    let mut renderer = ConsoleRenderer;

    match args.command {
        Some(Command::Open { page }) => {
            let load = portal.load_page(&page, &nav)?;
            if load.redirected() {
                return Ok(());
            }
            println!("Opened {}", page);
            hydrate_open_page(&portal, &page, &partials_dir).await;
        }
        Some(Command::Login { email, password }) => {
            // Logging in happens on the entry page; the guard may bounce
            // an already-authenticated visitor straight to the interior
            let load = portal.load_page(&entry_page, &nav)?;
            if load.redirected() {
                println!("Already signed in");
                return Ok(());
            }

            let form = LoginForm { email, password };
            match portal.login_controller().submit(&form, &mut renderer, &nav)? {
                LoginOutcome::Authenticated(session) => {
                    println!("Signed in as {} [{}]", session.fullname, session.display_token());
                }
                LoginOutcome::Rejected => {
                    println!("Login rejected");
                }
            }
        }
        Some(Command::Register {
            fullname,
            email,
            password,
            confirm,
        }) => {
            portal.load_page("register.html", &nav)?;

            let form = RegisterForm {
                fullname,
                email,
                password,
                confirm_password: confirm,
            };
            match portal
                .register_controller()
                .submit(&form, &mut renderer, &nav)
                .await?
            {
                RegisterOutcome::Registered(user) => {
                    println!("Registered {} <{}>", user.fullname, user.email);
                }
                RegisterOutcome::Rejected => {
                    println!("Registration rejected");
                }
            }
        }
        Some(Command::Logout) => {
            portal.logout(&nav)?;
            println!("Signed out");
        }
        Some(Command::Session) | None => match hydrate::session_summary(portal.sessions()) {
            Some(summary) => {
                println!("Signed in as {} [{}]", summary.fullname, summary.token_display);
            }
            None => {
                println!("No active session");
            }
        },
    }

    Ok(())
}

/// Render the page content a successful load would show
async fn hydrate_open_page(portal: &Portal, page: &str, partials_dir: &Path) {
    // Interior pages greet the signed-in user from the session
    if let Some(summary) = hydrate::session_summary(portal.sessions()) {
        println!("   Welcome, {} [{}]", summary.fullname, summary.token_display);

        let fetcher = FilePartialFetcher {
            root: partials_dir.to_path_buf(),
        };
        match hydrate::load_partial(&fetcher, "nav.html").await {
            PartialContent::Loaded(text) => println!("   {}", text.trim()),
            PartialContent::Failed => println!("   (navigation unavailable)"),
        }
    }

    // The profile page additionally shows the stored user record
    if page == "profile.html" {
        match hydrate::hydrate_profile(portal.sessions(), portal.credentials()) {
            Some(fields) => {
                println!("   Name:  {}", fields.fullname);
                println!("   Email: {}", fields.email);
            }
            None => println!("   (profile unavailable)"),
        }
    }
}

/// Initialize tracing/logging
fn init_tracing(args: &CliArgs) -> Result<()> {
    let log_level = if args.verbose {
        "debug"
    } else {
        &args.log_level
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_ansi(true),
        )
        .with(env_filter)
        .init();

    Ok(())
}
