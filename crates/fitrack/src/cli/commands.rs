//! # CLI Dispatch
//!
//! 1. **Argument Parsing**: clap turns shell arguments into [`Commands`]
//! 2. **Logging**: `tracing-subscriber` writes to stderr (`warn` by default,
//!    `debug` with `-v`, `RUST_LOG` overrides both)
//! 3. **Context Setup**: resolve the data directory, load config, open the store
//! 4. **Gating**: admin commands check the placeholder credential, user
//!    commands check that the user exists
//! 5. **Dispatch + Rendering**: call the API and print tables/messages
//!
//! Each handler returns `Result`; `main` turns errors into a message and exit code 1.

use super::auth::check_admin;
use super::render::{self, print_info, print_success, print_warning};
use super::setup::{AdminCommands, Cli, Commands, UserCommands};
use chrono::{Local, NaiveDate};
use clap::Parser;
use clapfig::{Clapfig, ConfigAction, SearchPath};
use fitrackapp::config::{FitrackConfig, APP_NAME, CONFIG_FILE};
use fitrackapp::error::{FitrackError, Result};
use fitrackapp::init::{initialize, FitrackContext};
use fitrackapp::model::{NewLog, NewUser, RecordId};
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data.clone())?;
    debug!(data_dir = %ctx.data_dir.display(), "fitrack starting");

    match cli.command {
        Commands::Register {
            name,
            age,
            height,
            weight,
            contact,
        } => handle_register(
            &mut ctx,
            NewUser {
                name,
                age,
                height,
                weight,
                contact,
            },
        ),
        Commands::Login { user_id } => handle_login(&ctx, user_id),
        Commands::User { user_id, action } => handle_user(&mut ctx, user_id, action),
        Commands::Admin {
            admin_id,
            password,
            action,
        } => {
            check_admin(&admin_id, &password)?;
            handle_admin(&mut ctx, action)
        }
        Commands::Init => handle_init(&mut ctx),
        Commands::Doctor => handle_doctor(&ctx),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed (e.g. in tests); keep it
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_register(ctx: &mut FitrackContext, input: NewUser) -> Result<()> {
    let user = ctx.api.register_user(input)?;
    print_success(&format!(
        "Registration successful! Your User ID is {}",
        user.user_id
    ));
    Ok(())
}

fn handle_login(ctx: &FitrackContext, user_id: RecordId) -> Result<()> {
    let user = ctx.api.find_user(user_id)?;
    print_success(&format!("Welcome {}", user.name));
    Ok(())
}

fn handle_user(ctx: &mut FitrackContext, user_id: RecordId, action: UserCommands) -> Result<()> {
    // Every user command runs inside that user's session
    ctx.api.find_user(user_id)?;

    match action {
        UserCommands::Plans => handle_plans(ctx),
        UserCommands::Log {
            steps,
            burned,
            consumed,
            minutes,
            date,
        } => {
            let input = NewLog {
                user_id,
                steps,
                calories_burned: burned,
                calories_consumed: consumed,
                exercise_time: minutes,
                date: date.unwrap_or_else(today),
            };
            let log = ctx.api.append_log(input)?;
            debug!(log_id = log.log_id, "activity logged");
            print_success("Activity logged successfully");
            Ok(())
        }
        UserCommands::UpdateProfile { height, weight } => {
            ctx.api.update_profile(user_id, height, weight)?;
            print_success("Profile updated successfully");
            Ok(())
        }
        UserCommands::Progress => handle_progress(ctx, user_id),
    }
}

fn handle_admin(ctx: &mut FitrackContext, action: AdminCommands) -> Result<()> {
    match action {
        AdminCommands::AddPlan {
            plan_type,
            description,
        } => {
            let plan = ctx.api.add_plan(plan_type, description)?;
            print_success(&format!("Plan added successfully (ID {})", plan.plan_id));
            Ok(())
        }
        AdminCommands::Plans => handle_plans(ctx),
        AdminCommands::Users => {
            let users = ctx.api.list_users()?;
            if users.is_empty() {
                print_info("No users found");
            } else {
                print!("{}", render::users_table(&users));
            }
            Ok(())
        }
        AdminCommands::Logs { user } => {
            let logs = match user {
                Some(uid) => ctx.api.list_logs_for_user(uid)?,
                None => ctx.api.list_logs()?,
            };
            if logs.is_empty() {
                print_info("No logs found");
            } else {
                print!("{}", render::logs_table(&logs));
            }
            Ok(())
        }
        AdminCommands::Report => match ctx.api.report() {
            Ok(report) => {
                print!(
                    "{}",
                    render::health_report(&report, ctx.config.report_precision)
                );
                Ok(())
            }
            Err(FitrackError::EmptyInput) => {
                print_info("No logs found");
                Ok(())
            }
            Err(e) => Err(e),
        },
    }
}

fn handle_plans(ctx: &FitrackContext) -> Result<()> {
    let plans = ctx.api.list_plans()?;
    if plans.is_empty() {
        print_info("No plans found");
    } else {
        print!("{}", render::plans_table(&plans));
    }
    Ok(())
}

fn handle_progress(ctx: &FitrackContext, user_id: RecordId) -> Result<()> {
    match ctx.api.progress(user_id) {
        Ok((logs, summary)) => {
            print!("{}", render::logs_table(&logs));
            println!();
            print!(
                "{}",
                render::progress_summary(&summary, ctx.config.report_precision)
            );
            Ok(())
        }
        Err(FitrackError::EmptyInput) => {
            print_info("No logs found");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn handle_init(ctx: &mut FitrackContext) -> Result<()> {
    let created = ctx.api.init()?;
    if created.is_empty() {
        print_info(&format!(
            "Data directory already initialized: {}",
            ctx.data_dir.display()
        ));
    } else {
        for collection in created {
            print_success(&format!(
                "Created {}",
                ctx.api.location(collection).display()
            ));
        }
    }
    Ok(())
}

fn handle_doctor(ctx: &FitrackContext) -> Result<()> {
    let report = ctx.api.doctor()?;
    print!("{}", render::doctor_report(&report));
    if report.is_healthy() {
        print_success("No problems found");
    } else {
        print_warning("Problems found (nothing was changed)");
    }
    Ok(())
}

/// `fitrack config`, handled by clapfig against `fitrack.toml` in the data directory.
fn handle_config(ctx: &FitrackContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => return show_config(&ctx.config),
        (Some(key), None) => ConfigAction::Get { key, scope: None },
        (Some(key), Some(value)) => {
            ensure_known_key(&key)?;
            fs::create_dir_all(&ctx.data_dir).map_err(|e| FitrackError::Config(e.to_string()))?;
            ConfigAction::Set { key, value, scope: None }
        }
    };

    let result = Clapfig::builder::<FitrackConfig>()
        .app_name(APP_NAME)
        .file_name(CONFIG_FILE)
        .search_paths(vec![SearchPath::Path(ctx.data_dir.clone())])
        .no_env()
        .strict(false)
        .handle(&action)
        .map_err(|e| FitrackError::Config(e.to_string()))?;
    println!("{result}");
    Ok(())
}

fn config_table(config: &FitrackConfig) -> Result<toml::Table> {
    match toml::Value::try_from(config) {
        Ok(toml::Value::Table(table)) => Ok(table),
        Ok(_) => Err(FitrackError::Config("config is not a table".to_string())),
        Err(e) => Err(FitrackError::Config(e.to_string())),
    }
}

fn show_config(config: &FitrackConfig) -> Result<()> {
    for (k, v) in &config_table(config)? {
        println!("{} = {}", k, v);
    }
    Ok(())
}

// Reject keys before anything is written to the data directory
fn ensure_known_key(key: &str) -> Result<()> {
    let table = config_table(&FitrackConfig::default())?;
    if table.contains_key(key) {
        return Ok(());
    }
    let known: Vec<&str> = table.keys().map(String::as_str).collect();
    Err(FitrackError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        known.join(", ")
    )))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
