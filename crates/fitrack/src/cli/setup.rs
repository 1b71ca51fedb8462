use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fitrack", bin_name = "fitrack", version)]
#[command(about = "Health & Fitness Tracking Portal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (default: $FITRACK_DATA_DIR, then the OS data directory)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register as a new user
    Register {
        #[arg(long)]
        name: String,

        #[arg(long, allow_negative_numbers = true)]
        age: i64,

        /// Height in meters
        #[arg(long)]
        height: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        #[arg(long, default_value = "")]
        contact: String,
    },

    /// Check a user id and greet the user
    Login { user_id: u64 },

    /// Commands available to a registered user
    User {
        user_id: u64,

        #[command(subcommand)]
        action: UserCommands,
    },

    /// Administrator commands
    Admin {
        /// Admin ID
        #[arg(long = "id", value_name = "ID")]
        admin_id: String,

        #[arg(long)]
        password: String,

        #[command(subcommand)]
        action: AdminCommands,
    },

    /// Create empty collections in the data directory
    Init,

    /// Check stored data for duplicate ids and logs of unknown users
    Doctor,

    /// Get or set configuration
    Config {
        /// Configuration key (json_indent, report_precision)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// View fitness plans
    Plans,

    /// Log daily activity
    Log {
        #[arg(long, allow_negative_numbers = true)]
        steps: i64,

        /// Calories burned
        #[arg(long, allow_negative_numbers = true)]
        burned: i64,

        /// Calories consumed
        #[arg(long, allow_negative_numbers = true)]
        consumed: i64,

        /// Exercise time in minutes
        #[arg(long)]
        minutes: f64,

        /// Date of the activity, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Update height and weight
    #[command(alias = "update")]
    UpdateProfile {
        /// New height in meters
        #[arg(long)]
        height: f64,

        /// New weight in kilograms
        #[arg(long)]
        weight: f64,
    },

    /// View my logs and averages
    Progress,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Add a fitness plan
    AddPlan {
        /// Plan type (e.g. Workout, Diet)
        #[arg(long = "type", value_name = "TYPE")]
        plan_type: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// View plans
    Plans,

    /// View users
    Users,

    /// View activity logs
    Logs {
        /// Only show logs of this user
        #[arg(long)]
        user: Option<u64>,
    },

    /// Generate the health report
    Report,
}
