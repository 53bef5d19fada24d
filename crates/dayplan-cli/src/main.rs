use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dayplan-cli", version, about = "Dayplan CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily plan generation and completion
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Recurring habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Project management
    Project {
        #[command(subcommand)]
        action: commands::project::ProjectAction,
    },
    /// Todo management
    Todo {
        #[command(subcommand)]
        action: commands::todo::TodoAction,
    },
    /// Blocked time management
    Blocked {
        #[command(subcommand)]
        action: commands::blocked::BlockedAction,
    },
    /// Planner configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Snapshot export/import and bulk merge
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Project { action } => commands::project::run(action),
        Commands::Todo { action } => commands::todo::run(action),
        Commands::Blocked { action } => commands::blocked::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Data { action } => commands::data::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
