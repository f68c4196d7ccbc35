//! Command-line entry point for the workout tracker
//!
//! Wires the library to a file-backed store and the system clock, then runs
//! one subcommand against it.

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use shared::{BodyWeightEntry, Component, Performance, Workout, logging, parse_date, tracker_debug};
use tracker::{
    AssignOutcome, RecommendationEngine, Tracker, TrackerConfig,
    services::{FileStore, SystemClock},
};

/// Track workouts and get progressive-overload weight recommendations
#[derive(Parser)]
#[command(name = "tracker")]
#[command(about = "Tracks resistance-training workouts and recommends next weights")]
pub struct Args {
    /// Data directory (overrides TRACKER_DATA_DIR)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Rep count the recommendation calibrates to (overrides TRACKER_TARGET_REPS)
    #[arg(long)]
    pub target_reps: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every workout
    List,
    /// Show one workout's exercises and schedule
    Show { name: String },
    /// Import workouts from a JSON array file, replacing same-named ones
    Import { path: PathBuf },
    /// Delete a workout and its schedule
    Remove { name: String },
    /// Schedule a workout on a date (YYYY-MM-DD)
    Assign {
        name: String,
        #[arg(value_parser = date_arg)]
        date: NaiveDate,
    },
    /// Remove a workout from a date
    Unassign {
        name: String,
        #[arg(value_parser = date_arg)]
        date: NaiveDate,
    },
    /// Show the workout programmed for today
    Today,
    /// List the workouts scheduled on a date
    On {
        #[arg(value_parser = date_arg)]
        date: NaiveDate,
    },
    /// Archive a workout's planned sets into its history
    Complete {
        name: String,
        #[arg(long, value_parser = date_arg)]
        date: Option<NaiveDate>,
    },
    /// Recommend the next weight for an exercise after a set
    Recommend {
        workout: String,
        exercise: String,
        /// Reps achieved
        reps: u32,
        /// Reps left in reserve
        rir: u8,
        /// Fallback weight when the exercise has no history or plan
        #[arg(long)]
        weight: Option<f64>,
    },
    /// Log a body-weight reading
    Weigh {
        weight: f64,
        #[arg(long, value_parser = date_arg)]
        date: Option<NaiveDate>,
    },
    /// Print the body-weight history
    Weights,
}

fn date_arg(input: &str) -> Result<NaiveDate, String> {
    parse_date(input).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = TrackerConfig::from_env()?
        .with_data_dir(args.data_dir)
        .with_log_level(args.log_level)
        .with_target_reps(args.target_reps)?;

    logging::init_tracing_with_level(Some(&config.log_level));
    logging::log_startup(Component::Cli, &format!("tracker over {}", config.data_dir.display()));

    let store = FileStore::with_base_dir(config.data_dir.clone());
    let engine = RecommendationEngine::new(config.engine.clone());
    let mut tracker = Tracker::with_engine(store, SystemClock, engine);

    run(&mut tracker, args.command)
}

fn run(tracker: &mut Tracker<FileStore, SystemClock>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List => {
            for workout in tracker.workouts() {
                println!(
                    "{} [{}] - {} exercises, {} scheduled days",
                    workout.name(),
                    workout.workout_type(),
                    workout.exercises().len(),
                    workout.assigned_days().len()
                );
            }
        }
        Command::Show { name } => match tracker.find_by_name(&name) {
            Some(workout) => print_workout(workout),
            None => println!("No workout named '{name}'"),
        },
        Command::Import { path } => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            let workouts: Vec<Workout> =
                serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
            let count = workouts.len();
            for workout in workouts {
                tracker.upsert(workout)?;
            }
            logging::log_success(Component::Cli, &format!("Imported {count} workouts"));
        }
        Command::Remove { name } => match tracker.remove_by_name(&name)? {
            Some(removed) => println!("Removed '{}'", removed.name()),
            None => println!("No workout named '{name}'"),
        },
        Command::Assign { name, date } => match tracker.assign(&name, date)? {
            AssignOutcome::Assigned => println!("Assigned '{name}' to {date}"),
            AssignOutcome::AlreadyAssigned => println!("'{name}' is already on {date}"),
            AssignOutcome::UnknownWorkout => println!("No workout named '{name}'"),
        },
        Command::Unassign { name, date } => {
            if tracker.unassign(&name, date)? {
                println!("Unassigned '{name}' from {date}");
            } else {
                println!("'{name}' was not scheduled on {date}");
            }
        }
        Command::Today => match tracker.todays_workout() {
            Some(workout) => print_workout(workout),
            None => println!("Nothing scheduled for {}", tracker.today()),
        },
        Command::On { date } => {
            let workouts = tracker.workouts_on(date);
            if workouts.is_empty() {
                println!("Nothing scheduled for {date}");
            }
            for workout in workouts {
                println!("{} [{}]", workout.name(), workout.workout_type());
            }
        }
        Command::Complete { name, date } => match tracker.complete_workout(&name, date)? {
            Some(count) => println!("Archived {count} sets for '{name}'"),
            None => println!("No workout named '{name}'"),
        },
        Command::Recommend {
            workout,
            exercise,
            reps,
            rir,
            weight,
        } => {
            let performance = Performance::try_new(reps, rir)?;
            let found = tracker.find_by_name(&workout).and_then(|w| w.exercise(&exercise));
            let next = tracker.estimate_next_weight(found, performance, weight);
            let calibrated = tracker.recommend_for(&workout, &exercise, performance, weight);
            tracker_debug!(Component::Cli, next, calibrated, "Recommendation computed");

            println!("Next attempt: {next:.1}");
            println!(
                "For {} reps: {calibrated}",
                tracker.engine().config().default_target_reps
            );
        }
        Command::Weigh { weight, date } => {
            let date = date.unwrap_or_else(|| tracker.today());
            tracker.log_body_weight(BodyWeightEntry::new(date, weight)?)?;
            println!("Logged {weight} on {date}");
        }
        Command::Weights => {
            for entry in tracker.load_body_weight_history() {
                println!("{}  {}", entry.date(), entry.weight());
            }
        }
    }
    Ok(())
}

fn print_workout(workout: &Workout) {
    println!("{} [{}]", workout.name(), workout.workout_type());
    for (position, exercise) in workout.exercises().iter().enumerate() {
        let plan = exercise
            .sets()
            .iter()
            .map(|s| format!("{}x{}@{}", s.weight(), s.reps(), s.rir()))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {}. {} ({})", position + 1, exercise.name(), plan);
        if let Some(last) = exercise.latest_log() {
            if let Some(date) = last.date() {
                println!("     last: {}x{}@{} on {}", last.weight(), last.reps(), last.rir(), date);
            }
        }
    }
    let days: Vec<String> = workout.assigned_days().iter().map(|d| d.to_string()).collect();
    if !days.is_empty() {
        println!("  scheduled: {}", days.join(", "));
    }
}
