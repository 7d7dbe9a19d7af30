//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `studyplan_core` linkage and configuration loading.
//! - Print a deterministic demo week for quick local sanity checks.
//!
//! Usage: `studyplan_cli [config.json] [--log-dir <abs dir>]`. The log
//! directory can also come from `STUDYPLAN_LOG_DIR`.

use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use studyplan_core::{
    core_version, default_log_level, init_logging, ColorRef, DayIndex, DropTarget, PlannerConfig,
    PlannerService, Priority, SystemClock, TaskDraft, TopicDraft,
};

#[derive(Debug, Parser)]
#[command(name = "studyplan_cli", version, about = "Study planner demo week")]
struct Args {
    /// JSON planner config; defaults apply when omitted.
    config: Option<PathBuf>,
    /// Absolute directory for rotating log files.
    #[arg(long, env = "STUDYPLAN_LOG_DIR")]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("studyplan_cli error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), String> {
    let config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|err| format!("cannot read config `{}`: {err}", path.display()))?;
            PlannerConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => PlannerConfig::default(),
    };

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = config.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(|err| err.to_string())?;
    }

    println!("studyplan_core version={}", core_version());

    let mut planner = PlannerService::new(config, SystemClock, Vec::new(), Vec::new())
        .map_err(|err| err.to_string())?;
    seed_demo_week(&mut planner).map_err(|err| err.to_string())?;
    info!("event=cli_demo module=cli status=ok tasks={}", planner.tasks().len());

    println!("session_day={}", planner.session_day());
    for day in DayIndex::all() {
        let titles = planner
            .tasks_for_day(day)
            .iter()
            .map(|task| format!("{}{}", task.title, if task.completed { " [x]" } else { "" }))
            .collect::<Vec<_>>();
        println!("{:<9} | {}", day.name(), titles.join(", "));
    }
    for topic in planner.topics() {
        println!(
            "topic {:<10} progress={:>3}% priority={}",
            topic.name, topic.progress, topic.priority
        );
    }
    let stats = planner.stats(DayIndex::MONDAY);
    println!(
        "monday studied={:.2}h goal={}h ({}%) overall={}%",
        stats.hours_studied_on_day(),
        stats.goals.daily_hours,
        stats.daily_goal_percent,
        stats.overall_completion
    );
    Ok(())
}

fn seed_demo_week(planner: &mut PlannerService) -> Result<(), Box<dyn std::error::Error>> {
    for (name, color, priority) in [
        ("Cells", "study-purple", Priority::High),
        ("Algebra", "study-orange", Priority::Medium),
        ("Python", "study-green", Priority::Low),
    ] {
        let draft = TopicDraft::new(name, ColorRef::token(color)?).with_priority(priority);
        planner.create_topic(draft)?;
    }

    let cell_functions = planner.add_task(
        TaskDraft::new("Cell Functions", "Cells", "13:00", "14:00").on_day(DayIndex::MONDAY),
    )?;
    planner.add_task(
        TaskDraft::new("Booleans", "Python", "19:00", "20:00").on_day(DayIndex::MONDAY),
    )?;
    let exponentials = planner.add_task(
        TaskDraft::new("Exponential Functions", "Algebra", "14:30", "15:15")
            .on_day(DayIndex::TUESDAY),
    )?;
    planner.add_task(
        TaskDraft::new("Cell Quiz", "Cells", "16:00", "16:30").on_day(DayIndex::WEDNESDAY),
    )?;
    planner.add_task(TaskDraft::new("Graphing", "Algebra", "18:00", "18:30"))?;

    planner.toggle_task_completion(cell_functions);
    planner.reorder_drop(exponentials, DropTarget::Day(DayIndex::MONDAY));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_config_path_and_log_dir() {
        let args =
            Args::try_parse_from(["studyplan_cli", "week.json", "--log-dir", "/tmp/studyplan"])
                .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("week.json")));
        assert_eq!(args.log_dir.as_deref(), Some("/tmp/studyplan"));
    }

    #[test]
    fn help_is_not_read_as_a_config_path() {
        let err = Args::try_parse_from(["studyplan_cli", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn extra_positional_arguments_are_rejected() {
        assert!(Args::try_parse_from(["studyplan_cli", "a.json", "b.json"]).is_err());
    }
}
