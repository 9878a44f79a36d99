use std::fs;

use anyhow::{anyhow, bail, Context, Result};
use babycare_backend::config::BackendConfig;
use babycare_backend::{
    get_age, get_growth_summary, get_milestone_board, get_timeline, get_vaccine_schedule,
    init_logging, initialize_backend,
};
use shared::{
    AgeRequest, BabyCareSnapshot, MilestoneBoardEntry, MilestoneBoardRequest, TimelineRequest,
    VaccineScheduleRequest,
};
use tracing::info;

const USAGE: &str =
    "usage: babycare-report <snapshot.json> [all|vaccine|growth|milestone|visit|report]";

fn main() -> Result<()> {
    let config = BackendConfig::from_env()?;
    init_logging(&config.log_level);

    let mut args = std::env::args().skip(1);
    let Some(snapshot_path) = args.next() else {
        bail!(USAGE);
    };
    let filter = args.next();

    info!("Loading snapshot from {}", snapshot_path);
    let json = fs::read_to_string(&snapshot_path)
        .with_context(|| format!("Failed to read snapshot {}", snapshot_path))?;
    let snapshot: BabyCareSnapshot = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse snapshot {}", snapshot_path))?;

    let app_state = initialize_backend(&config)?;

    let age = get_age(&app_state, &snapshot, &AgeRequest::default()).map_err(|e| anyhow!(e))?;
    println!("{} ({} weeks, {})", snapshot.baby.name, age.weeks, age.display);

    let board = get_milestone_board(&app_state, &snapshot, &MilestoneBoardRequest::default())
        .map_err(|e| anyhow!(e))?;
    println!();
    println!("Milestones");
    print_bucket("Now", &board.now);
    print_bucket("Late", &board.late);
    print_bucket("Watching", &board.watching);
    print_bucket("Soon", &board.soon);
    print_bucket("Done", &board.done);

    let schedule =
        get_vaccine_schedule(&app_state, &snapshot, &VaccineScheduleRequest::default())
            .map_err(|e| anyhow!(e))?;
    println!();
    println!(
        "Vaccines ({} of {} completed)",
        schedule.completed_count, schedule.total_count
    );
    for due in &schedule.pending {
        println!(
            "  {:<12} {} due {} ({:?})",
            due.age_group, due.name, due.due_date, due.status
        );
    }

    let growth = get_growth_summary(&app_state, &snapshot).map_err(|e| anyhow!(e))?;
    println!();
    println!("Latest growth");
    for entry in &growth.latest {
        println!(
            "  {}: {} {}",
            entry.entry_type.label(),
            entry.value,
            entry.entry_type.unit()
        );
    }

    let timeline = get_timeline(&app_state, &snapshot, &TimelineRequest { filter })
        .map_err(|e| anyhow!(e))?;
    println!();
    println!(
        "Timeline [{}] ({} of {} records)",
        timeline.filter,
        timeline.records.len(),
        timeline.stats.total
    );
    for group in &timeline.groups {
        println!("  {}", group.label);
        for record in &group.records {
            let attachment = if record.has_attachment { " [file]" } else { "" };
            println!(
                "    {} {:<9} {} - {}{}",
                record.date.get(..10).unwrap_or(&record.date),
                record.record_type,
                record.title,
                record.detail,
                attachment
            );
        }
    }

    Ok(())
}

fn print_bucket(label: &str, entries: &[MilestoneBoardEntry]) {
    if entries.is_empty() {
        return;
    }
    println!("  {}", label);
    for entry in entries {
        let status = entry
            .progress
            .as_ref()
            .and_then(|p| p.timing_status)
            .map(|s| format!(" ({})", s))
            .unwrap_or_default();
        println!(
            "    week {:>2}  {}{}",
            entry.definition.typical_week, entry.definition.name, status
        );
        if let Some(guidance) = &entry.guidance {
            if guidance.show_doctor_cta {
                println!("              {}: {}", guidance.title, guidance.message);
            }
        }
    }
}
