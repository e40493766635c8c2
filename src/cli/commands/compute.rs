use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::OverlapReport;
use crate::ui::messages::header;
use crate::utils::table::Table;
use crate::utils::{format_timestamp_lossy, secs2readable};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Compute {
        input,
        format,
        details,
        odd_length,
    } = cmd
    {
        let mut cfg = cfg.clone();
        if let Some(policy) = odd_length {
            cfg.odd_length = *policy;
        }

        let attendance = super::read_attendance(input.as_deref())?;
        let report = Core::build_report(&attendance, &cfg)?;
        let details = *details || cfg.details_by_default;

        match format {
            OutputFormat::Json => print_json(&report, details)?,
            OutputFormat::Text if details => print_details(&report, &cfg),
            OutputFormat::Text => println!("{}", report.total),
        }
    }
    Ok(())
}

fn print_json(report: &OverlapReport, details: bool) -> AppResult<()> {
    let out = if details {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::json!({ "total": report.total }).to_string()
    };
    println!("{out}");
    Ok(())
}

fn print_details(report: &OverlapReport, cfg: &Config) {
    let fmt = cfg.timestamp_format.as_str();

    header("Presence");
    let mut presence = Table::new(["role", "intervals", "present", "first seen", "last seen"]);
    for p in &report.presence {
        presence.add_row(vec![
            p.role.to_string(),
            p.intervals.to_string(),
            secs2readable(p.present),
            p.first_seen.map(|t| format_timestamp_lossy(t, fmt)).unwrap_or_else(|| "--".into()),
            p.last_seen.map(|t| format_timestamp_lossy(t, fmt)).unwrap_or_else(|| "--".into()),
        ]);
    }
    print!("{}", presence.render());

    println!();
    header("Overlap");
    if report.segments.is_empty() {
        println!("No instant with all participants present.");
    } else {
        let mut segs = Table::new(["#", "from", "to", "duration"]);
        for (i, s) in report.segments.iter().enumerate() {
            segs.add_row(vec![
                (i + 1).to_string(),
                format_timestamp_lossy(s.start(), fmt),
                format_timestamp_lossy(s.end(), fmt),
                secs2readable(s.duration()),
            ]);
        }
        print!("{}", segs.render());
    }

    println!();
    println!("Total: {} ({})", report.total, secs2readable(report.total));
}
