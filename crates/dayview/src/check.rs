use std::path::PathBuf;

use clap::Args;
use dayview_core::Event;
use dayview_layout::lay_out_day;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{DayviewError, Result};
use crate::input::{EventId, InputSource, load_events};

/// Exit code when the input parses but carries issues.
pub const ISSUES_EXIT_CODE: i32 = 1;

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// JSON event file, or `-` for stdin.
    #[arg(long, short)]
    pub input: PathBuf,

    /// Emit the report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputIssue {
    /// `end <= start`. The event still lays out and may still collide.
    NonPositiveDuration { id: EventId, start: i64, end: i64 },
    /// Later occurrences of a repeated id stop each other's collision scan.
    DuplicateId { id: EventId, count: usize },
}

impl InputIssue {
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::NonPositiveDuration { id, start, end } => {
                format!("event {id}: non-positive duration ({start}..{end})")
            }
            Self::DuplicateId { id, count } => format!("id {id} appears {count} times"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub events: usize,
    pub max_columns: usize,
    pub components: Vec<Vec<EventId>>,
    pub issues: Vec<InputIssue>,
}

impl CheckReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn render_text(&self) -> String {
        let mut lines = vec![format!(
            "{} events, {} overlap groups, widest group {} columns",
            self.events,
            self.components.len(),
            self.max_columns
        )];
        for component in self.components.iter().filter(|c| c.len() > 1) {
            let ids: Vec<_> = component.iter().map(ToString::to_string).collect();
            lines.push(format!("  group: {}", ids.join(", ")));
        }
        if self.issues.is_empty() {
            lines.push("no issues".to_string());
        } else {
            for issue in &self.issues {
                lines.push(format!("issue: {}", issue.describe()));
            }
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

pub fn find_issues(events: &[Event<EventId>]) -> Vec<InputIssue> {
    let mut issues: Vec<InputIssue> = events
        .iter()
        .filter(|e| e.end <= e.start)
        .map(|e| InputIssue::NonPositiveDuration {
            id: e.id.clone(),
            start: e.start,
            end: e.end,
        })
        .collect();

    let mut counts: FxHashMap<&EventId, usize> = FxHashMap::default();
    let mut first_seen = Vec::new();
    for event in events {
        let count = counts.entry(&event.id).or_insert(0);
        if *count == 0 {
            first_seen.push(&event.id);
        }
        *count += 1;
    }
    issues.extend(first_seen.into_iter().filter_map(|id| {
        let count = counts.get(id).copied().unwrap_or(0);
        (count > 1).then(|| InputIssue::DuplicateId {
            id: id.clone(),
            count,
        })
    }));

    issues
}

pub fn check_events(events: Vec<Event<EventId>>) -> CheckReport {
    let issues = find_issues(&events);
    let layout = lay_out_day(events);
    let components = layout
        .components()
        .into_iter()
        .map(|group| group.into_iter().map(|i| layout[i].id().clone()).collect())
        .collect();

    CheckReport {
        events: layout.len(),
        max_columns: layout.max_columns(),
        components,
        issues,
    }
}

pub fn run_check(args: CheckArgs) -> Result<()> {
    let events = load_events(&InputSource::from_arg(&args.input))?;
    let report = check_events(events);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    if report.is_clean() {
        Ok(())
    } else {
        tracing::warn!(issues = report.issues.len(), "input has issues");
        Err(DayviewError::exit(
            ISSUES_EXIT_CODE,
            format!("{} issue(s) found", report.issues.len()),
        ))
    }
}
