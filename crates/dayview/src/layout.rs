use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use dayview_layout::{ColumnRule, DayLayout, DayLayoutEngine, LayoutConfig};
use serde::Serialize;

use crate::error::Result;
use crate::input::{EventId, InputSource, load_events};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RuleArg {
    LastCollision,
    Highest,
}

impl From<RuleArg> for ColumnRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::LastCollision => Self::LastCollision,
            RuleArg::Highest => Self::Highest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OrderArg {
    /// Longest event first, as laid out.
    #[default]
    Layout,
    /// Earliest start first.
    Start,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FormatArg {
    #[default]
    Json,
    Table,
}

#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// JSON event file, or `-` for stdin.
    #[arg(long, short)]
    pub input: PathBuf,

    /// TOML layout configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long = "total-width")]
    pub total_width: Option<u32>,

    #[arg(long)]
    pub margin: Option<u32>,

    #[arg(long = "column-rule", value_enum)]
    pub column_rule: Option<RuleArg>,

    #[arg(long, value_enum, default_value_t = OrderArg::Layout)]
    pub order: OrderArg,

    #[arg(long, value_enum, default_value_t = FormatArg::Json)]
    pub format: FormatArg,
}

/// One laid-out event as printed. Collisions are listed by id so the output
/// stays meaningful under any ordering.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutRecord<'a> {
    pub id: &'a EventId,
    pub start: i64,
    pub end: i64,
    pub top: i64,
    pub duration: i64,
    pub column: usize,
    pub columns: usize,
    pub left: u32,
    pub width: u32,
    pub collisions: Vec<&'a EventId>,
}

/// Resolve the effective configuration: defaults, then the config file,
/// then command-line overrides.
pub fn resolve_config(args: &LayoutArgs) -> Result<LayoutConfig> {
    let mut config = match &args.config {
        Some(path) => LayoutConfig::from_toml_file(path)?,
        None => LayoutConfig::default(),
    };
    if let Some(total_width) = args.total_width {
        config = config.with_total_width(total_width);
    }
    if let Some(margin) = args.margin {
        config = config.with_margin(margin);
    }
    if let Some(rule) = args.column_rule {
        config = config.with_column_rule(rule.into());
    }
    Ok(config.validated()?)
}

pub fn records<'a>(layout: &'a DayLayout<EventId>, order: OrderArg) -> Vec<LayoutRecord<'a>> {
    let positions: Vec<usize> = match order {
        OrderArg::Layout => (0..layout.len()).collect(),
        OrderArg::Start => layout.positions_by_start(),
    };

    positions
        .into_iter()
        .map(|position| {
            let e = &layout[position];
            LayoutRecord {
                id: e.id(),
                start: e.event.start,
                end: e.event.end,
                top: e.top,
                duration: e.duration,
                column: e.column,
                columns: e.columns,
                left: e.left,
                width: e.width,
                collisions: layout.collision_ids(position).collect(),
            }
        })
        .collect()
}

pub fn render_table(records: &[LayoutRecord<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16} {:>6} {:>6} {:>4} {:>4} {:>6} {:>6}  collisions",
        "id", "start", "end", "col", "cols", "left", "width"
    );
    for record in records {
        let collisions = record
            .collisions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let _ = writeln!(
            out,
            "{:<16} {:>6} {:>6} {:>4} {:>4} {:>6} {:>6}  {}",
            record.id.to_string(),
            record.start,
            record.end,
            record.column,
            record.columns,
            record.left,
            record.width,
            if collisions.is_empty() { "-" } else { &collisions }
        );
    }
    out
}

/// Lay out the events named by `args` and render the result.
pub fn layout_report(args: &LayoutArgs) -> Result<String> {
    let config = resolve_config(args)?;
    let events = load_events(&InputSource::from_arg(&args.input))?;

    let layout = DayLayoutEngine::new(config).lay_out(events);
    tracing::info!(
        events = layout.len(),
        components = layout.components().len(),
        max_columns = layout.max_columns(),
        "layout complete"
    );

    let records = records(&layout, args.order);
    let rendered = match args.format {
        FormatArg::Json => {
            let mut json = serde_json::to_string_pretty(&records)?;
            json.push('\n');
            json
        }
        FormatArg::Table => render_table(&records),
    };
    Ok(rendered)
}

pub fn run_layout(args: LayoutArgs) -> Result<()> {
    let rendered = layout_report(&args)?;
    print!("{rendered}");
    Ok(())
}
