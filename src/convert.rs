//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, FixedOffset};

use cadence_calendar::{Instant, Period};
use cadence_events::Lifecycle;

use crate::config::{PeriodToml, ReportToml};

/// Parses a lifecycle name into the corresponding enum variant.
pub fn parse_lifecycle(s: &str) -> Result<Lifecycle> {
    match s.to_lowercase().as_str() {
        "created" => Ok(Lifecycle::Created),
        "merged" => Ok(Lifecycle::Merged),
        "closed" => Ok(Lifecycle::Closed),
        other => bail!("unknown lifecycle: {other:?}"),
    }
}

/// Parses a UTC offset of the form `Z`, `+HH:MM` or `-HH:MM`.
pub fn parse_offset(s: &str) -> Result<FixedOffset> {
    if s.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0).context("zero offset out of range");
    }
    s.parse::<FixedOffset>()
        .with_context(|| format!("invalid utc offset {s:?}: expected Z, +HH:MM or -HH:MM"))
}

/// Parses an RFC 3339 instant.
pub fn parse_instant(s: &str) -> Result<Instant> {
    DateTime::parse_from_rfc3339(s).with_context(|| format!("invalid RFC 3339 instant: {s:?}"))
}

/// Builds a [`Period`] from the TOML period section.
pub fn build_period(period: &PeriodToml) -> Result<Period> {
    let start = parse_instant(&period.start).context("invalid [period].start")?;
    let end = parse_instant(&period.end).context("invalid [period].end")?;
    Period::new(start, end).context("invalid [period]")
}

/// Request selection resolved from the TOML report section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub lifecycle: Lifecycle,
    pub offset: FixedOffset,
    pub project: Option<u64>,
    pub created_within_period: bool,
}

/// Builds a [`Selection`] from the TOML report section.
pub fn build_selection(report: &ReportToml) -> Result<Selection> {
    Ok(Selection {
        lifecycle: parse_lifecycle(&report.lifecycle)?,
        offset: parse_offset(&report.utc_offset)?,
        project: report.project,
        created_within_period: report.created_within_period,
    })
}
