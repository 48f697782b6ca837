//! Report command: bucket change request events over the configured period.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use cadence_events::{ChangeRequestSet, read_change_requests, validate_requests};
use cadence_flow::bucket_events;

use crate::cli::ReportArgs;
use crate::config::CadenceConfig;
use crate::convert::{self, Selection};
use crate::report::{LeadTimes, Report};

/// Run the report pipeline.
pub fn run(args: ReportArgs) -> Result<()> {
    let _cmd = info_span!("report").entered();
    let config = CadenceConfig::load(&args.config)?;
    let selection = convert::build_selection(&config.report)?;
    let set = load_requests(&config, args.events.as_deref(), &selection)?;

    let lifecycle = selection.lifecycle;
    let series = bucket_events(set.requests(), set.period(), |r| lifecycle.instant_of(r));
    info!(
        unit = %series.unit(),
        n_years = series.years().len(),
        n_bucketed = series.total(),
        "events bucketed"
    );

    let lead_times = LeadTimes::collect(set.requests(), lifecycle, series.unit());
    let report = Report::new(&series, lifecycle, set.summary(), &lead_times);
    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;

    match args.output.as_ref().or(config.io.output.as_ref()) {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Reads the event file and applies the configured selection, ordering the
/// requests by the configured lifecycle instant.
///
/// Inconsistent requests are reported as a warning and kept.
pub(crate) fn load_requests(
    config: &CadenceConfig,
    events_override: Option<&Path>,
    selection: &Selection,
) -> Result<ChangeRequestSet> {
    let period = convert::build_period(&config.period)?;
    let Some(events) = events_override.or(config.io.events.as_deref()) else {
        bail!("no events path: set [io].events in config or use --events");
    };

    let requests = read_change_requests(events)
        .with_context(|| format!("failed to read events: {}", events.display()))?;
    if let Err(e) = validate_requests(&requests) {
        warn!(error = %e, "change requests are inconsistent");
    }

    let mut set = ChangeRequestSet::new(requests, period).with_offset(selection.offset);
    if let Some(project) = selection.project {
        set = set.for_project(project);
    }
    if selection.created_within_period {
        set = set.created_within_period();
    }
    let set = set.sorted_by(selection.lifecycle);
    info!(n_requests = set.len(), "change requests selected");
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const EVENTS: &str = r#"[
        {"project_id": 1, "id": 1, "created_at": "2022-02-01T08:00:00Z", "merged_at": "2022-02-01T10:00:00Z"},
        {"project_id": 1, "id": 2, "created_at": "2022-02-14T08:00:00Z", "merged_at": "2022-02-24T10:00:00Z"},
        {"project_id": 1, "id": 3, "created_at": "2022-02-15T08:00:00Z", "closed_at": "2022-02-16T10:00:00Z"},
        {"project_id": 1, "id": 4, "created_at": "2022-02-20T08:00:00Z"},
        {"project_id": 2, "id": 1, "created_at": "2022-02-09T08:00:00Z", "merged_at": "2022-02-09T10:00:00Z"},
        {"project_id": 1, "id": 5, "created_at": "2021-12-20T08:00:00Z", "merged_at": "2022-02-10T10:00:00Z"}
    ]"#;

    fn setup(report_section: &str) -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let events = dir.path().join("events.json");
        std::fs::write(&events, EVENTS).unwrap();
        let config = dir.path().join("cadence.toml");
        std::fs::write(
            &config,
            format!(
                "[period]\nstart = \"2022-02-01T00:00:00Z\"\nend = \"2022-02-28T00:00:00Z\"\n\n\
                 [io]\nevents = {events:?}\n\n{report_section}"
            ),
        )
        .unwrap();
        let output = dir.path().join("report.json");
        (dir, config, output)
    }

    fn run_report(config: PathBuf, output: &Path) -> serde_json::Value {
        run(ReportArgs {
            config,
            events: None,
            output: Some(output.to_path_buf()),
        })
        .unwrap();
        serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap()
    }

    #[test]
    fn weekly_report_for_one_project() {
        let (_dir, config, output) = setup("[report]\nproject = 1\n");
        let json = run_report(config, &output);

        assert_eq!(json["unit"], "Week");
        assert_eq!(json["totals"]["all"], 4);
        assert_eq!(json["totals"]["merged"], 2);
        assert_eq!(json["totals"]["closed"], 1);
        assert_eq!(json["totals"]["opened"], 1);

        let flows = json["years"][0]["flows"].as_array().unwrap();
        let indices: Vec<u64> = flows.iter().map(|f| f["index"].as_u64().unwrap()).collect();
        assert_eq!(indices, vec![6, 7, 8, 9, 10]);
        let totals: Vec<u64> = flows.iter().map(|f| f["total"].as_u64().unwrap()).collect();
        assert_eq!(totals, vec![1, 0, 0, 1, 0]);
        assert_eq!(flows[1]["label"], "Week 7");

        assert_eq!(json["average"]["hours"], 122.0);
        assert!((json["average"]["days"].as_f64().unwrap() - 5.08).abs() < 1e-9);
        assert_eq!(flows[0]["average_hours"], 2.0);
        assert_eq!(flows[1]["average_hours"], 0.0);
        assert_eq!(flows[1]["median_hours"], 0.0);
        assert_eq!(flows[3]["median_hours"], 242.0);
    }

    #[test]
    fn selected_requests_are_ordered_by_lifecycle() {
        let (_dir, config, _output) =
            setup("[report]
project = 1
created_within_period = false
");
        let config = CadenceConfig::load(&config).unwrap();
        let selection = convert::build_selection(&config.report).unwrap();
        let set = load_requests(&config, None, &selection).unwrap();
        let ids: Vec<u64> = set.requests().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 5, 2, 3, 4]);
    }

    #[test]
    fn created_outside_period_is_kept_when_disabled() {
        let (_dir, config, output) =
            setup("[report]\nproject = 1\ncreated_within_period = false\n");
        let json = run_report(config, &output);
        assert_eq!(json["totals"]["all"], 5);
        let week7 = &json["years"][0]["flows"][1];
        assert_eq!(week7["index"], 7);
        assert_eq!(week7["total"], 1);
    }

    #[test]
    fn closed_lifecycle() {
        let (_dir, config, output) = setup("[report]\nlifecycle = \"closed\"\n");
        let json = run_report(config, &output);
        assert_eq!(json["lifecycle"], "closed");
        let total: u64 = json["years"][0]["flows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["total"].as_u64().unwrap())
            .sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn missing_events_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("cadence.toml");
        std::fs::write(
            &config,
            "[period]\nstart = \"2022-02-01T00:00:00Z\"\nend = \"2022-02-28T00:00:00Z\"\n",
        )
        .unwrap();
        let err = run(ReportArgs {
            config,
            events: None,
            output: None,
        })
        .unwrap_err();
        assert!(err.to_string().contains("no events path"));
    }
}
