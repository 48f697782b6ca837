//! Summary command: average time to merge and lifecycle totals of the
//! selected change requests.

use anyhow::{Context, Result};
use tracing::info_span;

use crate::cli::SummaryArgs;
use crate::config::CadenceConfig;
use crate::convert;
use crate::report_cmd::load_requests;

/// Print the summary as JSON on stdout.
pub fn run(args: SummaryArgs) -> Result<()> {
    let _cmd = info_span!("summary").entered();
    let config = CadenceConfig::load(&args.config)?;
    let selection = convert::build_selection(&config.report)?;
    let set = load_requests(&config, args.events.as_deref(), &selection)?;

    let json =
        serde_json::to_string_pretty(&set.summary()).context("failed to serialize summary")?;
    println!("{json}");
    Ok(())
}
