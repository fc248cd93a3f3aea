//! Report CLI commands
//!
//! Bridges the dashboard and analytics views to the terminal.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{BillifyError, BillifyResult};
use crate::reports::{AnalyticsReport, DashboardReport};
use crate::session::Session;
use crate::state::AppState;

/// Render the dashboard overview
pub fn handle_dashboard(
    state: &AppState,
    session: &Session,
    settings: &Settings,
) -> BillifyResult<()> {
    let report = DashboardReport::generate(state, session, settings.recent_activity_limit)?;
    print!("{}", report.format_terminal());
    Ok(())
}

/// Render the analytics view, optionally exporting CSV
pub fn handle_analytics(state: &AppState, csv: bool, out: Option<PathBuf>) -> BillifyResult<()> {
    let report = AnalyticsReport::generate(state)?;

    if csv {
        match out {
            Some(path) => {
                let mut file = File::create(&path)
                    .map_err(|e| BillifyError::Export(format!("{}: {}", path.display(), e)))?;
                report.export_csv(&mut file)?;
                println!("Exported analytics to {}", path.display());
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                report.export_csv(&mut handle)?;
                handle
                    .flush()
                    .map_err(|e| BillifyError::Export(e.to_string()))?;
            }
        }
    } else {
        print!("{}", report.format_terminal());
    }

    Ok(())
}
