//! JSON report

use crate::error::Result;
use faultsim_sim::CoverageReport;
use std::io::Write;

/// Write the report as pretty-printed JSON
///
/// Without fault lists, the `detected_faults`/`undetected_faults` arrays are
/// emitted empty so the schema stays fixed.
pub fn write_json<W: Write>(writer: &mut W, report: &CoverageReport, fault_lists: bool) -> Result<()> {
    if fault_lists {
        serde_json::to_writer_pretty(&mut *writer, report)?;
    } else {
        let summary = CoverageReport {
            detected_faults: Vec::new(),
            undetected_faults: Vec::new(),
            ..report.clone()
        };
        serde_json::to_writer_pretty(&mut *writer, &summary)?;
    }
    writeln!(writer)?;
    Ok(())
}
