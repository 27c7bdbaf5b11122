//! Plain-text statistics report

use crate::error::Result;
use faultsim_sim::{CoverageReport, FaultDescriptor};
use std::io::Write;

/// Write the statistics report
///
/// "Gates" counts every node, primary inputs included.
pub fn write_text<W: Write>(writer: &mut W, report: &CoverageReport, fault_lists: bool) -> Result<()> {
    writeln!(writer, "Fault Simulation Statistics")?;
    writeln!(writer, "=============================")?;
    writeln!(writer)?;
    writeln!(writer, "Circuit Details:")?;
    writeln!(writer, "- Primary Inputs: {}", report.primary_inputs)?;
    writeln!(writer, "- Primary Outputs: {}", report.primary_outputs)?;
    writeln!(writer, "- Gates: {}", report.nodes)?;
    writeln!(writer)?;
    writeln!(writer, "Faults:")?;
    writeln!(writer, "- Total Collapsed Faults: {}", report.total_faults)?;
    writeln!(writer)?;
    writeln!(writer, "Simulation Results:")?;
    writeln!(writer, "- Test Vectors Applied: {}", report.vectors_applied)?;
    writeln!(writer, "- Detected Faults: {}", report.detected)?;
    writeln!(writer, "- Undetected Faults: {}", report.undetected)?;
    writeln!(writer, "- Fault Coverage: {}%", report.coverage_display())?;

    if fault_lists {
        writeln!(writer)?;
        writeln!(writer, "List of Detected Faults:")?;
        write_fault_list(writer, &report.detected_faults)?;
        writeln!(writer)?;
        writeln!(writer, "List of Undetected Faults:")?;
        write_fault_list(writer, &report.undetected_faults)?;
    }
    Ok(())
}

fn write_fault_list<W: Write>(writer: &mut W, faults: &[FaultDescriptor]) -> Result<()> {
    for fault in faults {
        writeln!(
            writer,
            "- Node: {}, Stuck-at-{}",
            fault.node_name, fault.stuck_at_value
        )?;
    }
    Ok(())
}
