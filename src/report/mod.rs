pub mod anomaly;
pub mod graph;

use std::path::Path;

pub use anomaly::format_flagged_table;
pub use anomaly::print_flagged;
pub use anomaly::write_anomalies_json;
pub use graph::print_graph_summary;
pub use graph::render_dot;
pub use graph::write_graph_dot;

use crate::err_with_loc;
use crate::error::ReportError;

/// Writes `contents` to `path`, creating missing parent directories first.
pub(crate) fn write_output(
    path: &Path,
    contents: &str,
) -> crate::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            err_with_loc!(ReportError::CreateDirError { path: parent.display().to_string(), source: e })
        })?;
    }
    std::fs::write(path, contents)
        .map_err(|e| err_with_loc!(ReportError::WriteError { path: path.display().to_string(), source: e }))?;
    Ok(())
}
