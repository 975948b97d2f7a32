use std::fmt::Write;
use std::path::Path;

use tracing::info;

use super::write_output;
use crate::err_with_loc;
use crate::error::ReportError;
use crate::model::AnomalyRow;

pub fn write_anomalies_json(
    rows: &[AnomalyRow],
    path: impl AsRef<Path>,
) -> crate::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(rows).map_err(|e| err_with_loc!(ReportError::SerializeError(e)))?;
    write_output(path, &json)?;
    info!("report::anomalies_saved::{}::rows::{}", path.display(), rows.len());
    println!("[+] Saved {}", path.display());
    Ok(())
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "NaN".to_string(), |v| format!("{:.4}", v))
}

pub fn format_flagged_table(rows: &[&AnomalyRow]) -> String {
    let mut out = String::new();
    if rows.is_empty() {
        out.push_str("(none)\n");
        return out;
    }

    let _ = writeln!(out, "{:<20} {:>16} {:>20} {:>10} {:>10}", "ts", "price", "volume", "vol_z", "ret_z");
    for row in rows {
        let _ = writeln!(
            out,
            "{:<20} {:>16.6} {:>20.2} {:>10} {:>10}",
            row.timestamp.format("%Y-%m-%d %H:%M:%S"),
            row.price,
            row.volume,
            fmt_opt(row.volume_z),
            fmt_opt(row.return_z),
        );
    }
    out
}

pub fn print_flagged(rows: &[&AnomalyRow]) {
    println!("\n=== Flagged points ===");
    print!("{}", format_flagged_table(rows));
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;
    use crate::model::SpikeFlags;

    fn row(volume_z: Option<f64>) -> AnomalyRow {
        AnomalyRow {
            timestamp:   Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            price:       1.5,
            volume:      1000.0,
            ret:         None,
            volume_mean: None,
            volume_std:  None,
            volume_z,
            return_mean: None,
            return_std:  None,
            return_z:    None,
            flags:       SpikeFlags::from_z_scores(volume_z, None, 3.0),
        }
    }

    #[test]
    fn table_lists_rows_with_undefined_as_nan() {
        let flagged = row(Some(4.25));
        let table = format_flagged_table(&[&flagged]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("2024-03-01 12:00:00"));
        assert!(lines[1].contains("4.2500"));
        assert!(lines[1].ends_with("NaN"));
    }

    #[test]
    fn empty_table_says_none() {
        assert_eq!(format_flagged_table(&[]), "(none)\n");
    }

    #[test]
    fn json_report_uses_null_for_undefined() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("rows.json");
        write_anomalies_json(&[row(None)], &path).unwrap();

        let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(written[0]["return"].is_null());
        assert_eq!(written[0]["volume_spike"], serde_json::Value::Bool(false));
        assert_eq!(written[0]["timestamp"], "2024-03-01T12:00:00Z");
    }
}
