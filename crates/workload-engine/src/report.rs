//! Final run report.

use crate::state::RunSnapshot;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use workload_core::OperationKind;

/// Counters and timing of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub operations_completed: u64,
    pub records_created: u64,
    pub deleted_count: u64,
    pub operations_by_kind: BTreeMap<OperationKind, u64>,
    pub errors_by_kind: BTreeMap<OperationKind, u64>,
    pub errors_total: u64,
    #[serde(rename = "duration_secs", serialize_with = "serialize_secs")]
    pub duration: Duration,
    /// The wall-clock limit stopped the run before the budget ran out.
    pub time_limited: bool,
    pub workers: usize,
    pub target_throughput: Option<u64>,
}

impl RunReport {
    pub fn new(
        snapshot: RunSnapshot,
        duration: Duration,
        time_limited: bool,
        workers: usize,
        target_throughput: Option<u64>,
    ) -> Self {
        Self {
            operations_completed: snapshot.operations_completed,
            records_created: snapshot.records_created,
            deleted_count: snapshot.deleted_count,
            operations_by_kind: snapshot.operations_by_kind,
            errors_by_kind: snapshot.errors_by_kind,
            errors_total: snapshot.errors_total,
            duration,
            time_limited,
            workers,
            target_throughput,
        }
    }

    pub fn operations(&self, kind: OperationKind) -> u64 {
        self.operations_by_kind.get(&kind).copied().unwrap_or(0)
    }

    pub fn errors(&self, kind: OperationKind) -> u64 {
        self.errors_by_kind.get(&kind).copied().unwrap_or(0)
    }

    pub fn live_records(&self) -> u64 {
        self.records_created - self.deleted_count
    }

    /// Achieved operations per second, or `None` for a zero-length run.
    pub fn throughput(&self) -> Option<f64> {
        let secs = self.duration.as_secs_f64();
        (secs > 0.0).then(|| self.operations_completed as f64 / secs)
    }

    /// Share of operations of `kind`, in percent.
    pub fn realized_percentage(&self, kind: OperationKind) -> f64 {
        if self.operations_completed == 0 {
            return 0.0;
        }
        self.operations(kind) as f64 * 100.0 / self.operations_completed as f64
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render the report as a table.
    pub fn format_table(&self) -> String {
        let mut output = String::new();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Operation", "Count", "Share", "Errors"]);

        for kind in OperationKind::ALL {
            let errors = self.errors(kind);
            let errors_cell = if errors > 0 {
                Cell::new(format_number(errors)).fg(Color::Red)
            } else {
                Cell::new("0")
            };
            table.add_row(vec![
                Cell::new(kind.as_str()),
                Cell::new(format_number(self.operations(kind))),
                Cell::new(format!("{:.1}%", self.realized_percentage(kind))),
                errors_cell,
            ]);
        }

        table.add_row(vec![
            Cell::new("TOTAL").fg(Color::Cyan),
            Cell::new(format_number(self.operations_completed)),
            Cell::new("100.0%"),
            Cell::new(format_number(self.errors_total)),
        ]);

        output.push_str(&table.to_string());
        output.push('\n');

        output.push_str(&format!(
            "\nRecords: {} created, {} deleted, {} live\n",
            format_number(self.records_created),
            format_number(self.deleted_count),
            format_number(self.live_records())
        ));
        output.push_str(&format!(
            "Duration: {}  Workers: {}\n",
            format_duration(self.duration.as_secs_f64()),
            self.workers
        ));

        let achieved = self
            .throughput()
            .map(|t| format!("{t:.1} ops/sec"))
            .unwrap_or_else(|| "-".to_string());
        match self.target_throughput {
            Some(target) => output.push_str(&format!(
                "Throughput: {achieved} (target {} ops/sec)\n",
                format_number(target)
            )),
            None => output.push_str(&format!("Throughput: {achieved} (unbounded)\n")),
        }

        if self.time_limited {
            output.push_str("Stopped by time limit before the operation budget ran out\n");
        }

        output
    }
}

fn serialize_secs<S: serde::Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

fn format_duration(secs: f64) -> String {
    if secs < 60.0 {
        format!("{secs:.1}s")
    } else if secs < 3600.0 {
        let mins = (secs / 60.0).floor();
        format!("{}m {:02.0}s", mins as u64, secs - mins * 60.0)
    } else {
        let hours = (secs / 3600.0).floor();
        let mins = ((secs - hours * 3600.0) / 60.0).floor();
        format!("{}h {:02.0}m", hours as u64, mins)
    }
}

/// Format number with thousands separators.
fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
