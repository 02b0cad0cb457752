//! # Decode Trace Collector
//!
//! The decoder appends structured records to a [`Trace`] instead of
//! writing to any shared report surface; presentation (CLI table, GUI
//! row, test assertion) is the caller's concern.

use std::fmt;

/// Severity of one trace record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Decoded field or hex dump row
    Info,
    /// Structural inconsistency; the block was marked invalid
    Warning,
    /// Checksum or size verification failure
    Error,
}

/// One row of decode output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    pub severity: Severity,
    /// Short field/stage label, e.g. `"width"` or `"checksum"`
    pub label: String,
    /// Rendered value or diagnostic text
    pub detail: String,
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Info => "     ",
            Severity::Warning => "WARN ",
            Severity::Error => "ERROR",
        };
        write!(f, "{} {:<18} {}", tag, self.label, self.detail)
    }
}

/// Ordered collection of decode records for one character block.
#[derive(Debug, Default)]
pub struct Trace {
    records: Vec<TraceRecord>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&mut self, label: impl Into<String>, detail: impl Into<String>) {
        self.push(Severity::Info, label, detail);
    }

    pub fn warn(&mut self, label: impl Into<String>, detail: impl Into<String>) {
        self.push(Severity::Warning, label, detail);
    }

    pub fn error(&mut self, label: impl Into<String>, detail: impl Into<String>) {
        self.push(Severity::Error, label, detail);
    }

    fn push(&mut self, severity: Severity, label: impl Into<String>, detail: impl Into<String>) {
        self.records.push(TraceRecord {
            severity,
            label: label.into(),
            detail: detail.into(),
        });
    }

    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    pub fn has_diagnostics(&self) -> bool {
        self.records
            .iter()
            .any(|r| r.severity != Severity::Info)
    }

    /// Detail text of the first record with a matching label, if any.
    pub fn find(&self, label: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.detail.as_str())
    }
}

/// Render bytes as space-separated uppercase hex, capped for trace rows.
pub fn hex_bytes(data: &[u8]) -> String {
    const CAP: usize = 16;
    let mut out = data
        .iter()
        .take(CAP)
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ");
    if data.len() > CAP {
        out.push_str(&format!(" .. (+{} bytes)", data.len() - CAP));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_collects_in_order() {
        let mut t = Trace::new();
        t.row("format", "Raster (4)");
        t.warn("size", "descriptor exceeds block");
        assert_eq!(t.records().len(), 2);
        assert_eq!(t.records()[0].label, "format");
        assert!(t.has_diagnostics());
    }

    #[test]
    fn test_find() {
        let mut t = Trace::new();
        t.row("width", "8");
        assert_eq!(t.find("width"), Some("8"));
        assert_eq!(t.find("height"), None);
    }

    #[test]
    fn test_hex_bytes_caps() {
        assert_eq!(hex_bytes(&[0x1B, 0xFF]), "1B FF");
        let long = vec![0u8; 20];
        assert!(hex_bytes(&long).ends_with("(+4 bytes)"));
    }
}
