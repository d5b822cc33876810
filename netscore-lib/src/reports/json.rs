use crate::Result;
use crate::metrics::{MetricScore, MetricsReport, ReportValue};
use core::fmt::Write;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Serializes report entries as a map, keeping their order.
struct OrderedReport<'a>(&'a MetricsReport);

impl Serialize for OrderedReport<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let entries = self.0.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in &entries {
            map.serialize_entry(key, &EntryValue(*value))?;
        }
        map.end()
    }
}

struct EntryValue(ReportValue);

impl Serialize for EntryValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        match self.0 {
            ReportValue::Score(MetricScore::Value(v)) | ReportValue::Latency(v) => serializer.serialize_f64(v),
            ReportValue::Score(MetricScore::Failed) => serializer.serialize_i64(-1),
        }
    }
}

pub fn generate<W: Write>(report: &MetricsReport, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(&OrderedReport(report))?)?;
    Ok(())
}
