//! Metric line assembly.
//!
//! Format:
//! fritzbox,host="192.168.178.1",source=wan some_int=23i,some_float=32.3,some_string="some string"

use crate::wire::WireValue;

/// One metric as rendered text, before coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricValue {
    pub name: String,
    pub raw: String,
}

/// Everything one poll cycle collected for a source, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBatch {
    pub source: String,
    pub values: Vec<MetricValue>,
}

impl ResultBatch {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            values: Vec::new(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, raw: impl Into<String>) {
        self.values.push(MetricValue {
            name: name.into(),
            raw: raw.into(),
        });
    }
}

/// Format a batch as one line, without the trailing newline.
///
/// Fields whose value is the nil marker are skipped. A batch with no
/// remaining fields still yields the tag prefix and its trailing space.
/// `host` and string values are written unescaped.
pub fn format_line(bucket: &str, host: &str, batch: &ResultBatch) -> String {
    let prefix = format!("{},host=\"{}\",source={} ", bucket, host, batch.source);

    let fields: Vec<String> = batch
        .values
        .iter()
        .filter_map(|v| WireValue::coerce(&v.raw).map(|w| format!("{}={}", v.name, w)))
        .collect();

    prefix + &fields.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_mixed_fields_in_batch_order() {
        let mut batch = ResultBatch::new("wan");
        batch.push("packets_received", "42");
        batch.push("bytes_send_rate", "3.14");
        batch.push("connection_status", "Connected");

        assert_eq!(
            format_line("fritzbox", "192.168.178.1", &batch),
            r#"fritzbox,host="192.168.178.1",source=wan packets_received=42i,bytes_send_rate=3.14,connection_status="Connected""#
        );
    }

    #[test]
    fn nil_fields_are_left_out() {
        let mut batch = ResultBatch::new("wan");
        batch.push("a", "<nil>");
        batch.push("b", "1");
        batch.push("c", "<nil>");
        batch.push("d", "x");

        assert_eq!(
            format_line("fritzbox", "h", &batch),
            r#"fritzbox,host="h",source=wan b=1i,d="x""#
        );
    }

    #[test]
    fn empty_batch_keeps_trailing_space() {
        let batch = ResultBatch::new("wan");
        assert_eq!(format_line("fritzbox", "h", &batch), r#"fritzbox,host="h",source=wan "#);

        let mut all_nil = ResultBatch::new("wan");
        all_nil.push("a", "<nil>");
        assert_eq!(format_line("fritzbox", "h", &all_nil), r#"fritzbox,host="h",source=wan "#);
    }

    #[test]
    fn duplicate_names_are_not_merged() {
        let mut batch = ResultBatch::new("wan");
        batch.push("x", "1");
        batch.push("x", "2");
        assert_eq!(format_line("b", "h", &batch), r#"b,host="h",source=wan x=1i,x=2i"#);
    }

    #[test]
    fn host_is_written_verbatim() {
        let batch = ResultBatch::new("wan");
        assert_eq!(
            format_line("fritzbox", r#"fritz"box"#, &batch),
            r#"fritzbox,host="fritz"box",source=wan "#
        );
    }

    #[test]
    fn no_newline_is_appended() {
        let mut batch = ResultBatch::new("wan");
        batch.push("a", "1");
        assert!(!format_line("fritzbox", "h", &batch).ends_with('\n'));
    }
}
