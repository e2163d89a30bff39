//! Writing translated graphs for renderers

use crate::error::Result;
use crate::translator::Translation;
use serde::Serialize;
use serde_json::json;
use std::io::Write;

/// Write any serializable value as JSON, pretty-printed when asked
pub fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a translation: the graph alone, or the graph with its summary
pub fn write_translation<W: Write>(writer: W, translation: &Translation, with_summary: bool, pretty: bool) -> Result<()> {
    log::info!("Writing {} graph", translation.backend);

    if with_summary {
        let document = json!({
            "backend": translation.backend.to_string(),
            "graph": translation.graph,
            "summary": translation.summary,
        });
        write_json(writer, &document, pretty)
    } else {
        write_json(writer, &translation.graph, pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::data::parse_meta;
    use crate::error::GermiculeError;
    use crate::translator::translate_with;
    use serde_json::Value;
    use std::io;

    /// Accepts every write, fails to flush
    struct Unflushable(Vec<u8>);

    impl Write for Unflushable {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
    }

    #[test]
    fn graph_is_written_as_single_line() {
        let translation = translate_with(&Config::default(), &parse_meta("[]").unwrap()).unwrap();
        let mut out = Vec::new();
        write_translation(&mut out, &translation, false, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["nodes"][0]["_tooltip"], "your germicule is empty");
    }

    #[test]
    fn summary_is_attached_on_request() {
        let meta = parse_meta(r#"[{"name": "🌞", "germicule": [{"name": "🌏"}]}]"#).unwrap();
        let translation = translate_with(&Config::default(), &meta).unwrap();
        let mut out = Vec::new();
        write_translation(&mut out, &translation, true, true).unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["backend"], "echart");
        assert_eq!(value["summary"]["edge_count"], 1);
        assert!(value["graph"]["edges"]["🌞 > 🌏"].is_object());
    }

    #[test]
    fn flush_failure_is_reported() {
        let result = write_json(Unflushable(Vec::new()), &serde_json::json!({ "nodes": [] }), false);
        assert!(matches!(result, Err(GermiculeError::Io(_))));
    }
}
