//! Browser Console Logging
//!
//! `tracing` subscriber whose output goes to the devtools console, one call
//! per event, at the matching console level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Install the global subscriber. Safe to call twice; the second call is a no-op.
pub fn init(level: Level) {
    let result = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(ConsoleMakeWriter)
        .try_init();

    if let Err(e) = result {
        web_sys::console::warn_1(&format!("[LOG] subscriber already installed: {}", e).into());
    }
}

/// Hands out one `ConsoleWriter` per formatted event
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted line and flushes it to the console on drop
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self { level, buf: Vec::new() }
    }

    /// Drain the buffer, without the trailing newline
    fn take_line(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let bytes = std::mem::take(&mut self.buf);
        Some(String::from_utf8_lossy(&bytes).trim_end().to_string())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = self.take_line() else {
            return;
        };
        let msg = JsValue::from_str(&line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&msg),
            Level::WARN => web_sys::console::warn_1(&msg),
            Level::INFO => web_sys::console::info_1(&msg),
            _ => web_sys::console::debug_1(&msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[test]
    fn test_writer_buffers_one_line() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        write!(writer, " WARN config fallback").unwrap();
        writer.write_all(b" reason=x\n").unwrap();

        assert_eq!(writer.take_line().as_deref(), Some(" WARN config fallback reason=x"));
        // Drained, so dropping does not touch the console
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn test_default_writer_is_info() {
        let writer = ConsoleMakeWriter.make_writer();
        assert_eq!(writer.level, Level::INFO);
    }

    /// Records the level of the writer handed out for each event
    struct WriterLevels(Arc<Mutex<Vec<Level>>>);

    impl<S: tracing::Subscriber> Layer<S> for WriterLevels {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let writer = ConsoleMakeWriter.make_writer_for(event.metadata());
            self.0.lock().unwrap().push(writer.level);
        }
    }

    #[test]
    fn test_make_writer_for_follows_event_level() {
        let levels = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(WriterLevels(levels.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("e");
            tracing::warn!("w");
            tracing::info!("i");
            tracing::debug!("d");
        });

        assert_eq!(
            *levels.lock().unwrap(),
            vec![Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG]
        );
    }
}
