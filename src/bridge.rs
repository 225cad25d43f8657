use crate::format::Message;
use crate::global;
use crate::logger::Logger;
use crate::severity::Severity;
use parking_lot::ReentrantMutex;
use std::cell::RefCell;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

enum Destination {
    Default,
    Owned(ReentrantMutex<RefCell<Logger>>),
}

/// `tracing` layer that prints each event's message as a leveled line.
///
/// Only the `message` field is used. Events never terminate the process,
/// since `tracing` has no fatal level. An event raised while the same thread
/// is already writing to the target logger is dropped.
pub struct LoggerLayer {
    destination: Destination,
}

impl LoggerLayer {
    /// Forwards to the process-wide default logger.
    pub fn default_logger() -> Self {
        Self {
            destination: Destination::Default,
        }
    }

    pub fn new(logger: Logger) -> Self {
        Self {
            destination: Destination::Owned(ReentrantMutex::new(RefCell::new(logger))),
        }
    }

    fn forward(&self, severity: Severity, text: &str) {
        match &self.destination {
            Destination::Default => {
                global::try_log(severity, Message::Formatted(format_args!("{text}")));
            }
            Destination::Owned(logger) => {
                let guard = logger.lock();
                if let Ok(mut logger) = guard.try_borrow_mut() {
                    logger.log(severity, Message::Formatted(format_args!("{text}")));
                }
            }
        }
    }
}

impl<S: Subscriber> Layer<S> for LoggerLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let severity = Severity::from(*event.metadata().level());
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.forward(severity, &visitor.message.unwrap_or_default());
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FormattingOptions, SharedBuffer};
    use std::io::{self, Write};
    use tracing_subscriber::prelude::*;

    #[test]
    fn test_events_are_forwarded_with_mapped_severity() {
        let buffer = SharedBuffer::new();
        let logger =
            Logger::new(Severity::Debug, buffer.clone(), FormattingOptions::plain()).unwrap();
        let subscriber = tracing_subscriber::registry().with(LoggerLayer::new(logger));

        tracing::subscriber::with_default(subscriber, || {
            tracing::trace!("fine grained");
            tracing::info!(attempt = 2, "connected to {}", "db");
            tracing::warn!("slow");
            tracing::error!("lost");
        });

        assert_eq!(
            buffer.lines(),
            vec![
                "DBG  fine grained",
                "INF  connected to db",
                "WAR  slow",
                "ERR  lost",
            ]
        );
    }

    #[test]
    fn test_threshold_still_applies() {
        let buffer = SharedBuffer::new();
        let logger =
            Logger::new(Severity::Warning, buffer.clone(), FormattingOptions::plain()).unwrap();
        let subscriber = tracing_subscriber::registry().with(LoggerLayer::new(logger));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden");
            tracing::info!("hidden");
            tracing::warn!("shown");
        });

        assert_eq!(buffer.lines(), vec!["WAR  shown"]);
    }

    struct TracingWriter(SharedBuffer);

    impl Write for TracingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            tracing::warn!("writer saw {} bytes", buf.len());
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.0.flush()
        }
    }

    #[test]
    fn test_event_from_inside_the_writer_is_dropped() {
        let buffer = SharedBuffer::new();
        let logger = Logger::new(
            Severity::Debug,
            TracingWriter(buffer.clone()),
            FormattingOptions::plain(),
        )
        .unwrap();
        let subscriber = tracing_subscriber::registry().with(LoggerLayer::new(logger));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("outer");
        });

        assert_eq!(buffer.lines(), vec!["INF  outer"]);
    }
}
