//! Diagnostic logging to stderr.
//!
//! Stdout carries metric lines only. The default `telegraf` format prefixes
//! each event with the level marker telegraf's execd input understands on
//! stderr (`E!`, `W!`, `I!`, `D!`).

use crate::Result;

use anyhow::anyhow;
use clap::ValueEnum;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "FRITZBOX_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// `W! message key=value`
    Telegraf,
    /// Stock tracing-subscriber output.
    Full,
}

pub fn init_logging(format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    match format {
        LogFormat::Telegraf => builder.event_format(TelegrafFormat).try_init(),
        LogFormat::Full => builder.with_target(true).try_init(),
    }
    .map_err(|e| anyhow!("initialize logging: {}", e))
}

/// Level marker telegraf maps back to its own log levels.
pub fn level_marker(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "E!",
        Level::WARN => "W!",
        Level::INFO => "I!",
        _ => "D!",
    }
}

pub struct TelegrafFormat;

impl<S, N> FormatEvent<S, N> for TelegrafFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} ", level_marker(event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
