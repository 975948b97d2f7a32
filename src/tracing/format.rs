use tracing::Event;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::FormatFields;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::registry::LookupSpan;

use crate::constants::LOG_TARGET;

/// `LEVEL timestamp::engine::module::message`, where `module` is the event target without
/// the crate prefix (`datasource::blockchain_info`, `engine::raqib`). Events from other
/// crates keep their full target. With `deep-trace` the source location is appended.
#[derive(Debug, Clone)]
pub struct MuraqibFormat {
    pub engine_name: String,
}

impl MuraqibFormat {
    pub fn new(engine_name: &str) -> Self { Self { engine_name: engine_name.to_string() } }

    fn module(target: &str) -> &str {
        target
            .strip_prefix(LOG_TARGET)
            .map(|rest| rest.trim_start_matches("::"))
            .filter(|rest| !rest.is_empty())
            .unwrap_or(target)
    }
}

impl<S, N> FormatEvent<S, N> for MuraqibFormat
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");

        write!(
            writer,
            "{} {}::{}::{}::",
            metadata.level(),
            timestamp,
            self.engine_name,
            Self::module(metadata.target())
        )?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        if cfg!(feature = "deep-trace") {
            write!(writer, " @{}:{}", metadata.file().unwrap_or("?"), metadata.line().unwrap_or(0))?;
        }

        writeln!(writer)
    }
}
