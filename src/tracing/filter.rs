use tracing::Level;
use tracing::Metadata;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::Filter;
use tracing_subscriber::registry::LookupSpan;

use crate::constants::LOG_TARGET;

fn is_own_target(meta: &Metadata<'_>) -> bool { meta.target().starts_with(LOG_TARGET) }

// Custom filter for exact debug level matching
pub struct DebugOnlyFilter;

impl<S> Filter<S> for DebugOnlyFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        meta.level() == &Level::DEBUG && is_own_target(meta)
    }
}

// Custom filter for error and warn levels
pub struct ErrorWarnFilter;

impl<S> Filter<S> for ErrorWarnFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        (meta.level() == &Level::ERROR || meta.level() == &Level::WARN) && is_own_target(meta)
    }
}

// Info and above
#[cfg(feature = "dev")]
pub struct InfoAndAboveFilter;

#[cfg(feature = "dev")]
impl<S> Filter<S> for InfoAndAboveFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        meta.level() <= &Level::INFO && is_own_target(meta)
    }
}

// Custom filter for error levels
pub struct ErrorOnlyFilter;

impl<S> Filter<S> for ErrorOnlyFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        meta.level() == &Level::ERROR && is_own_target(meta)
    }
}
