//! Terminal logger setup.

use slog::{o, Drain, Level, LevelFilter, Logger};

/// Builds a compact stderr logger filtered at `level`.
///
/// Records are written from a background thread; dropping the last clone of
/// the returned logger flushes them.
pub fn build(level: Level) -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = LevelFilter::new(drain, level).fuse();
    Logger::root(drain, o!("version" => env!("CARGO_PKG_VERSION")))
}
