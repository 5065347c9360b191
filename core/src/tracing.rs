//! Tracing utilities for mapping observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level event when a parse starts or finishes.
///
/// ```ignore
/// rowgraph_trace_parse!("start", T::NAME, readers.len());
/// rowgraph_trace_parse!("finish", T::NAME, rows.len());
/// ```
#[macro_export]
macro_rules! rowgraph_trace_parse {
    ($event:literal, $entity:expr, $count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(event = $event, entity = $entity, count = $count, "rowgraph.parse");
    };
}

/// Emit a trace-level event for one result set of a parse.
///
/// ```ignore
/// rowgraph_trace_result_set!("bound", index, T::NAME, layout.len());
/// rowgraph_trace_result_set!("skipped", index);
/// ```
#[macro_export]
macro_rules! rowgraph_trace_result_set {
    ($event:literal, $index:expr, $entity:expr, $count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(
            event = $event,
            result_set = $index,
            entity = $entity,
            count = $count,
            "rowgraph.result_set"
        );
    };
    ($event:literal, $index:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(event = $event, result_set = $index, "rowgraph.result_set");
    };
}

/// Emit a trace-level event after a relationship is resolved.
#[macro_export]
macro_rules! rowgraph_trace_resolve {
    ($entity:expr, $field:expr, $target:expr, $matched:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(
            entity = $entity,
            field = $field,
            target = $target,
            matched = $matched,
            "rowgraph.resolve"
        );
    };
}

/// Emit a trace-level event when a driver cursor buffers a result set.
#[macro_export]
macro_rules! rowgraph_trace_cursor {
    ($driver:literal, $rows:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(driver = $driver, rows = $rows, "rowgraph.cursor");
    };
}
