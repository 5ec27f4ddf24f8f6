//! Metrics sink boundary.
//!
//! Pipeline logic must not touch `obs::metrics` directly; all
//! instrumentation flows through `MetricsEvent` and `MetricsSink`. This
//! module is the only bridge between execution logic and counter state.

use crate::{error::ErrorClass, obs::metrics};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = const { RefCell::new(None) };
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    ExecStart,
    ExecFinish {
        rows_scanned: u64,
        unique_values: u64,
        page_len: u64,
    },
    ExecFailed {
        class: ErrorClass,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default process-local sink that writes into thread-local counter state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::ExecStart => metrics::with_state_mut(|m| {
                m.execute_calls = m.execute_calls.saturating_add(1);
            }),

            MetricsEvent::ExecFinish {
                rows_scanned,
                unique_values,
                page_len,
            } => metrics::with_state_mut(|m| {
                m.rows_scanned = m.rows_scanned.saturating_add(rows_scanned);
                m.unique_values = m.unique_values.saturating_add(unique_values);
                m.pages_emitted = m.pages_emitted.saturating_add(1);
                m.values_returned = m.values_returned.saturating_add(page_len);
            }),

            MetricsEvent::ExecFailed { .. } => metrics::with_state_mut(|m| {
                m.execute_failures = m.execute_failures.saturating_add(1);
            }),
        }
    }
}

pub(crate) fn record(event: MetricsEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());
    match sink {
        Some(sink) => sink.record(event),
        None => GlobalMetricsSink.record(event),
    }
}

/// Run a closure with a temporary metrics sink override.
///
/// The previous sink is restored on all exits, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0.take();
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// Span
///
/// RAII guard that emits start and terminal events for one executor call.
/// Terminal accounting happens on drop, so early error returns still land
/// in the counters.
///

pub(crate) struct Span {
    rows_scanned: u64,
    unique_values: u64,
    page_len: u64,
    failure: Option<ErrorClass>,
}

impl Span {
    #[must_use]
    pub(crate) fn new() -> Self {
        record(MetricsEvent::ExecStart);

        Self {
            rows_scanned: 0,
            unique_values: 0,
            page_len: 0,
            failure: None,
        }
    }

    pub(crate) const fn set_counts(&mut self, rows_scanned: u64, unique_values: u64, page_len: u64) {
        self.rows_scanned = rows_scanned;
        self.unique_values = unique_values;
        self.page_len = page_len;
    }

    pub(crate) const fn fail(&mut self, class: ErrorClass) {
        self.failure = Some(class);
    }
}

impl Drop for Span {
    fn drop(&mut self) {
        match self.failure {
            Some(class) => record(MetricsEvent::ExecFailed { class }),
            None => record(MetricsEvent::ExecFinish {
                rows_scanned: self.rows_scanned,
                unique_values: self.unique_values,
                page_len: self.page_len,
            }),
        }
    }
}

///
/// TESTS
///
