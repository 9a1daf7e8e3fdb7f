//! Shared test utilities used across vecpath crates.

pub mod tracing {
    //! Recording layer utilities for capturing spans and events in tests.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;

    /// Recording layer installed during tests to capture closed spans and
    /// emitted events for later assertions.
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Returns the closed spans in completion order.
        ///
        /// # Examples
        /// ```
        /// use vecpath_test_support::tracing::RecordingLayer;
        ///
        /// let layer = RecordingLayer::default();
        /// assert!(layer.spans().is_empty());
        /// ```
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.spans.lock().expect("lock poisoned").clone()
        }

        /// Returns the emitted events in emission order.
        ///
        /// # Examples
        /// ```
        /// use vecpath_test_support::tracing::RecordingLayer;
        ///
        /// let layer = RecordingLayer::default();
        /// assert!(layer.events().is_empty());
        /// ```
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.events.lock().expect("lock poisoned").clone()
        }

        /// Returns the first closed span called `name`, if any.
        #[must_use]
        pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
            self.spans
                .lock()
                .expect("lock poisoned")
                .iter()
                .find(|span| span.name == name)
                .cloned()
        }

        /// Returns the events recorded at `level`.
        #[must_use]
        pub fn events_at(&self, level: Level) -> Vec<EventRecord> {
            self.events
                .lock()
                .expect("lock poisoned")
                .iter()
                .filter(|event| event.level == level)
                .cloned()
                .collect()
        }
    }

    /// Runs `operation` with a fresh [`RecordingLayer`] installed as the
    /// thread-local default subscriber and returns its result together with
    /// the layer.
    ///
    /// # Examples
    /// ```
    /// use vecpath_test_support::tracing::with_recording;
    ///
    /// let (value, layer) = with_recording(|| {
    ///     tracing::info_span!("demo").in_scope(|| 7)
    /// });
    /// assert_eq!(value, 7);
    /// assert!(layer.span_named("demo").is_some());
    /// ```
    pub fn with_recording<T>(operation: impl FnOnce() -> T) -> (T, RecordingLayer) {
        let layer = RecordingLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        let value = tracing::subscriber::with_default(subscriber, operation);
        (value, layer)
    }

    /// Snapshot of a closed span and the fields recorded against it.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the tracing metadata.
        pub name: String,
        /// Structured fields recorded against the span.
        pub fields: HashMap<String, String>,
    }

    /// Snapshot of an emitted tracing event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Log level of the event.
        pub level: Level,
        /// Event target from the metadata.
        pub target: String,
        /// Structured fields attached to the event, including `message`.
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// Returns the formatted event message, if one was recorded.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.fields.get("message").map(String::as_str)
        }
    }

    struct SpanData {
        name: String,
        fields: HashMap<String, String>,
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            id: &tracing::span::Id,
            ctx: Context<'_, S>,
        ) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut fields = HashMap::new();
            attrs.record(&mut FieldRecorder(&mut fields));
            span.extensions_mut().insert(SpanData {
                name: attrs.metadata().name().to_owned(),
                fields,
            });
        }

        fn on_record(
            &self,
            id: &tracing::span::Id,
            values: &tracing::span::Record<'_>,
            ctx: Context<'_, S>,
        ) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(data) = span.extensions_mut().get_mut::<SpanData>() {
                values.record(&mut FieldRecorder(&mut data.fields));
            }
        }

        fn on_close(&self, id: tracing::span::Id, ctx: Context<'_, S>) {
            let Some(data) = ctx
                .span(&id)
                .and_then(|span| span.extensions_mut().remove::<SpanData>())
            else {
                return;
            };
            self.spans.lock().expect("lock poisoned").push(SpanRecord {
                name: data.name,
                fields: data.fields,
            });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldRecorder(&mut fields));
            self.events
                .lock()
                .expect("lock poisoned")
                .push(EventRecord {
                    level: *event.metadata().level(),
                    target: event.metadata().target().to_owned(),
                    fields,
                });
        }
    }

    /// Stores every field as its display form, falling back to `Debug`.
    struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

    impl FieldRecorder<'_> {
        fn insert(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.insert(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.insert(field, value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.insert(field, value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.insert(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.insert(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.insert(field, value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.insert(field, value.to_string());
        }
    }

}

pub mod ci;
pub mod csv;
