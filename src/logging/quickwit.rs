use crate::logging::consts::{
    DEFAULT_LOGGING_BATCH_SIZE, QUICKWIT_FLUSH_PERIOD, QUICKWIT_LOGGING_CHANNEL_CAPACITY,
};
use reqwest::Client;
use serde::Serialize;
use std::collections::HashMap;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task;
use tokio::time::{self, MissedTickBehavior};
use tracing::field::{Field, Visit};
use tracing_core::Event;
use tracing_core::Subscriber;
use tracing_subscriber::layer::Context as TracingContext;
use tracing_subscriber::Layer;
use url::Url;

type LogRecord = serde_json::Map<String, serde_json::Value>;

/// Builds a layer forwarding events to Quickwit indexes.
///
/// Only events carrying the marker field are shipped, and the value of that field picks the
/// index. Anything else is left to the other layers of the subscriber.
pub struct QuickwitLoggingLayerBuilder {
    quickwit_url: Url,
    marker_field: String,
    marker_to_index: HashMap<String, String>,
    batch_size: usize,
    flush_period: Duration,
}

impl QuickwitLoggingLayerBuilder {
    pub fn new(quickwit_url: Url) -> Self {
        Self {
            quickwit_url,
            marker_field: String::new(),
            marker_to_index: HashMap::new(),
            batch_size: DEFAULT_LOGGING_BATCH_SIZE,
            flush_period: QUICKWIT_FLUSH_PERIOD,
        }
    }

    pub fn marker_field(mut self, field: &str) -> Self {
        self.marker_field = field.to_string();
        self
    }

    pub fn map_marker_to_index(mut self, marker: &str, index_id: &str) -> Self {
        self.marker_to_index
            .insert(marker.to_string(), index_id.to_string());
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Spawns the shipping task, so it has to be called from within a Tokio runtime.
    pub fn build(self) -> QuickwitLoggingLayer {
        let (sender, receiver) = mpsc::channel(QUICKWIT_LOGGING_CHANNEL_CAPACITY);
        task::spawn(ship_batches(
            self.quickwit_url,
            receiver,
            self.batch_size,
            self.flush_period,
        ));
        QuickwitLoggingLayer {
            sender,
            marker_field: self.marker_field,
            marker_to_index: self.marker_to_index,
        }
    }
}

pub struct QuickwitLoggingLayer {
    sender: mpsc::Sender<QuickwitLogMessage>,
    marker_field: String,
    marker_to_index: HashMap<String, String>,
}

impl QuickwitLoggingLayer {
    fn index_for(&self, event: &Event<'_>) -> Option<String> {
        let mut visitor = MarkerVisitor {
            marker_field: &self.marker_field,
            marker: None,
        };
        event.record(&mut visitor);
        visitor
            .marker
            .and_then(|marker| self.marker_to_index.get(&marker).cloned())
    }
}

impl<S: Subscriber> Layer<S> for QuickwitLoggingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: TracingContext<'_, S>) {
        let Some(index_id) = self.index_for(event) else {
            return;
        };
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);
        // Never blocks: logs are dropped while the channel is full.
        let _ = self.sender.try_send(QuickwitLogMessage {
            index_id,
            log: visitor.record,
        });
    }
}

async fn ship_batches(
    quickwit_url: Url,
    mut receiver: mpsc::Receiver<QuickwitLogMessage>,
    batch_size: usize,
    flush_period: Duration,
) {
    let http_client = Client::new();
    let mut buffers: HashMap<String, Vec<LogRecord>> = HashMap::new();
    let mut flush_ticks = time::interval(flush_period);
    flush_ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            message = receiver.recv() => {
                let Some(QuickwitLogMessage { index_id, log }) = message else {
                    break;
                };
                let buffer = buffers
                    .entry(index_id.clone())
                    .or_insert_with(|| Vec::with_capacity(batch_size));
                buffer.push(log);
                if buffer.len() >= batch_size {
                    ingest(&http_client, &quickwit_url, &index_id, buffer).await;
                }
            }
            _ = flush_ticks.tick() => {
                for (index_id, buffer) in buffers.iter_mut() {
                    ingest(&http_client, &quickwit_url, index_id, buffer).await;
                }
            }
        }
    }
    for (index_id, buffer) in buffers.iter_mut() {
        ingest(&http_client, &quickwit_url, index_id, buffer).await;
    }
}

async fn ingest(
    http_client: &Client,
    quickwit_url: &Url,
    index_id: &str,
    buffer: &mut Vec<LogRecord>,
) {
    if buffer.is_empty() {
        return;
    }
    let mut ndjson_body = Vec::new();
    for log in buffer.drain(..) {
        let _ = serialize_to_ndjson(&mut ndjson_body, &log);
    }
    // Not `tracing`: this layer would receive its own failure.
    if let Err(err) = http_client
        .post(ingest_url(quickwit_url, index_id))
        .body(ndjson_body)
        .send()
        .await
    {
        eprintln!("Failed to ship logs to the `{index_id}` Quickwit index: {err}");
    }
}

pub fn ingest_url(quickwit_url: &Url, index_id: &str) -> String {
    let base = quickwit_url.as_str().trim_end_matches('/');
    format!("{base}/api/v1/{index_id}/ingest")
}

struct MarkerVisitor<'a> {
    marker_field: &'a str,
    marker: Option<String>,
}

impl Visit for MarkerVisitor<'_> {
    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == self.marker_field {
            self.marker = Some(value.to_string());
        }
    }
}

#[derive(Default)]
struct RecordVisitor {
    record: LogRecord,
}

impl Visit for RecordVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record.insert(field.name().to_string(), value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record.insert(field.name().to_string(), value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record.insert(field.name().to_string(), value.into());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record.insert(field.name().to_string(), value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.record.insert(field.name().to_string(), value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.record
            .insert(field.name().to_string(), format!("{value:?}").into());
    }
}

#[derive(Debug, Serialize)]
struct QuickwitLogMessage {
    index_id: String,
    log: LogRecord,
}

fn serialize_to_ndjson<W, V>(mut writer: W, value: &V) -> io::Result<()>
where
    W: io::Write,
    V: ?Sized + Serialize,
{
    serde_json::to_writer(&mut writer, value)?;
    writer.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, routing::post, Router};
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<String>>>;

    async fn fake_quickwit() -> (Url, Received) {
        let received = Received::default();
        let router = Router::new()
            .route(
                "/api/v1/round_events/ingest",
                post(|State(received): State<Received>, body: String| async move {
                    received.lock().unwrap().push(body);
                }),
            )
            .with_state(received.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        (Url::parse(&format!("http://{address}")).unwrap(), received)
    }

    #[tokio::test]
    async fn test_partial_batch_is_shipped_after_flush_period() {
        let (quickwit_url, received) = fake_quickwit().await;
        let (sender, receiver) = mpsc::channel(16);
        let shipping = task::spawn(ship_batches(
            quickwit_url,
            receiver,
            100,
            Duration::from_millis(50),
        ));
        let mut log = LogRecord::new();
        log.insert(String::from("event"), "submit_guess".into());

        sender
            .send(QuickwitLogMessage {
                index_id: String::from("round_events"),
                log,
            })
            .await
            .unwrap();
        for _ in 0..100 {
            if !received.lock().unwrap().is_empty() {
                break;
            }
            time::sleep(Duration::from_millis(20)).await;
        }

        assert_eq!(
            received.lock().unwrap().as_slice(),
            ["{\"event\":\"submit_guess\"}\n".to_string()]
        );
        assert!(!shipping.is_finished());
        shipping.abort();
    }

    #[test]
    fn test_ingest_url_ignores_trailing_slash() {
        let with_slash = Url::parse("http://127.0.0.1:7280/").unwrap();
        let without_slash = Url::parse("http://127.0.0.1:7280").unwrap();

        assert_eq!(
            ingest_url(&with_slash, "round_events"),
            "http://127.0.0.1:7280/api/v1/round_events/ingest"
        );
        assert_eq!(
            ingest_url(&without_slash, "round_events"),
            ingest_url(&with_slash, "round_events")
        );
    }

    #[test]
    fn test_records_are_newline_delimited() {
        let mut body = Vec::new();
        let mut record = LogRecord::new();
        record.insert(String::from("event"), "submit_guess".into());

        serialize_to_ndjson(&mut body, &record).unwrap();
        serialize_to_ndjson(&mut body, &record).unwrap();

        assert_eq!(
            String::from_utf8(body).unwrap(),
            "{\"event\":\"submit_guess\"}\n{\"event\":\"submit_guess\"}\n"
        );
    }
}
