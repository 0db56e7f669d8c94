#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use holdem_engine::player::Player;
use holdem_engine::table::Table;
use tracing::Level;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

pub fn players(n: usize, chips: u32) -> Vec<Player> {
    (1..=n).map(|i| Player::new(format!("P{}", i), chips)).collect()
}

pub fn table(n: usize) -> Table {
    Table::with_seed(players(n, 1000), 42).expect("valid table")
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

/// Layer that records every event so tests can assert on them.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CapturedLogs {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn capture<F: FnOnce()>(&self, f: F) {
        let registry = Registry::default().with(self.clone());
        tracing::subscriber::with_default(registry, f);
    }
}

impl<S: tracing::Subscriber> Layer<S> for CapturedLogs {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.entries.lock().unwrap().push(LogEntry {
            level: *event.metadata().level(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value_str = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(value_str);
        } else {
            self.fields.push((field.name().to_string(), value_str));
        }
    }
}
