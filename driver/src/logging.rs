use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry};

#[derive(Default)]
struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0.push_str(&format!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        }
    }
}

struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if visitor.0.is_empty() {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        match metadata.level().as_str() {
            "ERROR" => println!("[{}] ❌ {} - {}", timestamp, metadata.target(), visitor.0),
            "WARN" => println!("[{}] ⚠️ {} - {}", timestamp, metadata.target(), visitor.0),
            "INFO" => println!("[{}] ℹ️ {} - {}", timestamp, metadata.target(), visitor.0),
            _ => println!("[{}] 🔄 {} - {}", timestamp, metadata.target(), visitor.0),
        }
    }
}

pub fn setup() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,spinner=debug"));

    let subscriber = Registry::default().with(env_filter).with(ConsoleLayer);

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set subscriber");
}
