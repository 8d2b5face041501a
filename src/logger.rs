use tracing::span;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::{PrettyVisitor, Writer};
use tracing_subscriber::layer::SubscriberExt;
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone)]
struct SpanBody(String);

/// Writes tracing events to the browser console with `%c` level badges.
pub struct ConsoleLayer {
    show_target: bool,
}

pub fn init(level: tracing::Level) {
    console_error_panic_hook::set_once();

    let subscriber = tracing_subscriber::Registry::default()
        .with(LevelFilter::from_level(level))
        .with(ConsoleLayer { show_target: false });

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        styled_log2("%clogger already initialised", "color: orange");
    }
}

impl<S> tracing_subscriber::Layer<S> for ConsoleLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut spans = Vec::new();
        let mut current_span = ctx.lookup_current();
        while let Some(span) = current_span {
            let name = span.metadata().name();
            match span.extensions().get::<SpanBody>() {
                Some(body) => spans.push(format!("{name}({})", body.0)),
                None => spans.push(name.to_string()),
            }
            current_span = span.parent();
        }
        spans.reverse();
        let spans = if spans.is_empty() {
            String::new()
        } else {
            format!(" {}", spans.join(" "))
        };

        let mut message = String::new();
        event.record(&mut PrettyVisitor::new(Writer::new(&mut message), true));

        let meta = event.metadata();
        let level = *meta.level();
        let target = if self.show_target {
            format!(" {}", meta.target())
        } else {
            String::new()
        };
        let origin = if level <= tracing::Level::WARN {
            meta.file()
                .zip(meta.line())
                .map(|(file, line)| format!(" {file}:{line}"))
                .unwrap_or_default()
        } else {
            String::new()
        };

        styled_log5(
            format!("%c{level}%c{spans}%c{target}{origin}%c: {message}"),
            level_badge(level),
            "color: inherit; font-weight: bold",
            "color: gray; font-style: italic",
            "color: inherit",
        );
    }

    fn on_new_span(
        &self,
        attrs: &span::Attributes<'_>,
        id: &span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut body = String::new();
        attrs.record(&mut PrettyVisitor::new(Writer::new(&mut body), true));
        if body.is_empty() {
            return;
        }
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(SpanBody(body));
        }
    }
}

fn level_badge(level: tracing::Level) -> &'static str {
    match level {
        tracing::Level::TRACE => "color: dodgerblue; background: #444",
        tracing::Level::DEBUG => "color: lawngreen; background: #444",
        tracing::Level::INFO => "color: whitesmoke; background: #444",
        tracing::Level::WARN => "color: orange; background: #444",
        tracing::Level::ERROR => "color: red; background: #444",
    }
}

/// The greeting printed for anyone who opens the console.
pub fn print_banner() {
    styled_log2(
        "%c👋 Hey there!",
        "font-size: 24px; font-weight: bold; color: #00B3FF;",
    );
    styled_log2(
        "%cLooking at the code? I like your style!",
        "font-size: 14px; color: #666666;",
    );
    styled_log2(
        "%cFeel free to reach out if you want to collaborate: hello@alasrambus.com",
        "font-size: 12px; color: #8B5CF6;",
    );
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn styled_log2(message: &str, style: &str);

    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn styled_log5(message: String, badge: &str, spans: &str, origin: &str, body: &str);
}
