use std::{
    io::{self, Write},
    sync::{Mutex, MutexGuard, PoisonError},
};

use tracing::warn;
use weather_core::{Content, Region, Surface};

type Sink = Box<dyn Write + Send>;

/// Surface backed by the terminal.
///
/// The weather block goes to `out`; error notices and the loading line go to
/// `err`. Nothing is ever cleared on screen, so "clearing" a region only
/// forgets its content.
pub struct TerminalSurface {
    state: Mutex<State>,
}

struct State {
    input: String,
    error: Option<String>,
    out: Sink,
    err: Sink,
}

impl TerminalSurface {
    pub fn new(out: Sink, err: Sink) -> Self {
        Self {
            state: Mutex::new(State { input: String::new(), error: None, out, err }),
        }
    }

    pub fn stdio() -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.state().input = text.into();
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn emit(sink: &mut Sink, text: &str) {
    if let Err(err) = writeln!(sink, "{text}").and_then(|()| sink.flush()) {
        warn!(error = %err, "Failed to write to terminal");
    }
}

impl Surface for TerminalSurface {
    fn has_region(&self, _region: Region) -> bool {
        true
    }

    fn input_value(&self) -> Option<String> {
        Some(self.state().input.clone())
    }

    fn write(&self, region: Region, content: Content) {
        let mut state = self.state();

        match (region, content) {
            (Region::WeatherDisplay, Content::Weather(view)) => {
                emit(&mut state.out, &view.to_string());
            }
            (Region::WeatherDisplay, Content::Text(text)) => emit(&mut state.err, &text),
            (Region::ErrorMessage, Content::Text(text)) => state.error = Some(text),
            (Region::ErrorMessage, Content::Empty) => state.error = None,
            _ => {}
        }
    }

    fn set_hidden(&self, region: Region, hidden: bool) {
        if region != Region::ErrorMessage || hidden {
            return;
        }

        let mut state = self.state();
        if let Some(message) = state.error.clone() {
            emit(&mut state.err, &format!("Error: {message}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use weather_core::{Renderer, WeatherReport};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn surface() -> (SharedBuf, SharedBuf, Renderer<TerminalSurface>) {
        let out = SharedBuf::default();
        let err = SharedBuf::default();
        let surface = TerminalSurface::new(Box::new(out.clone()), Box::new(err.clone()));

        (out, err, Renderer::new(surface))
    }

    fn london() -> WeatherReport {
        serde_json::from_value(serde_json::json!({
            "name": "London",
            "main": { "temp": 300.15, "humidity": 80 },
            "weather": [{ "description": "clear sky" }]
        }))
        .unwrap()
    }

    #[test]
    fn weather_goes_to_stdout() {
        let (out, err, renderer) = surface();

        renderer.display_weather(&london());

        assert_eq!(
            out.contents(),
            "London\nTemperature: 27°C\nHumidity: 80%\nConditions: clear sky\n"
        );
        assert!(err.contents().is_empty());
    }

    #[test]
    fn error_goes_to_stderr() {
        let (out, err, renderer) = surface();

        renderer.display_error("City not found");

        assert_eq!(err.contents(), "Error: City not found\n");
        assert!(out.contents().is_empty());
    }

    #[test]
    fn loading_line_stays_off_stdout() {
        let (out, err, renderer) = surface();

        renderer.display_loading("London");

        assert_eq!(err.contents(), "Loading weather for London...\n");
        assert!(out.contents().is_empty());
    }

    #[test]
    fn input_round_trips() {
        let (_out, _err, renderer) = surface();

        renderer.surface().set_input("Oslo");

        assert_eq!(renderer.surface().input_value().as_deref(), Some("Oslo"));
    }
}
