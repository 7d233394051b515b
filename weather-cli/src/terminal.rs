use chrono::NaiveDateTime;
use cityweather_core::{DisplayRecord, Presenter};
use std::{
    fmt::Write as _,
    io::{IsTerminal, Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

const BANNER: &str = r"
   \  |  /      cityweather
 -- .--. --     current conditions, by city
   (    )       data: open-meteo.com
    `--'
";

/// Printed once when an interactive session starts.
pub fn print_banner() {
    println!("{BANNER}");
}

/// Presenter writing results to stdout and status/errors to stderr.
///
/// Status lines are only drawn on an interactive stderr, and are erased in
/// place when cleared. Hiding the output is a no-op: printed lines stay.
#[derive(Debug)]
pub struct TerminalPresenter {
    json: bool,
    live_status: bool,
    status_drawn: AtomicBool,
}

impl TerminalPresenter {
    pub fn new(json: bool) -> Self {
        Self { json, live_status: stderr().is_terminal(), status_drawn: AtomicBool::new(false) }
    }

    fn erase_status(&self) {
        if self.status_drawn.swap(false, Ordering::SeqCst) {
            let mut err = stderr().lock();
            let _ = write!(err, "\r\x1b[2K");
            let _ = err.flush();
        }
    }
}

impl Presenter for TerminalPresenter {
    fn show_status(&self, message: &str) {
        if !self.live_status {
            return;
        }

        self.erase_status();
        if !message.is_empty() {
            let mut err = stderr().lock();
            let _ = write!(err, "{message}");
            let _ = err.flush();
            self.status_drawn.store(true, Ordering::SeqCst);
        }
    }

    fn show_error(&self, message: &str) {
        self.erase_status();
        eprintln!("error: {message}");
    }

    fn render_result(&self, record: &DisplayRecord) {
        self.erase_status();

        if self.json {
            match serde_json::to_string_pretty(record) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("error: failed to encode result: {e}"),
            }
        } else {
            print!("{}", format_record(record));
        }
    }

    fn reset(&self) {}
}

pub fn format_record(record: &DisplayRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Location     {}", record.location_label);
    let _ = writeln!(out, "Temperature  {} °C", record.temperature);
    let _ = writeln!(out, "Wind speed   {} km/h", record.wind_speed);
    let _ = writeln!(out, "Condition    {}", record.condition_label);
    if let Some(observed) = record.observed_at {
        let _ = writeln!(out, "Observed     {}", format_observed(observed));
    }
    out
}

fn format_observed(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cityweather_core::Coordinates;

    fn record(observed_at: Option<NaiveDateTime>) -> DisplayRecord {
        DisplayRecord {
            location_label: "London, United Kingdom".into(),
            temperature: 15.0,
            wind_speed: 10.0,
            condition_label: "🌦️ slight rain".into(),
            coordinates: Coordinates { latitude: 51.5, longitude: -0.12 },
            observed_at,
        }
    }

    #[test]
    fn formats_four_fields() {
        let text = format_record(&record(None));

        assert_eq!(
            text,
            "Location     London, United Kingdom\n\
             Temperature  15 °C\n\
             Wind speed   10 km/h\n\
             Condition    🌦️ slight rain\n"
        );
    }

    #[test]
    fn includes_observation_time_when_known() {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(14, 15, 0))
            .expect("valid timestamp");

        let text = format_record(&record(Some(at)));

        assert!(text.ends_with("Observed     2024-05-01 14:15\n"));
    }
}
