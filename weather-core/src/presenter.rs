//! Output surface for submissions.
//!
//! Methods take `&self` so that overlapping submissions can write to the
//! same surface, exactly as they would to a single page.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::model::DisplayRecord;

pub trait Presenter {
    /// Replace the status line. An empty message clears it.
    fn show_status(&self, message: &str);

    fn show_error(&self, message: &str);

    /// Fill the output fields and make the output visible.
    fn render_result(&self, record: &DisplayRecord);

    /// Clear the error and hide the output.
    fn reset(&self);
}

/// What a screen bound to a [`Presenter`] currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub status: String,
    pub error: String,
    pub output_visible: bool,
    pub location: String,
    pub temperature: String,
    pub wind_speed: String,
    pub condition: String,
}

#[derive(Debug, Default)]
struct Inner {
    view: ViewState,
    status_log: Vec<String>,
}

/// Headless presenter that keeps the view in memory.
#[derive(Debug, Default)]
pub struct MemoryPresenter {
    inner: Mutex<Inner>,
}

impl MemoryPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing view, e.g. one left behind by an earlier search.
    pub fn with_view(view: ViewState) -> Self {
        Self { inner: Mutex::new(Inner { view, status_log: Vec::new() }) }
    }

    pub fn snapshot(&self) -> ViewState {
        self.lock().view.clone()
    }

    /// Every status message shown so far, including clears.
    pub fn status_log(&self) -> Vec<String> {
        self.lock().status_log.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Presenter for MemoryPresenter {
    fn show_status(&self, message: &str) {
        let mut inner = self.lock();
        inner.view.status = message.to_string();
        inner.status_log.push(message.to_string());
    }

    fn show_error(&self, message: &str) {
        self.lock().view.error = message.to_string();
    }

    fn render_result(&self, record: &DisplayRecord) {
        let mut inner = self.lock();
        let view = &mut inner.view;
        view.location = record.location_label.clone();
        view.temperature = record.temperature.to_string();
        view.wind_speed = record.wind_speed.to_string();
        view.condition = record.condition_label.clone();
        view.output_visible = true;
    }

    fn reset(&self) {
        let mut inner = self.lock();
        let view = &mut inner.view;
        view.error.clear();
        view.output_visible = false;
    }
}
