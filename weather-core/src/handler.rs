use tracing::debug;

use crate::{
    LookupError, WeatherService,
    model::DisplayRecord,
    pipeline,
    presenter::Presenter,
};

/// How one submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Blank input; nothing was requested or shown.
    Ignored,
    Rendered(DisplayRecord),
    Failed(LookupError),
}

/// Runs user submissions against a [`WeatherService`] and reports them to a [`Presenter`].
///
/// Submissions are independent: nothing cancels an earlier one still in
/// flight, so whichever finishes last owns the output.
#[derive(Debug)]
pub struct SubmissionHandler<S> {
    service: S,
}

impl<S: WeatherService> SubmissionHandler<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    #[tracing::instrument(name = "submit", level = "debug", skip(self, presenter))]
    pub async fn submit<P>(&self, presenter: &P, input: &str) -> Submission
    where
        P: Presenter + ?Sized,
    {
        let query = input.trim();
        if query.is_empty() {
            debug!("blank query ignored");
            return Submission::Ignored;
        }

        presenter.reset();

        let result = pipeline::lookup(&self.service, query, |stage| {
            presenter.show_status(stage.status_message())
        })
        .await;

        match result {
            Ok(record) => {
                presenter.render_result(&record);
                presenter.show_status("");
                Submission::Rendered(record)
            }
            Err(err) => {
                debug!(query, error = %err, "lookup failed");
                presenter.show_status("");
                presenter.show_error(&err.user_message());
                Submission::Failed(err)
            }
        }
    }
}
