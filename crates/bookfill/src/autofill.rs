use std::cell::Cell;

use log::{error, info, trace};

use crate::{
    api::{google_books, Client},
    form::{BookForm, CoverPreview, Notifier, TextField},
    ErrorKind, GOOGLE_BOOKS_URL,
};

/// Shown when the lookup found no volume for the ISBN.
pub const NOT_FOUND_MESSAGE: &str = "本が見つかりませんでした。";

/// Shown when the lookup failed or its response could not be read.
pub const LOOKUP_FAILED_MESSAGE: &str = "本情報の取得に失敗しました。";

/// What a single ISBN blur resulted in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The ISBN input was empty, nothing was requested.
    Skipped,
    /// The form was filled from the first matching volume.
    Filled,
    /// No volume matched, the user was notified.
    NotFound,
    /// The lookup failed, the error was logged and the user notified.
    Failed,
    /// A newer lookup started before this one finished, its result was dropped.
    Superseded,
}

/// Ticket of a lookup started through [`InFlight::begin`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Tracks the latest lookup so an older one resolving late cannot overwrite the form.
#[derive(Debug, Default)]
pub struct InFlight {
    generation: Cell<u64>,
}

impl InFlight {
    /// Starts a new lookup, superseding any lookup still in flight.
    pub fn begin(&self) -> Ticket {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        Ticket(next)
    }

    /// Whether `ticket` belongs to the most recent lookup.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.get() == ticket.0
    }
}

/// Fills a [`BookForm`] from the book-metadata service whenever the ISBN input loses focus.
pub struct Autofill<F, P, N> {
    form: BookForm<F, P>,
    notifier: N,
    endpoint: String,
    in_flight: InFlight,
}

impl<F, P, N> Autofill<F, P, N>
where
    F: TextField,
    P: CoverPreview,
    N: Notifier,
{
    /// Autofill for `form` using the Google Books endpoint.
    #[must_use]
    pub fn new(form: BookForm<F, P>, notifier: N) -> Self {
        Self {
            form,
            notifier,
            endpoint: GOOGLE_BOOKS_URL.to_owned(),
            in_flight: InFlight::default(),
        }
    }

    /// Use another volumes endpoint, it must accept the same `q=isbn:` query.
    #[must_use]
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The form being filled.
    #[must_use]
    pub const fn form(&self) -> &BookForm<F, P> {
        &self.form
    }

    /// Runs one lookup for the current ISBN value.
    ///
    /// Empty input is ignored. A lookup that is overtaken by a later call leaves the form and the
    /// user alone; only the latest lookup is applied.
    pub async fn on_isbn_blur<C: Client>(&self) -> Outcome {
        let isbn = self.form.isbn();
        if isbn.is_empty() {
            trace!("ISBN input is empty - nothing to look up");
            return Outcome::Skipped;
        }

        let ticket = self.in_flight.begin();
        let res = google_books::get_book_by_isbn::<C>(&self.endpoint, &isbn).await;

        if !self.in_flight.is_current(ticket) {
            info!("Lookup for ISBN '{isbn}' was superseded by a newer one");
            return Outcome::Superseded;
        }

        match res {
            Ok(book) => {
                self.form.fill(&book);
                Outcome::Filled
            }
            Err(err) if err.kind() == ErrorKind::NoValue => {
                info!("{err}");
                self.notifier.alert(NOT_FOUND_MESSAGE);
                Outcome::NotFound
            }
            Err(err) => {
                error!("API error: {err}");
                self.notifier.alert(LOOKUP_FAILED_MESSAGE);
                Outcome::Failed
            }
        }
    }
}
