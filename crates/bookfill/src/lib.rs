#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # bookfill
//!
//! bookfill looks up book information by ISBN using the Google Books API and fills a book-entry
//! form with the result, see [`Autofill`]. It also decides where a search results page should
//! scroll to once it has loaded, see [`SearchSections`].
//!
//! The form and page elements are reached through small traits ([`form::TextField`],
//! [`form::CoverPreview`], [`form::Notifier`] and [`search::Section`]) so the same logic runs
//! against the browser DOM and against in-memory fields.

mod api;
mod autofill;
mod book;
mod error;
pub mod form;
pub mod published;
pub mod search;

pub use api::{google_books::GOOGLE_BOOKS_URL, Client};
pub use autofill::{
    Autofill, InFlight, Outcome, Ticket, LOOKUP_FAILED_MESSAGE, NOT_FOUND_MESSAGE,
};
pub use book::Book;
pub use error::{Error, ErrorKind};
pub use form::BookForm;
pub use search::{SearchSections, Target};

/// The HTTP client used outside of tests.
pub type DefaultClient = reqwest::Client;
