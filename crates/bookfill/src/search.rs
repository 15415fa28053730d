//! Scrolling a search results page to the section worth looking at.

use log::trace;
use reqwest::Url;

use crate::{Error, ErrorKind};

/// A page section that can be scrolled into view.
pub trait Section {
    /// Smoothly scroll the section into the viewport.
    fn scroll_into_view(&self);
}

/// Which section a search results page scrolled to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// The results container.
    Results,
    /// The container shown when the search matched nothing.
    NoResults,
}

/// Whether the page at `href` was reached through a search, meaning its URL carries at least one
/// query parameter. Only the presence of keys matters, `?` and `?&` have none.
///
/// # Errors
///
/// An [`Err`] is returned when `href` is not an absolute URL.
pub fn search_performed(href: &str) -> Result<bool, Error> {
    let url = Url::parse(href).map_err(|e| Error::wrap(ErrorKind::Url, e))?;
    Ok(url.query_pairs().next().is_some())
}

/// The sections of a search page, either may be missing from the page.
pub struct SearchSections<S> {
    results: Option<S>,
    no_results: Option<S>,
}

impl<S: Section> SearchSections<S> {
    /// Sections found on the page.
    pub const fn new(results: Option<S>, no_results: Option<S>) -> Self {
        Self {
            results,
            no_results,
        }
    }

    /// The section to scroll to, results win over no-results and nothing is chosen without a
    /// search.
    #[must_use]
    pub const fn target(&self, searched: bool) -> Option<Target> {
        match (searched, &self.results, &self.no_results) {
            (false, _, _) | (true, None, None) => None,
            (true, Some(_), _) => Some(Target::Results),
            (true, None, Some(_)) => Some(Target::NoResults),
        }
    }

    /// Scrolls to the relevant section for the page at `href`.
    ///
    /// # Errors
    ///
    /// An [`Err`] is returned when `href` is not an absolute URL.
    pub fn on_load(&self, href: &str) -> Result<Option<Target>, Error> {
        let searched = search_performed(href)?;
        let target = self.target(searched);
        trace!("Search performed: {searched}, scroll target: {target:?}");

        let section = match target {
            Some(Target::Results) => self.results.as_ref(),
            Some(Target::NoResults) => self.no_results.as_ref(),
            None => None,
        };
        if let Some(section) = section {
            section.scroll_into_view();
        }

        Ok(target)
    }
}
