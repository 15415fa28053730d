use bookfill::{Autofill, BookForm, DefaultClient, Outcome, SearchSections, Target};

use clap::{AppSettings, Subcommand};
use eyre::eyre;
use log::trace;

use crate::terminal::{render_form, Named, Stderr};

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Look up a book by ISBN and print the form it fills
    #[clap(setting(AppSettings::ArgRequiredElseHelp))]
    Isbn {
        /// The ISBN to search for
        isbn: String,
    },
    /// Print which section a search results page scrolls to
    #[clap(setting(AppSettings::ArgRequiredElseHelp))]
    Search {
        /// The full URL of the page
        url: String,

        /// The page has a results section
        #[clap(long)]
        results: bool,

        /// The page has a no-results section
        #[clap(long)]
        no_results: bool,
    },
}

impl Commands {
    pub async fn execute(self, api_url: Option<String>) -> eyre::Result<String> {
        match self {
            Commands::Isbn { isbn } => {
                let mut autofill = Autofill::new(BookForm::in_memory(isbn), Stderr);
                if let Some(url) = api_url {
                    autofill = autofill.with_endpoint(url);
                }

                match autofill.on_isbn_blur::<DefaultClient>().await {
                    Outcome::Filled => Ok(render_form(autofill.form())),
                    Outcome::Skipped => Err(eyre!("The ISBN is empty")),
                    outcome => Err(eyre!("No book information was retrieved ({outcome:?})")),
                }
            }
            Commands::Search {
                url,
                results,
                no_results,
            } => {
                trace!("Search page sections - results: {results}, no-results: {no_results}");
                let sections = SearchSections::new(
                    results.then_some(Named("results")),
                    no_results.then_some(Named("no-results")),
                );

                let message = match sections.on_load(&url)? {
                    Some(Target::Results) => "Scroll to #results",
                    Some(Target::NoResults) => "Scroll to #no-results",
                    None => "No scroll",
                };
                Ok(message.to_owned())
            }
        }
    }
}
