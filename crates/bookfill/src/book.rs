use crate::published::PublishedDate;

/// Book information returned from a successful lookup.
///
/// Every field is optional in the source record; accessors return an empty string for a missing
/// text field so the values can be written straight into a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    /// Title of the volume.
    pub title: Option<String>,
    /// Authors in the order given by the source.
    pub authors: Vec<String>,
    /// Publisher of the volume.
    pub publisher: Option<String>,
    /// Free-form published date such as `2004`, `2004-06` or `2004-06-09`.
    pub published_date: Option<String>,
    /// URL of the cover thumbnail.
    pub thumbnail: Option<String>,
}

impl Book {
    /// Title or an empty string.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// All authors joined by `", "`, an empty string when there are none.
    #[must_use]
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }

    /// Publisher or an empty string.
    #[must_use]
    pub fn publisher(&self) -> &str {
        self.publisher.as_deref().unwrap_or_default()
    }

    /// Published date exactly as given by the source, or an empty string.
    #[must_use]
    pub fn published_date(&self) -> &str {
        self.published_date.as_deref().unwrap_or_default()
    }

    /// Published date parsed along with how precise it is.
    #[must_use]
    pub fn published(&self) -> PublishedDate {
        PublishedDate::parse(self.published_date())
    }

    /// Cover thumbnail URL, an empty URL counts as no thumbnail.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_read_as_empty() {
        let book = Book::default();
        assert_eq!("", book.title());
        assert_eq!("", book.author_line());
        assert_eq!("", book.publisher());
        assert_eq!("", book.published_date());
        assert_eq!(None, book.thumbnail());
    }

    #[test]
    fn authors_are_joined_with_comma_space() {
        let book = Book {
            authors: vec!["Brian W. Kernighan".to_owned(), "Dennis M. Ritchie".to_owned()],
            ..Book::default()
        };
        assert_eq!("Brian W. Kernighan, Dennis M. Ritchie", book.author_line());

        let book = Book {
            authors: vec!["村上春樹".to_owned()],
            ..Book::default()
        };
        assert_eq!("村上春樹", book.author_line());
    }

    #[test]
    fn empty_thumbnail_is_none() {
        let book = Book {
            thumbnail: Some(String::new()),
            ..Book::default()
        };
        assert_eq!(None, book.thumbnail());
    }
}
