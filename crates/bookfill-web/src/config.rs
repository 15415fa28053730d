/// Identifiers of the page elements the handlers bind to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementIds {
    pub isbn: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub publisher: &'static str,
    pub published_date: &'static str,
    pub published_date_precision: &'static str,
    pub image_url: &'static str,
    pub cover: &'static str,
    pub results: &'static str,
    pub no_results: &'static str,
}

impl Default for ElementIds {
    // ids rendered by the catalog templates
    fn default() -> Self {
        Self {
            isbn: "id_isbn",
            title: "id_title",
            author: "id_author",
            publisher: "id_publisher",
            published_date: "id_published_date",
            published_date_precision: "id_published_date_precision",
            image_url: "id_image_url",
            cover: "book-cover",
            results: "results",
            no_results: "no-results",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_catalog_templates() {
        let ids = ElementIds::default();
        assert_eq!("id_isbn", ids.isbn);
        assert_eq!("id_image_url", ids.image_url);
        assert_eq!("book-cover", ids.cover);
        assert_eq!("no-results", ids.no_results);
    }
}
