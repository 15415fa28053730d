use log::{info, trace};
use reqwest::Url;
use serde::Deserialize;

use crate::{Book, Error, ErrorKind};

use super::Client;

/// The Google Books volumes endpoint used when no other endpoint is configured.
pub const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Builds the volumes query for `isbn`, percent-encoding the value of the `q` parameter.
pub(crate) fn volumes_url(endpoint: &str, isbn: &str) -> Result<Url, Error> {
    Url::parse_with_params(endpoint, &[("q", format!("isbn:{isbn}"))])
        .map_err(|e| Error::wrap(ErrorKind::Url, e))
}

pub(crate) async fn get_book_by_isbn<C: Client>(endpoint: &str, isbn: &str) -> Result<Book, Error> {
    info!("Searching for ISBN '{}' using Google Books API", isbn);
    let url = volumes_url(endpoint, isbn)?;

    let client = C::default();
    let GoogleModel { items } = client.get_json(url).await?;

    trace!("Request was successful");

    items
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(|item| Book::from(item.volume_info))
        .ok_or_else(|| {
            Error::new(
                ErrorKind::NoValue,
                format!("No volumes found for ISBN '{isbn}'"),
            )
        })
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct GoogleModel {
    // absent when nothing matched
    items: Option<Vec<Item>>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Item {
    #[serde(rename = "volumeInfo", default)]
    volume_info: VolumeInfo,
}

/// Volume information from the Google Book API, every field may be missing.
#[derive(Deserialize, Default)]
#[cfg_attr(test, derive(Debug))]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    publisher: Option<String>,
    #[serde(rename = "publishedDate")]
    published_date: Option<String>,
    #[serde(rename = "imageLinks")]
    image_links: Option<ImageLinks>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct ImageLinks {
    thumbnail: Option<String>,
}

impl From<VolumeInfo> for Book {
    fn from(info: VolumeInfo) -> Self {
        // Deconstruct to take ownership of fields (avoids cloning).
        let VolumeInfo {
            title,
            authors,
            publisher,
            published_date,
            image_links,
        } = info;

        Self {
            title,
            authors: authors.unwrap_or_default(),
            publisher,
            published_date,
            thumbnail: image_links.and_then(|links| links.thumbnail),
        }
    }
}


#[test]
fn volume_without_optional_fields_can_be_derived_from_json() {
    let json = include_str!("../../tests/data/google_books_no_image.json");
    let mut model: GoogleModel = serde_json::from_str(json).unwrap();
    let book = Book::from(model.items.take().unwrap().remove(0).volume_info);

    assert_eq!(Some("吾輩は猫である"), book.title.as_deref());
    assert_eq!(vec!["夏目漱石"], book.authors);
    assert_eq!(None, book.publisher);
    assert_eq!(Some("1905"), book.published_date.as_deref());
    assert_eq!(None, book.thumbnail);
}
