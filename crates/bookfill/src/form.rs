//! Element seams of the book-entry form.
//!
//! The autofill logic only talks to the form through these traits; the browser build implements
//! them for DOM elements and the terminal build uses the in-memory [`MemoryField`] and
//! [`MemoryCover`].

use std::cell::{Cell, RefCell};

use log::trace;

use crate::Book;

/// A text input of the form.
pub trait TextField {
    /// The current value of the input.
    fn value(&self) -> String;
    /// Replaces the value of the input.
    fn set_value(&self, value: &str);
}

/// The cover image preview next to the form.
pub trait CoverPreview {
    /// Point the preview at `src` and make it visible.
    fn show(&self, src: &str);
    /// Clear the preview source and hide it.
    fn hide(&self);
}

/// A blocking, user facing notification.
pub trait Notifier {
    /// Show `message` to the user.
    fn alert(&self, message: &str);
}

/// Handles to every element of the book-entry form that autofill reads or writes.
pub struct BookForm<F, P> {
    /// The ISBN input that triggers the lookup.
    pub isbn: F,
    /// Receives the title.
    pub title: F,
    /// Receives the authors joined by `", "`.
    pub author: F,
    /// Receives the publisher.
    pub publisher: F,
    /// Receives the published date as given by the source.
    pub published_date: F,
    /// Receives the cover thumbnail URL.
    pub image_url: F,
    /// Receives the precision code of the published date, when the form has such a field.
    pub published_date_precision: Option<F>,
    /// The cover preview.
    pub cover: P,
}

impl<F: TextField, P: CoverPreview> BookForm<F, P> {
    /// The trimmed value of the ISBN input.
    #[must_use]
    pub fn isbn(&self) -> String {
        self.isbn.value().trim().to_owned()
    }

    /// Copies `book` into the form fields and updates the cover preview.
    pub fn fill(&self, book: &Book) {
        trace!("Filling form with '{}'", book.title());
        self.title.set_value(book.title());
        self.author.set_value(&book.author_line());
        self.publisher.set_value(book.publisher());
        self.published_date.set_value(book.published_date());
        self.image_url.set_value(book.thumbnail().unwrap_or_default());

        if let Some(precision) = &self.published_date_precision {
            precision.set_value(book.published().precision().code());
        }

        match book.thumbnail() {
            Some(src) => self.cover.show(src),
            None => self.cover.hide(),
        }
    }
}

/// A [`TextField`] that keeps its value in memory.
#[derive(Debug, Default)]
pub struct MemoryField(RefCell<String>);

impl MemoryField {
    /// A field holding `value`.
    #[must_use]
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(RefCell::new(value.into()))
    }
}

impl TextField for MemoryField {
    fn value(&self) -> String {
        self.0.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.0.borrow_mut() = value.to_owned();
    }
}

/// A [`CoverPreview`] that records its source and visibility.
#[derive(Debug, Default)]
pub struct MemoryCover {
    src: RefCell<String>,
    visible: Cell<bool>,
}

impl MemoryCover {
    /// The current image source, empty when cleared.
    #[must_use]
    pub fn src(&self) -> String {
        self.src.borrow().clone()
    }

    /// Whether the preview is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

impl CoverPreview for MemoryCover {
    fn show(&self, src: &str) {
        *self.src.borrow_mut() = src.to_owned();
        self.visible.set(true);
    }

    fn hide(&self) {
        self.src.borrow_mut().clear();
        self.visible.set(false);
    }
}

impl BookForm<MemoryField, MemoryCover> {
    /// An empty in-memory form with the ISBN input set to `isbn`.
    #[must_use]
    pub fn in_memory<S: Into<String>>(isbn: S) -> Self {
        Self {
            isbn: MemoryField::new(isbn),
            title: MemoryField::default(),
            author: MemoryField::default(),
            publisher: MemoryField::default(),
            published_date: MemoryField::default(),
            image_url: MemoryField::default(),
            published_date_precision: Some(MemoryField::default()),
            cover: MemoryCover::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_book() -> Book {
        Book {
            title: Some("ノルウェイの森".to_owned()),
            authors: vec!["村上春樹".to_owned(), "Jay Rubin".to_owned()],
            publisher: Some("講談社".to_owned()),
            published_date: Some("1987-09".to_owned()),
            thumbnail: Some("http://books.google.com/cover.jpg".to_owned()),
        }
    }

    #[test]
    fn isbn_is_trimmed() {
        let form = BookForm::in_memory("  9784062035163 \t");
        assert_eq!("9784062035163", form.isbn());
    }

    #[test]
    fn fill_copies_every_field_and_shows_cover() {
        let form = BookForm::in_memory("9784062035163");
        form.fill(&full_book());

        assert_eq!("ノルウェイの森", form.title.value());
        assert_eq!("村上春樹, Jay Rubin", form.author.value());
        assert_eq!("講談社", form.publisher.value());
        assert_eq!("1987-09", form.published_date.value());
        assert_eq!("http://books.google.com/cover.jpg", form.image_url.value());
        assert_eq!(
            Some("month".to_owned()),
            form.published_date_precision.as_ref().map(TextField::value)
        );
        assert!(form.cover.is_visible());
        assert_eq!("http://books.google.com/cover.jpg", form.cover.src());
    }

    #[test]
    fn fill_without_thumbnail_hides_and_clears_cover() {
        let form = BookForm::in_memory("9784062035163");
        form.fill(&full_book());

        form.fill(&Book {
            thumbnail: None,
            ..full_book()
        });

        assert_eq!("", form.image_url.value());
        assert!(!form.cover.is_visible());
        assert_eq!("", form.cover.src());
    }

    #[test]
    fn fill_overwrites_stale_values_with_empty_strings() {
        let form = BookForm::in_memory("9784062035163");
        form.fill(&full_book());
        form.fill(&Book::default());

        assert_eq!("", form.title.value());
        assert_eq!("", form.author.value());
        assert_eq!("", form.publisher.value());
        assert_eq!("", form.published_date.value());
        assert_eq!(
            Some("unknown".to_owned()),
            form.published_date_precision.as_ref().map(TextField::value)
        );
    }

    #[test]
    fn precision_field_is_optional() {
        let mut form = BookForm::in_memory("9784062035163");
        form.published_date_precision = None;
        form.fill(&full_book());

        assert_eq!("1987-09", form.published_date.value());
    }
}
