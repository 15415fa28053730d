use bookfill::{
    form::{MemoryCover, MemoryField, Notifier, TextField},
    search::Section,
    BookForm,
};
use log::info;

/// Alerts are written straight to stderr so they show even in quiet mode.
pub struct Stderr;

impl Notifier for Stderr {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// A page section known only by its id.
pub struct Named(pub &'static str);

impl Section for Named {
    fn scroll_into_view(&self) {
        info!("Scrolling '#{}' into view", self.0);
    }
}

pub fn render_form(form: &BookForm<MemoryField, MemoryCover>) -> String {
    let precision = form
        .published_date_precision
        .as_ref()
        .map(TextField::value)
        .unwrap_or_default();

    let cover = if form.cover.is_visible() {
        form.cover.src()
    } else {
        "(hidden)".to_owned()
    };

    [
        ("isbn", form.isbn()),
        ("title", form.title.value()),
        ("author", form.author.value()),
        ("publisher", form.publisher.value()),
        ("published date", form.published_date.value()),
        ("precision", precision),
        ("image url", form.image_url.value()),
        ("cover", cover),
    ]
    .into_iter()
    .map(|(label, value)| format!("{label:<15}{value}"))
    .collect::<Vec<_>>()
    .join("\n")
}

#[test]
fn rendered_form_lists_every_field() {
    let form = BookForm::in_memory("0735619670");
    form.title.set_value("Code Complete");
    if let Some(precision) = &form.published_date_precision {
        precision.set_value("year");
    }

    let rendered = render_form(&form);

    assert!(rendered.starts_with("isbn           0735619670\ntitle          Code Complete\n"));
    assert!(rendered.contains("precision      year\n"));
    assert!(rendered.ends_with("cover          (hidden)"));
}
