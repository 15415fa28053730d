use bookfill::{
    form::{CoverPreview, Notifier, TextField},
    search::Section,
    Error, ErrorKind,
};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{
    Document, Element, EventTarget, HtmlImageElement, HtmlInputElement,
    HtmlSelectElement, ScrollBehavior, ScrollIntoViewOptions, Window,
};

thread_local! {
    static WINDOW: Window = web_sys::window().unwrap_throw();
    static DOCUMENT: Document = WINDOW.with(|w| w.document().unwrap_throw());
}

pub fn window() -> Window {
    WINDOW.with(Clone::clone)
}

pub fn document() -> Document {
    DOCUMENT.with(Clone::clone)
}

pub fn js_error(value: &JsValue) -> Error {
    Error::new(ErrorKind::IO, format!("{value:?}"))
}

/// Runs `f` once the document has been parsed, immediately if that already happened.
pub fn on_content_loaded<F>(f: F) -> Result<(), Error>
where
    F: FnOnce() + 'static,
{
    let document = document();
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let closure = Closure::once(f);
    document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
        .map_err(|e| js_error(&e))?;
    closure.forget();
    Ok(())
}

/// The element with `id` as a `T`, `None` when the page has no such element.
pub fn find<T: JsCast>(document: &Document, id: &str) -> Result<Option<T>, Error> {
    document
        .get_element_by_id(id)
        .map(|el| {
            el.dyn_into::<T>().map_err(|_| {
                Error::new(
                    ErrorKind::NoValue,
                    format!("Element '#{id}' is not a {}", std::any::type_name::<T>()),
                )
            })
        })
        .transpose()
}

/// Like [`find`] but a missing element is an error.
pub fn require<T: JsCast>(document: &Document, id: &str) -> Result<T, Error> {
    find(document, id)?
        .ok_or_else(|| Error::new(ErrorKind::NoValue, format!("Element '#{id}' is missing")))
}

/// A form control with a text value.
pub enum Field {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
}

impl Field {
    pub fn find(document: &Document, id: &str) -> Result<Option<Self>, Error> {
        match find::<Element>(document, id)? {
            None => Ok(None),
            Some(el) => match el.dyn_into::<HtmlInputElement>() {
                Ok(input) => Ok(Some(Self::Input(input))),
                Err(el) => el
                    .dyn_into::<HtmlSelectElement>()
                    .map(|select| Some(Self::Select(select)))
                    .map_err(|_| {
                        Error::new(
                            ErrorKind::NoValue,
                            format!("Element '#{id}' is not an input or select"),
                        )
                    }),
            },
        }
    }

    pub fn event_target(&self) -> &EventTarget {
        match self {
            Self::Input(input) => input.as_ref(),
            Self::Select(select) => select.as_ref(),
        }
    }

    pub fn require(document: &Document, id: &str) -> Result<Self, Error> {
        Self::find(document, id)?
            .ok_or_else(|| Error::new(ErrorKind::NoValue, format!("Element '#{id}' is missing")))
    }
}

impl TextField for Field {
    fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::Select(select) => select.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::Input(input) => input.set_value(value),
            Self::Select(select) => select.set_value(value),
        }
    }
}

pub struct Cover(pub HtmlImageElement);

impl Cover {
    fn display(&self, value: &str) {
        if let Err(e) = self.0.style().set_property("display", value) {
            error!("failed to set cover display to '{value}': {e:?}");
        }
    }
}

impl CoverPreview for Cover {
    fn show(&self, src: &str) {
        self.0.set_src(src);
        self.display("block");
    }

    fn hide(&self) {
        self.0.set_src("");
        self.display("none");
    }
}

pub struct Alert(pub Window);

impl Notifier for Alert {
    fn alert(&self, message: &str) {
        if let Err(e) = self.0.alert_with_message(message) {
            error!("failed to show alert '{message}': {e:?}");
        }
    }
}

pub struct Smooth(pub Element);

impl Section for Smooth {
    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.0
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn cover() -> HtmlImageElement {
        document()
            .create_element("img")
            .unwrap_throw()
            .dyn_into::<HtmlImageElement>()
            .unwrap_throw()
    }

    fn display(img: &HtmlImageElement) -> String {
        img.style().get_property_value("display").unwrap_throw()
    }

    #[wasm_bindgen_test]
    fn cover_is_shown_with_thumbnail() {
        let img = cover();
        Cover(img.clone()).show("http://books.google.com/cover.jpg");

        assert_eq!(
            Some("http://books.google.com/cover.jpg".to_owned()),
            img.get_attribute("src")
        );
        assert_eq!("block", display(&img));
    }

    #[wasm_bindgen_test]
    fn cover_is_cleared_and_hidden() {
        let img = cover();
        let cover = Cover(img.clone());
        cover.show("http://books.google.com/cover.jpg");
        cover.hide();

        assert_eq!(Some(String::new()), img.get_attribute("src"));
        assert_eq!("none", display(&img));
    }

    #[wasm_bindgen_test]
    fn fields_read_and_write_inputs_and_selects() {
        let document = document();
        let body = document.body().unwrap_throw();

        let input = document.create_element("input").unwrap_throw();
        input.set_id("dom_test_input");
        body.append_child(&input).unwrap_throw();

        let select = document.create_element("select").unwrap_throw();
        select.set_id("dom_test_select");
        select.set_inner_html(r#"<option value="unknown"></option><option value="year"></option>"#);
        body.append_child(&select).unwrap_throw();

        let input = Field::require(&document, "dom_test_input").unwrap_throw();
        input.set_value("Code Complete");
        assert_eq!("Code Complete", input.value());

        let select = Field::require(&document, "dom_test_select").unwrap_throw();
        select.set_value("year");
        assert_eq!("year", select.value());

        assert!(Field::find(&document, "dom_test_missing").unwrap_throw().is_none());
        assert!(Field::require(&document, "dom_test_missing").is_err());
    }
}
