use std::rc::Rc;

use bookfill::{Autofill, BookForm, DefaultClient, Error};
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::spawn_local;

use crate::{
    config::ElementIds,
    dom::{self, Alert, Cover, Field},
};

/// Looks up the ISBN whenever its input loses focus.
///
/// Pages without an ISBN input are left alone. Every other form element must be present, a
/// missing one fails the whole setup and no listener is attached.
pub fn install(ids: &ElementIds) -> Result<(), Error> {
    let document = dom::document();
    let Some(isbn) = Field::find(&document, ids.isbn)? else {
        trace!("No '#{}' element on this page - autofill disabled", ids.isbn);
        return Ok(());
    };

    let target = isbn.event_target().clone();
    let form = BookForm {
        isbn,
        title: Field::require(&document, ids.title)?,
        author: Field::require(&document, ids.author)?,
        publisher: Field::require(&document, ids.publisher)?,
        published_date: Field::require(&document, ids.published_date)?,
        image_url: Field::require(&document, ids.image_url)?,
        published_date_precision: Field::find(&document, ids.published_date_precision)?,
        cover: Cover(dom::require(&document, ids.cover)?),
    };

    let autofill = Rc::new(Autofill::new(form, Alert(dom::window())));

    let on_blur = Closure::wrap(Box::new(move || {
        let autofill = Rc::clone(&autofill);
        spawn_local(async move {
            let outcome = autofill.on_isbn_blur::<DefaultClient>().await;
            debug!("ISBN lookup finished: {outcome:?}");
        });
    }) as Box<dyn FnMut()>);

    target
        .add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())
        .map_err(|e| dom::js_error(&e))?;
    on_blur.forget();

    info!("ISBN autofill attached to '#{}'", ids.isbn);
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn ids(prefix: &'static str) -> ElementIds {
        let id = |name: &str| -> &'static str { Box::leak(format!("{prefix}_{name}").into_boxed_str()) };
        ElementIds {
            isbn: id("isbn"),
            title: id("title"),
            author: id("author"),
            publisher: id("publisher"),
            published_date: id("published_date"),
            published_date_precision: id("published_date_precision"),
            image_url: id("image_url"),
            cover: id("cover"),
            results: id("results"),
            no_results: id("no_results"),
        }
    }

    fn append(tag: &str, id: &str) {
        let document = dom::document();
        let el = document.create_element(tag).unwrap_throw();
        el.set_id(id);
        document
            .body()
            .unwrap_throw()
            .append_child(&el)
            .unwrap_throw();
    }

    #[wasm_bindgen_test]
    fn page_without_isbn_input_is_left_alone() {
        assert!(install(&ids("no_isbn")).is_ok());
    }

    #[wasm_bindgen_test]
    fn missing_title_fails_setup() {
        let ids = ids("no_title");
        for id in [
            ids.isbn,
            ids.author,
            ids.publisher,
            ids.published_date,
            ids.image_url,
        ] {
            append("input", id);
        }
        append("img", ids.cover);

        let err = install(&ids).unwrap_err();
        assert!(err.to_string().contains("no_title_title"));
    }

    #[wasm_bindgen_test]
    fn complete_form_attaches_listener() {
        let ids = ids("complete");
        for id in [
            ids.isbn,
            ids.title,
            ids.author,
            ids.publisher,
            ids.published_date,
            ids.image_url,
        ] {
            append("input", id);
        }
        append("img", ids.cover);

        assert!(install(&ids).is_ok());
    }
}
