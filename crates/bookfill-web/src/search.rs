use bookfill::{Error, SearchSections};

use crate::{
    config::ElementIds,
    dom::{self, Smooth},
};

/// Scrolls a search page to its results, or to the no-results notice, when the URL carries a
/// query.
pub fn scroll_to_results(ids: &ElementIds) -> Result<(), Error> {
    let document = dom::document();
    let href = dom::window()
        .location()
        .href()
        .map_err(|e| dom::js_error(&e))?;

    let sections = SearchSections::new(
        document.get_element_by_id(ids.results).map(Smooth),
        document.get_element_by_id(ids.no_results).map(Smooth),
    );

    if let Some(target) = sections.on_load(&href)? {
        trace!("Scrolled to {target:?}");
    }
    Ok(())
}
