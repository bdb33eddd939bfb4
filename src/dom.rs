use crate::GeneralError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

#[derive(thiserror::Error, Debug)]
#[error("Missing element {0:?} in document.")]
pub struct MissingElement(pub &'static str);

#[derive(thiserror::Error, Debug)]
#[error("Element {0:?} has no data-{1} attribute.")]
pub struct MissingData(pub &'static str, pub &'static str);

/// The document's primary content region, i.e. its first `<main>` element.
pub fn primary_content() -> anyhow::Result<HtmlElement> {
	let collection = gloo_utils::document().get_elements_by_tag_name("main");
	let Some(element) = collection.item(0) else {
		return Err(MissingElement("main").into());
	};
	as_html(element)
}

/// Looks up an element the page template is expected to provide.
pub fn required_element(id: &'static str) -> anyhow::Result<HtmlElement> {
	let Some(element) = gloo_utils::document().get_element_by_id(id) else {
		return Err(MissingElement(id).into());
	};
	as_html(element)
}

/// Reads a `data-*` value from an element's dataset.
/// `key` is the camelCase form of the attribute name, as in the DOM api.
pub fn data_value(element: &HtmlElement, key: &str) -> Option<String> {
	element.dataset().get(key)
}

fn as_html(element: web_sys::Element) -> anyhow::Result<HtmlElement> {
	element
		.dyn_into::<HtmlElement>()
		.map_err(|element| GeneralError(format!("<{}> is not an html element", element.tag_name())).into())
}

/// Wraps a javascript exception value for propagation with `?`.
pub fn js_error(value: JsValue) -> anyhow::Error {
	GeneralError(format!("{value:?}")).into()
}
