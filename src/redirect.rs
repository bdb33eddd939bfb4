use crate::{dom, GeneralError};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlElement};

static ELEMENT_ID: &str = "redirect-message";
const COUNTDOWN_START: u32 = 5;
const TICK_MS: u32 = 1000;

/// Normalizes the templated redirect url, discarding blank values.
pub fn redirect_target(raw: &str) -> Option<&str> {
	let trimmed = raw.trim();
	(!trimmed.is_empty()).then_some(trimmed)
}

fn countdown_message(seconds: u32) -> String {
	format!("You will be automatically redirected to the bot in {seconds}.")
}

/// The displayed second values, paired with whether a delay follows the
/// display. The final tick (zero) proceeds without one.
fn countdown_sequence(from: u32) -> impl Iterator<Item = (u32, bool)> {
	(0..=from).rev().map(|seconds| (seconds, seconds > 0))
}

/// Counts down in the page's message region, then sends the user to the bot.
/// A manual link is left behind in case the browser refuses the navigation.
pub async fn run() -> anyhow::Result<()> {
	let element = dom::required_element(ELEMENT_ID)?;
	let Some(raw_url) = dom::data_value(&element, "redirectUrl") else {
		return Err(dom::MissingData(ELEMENT_ID, "redirect-url").into());
	};
	let Some(url) = redirect_target(&raw_url) else {
		log::debug!(target: "redirect", "Page has no redirect target, staying put.");
		return Ok(());
	};

	for (seconds, delay_follows) in countdown_sequence(COUNTDOWN_START) {
		element.set_inner_text(&countdown_message(seconds));
		if delay_follows {
			TimeoutFuture::new(TICK_MS).await;
		}
	}

	append_fallback_link(&element, url)?;

	log::debug!(target: "redirect", "Navigating to {url:?}");
	gloo_utils::window().location().set_href(url).map_err(dom::js_error)?;
	Ok(())
}

fn append_fallback_link(element: &HtmlElement, url: &str) -> anyhow::Result<()> {
	let document = gloo_utils::document();
	let fallback = document.create_element("span").map_err(dom::js_error)?;
	fallback.set_inner_html("&nbsp;");
	let link = document
		.create_element("a")
		.map_err(dom::js_error)?
		.dyn_into::<HtmlAnchorElement>()
		.map_err(|element| GeneralError(format!("<{}> is not an anchor element", element.tag_name())))?;
	link.set_inner_text("Click here if it didn't happen.");
	link.set_href(url);
	fallback.append_child(&link).map_err(dom::js_error)?;
	element.append_child(&fallback).map_err(dom::js_error)?;
	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn six_ticks_with_five_delays() {
		let schedule = countdown_sequence(COUNTDOWN_START).collect::<Vec<_>>();
		assert_eq!(
			schedule,
			vec![(5, true), (4, true), (3, true), (2, true), (1, true), (0, false)]
		);
	}

	#[test]
	fn message_wording() {
		assert_eq!(
			countdown_message(5),
			"You will be automatically redirected to the bot in 5."
		);
		assert_eq!(
			countdown_message(0),
			"You will be automatically redirected to the bot in 0."
		);
	}

	#[test]
	fn blank_targets_are_discarded() {
		assert_eq!(redirect_target(""), None);
		assert_eq!(redirect_target("   "), None);
		assert_eq!(redirect_target(" \t\n "), None);
	}

	#[test]
	fn surrounding_whitespace_is_stripped() {
		assert_eq!(
			redirect_target("  https://t.me/the_bot \n"),
			Some("https://t.me/the_bot")
		);
	}
}
