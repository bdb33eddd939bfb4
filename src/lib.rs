use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

pub mod analytics;
pub mod bootstrap;
pub mod dom;
pub mod logging;
pub mod redirect;

#[derive(thiserror::Error, Debug)]
pub struct GeneralError(pub String);
impl std::fmt::Display for GeneralError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[wasm_bindgen(start)]
pub fn start() {
	logging::wasm::init(logging::wasm::Config::default().prefer_target());
}

/// Entry point for pages which report the outcome of an authorization attempt.
/// Loaded by both the success and the error templates.
#[wasm_bindgen(js_name = reportAuthorizationStatus)]
pub fn report_authorization_status() {
	bootstrap::when_document_parsed(|| {
		if let Err(err) = analytics::report_page_status() {
			log::error!(target: "analytics", "Failed to report authorization status: {err:?}");
		}
	});
}

/// Entry point for pages which send the user back to the bot after a countdown.
/// Loaded by the success template only.
#[wasm_bindgen(js_name = runRedirectCountdown)]
pub fn run_redirect_countdown() {
	bootstrap::when_document_parsed(|| {
		spawn_local(async {
			if let Err(err) = redirect::run().await {
				log::error!(target: "redirect", "Redirect countdown aborted: {err:?}");
			}
		});
	});
}
