use crate::dom;
use gloo_utils::format::JsValueSerdeExt;
use serde::Serialize;
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};

static EVENT_NAME: &str = "yandex_disk_authorization";
static EVENT_CATEGORY: &str = "authorization";

#[wasm_bindgen]
extern "C" {
	/// Global collector function installed by the analytics snippet in the page head.
	fn gtag(command: &str, event_name: &str, params: &JsValue);
}

/// Classification of a reported status string. Used for log lines only;
/// the analytics label always carries the raw string.
#[derive(Debug, PartialEq)]
pub enum Outcome {
	Success,
	Failure,
	Unknown,
}
impl Outcome {
	pub fn from_status(status: &str) -> Self {
		match status {
			"success" => Self::Success,
			"access_denied" | "unauthorized_client" | "invalid_credentials"
			| "invalid_insert_token" | "link_expired" | "internal_server_error" => Self::Failure,
			_ => Self::Unknown,
		}
	}
}

#[derive(Serialize)]
struct EventParams<'a> {
	event_category: &'static str,
	event_label: &'a str,
}

fn event_params(label: &str) -> EventParams<'_> {
	EventParams {
		event_category: EVENT_CATEGORY,
		event_label: label,
	}
}

/// Reports the page's authorization outcome to the analytics collector.
/// Exactly one event per page load; collector failures are not observed.
pub fn report_page_status() -> anyhow::Result<()> {
	let main = dom::primary_content()?;
	let status = dom::data_value(&main, "status").unwrap_or_default();
	log::debug!(
		target: "analytics",
		"Reporting authorization status {status:?} ({:?})",
		Outcome::from_status(&status)
	);
	let params = JsValue::from_serde(&event_params(&status))?;
	gtag("event", EVENT_NAME, &params);
	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn params_carry_category_and_label() -> anyhow::Result<()> {
		assert_eq!(
			serde_json::to_string(&event_params("success"))?,
			r#"{"event_category":"authorization","event_label":"success"}"#
		);
		Ok(())
	}

	#[test]
	fn empty_label_is_preserved() -> anyhow::Result<()> {
		let params = serde_json::to_value(event_params(""))?;
		assert_eq!(params["event_label"], "");
		assert_eq!(params["event_category"], "authorization");
		Ok(())
	}

	#[test]
	fn status_codes_classify() {
		assert_eq!(Outcome::from_status("success"), Outcome::Success);
		assert_eq!(Outcome::from_status("access_denied"), Outcome::Failure);
		assert_eq!(Outcome::from_status("unauthorized_client"), Outcome::Failure);
		assert_eq!(Outcome::from_status("invalid_credentials"), Outcome::Failure);
		assert_eq!(Outcome::from_status("invalid_insert_token"), Outcome::Failure);
		assert_eq!(Outcome::from_status("link_expired"), Outcome::Failure);
		assert_eq!(Outcome::from_status("internal_server_error"), Outcome::Failure);
		assert_eq!(Outcome::from_status(""), Outcome::Unknown);
		assert_eq!(Outcome::from_status("not-a-code"), Outcome::Unknown);
	}
}
