use gloo_events::EventListener;

/// Runs a handler once the document has finished parsing.
///
/// When the module is evaluated after parsing already completed, the handler
/// runs immediately instead of waiting on a "DOMContentLoaded" event that
/// will never re-fire.
pub fn when_document_parsed(run: impl FnOnce() + 'static) {
	let document = gloo_utils::document();
	match document.ready_state().as_str() {
		"loading" => {
			EventListener::once(&document, "DOMContentLoaded", move |_event| run()).forget();
		}
		_ => run(),
	}
}
