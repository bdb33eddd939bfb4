use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

pub struct Config {
	max_level: LevelFilter,
	prefer_target: bool,
}
impl Default for Config {
	fn default() -> Self {
		Self {
			max_level: LevelFilter::Trace,
			prefer_target: false,
		}
	}
}
impl Config {
	pub fn max_level(mut self, level: LevelFilter) -> Self {
		self.max_level = level;
		self
	}

	/// Label lines with the record's target instead of its module path.
	pub fn prefer_target(mut self) -> Self {
		self.prefer_target = true;
		self
	}
}

pub fn init(config: Config) {
	let max_level = config.max_level;
	if log::set_boxed_logger(Box::new(Console(config))).is_ok() {
		log::set_max_level(max_level);
	}
}

struct Console(Config);
impl Log for Console {
	fn enabled(&self, metadata: &Metadata<'_>) -> bool {
		metadata.level() <= self.0.max_level
	}

	fn log(&self, record: &Record<'_>) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let origin = match self.0.prefer_target && !record.target().is_empty() {
			true => record.target(),
			false => record.module_path().unwrap_or(record.target()),
		};
		// Pads the names of levels so that they line up in the console.
		let line = JsValue::from(format!("[{:>5}|{origin}] {}", record.level(), record.args()));
		match record.level() {
			Level::Error => web_sys::console::error_1(&line),
			Level::Warn => web_sys::console::warn_1(&line),
			Level::Info => web_sys::console::info_1(&line),
			Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
		}
	}

	fn flush(&self) {}
}
