// src/logging.rs
//! `log` クレートのマクロ (`info!` とか) の出力先をブラウザのコンソールにするよ。
//! wasm32 以外 (cargo test とか) では標準エラーに書く。

use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.level(), record.args());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let message = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&message),
        Level::Warn => console::warn_1(&message),
        Level::Info => console::log_1(&message),
        Level::Debug | Level::Trace => console::debug_1(&message),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// ロガーを登録する。2 回目以降はレベルだけ変えるよ。
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("logging: logger already installed.");
    }
    log::set_max_level(level);
}
