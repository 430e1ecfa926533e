use crate::lobby::*;
use wasm_bindgen::prelude::*;

// Re-export types for JavaScript

#[wasm_bindgen]
pub struct WasmRoster(Roster);

#[wasm_bindgen]
pub struct WasmDraft(Draft);

// Console-backed log facade

struct Console;

impl log::Log for Console {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }
    fn log(&self, record: &log::Record) {
        let line = format!("{:<5} {}", record.level(), record.args());
        web_sys::console::log_1(&JsValue::from_str(&line));
    }
    fn flush(&self) {}
}

static CONSOLE: Console = Console;

// Initialize function
#[wasm_bindgen(start)]
pub fn start() {
    // This function will be called when the WASM module is loaded
    console_error_panic_hook::set_once();
    let _ = log::set_logger(&CONSOLE).map(|()| log::set_max_level(log::LevelFilter::Debug));
}

// Draft implementation
#[wasm_bindgen]
impl WasmDraft {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self(Draft::default())
    }

    #[wasm_bindgen]
    pub fn edit_name(&mut self, value: String) {
        self.0.edit(Field::Name, value);
    }

    #[wasm_bindgen]
    pub fn edit_opponents(&mut self, value: String) {
        self.0.edit(Field::Opponents, value);
    }

    #[wasm_bindgen]
    pub fn name(&self) -> String {
        self.0.name.clone()
    }

    #[wasm_bindgen]
    pub fn opponents(&self) -> String {
        self.0.opponents.clone()
    }
}

// Roster implementation
#[wasm_bindgen]
impl WasmRoster {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self(Roster::new())
    }

    #[wasm_bindgen]
    pub fn submit(&mut self, draft: WasmDraft) {
        self.0.apply(Message::Submit(draft.0));
    }

    #[wasm_bindgen]
    pub fn remove(&mut self, position: usize) {
        self.0.apply(Message::Remove(position));
    }

    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[wasm_bindgen]
    pub fn into_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.0).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn into_string(&self) -> String {
        self.0.to_string()
    }
}
