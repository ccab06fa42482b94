// SPDX-License-Identifier: MPL-2.0
//! Named vector symbols for [`AlertVariant::SystemIcon`](super::alert::AlertVariant).
//!
//! Symbols are SVG files from `assets/symbols/`, embedded at compile time and
//! looked up by file stem (e.g. `"info.circle"`). Handles for embedded symbols
//! are created once and reused. A name that is not embedded is handed to the
//! SVG renderer as a file path, which then applies its own not-found behavior;
//! such handles are not cached.

use iced::widget::svg::Handle;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

#[derive(RustEmbed)]
#[folder = "assets/symbols/"]
struct Symbols;

fn cache() -> &'static Mutex<HashMap<String, Handle>> {
    static CACHE: OnceLock<Mutex<HashMap<String, Handle>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Returns the SVG handle for a symbol name.
#[must_use]
pub fn handle(name: &str) -> Handle {
    if let Ok(cache) = cache().lock() {
        if let Some(handle) = cache.get(name) {
            return handle.clone();
        }
    }

    let Some(file) = Symbols::get(&file_name(name)) else {
        return Handle::from_path(name);
    };
    let handle = Handle::from_memory(file.data);

    if let Ok(mut cache) = cache().lock() {
        cache.insert(name.to_owned(), handle.clone());
    }
    handle
}

fn file_name(name: &str) -> String {
    format!("{name}.svg")
}
