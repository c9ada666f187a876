use std::sync::Mutex;

use storefront_core::{FormMode, Schema};
use storefront_logging::store_info;

/// Navigation capability consumed by the controller hosts. The real host
/// wires this to its routing layer.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Current-path cell for headless hosts and tests.
#[derive(Debug)]
pub struct MemoryRouter {
    current: Mutex<String>,
}

impl MemoryRouter {
    pub fn new() -> Self {
        Self {
            current: Mutex::new("/".to_string()),
        }
    }

    pub fn current(&self) -> String {
        self.current
            .lock()
            .map(|path| path.clone())
            .unwrap_or_default()
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for MemoryRouter {
    fn navigate(&self, path: &str) {
        store_info!("navigate {path}");
        if let Ok(mut current) = self.current.lock() {
            *current = path.to_string();
        }
    }
}

/// The form mode a path addresses, per the schema's route table. Mode is
/// decided once here, at construction time, never re-inferred later.
pub fn form_mode(schema: &Schema, path: &str) -> Option<FormMode> {
    if path == schema.new_path {
        return Some(FormMode::Create);
    }
    let id = path
        .strip_prefix(schema.edit_prefix)?
        .strip_prefix('/')?;
    if id.is_empty() {
        None
    } else {
        Some(FormMode::Edit(id.to_string()))
    }
}
