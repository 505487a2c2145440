use dockpilot_core::{ProgressValue, TaskbarError};
use std::collections::HashMap;
use std::sync::Mutex;
use zbus::blocking::Connection;
use zbus::zvariant::Value;

const INTERFACE: &str = "com.canonical.Unity.LauncherEntry";
const OBJECT_PATH_PREFIX: &str = "/com/canonical/unity/launcherentry";

/// Environment override for the desktop-file id the entry is published
/// under. Docks match the id against installed `.desktop` files.
const DESKTOP_ID_ENV: &str = "DOCKPILOT_DESKTOP_ID";

const DEFAULT_DESKTOP_ID: &str = "dockpilot-control-panel";

#[derive(Debug, Default, Clone, Copy)]
struct EntryState {
    count: i64,
    count_visible: bool,
    progress: f64,
    progress_visible: bool,
    urgent: bool,
}

/// One published launcher entry. Every mutation re-broadcasts the full
/// property set, which is what libunity-based docks expect.
#[derive(Debug)]
pub(crate) struct LauncherEntry {
    connection: Connection,
    app_uri: String,
    object_path: String,
    state: Mutex<EntryState>,
}

impl LauncherEntry {
    pub(crate) fn connect() -> Result<Self, zbus::Error> {
        let connection = Connection::session()?;
        let app_uri = application_uri();
        let object_path = format!("{OBJECT_PATH_PREFIX}/{}", entry_hash(&app_uri));
        tracing::debug!(%app_uri, %object_path, "launcher entry connected");
        Ok(LauncherEntry {
            connection,
            app_uri,
            object_path,
            state: Mutex::new(EntryState::default()),
        })
    }

    pub(crate) fn set_count(&self, count: Option<i64>) -> Result<(), TaskbarError> {
        self.update(|state| {
            state.count = count.unwrap_or(0);
            state.count_visible = count.is_some();
        })
    }

    pub(crate) fn set_progress(&self, value: ProgressValue) -> Result<(), TaskbarError> {
        self.update(|state| {
            state.progress = f64::from(value.get()) / 100.0;
            state.progress_visible = value > ProgressValue::MIN;
        })
    }

    pub(crate) fn set_urgent(&self, urgent: bool) -> Result<(), TaskbarError> {
        self.update(|state| state.urgent = urgent)
    }

    fn update(&self, mutate: impl FnOnce(&mut EntryState)) -> Result<(), TaskbarError> {
        let snapshot = {
            let mut state = self.state.lock().expect("launcher entry state poisoned");
            mutate(&mut state);
            *state
        };
        self.broadcast(snapshot)
    }

    fn broadcast(&self, state: EntryState) -> Result<(), TaskbarError> {
        let mut properties: HashMap<&str, Value<'_>> = HashMap::new();
        properties.insert("count", Value::from(state.count));
        properties.insert("count-visible", Value::from(state.count_visible));
        properties.insert("progress", Value::from(state.progress));
        properties.insert("progress-visible", Value::from(state.progress_visible));
        properties.insert("urgent", Value::from(state.urgent));

        self.connection
            .emit_signal(
                Option::<&str>::None,
                self.object_path.as_str(),
                INTERFACE,
                "Update",
                &(self.app_uri.as_str(), properties),
            )
            .map_err(|error| TaskbarError::platform(error.to_string()))
    }
}

fn application_uri() -> String {
    let id = std::env::var(DESKTOP_ID_ENV).unwrap_or_else(|_| DEFAULT_DESKTOP_ID.to_owned());
    let id = id.strip_suffix(".desktop").unwrap_or(&id);
    format!("application://{id}.desktop")
}

/// djb2-style string hash used by libunity to derive the entry object path.
fn entry_hash(uri: &str) -> u32 {
    uri.bytes().fold(5381u32, |hash, byte| hash.wrapping_mul(33).wrapping_add(u32::from(byte)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn entry_hash_is_stable() {
        let uri = "application://dockpilot-control-panel.desktop";
        assert_eq!(entry_hash(uri), entry_hash(uri));
        assert_ne!(entry_hash(uri), entry_hash("application://other.desktop"));
    }

    #[rstest]
    fn application_uri_appends_desktop_suffix_once() {
        // Not using the env override here; the default id must expand to a
        // single `.desktop` suffix.
        let uri = application_uri();
        assert!(uri.starts_with("application://"));
        assert!(uri.ends_with(".desktop"));
        assert!(!uri.ends_with(".desktop.desktop"));
    }
}
