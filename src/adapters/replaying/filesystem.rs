//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem operations from a cassette.
///
/// Each call must ask about the same path that was recorded, so a replayed
/// relink run fails loudly if it derives a different sibling path.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    /// Fetches the next recorded output for `method`, checking the path.
    fn next_output(&self, method: &str, path: &Path) -> serde_json::Value {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        let interaction = replayer.next_interaction("fs", method);
        let requested = path.display().to_string();
        let recorded = interaction.input.get("path").and_then(serde_json::Value::as_str);
        assert!(
            recorded.map_or(true, |p| p == requested),
            "Cassette mismatch: fs::{method} seq={seq} was recorded for {recorded:?} \
             but replayed for {requested:?}",
            seq = interaction.seq,
        );
        interaction.output.clone()
    }
}

/// Extracts a Result from a cassette output JSON value.
///
/// Expects `{"ok": <value>}` or `{"err": "message"}`.
fn extract_result<T: serde::de::DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}

impl FileSystem for ReplayingFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let output = self.next_output("read_to_string", path);
        extract_result(&output, "fs::read_to_string")
    }

    fn write(
        &self,
        path: &Path,
        _contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let output = self.next_output("write", path);
        if let Some(err) = output.get("err") {
            let msg = err.as_str().unwrap_or("unknown error").to_string();
            return Err(msg.into());
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let output = self.next_output("exists", path);
        extract_result(&output, "fs::exists")
    }
}
