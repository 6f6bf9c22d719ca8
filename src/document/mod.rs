//! Document model and persistence.
//!
//! A document is a flat, ordered list of placed items stored as JSON or YAML.
//! All I/O goes through the [`FileSystem`] port so documents load the same
//! from disk, a replayed cassette, or an in-memory fake. Keys this tool does
//! not understand are carried through a load/save cycle untouched.
//!
//! ```text
//! name: poster.ai
//! placed_items:
//!   - name: Logo
//!     file_path: /art/logo.png
//!   - file_path: /art/banner.PNG
//! ```

pub mod error;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::DocumentError;

use crate::ports::FileSystem;

/// A reference held by the document to an externally stored asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    /// Display name of the item, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path of the linked file; `None` for embedded items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
    /// Keys preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl PlacedItem {
    /// Creates an unnamed item linked to `path`.
    pub fn linked(path: impl Into<PathBuf>) -> Self {
        Self { file_path: Some(path.into()), ..Self::default() }
    }

    /// Label for listings: the item name, else the linked file name.
    #[must_use]
    pub fn label(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        self.file_path
            .as_deref()
            .and_then(Path::file_name)
            .map_or_else(|| "(unnamed)".to_string(), |n| n.to_string_lossy().into_owned())
    }
}

/// A vector document's placed-item list plus whatever else it carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document name, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Placed items in document order.
    #[serde(default)]
    pub placed_items: Vec<PlacedItem>,
    /// Keys preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// On-disk encoding of a document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl Format {
    /// Selects the format for `path` from its extension, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(DocumentError::UnsupportedFormat { path: path.to_path_buf() }),
        }
    }
}

impl Document {
    /// Parses a document from `contents` in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] if the contents are malformed.
    pub fn parse(contents: &str, format: Format, path: &Path) -> Result<Self, DocumentError> {
        let parsed = match format {
            Format::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| DocumentError::Parse { path: path.to_path_buf(), message })
    }

    /// Renders the document in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Serialize`] if serialization fails.
    pub fn render(&self, format: Format, path: &Path) -> Result<String, DocumentError> {
        let rendered = match format {
            Format::Json => {
                serde_json::to_string_pretty(self).map(|s| s + "\n").map_err(|e| e.to_string())
            }
            Format::Yaml => serde_yaml::to_string(self).map_err(|e| e.to_string()),
        };
        rendered.map_err(|message| DocumentError::Serialize { path: path.to_path_buf(), message })
    }

    /// Loads a document through the filesystem port.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is unsupported, the file cannot be
    /// read, or its contents cannot be parsed.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self, DocumentError> {
        let format = Format::from_path(path)?;
        let contents = fs
            .read_to_string(path)
            .map_err(|source| DocumentError::Read { path: path.to_path_buf(), source })?;
        let doc = Self::parse(&contents, format, path)?;
        debug!(path = %path.display(), items = doc.placed_items.len(), "loaded document");
        Ok(doc)
    }

    /// Saves the document through the filesystem port, in the format named
    /// by `path`'s extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is unsupported, serialization fails,
    /// or the file cannot be written.
    pub fn save(&self, fs: &dyn FileSystem, path: &Path) -> Result<(), DocumentError> {
        let format = Format::from_path(path)?;
        let contents = self.render(format, path)?;
        fs.write(path, &contents)
            .map_err(|source| DocumentError::Write { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), "saved document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemFs;

    const YAML_DOC: &str = "\
name: poster.ai
artboard: A3
placed_items:
  - name: Logo
    file_path: /art/logo.png
    locked: true
  - file_path: /art/banner.PNG
  - name: Swatch
";

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a.json")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("a.YAML")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.yml")).unwrap(), Format::Yaml);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = Format::from_path(Path::new("poster.ai")).unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedFormat { .. }));
        assert!(err.to_string().contains("poster.ai"));
    }

    #[test]
    fn parses_yaml_document() {
        let doc = Document::parse(YAML_DOC, Format::Yaml, Path::new("p.yaml")).unwrap();
        assert_eq!(doc.name.as_deref(), Some("poster.ai"));
        assert_eq!(doc.placed_items.len(), 3);
        assert_eq!(doc.placed_items[0].file_path, Some(PathBuf::from("/art/logo.png")));
        assert_eq!(doc.placed_items[0].extra.get("locked"), Some(&serde_json::json!(true)));
        assert!(doc.placed_items[2].file_path.is_none());
        assert_eq!(doc.extra.get("artboard"), Some(&serde_json::json!("A3")));
    }

    #[test]
    fn missing_item_list_means_empty_document() {
        let doc = Document::parse("{}", Format::Json, Path::new("p.json")).unwrap();
        assert!(doc.placed_items.is_empty());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = Document::parse("placed_items: 7", Format::Yaml, Path::new("p.yaml"))
            .unwrap_err();
        assert!(matches!(err, DocumentError::Parse { .. }));
    }

    #[test]
    fn save_then_load_keeps_unknown_keys() {
        let fs = MemFs::new();
        let doc = Document::parse(YAML_DOC, Format::Yaml, Path::new("p.yaml")).unwrap();

        doc.save(&fs, Path::new("/docs/poster.json")).unwrap();
        let json = fs.contents(Path::new("/docs/poster.json")).unwrap();
        assert!(json.ends_with('\n'));
        assert!(json.contains("\"artboard\": \"A3\""));

        let reloaded = Document::load(&fs, Path::new("/docs/poster.json")).unwrap();
        assert_eq!(reloaded, doc);
    }

    #[test]
    fn load_missing_file_is_a_read_error() {
        let fs = MemFs::new();
        let err = Document::load(&fs, Path::new("/nope.yaml")).unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
        assert!(err.to_string().contains("/nope.yaml"));
    }

    #[test]
    fn item_label_prefers_name() {
        let named = PlacedItem { name: Some("Logo".into()), ..PlacedItem::linked("/a/x.png") };
        assert_eq!(named.label(), "Logo");
        assert_eq!(PlacedItem::linked("/a/x.png").label(), "x.png");
        assert_eq!(PlacedItem::default().label(), "(unnamed)");
    }
}
