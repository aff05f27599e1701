//! Metadata Catalog
//!
//! In-memory store of tag kind definitions and declarations. Tags handed
//! out by the catalog are completed with their kind's attribute defaults.
//!
//! ## Catalog files
//!
//! ```toml
//! [[kinds]]
//! name = "Quantity"
//! description = "Order line quantity"
//! tags = [{ kind = "Range", attributes = { min = 1, max = 99 } }]
//!
//! [[declarations]]
//! id = "Order.quantity"
//! kind = "field"
//! value_type = "i64"
//! tags = [{ kind = "Quantity" }]
//! ```

use std::collections::HashMap;
use std::path::Path;

use decor_application::ports::registry::builtin_tag_kinds;
use decor_domain::error::{Error, Result};
use decor_domain::ports::MetadataIntrospector;
use decor_domain::value_objects::{Declaration, Tag, TagKind, TagKindDef};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error_ext::ErrorContext;
use crate::logging::log_catalog_loaded;

/// Serialized form of a catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Tag kind definitions
    #[serde(default)]
    pub kinds: Vec<TagKindDef>,

    /// Declarations with their direct tags
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl CatalogFile {
    /// Parse a catalog from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).config_context("Invalid catalog")
    }

    /// Render the catalog as TOML text
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).config_context("Failed to serialize catalog")
    }
}

/// Tag kinds and declarations held in memory
#[derive(Debug, Clone, Default)]
pub struct MetadataCatalog {
    kinds: HashMap<TagKind, TagKindDef>,
    declarations: Vec<Declaration>,
    index: HashMap<String, usize>,
}

impl MetadataCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog seeded with every linked built-in tag kind
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        for def in builtin_tag_kinds() {
            catalog.define_kind(def);
        }
        debug!(kinds = catalog.kinds.len(), "Catalog seeded with built-in kinds");
        catalog
    }

    /// Add or replace a tag kind definition, returning the replaced one
    pub fn define_kind(&mut self, def: TagKindDef) -> Option<TagKindDef> {
        let replaced = self.kinds.insert(def.name.clone(), def);
        if let Some(old) = &replaced {
            debug!(kind = %old.name, "Tag kind redefined");
        }
        replaced
    }

    /// Add a tag kind definition, builder style
    pub fn with_kind(mut self, def: TagKindDef) -> Self {
        self.define_kind(def);
        self
    }

    /// Add or replace a declaration
    ///
    /// Rejects declarations with an empty id or two tags of one kind.
    pub fn add_declaration(&mut self, declaration: Declaration) -> Result<()> {
        declaration.validate()?;
        match self.index.get(&declaration.id) {
            Some(&position) => {
                debug!(declaration = %declaration.id, "Declaration replaced");
                self.declarations[position] = declaration;
            }
            None => {
                self.index
                    .insert(declaration.id.clone(), self.declarations.len());
                self.declarations.push(declaration);
            }
        }
        Ok(())
    }

    /// Add a declaration, builder style
    pub fn with_declaration(mut self, declaration: Declaration) -> Result<Self> {
        self.add_declaration(declaration)?;
        Ok(self)
    }

    /// Merge a parsed catalog file; kinds first, then declarations
    pub fn merge(&mut self, file: CatalogFile) -> Result<()> {
        for def in file.kinds {
            self.define_kind(def);
        }
        for declaration in file.declarations {
            self.add_declaration(declaration)?;
        }
        Ok(())
    }

    /// Merge TOML catalog text
    pub fn load_str(&mut self, text: &str) -> Result<()> {
        self.merge(CatalogFile::from_toml(text)?)
    }

    /// Merge a TOML catalog file
    ///
    /// A missing file is logged and skipped.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Catalog file not found: {}", path.display());
            return Ok(());
        }
        let text = std::fs::read_to_string(path)
            .io_context(format!("Failed to read catalog file {}", path.display()))?;
        let file = CatalogFile::from_toml(&text)?;
        let (kinds, declarations) = (file.kinds.len(), file.declarations.len());
        self.merge(file)?;
        log_catalog_loaded(path, kinds, declarations);
        Ok(())
    }

    /// Snapshot of the catalog contents, kinds sorted by name
    pub fn to_file(&self) -> CatalogFile {
        let mut kinds: Vec<TagKindDef> = self.kinds.values().cloned().collect();
        kinds.sort_by(|a, b| a.name.cmp(&b.name));
        CatalogFile {
            kinds,
            declarations: self.declarations.clone(),
        }
    }

    /// Definition of a tag kind
    pub fn kind(&self, kind: &TagKind) -> Option<&TagKindDef> {
        self.kinds.get(kind)
    }

    /// Declaration by id
    pub fn declaration(&self, id: &str) -> Option<&Declaration> {
        self.index.get(id).map(|&position| &self.declarations[position])
    }

    /// Declaration by id, or a not-found error
    pub fn require_declaration(&self, id: &str) -> Result<&Declaration> {
        self.declaration(id)
            .ok_or_else(|| Error::not_found(format!("declaration `{id}`")))
    }

    /// Declarations in insertion order
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Number of defined tag kinds
    pub fn kind_count(&self) -> usize {
        self.kinds.len()
    }

    fn complete(&self, tag: &Tag) -> Tag {
        match self.kinds.get(&tag.kind) {
            Some(def) => def.complete(tag),
            None => tag.clone(),
        }
    }
}

impl MetadataIntrospector for MetadataCatalog {
    fn direct_tags(&self, declaration: &Declaration) -> Vec<Tag> {
        declaration.tags.iter().map(|tag| self.complete(tag)).collect()
    }

    fn kind_tags(&self, kind: &TagKind) -> Vec<Tag> {
        self.kinds
            .get(kind)
            .map(|def| def.tags.iter().map(|tag| self.complete(tag)).collect())
            .unwrap_or_default()
    }
}
