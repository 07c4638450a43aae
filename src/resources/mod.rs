//! Named SQL text resources
//!
//! A [`ResourceBundle`] maps dotted logical names (`namespace.File.sql`) to
//! text. Bundles are filled either from bytes compiled into the binary with
//! `include_bytes!` or from a directory at runtime. Requests may use `\` or
//! `.` as separators and may omit the namespace.

mod query;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;

use encoding_rs::{UTF_16LE, WINDOWS_1252};
use tracing::{debug, trace};

use crate::error::ResourceError;
use crate::util::{starts_with_ci, CiString};

pub use query::{CommandType, SqlProc, SqlQuery};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];

/// Turns a Rust module path into a resource namespace (`a::b` becomes `a.b`).
pub fn namespace_of(module_path: &str) -> String {
    module_path.replace("::", ".")
}

/// Map `request` into the bundle namespace.
///
/// Backslashes become dots. A name already starting with `namespace`
/// (compared case-insensitively) is returned as is; anything else is
/// prefixed with `namespace.`.
pub fn resolve_name(namespace: &str, request: &str) -> String {
    let clean = request.replace('\\', ".");
    if starts_with_ci(&clean, namespace) {
        clean
    } else {
        format!("{}.{}", namespace, clean)
    }
}

/// Decode resource bytes as text.
///
/// A UTF-8 or UTF-16LE byte order mark selects that encoding. Without one,
/// UTF-8 is tried first with Windows-1252 as the fallback.
pub fn decode_text(name: &str, bytes: &[u8]) -> Result<String, ResourceError> {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return String::from_utf8(rest.to_vec()).map_err(|_| ResourceError::InvalidEncoding {
            name: name.to_string(),
        });
    }
    if let Some(rest) = bytes.strip_prefix(UTF16LE_BOM) {
        let (decoded, had_errors) = UTF_16LE.decode_without_bom_handling(rest);
        if had_errors {
            return Err(ResourceError::InvalidEncoding {
                name: name.to_string(),
            });
        }
        return Ok(decoded.into_owned());
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_string()),
        Err(_) => {
            let (decoded, _, had_errors) = WINDOWS_1252.decode(bytes);
            if had_errors {
                Err(ResourceError::InvalidEncoding {
                    name: name.to_string(),
                })
            } else {
                Ok(decoded.into_owned())
            }
        }
    }
}

struct Resource {
    name: String,
    bytes: Cow<'static, [u8]>,
}

/// A namespace plus the text resources registered under it.
pub struct ResourceBundle {
    namespace: String,
    resources: BTreeMap<CiString, Resource>,
}

impl ResourceBundle {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            resources: BTreeMap::new(),
        }
    }

    /// Registers bytes compiled into the binary.
    pub fn with_static(mut self, name: &str, bytes: &'static [u8]) -> Self {
        self.insert_bytes(name, Cow::Borrowed(bytes));
        self
    }

    /// Registers owned bytes under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: &str, bytes: Vec<u8>) {
        self.insert_bytes(name, Cow::Owned(bytes));
    }

    fn insert_bytes(&mut self, name: &str, bytes: Cow<'static, [u8]>) {
        let resolved = self.resolve_name(name);
        trace!(resource = %resolved, "Registered resource");
        self.resources.insert(
            CiString::from(resolved.as_str()),
            Resource {
                name: resolved,
                bytes,
            },
        );
    }

    /// Loads every file below `dir`.
    ///
    /// A file's logical name is its path relative to `dir` with separators
    /// replaced by dots, resolved against `namespace`.
    pub fn from_dir(namespace: impl Into<String>, dir: &Path) -> Result<Self, ResourceError> {
        let mut bundle = Self::new(namespace);

        for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                ResourceError::ReadError {
                    path,
                    source: e
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
                }
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(dir).unwrap_or(path);
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join(".");
            let bytes = std::fs::read(path).map_err(|source| ResourceError::ReadError {
                path: path.to_path_buf(),
                source,
            })?;
            bundle.insert(&name, bytes);
        }

        debug!(
            namespace = %bundle.namespace,
            dir = %dir.display(),
            count = bundle.resources.len(),
            "Loaded resource directory"
        );
        Ok(bundle)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn resolve_name(&self, request: &str) -> String {
        resolve_name(&self.namespace, request)
    }

    /// Fully resolved names of every registered resource, sorted.
    pub fn resource_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.resources.values().map(|r| r.name.as_str())
    }

    pub fn contains(&self, request: &str) -> bool {
        self.resources.contains_key(&CiString::from(self.resolve_name(request)))
    }

    pub fn read_bytes(&self, request: &str) -> Result<&[u8], ResourceError> {
        let resolved = self.resolve_name(request);
        match self.resources.get(&CiString::from(resolved.as_str())) {
            Some(resource) => {
                debug!(resource = %resource.name, "Resolved resource");
                Ok(&*resource.bytes)
            }
            None => Err(ResourceError::NotFound { name: resolved }),
        }
    }

    pub fn read_text(&self, request: &str) -> Result<String, ResourceError> {
        let bytes = self.read_bytes(request)?;
        decode_text(request, bytes)
    }

    /// Reads a resource as [`SqlQuery`] command text.
    pub fn read_query(&self, request: &str) -> Result<SqlQuery, ResourceError> {
        self.read_text(request).map(SqlQuery::from)
    }
}

impl std::fmt::Debug for ResourceBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceBundle")
            .field("namespace", &self.namespace)
            .field("resources", &self.resource_names().collect::<Vec<_>>())
            .finish()
    }
}
