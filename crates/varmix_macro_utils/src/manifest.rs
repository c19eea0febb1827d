use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for a `varmix_*` crate as seen from the
/// caller's `Cargo.toml`.
///
/// Derive macros emit absolute paths such as `::varmix_variant::Record`, which
/// only resolve if the invoking crate can name `varmix_variant`. A crate that
/// depends on the facade instead must receive `::varmix::variant::Record`.
///
/// # Example
///
/// ```rust
/// # use varmix_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("varmix_variant"));
/// ```
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `varmix_` and the caller depends on
///    the facade crate `varmix`, return `::varmix::short_name`
///    (e.g. `varmix_variant` -> `::varmix::variant`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// A crate that refers to itself (its own doctests and unit tests) relies on
/// the fallback plus `extern crate self as crate_name;` in its root.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "varmix";
const CRATE_PREFIX: &str = "varmix_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .unwrap_or_else(|| panic!("CARGO_MANIFEST_DIR should be auto-defined by cargo."));
        let mut path = PathBuf::from(dir);
        path.push("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn get_manifest_modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .ok()
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let source = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()));
        Self::parse_manifest(source.into_boxed_str())
            .unwrap_or_else(|| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    /// Parse manifest text that did not come from the filesystem.
    pub fn from_source(source: &str) -> Option<Self> {
        Some(Self {
            manifest: Self::parse_manifest(source.into())?,
            modified_time: SystemTime::UNIX_EPOCH,
        })
    }

    fn parse_manifest(source: Box<str>) -> Option<Document<Box<str>>> {
        Document::parse(source).ok()
    }

    // Segments are crate and module names, always valid identifiers.
    fn path_of(segments: &[&str]) -> syn::Path {
        let source = format!("::{}", segments.join("::"));
        syn::parse_str(&source).unwrap_or_else(|_| panic!("`{source}` is not a valid path"))
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::path_of(&[name]));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            return Some(Self::path_of(&[FACADE_NAME, module]));
        }

        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(table)
                && let Some(val) = Self::find_in_deps(deps, name)
            {
                return val;
            }
        }

        Self::path_of(&[name])
    }

    /// Obtain the [`Manifest`] of the caller's Cargo.toml.
    ///
    /// The parsed manifest is cached per path and reparsed only when the file's
    /// modification time changes. Call this once per macro invocation and pass
    /// the resulting path around.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time =
            Self::get_manifest_modified_time(&manifest_path).unwrap_or(SystemTime::UNIX_EPOCH);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}
