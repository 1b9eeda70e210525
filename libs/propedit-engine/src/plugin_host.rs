use std::path::{Path, PathBuf};
use std::sync::Arc;

use libloading::{Library, Symbol};

use propedit_api::ffi::{self, AbiVersionFn, CreateEditorsFn, EditorsCreateResult, PE_ABI_VERSION};
use propedit_api::PropertyEditor;

use crate::discovery::ProviderSource;
use crate::error::EngineError;

/// A loaded editor library with ABI version already verified.
pub struct EditorLib {
    lib: Library,
    create_fn: CreateEditorsFn,
}

impl EditorLib {
    /// Load an editor library from `path`, verify ABI version, resolve `pe_create_editors`.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let lib = unsafe { Library::new(path) }.map_err(|e| {
            EngineError::Config(format!("failed to load editor library '{}': {e}", path.display()))
        })?;

        let abi_fn: Symbol<AbiVersionFn> =
            unsafe { lib.get(b"pe_abi_version") }.map_err(|e| {
                EngineError::Config(format!(
                    "editor library '{}' missing pe_abi_version symbol: {e}",
                    path.display()
                ))
            })?;

        check_abi(path, unsafe { abi_fn() })?;

        let create_fn: CreateEditorsFn =
            *unsafe { lib.get::<CreateEditorsFn>(b"pe_create_editors") }.map_err(|e| {
                EngineError::Config(format!(
                    "editor library '{}' missing pe_create_editors symbol: {e}",
                    path.display()
                ))
            })?;

        Ok(Self { lib, create_fn })
    }

    /// Call the library's create function and take ownership of the editors.
    pub fn create_editors(&self) -> Result<Vec<Box<dyn PropertyEditor>>, EngineError> {
        unsafe { take_created((self.create_fn)()) }
    }

    /// Keep the library mapped for the rest of the process.
    ///
    /// Editors hold vtables that point into the library.
    pub fn leak(self) {
        std::mem::forget(self.lib);
    }
}

fn check_abi(path: &Path, lib_abi: u32) -> Result<(), EngineError> {
    if lib_abi != PE_ABI_VERSION {
        return Err(EngineError::Config(format!(
            "editor library '{}' ABI version mismatch: library={lib_abi}, host={PE_ABI_VERSION}",
            path.display()
        )));
    }
    Ok(())
}

/// Editors behind a `pe_create_editors` result, or its error message.
///
/// # Safety
///
/// `result` must come from [`ffi::editors_ok`] or [`ffi::editors_err`] and must
/// not be reclaimed elsewhere.
unsafe fn take_created(
    result: EditorsCreateResult,
) -> Result<Vec<Box<dyn PropertyEditor>>, EngineError> {
    if result.editors_ptr.is_null() {
        let msg = unsafe { ffi::take_error(&result) };
        return Err(EngineError::Config(format!("editor creation failed: {msg}")));
    }
    Ok(unsafe { ffi::take_editors(&result) })
}

/// Load every editor of the library at `path`, in the order the library returns them.
pub fn load_editors(path: &Path) -> Result<Vec<Arc<dyn PropertyEditor>>, EngineError> {
    let lib = EditorLib::load(path)?;
    let editors = lib.create_editors()?;
    lib.leak();
    tracing::info!(library = %path.display(), editors = editors.len(), "loaded editor library");
    Ok(editors.into_iter().map(Arc::from).collect())
}

/// Editor libraries, in the given order. Within a library, library order.
#[derive(Debug, Clone, Default)]
pub struct PluginProviders {
    paths: Vec<PathBuf>,
}

impl PluginProviders {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl ProviderSource for PluginProviders {
    fn providers(&self) -> Result<Vec<Arc<dyn PropertyEditor>>, EngineError> {
        let mut all = Vec::new();
        for path in &self.paths {
            let lib_ctx = format!("editor library '{}'", path.display());
            all.extend(load_editors(path).map_err(|e| e.with_context(&lib_ctx))?);
        }
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_library_is_config_error() {
        let source = PluginProviders::new(vec![PathBuf::from("/nonexistent/libnothing.so")]);
        match source.providers() {
            Err(EngineError::Config(msg)) => {
                assert!(msg.contains("/nonexistent/libnothing.so"), "{msg}");
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn no_paths_no_providers() {
        assert!(PluginProviders::default().providers().unwrap().is_empty());
    }

    #[test]
    fn abi_mismatch_names_both_versions() {
        let path = Path::new("/opt/editors/libold.so");
        assert!(check_abi(path, PE_ABI_VERSION).is_ok());
        match check_abi(path, PE_ABI_VERSION + 1) {
            Err(EngineError::Config(msg)) => {
                assert!(msg.contains("/opt/editors/libold.so"), "{msg}");
                assert!(msg.contains(&format!("library={}", PE_ABI_VERSION + 1)), "{msg}");
                assert!(msg.contains(&format!("host={PE_ABI_VERSION}")), "{msg}");
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn create_failure_carries_library_message() {
        let result = ffi::editors_err("license file missing");
        match unsafe { take_created(result) } {
            Err(EngineError::Config(msg)) => {
                assert_eq!(msg, "editor creation failed: license file missing");
            }
            Ok(editors) => panic!("expected config error, got {} editors", editors.len()),
            Err(other) => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn created_editors_keep_library_order() {
        let result = ffi::editors_ok(propedit_editors_builtin::editors());
        let editors = unsafe { take_created(result) }.unwrap();
        let names: Vec<&str> = editors.iter().map(|e| e.provider_name()).collect();
        assert_eq!(names.first(), Some(&"propedit.editors.BooleanEditor"));
        assert_eq!(names.last(), Some(&"propedit.editors.ByteArrayEditor"));
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn library_without_abi_symbol_is_rejected() {
        match EditorLib::load(Path::new("libc.so.6")) {
            Err(EngineError::Config(msg)) => {
                assert!(msg.contains("missing pe_abi_version symbol"), "{msg}");
            }
            Ok(_) => panic!("libc is not an editor library"),
            Err(other) => panic!("expected config error, got {other:?}"),
        }
    }
}
