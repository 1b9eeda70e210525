use crate::editor::PropertyEditor;

/// Current ABI version. Host checks this against the library's `pe_abi_version()`.
pub const PE_ABI_VERSION: u32 = 1;

/// FFI return struct from `pe_create_editors`.
#[repr(C)]
pub struct EditorsCreateResult {
    /// Pointer to the created editors (`Box<Vec<Box<dyn PropertyEditor>>>`).
    /// Null if creation failed.
    pub editors_ptr: *mut (),
    /// Pointer to a heap-allocated error string.
    /// Null if creation succeeded.
    pub error_ptr: *mut u8,
    /// Length of the error string.
    pub error_len: usize,
}

/// Type signature for `pe_abi_version` symbol.
pub type AbiVersionFn = unsafe extern "C" fn() -> u32;

/// Type signature for `pe_create_editors` symbol.
/// Host takes ownership of the returned editors.
pub type CreateEditorsFn = unsafe extern "C" fn() -> EditorsCreateResult;

/// Helper: create a successful `EditorsCreateResult`.
///
/// The order of `editors` is the order the host registers them in.
pub fn editors_ok(editors: Vec<Box<dyn PropertyEditor>>) -> EditorsCreateResult {
    EditorsCreateResult {
        editors_ptr: Box::into_raw(Box::new(editors)) as *mut (),
        error_ptr: std::ptr::null_mut(),
        error_len: 0,
    }
}

/// Helper: create a failed `EditorsCreateResult` from an error message.
pub fn editors_err(msg: &str) -> EditorsCreateResult {
    let bytes = msg.as_bytes().to_vec();
    let len = bytes.len();
    let ptr = Box::into_raw(bytes.into_boxed_slice()) as *mut u8;
    EditorsCreateResult {
        editors_ptr: std::ptr::null_mut(),
        error_ptr: ptr,
        error_len: len,
    }
}

/// Reclaim the editors behind a successful result.
///
/// # Safety
///
/// `result.editors_ptr` must come from [`editors_ok`] and must not be reclaimed twice.
pub unsafe fn take_editors(result: &EditorsCreateResult) -> Vec<Box<dyn PropertyEditor>> {
    unsafe { *Box::from_raw(result.editors_ptr as *mut Vec<Box<dyn PropertyEditor>>) }
}

/// Reclaim the error message behind a failed result.
///
/// # Safety
///
/// `result.error_ptr`/`error_len` must come from [`editors_err`] and must not be reclaimed twice.
pub unsafe fn take_error(result: &EditorsCreateResult) -> String {
    if result.error_ptr.is_null() || result.error_len == 0 {
        return "unknown error".to_string();
    }
    let bytes = unsafe {
        Box::from_raw(core::ptr::slice_from_raw_parts_mut(
            result.error_ptr,
            result.error_len,
        ))
    };
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Macro: export `pe_abi_version` function.
#[macro_export]
macro_rules! pe_abi_version_fn {
    () => {
        #[unsafe(no_mangle)]
        pub extern "C" fn pe_abi_version() -> u32 {
            $crate::ffi::PE_ABI_VERSION
        }
    };
}

/// Macro: export `pe_create_editors` from a function returning the editors.
///
/// `pe_create_editors_fn!(crate::editors)` where `editors() -> Vec<Box<dyn PropertyEditor>>`.
#[macro_export]
macro_rules! pe_create_editors_fn {
    ($factory:path) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn pe_create_editors() -> $crate::ffi::EditorsCreateResult {
            $crate::ffi::editors_ok($factory())
        }
    };
}
