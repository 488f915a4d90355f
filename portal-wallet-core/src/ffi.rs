//! FFI bindings for the wallet core
//!
//! C-compatible bindings around an opaque [`WalletHandle`] that owns one
//! [`WalletSession`] and the runtime it is driven on.
//!
//! SECURITY: strings carrying secrets (exported mnemonic or key) are wiped
//! when released through [`wallet_core_free_result`]. Error details never
//! cross the boundary, only the numeric code from
//! [`WalletError::error_code`].

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::path::PathBuf;
use std::ptr;

use serde::Serialize;
use zeroize::{Zeroize, Zeroizing};

use crate::core::wallet::WalletSession;
use crate::domain::entities::WalletAccount;
use crate::shared::config::WalletCoreConfig;
use crate::shared::error::WalletError;

// Codes outside the WalletError range
const ERROR_NULL_HANDLE: i32 = 100;
const ERROR_INVALID_INPUT: i32 = 101;
const ERROR_STRING_CONVERSION: i32 = 102;

const MAX_INPUT_LENGTH: usize = 4096;

/// Secure FFI result wrapper
#[repr(C)]
pub struct SecureResult {
    success: bool,
    data: *mut c_char,
    error_code: i32,
}

impl SecureResult {
    fn success(data: &[u8]) -> Self {
        // Room for the nul terminator so the buffer is never reallocated
        let mut bytes = Vec::with_capacity(data.len() + 1);
        bytes.extend_from_slice(data);
        match CString::new(bytes) {
            Ok(c_string) => Self {
                success: true,
                data: c_string.into_raw(),
                error_code: 0,
            },
            Err(e) => {
                e.into_vec().zeroize();
                Self::error(ERROR_STRING_CONVERSION)
            }
        }
    }

    fn error(error_code: i32) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error_code,
        }
    }

    fn from_result(result: Result<String, WalletError>) -> Self {
        match result {
            Ok(data) => Self::success(data.as_bytes()),
            Err(e) => Self::error(e.error_code()),
        }
    }
}

#[derive(Serialize)]
struct CreatedWalletJson<'a> {
    account: &'a WalletAccount,
    mnemonic: &'a str,
}

/// Opaque session handle owned by the host
pub struct WalletHandle {
    runtime: tokio::runtime::Runtime,
    session: WalletSession,
}

/// Borrow a C string, rejecting null, non-UTF-8 and oversized input
fn read_input<'a>(input: *const c_char) -> Result<&'a str, i32> {
    if input.is_null() {
        return Err(ERROR_INVALID_INPUT);
    }

    let input_str = unsafe { CStr::from_ptr(input) }
        .to_str()
        .map_err(|_| ERROR_INVALID_INPUT)?;

    if input_str.len() > MAX_INPUT_LENGTH {
        return Err(ERROR_INVALID_INPUT);
    }

    Ok(input_str)
}

fn with_handle<F>(handle: *mut WalletHandle, f: F) -> SecureResult
where
    F: FnOnce(&mut WalletHandle) -> SecureResult,
{
    match unsafe { handle.as_mut() } {
        Some(handle) => f(handle),
        None => SecureResult::error(ERROR_NULL_HANDLE),
    }
}

fn open_handle(data_dir: *const c_char) -> Result<WalletHandle, WalletError> {
    let mut config = WalletCoreConfig::load()?;
    if !data_dir.is_null() {
        let dir = read_input(data_dir).map_err(|_| WalletError::validation("Invalid data directory"))?;
        config.data_dir = PathBuf::from(dir);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let session = WalletSession::open_file(&config)?;
    Ok(WalletHandle { runtime, session })
}

/// Open a session over file storage
///
/// `data_dir` may be null to use the configured data directory. Returns null
/// on failure.
#[no_mangle]
pub extern "C" fn wallet_core_session_open(data_dir: *const c_char) -> *mut WalletHandle {
    match open_handle(data_dir) {
        Ok(handle) => Box::into_raw(Box::new(handle)),
        Err(e) => {
            log::warn!("Failed to open wallet session: {}", e);
            ptr::null_mut()
        }
    }
}

/// Release a session handle; the in-memory secret is wiped on drop
#[no_mangle]
pub extern "C" fn wallet_core_session_free(handle: *mut WalletHandle) {
    if !handle.is_null() {
        unsafe {
            drop(Box::from_raw(handle));
        }
    }
}

/// Current status: `no_wallet`, `locked` or `unlocked`
#[no_mangle]
pub extern "C" fn wallet_core_status(handle: *mut WalletHandle) -> SecureResult {
    with_handle(handle, |h| SecureResult::success(h.session.status().as_str().as_bytes()))
}

/// Create a wallet; returns `{"account": .., "mnemonic": ..}` JSON
#[no_mangle]
pub extern "C" fn wallet_core_create_wallet(
    handle: *mut WalletHandle,
    password: *const c_char,
) -> SecureResult {
    with_handle(handle, |h| {
        let password = match read_input(password) {
            Ok(s) => s,
            Err(code) => return SecureResult::error(code),
        };

        let result = h.runtime.block_on(h.session.create_wallet(password)).and_then(|created| {
            let payload = CreatedWalletJson {
                account: &created.account,
                mnemonic: created.mnemonic.as_str(),
            };
            let mut json = Zeroizing::new(Vec::with_capacity(1024));
            serde_json::to_writer(&mut *json, &payload)?;
            Ok(json)
        });
        match result {
            Ok(json) => SecureResult::success(&json),
            Err(e) => SecureResult::error(e.error_code()),
        }
    })
}

/// Import from a mnemonic or private key; returns the account JSON
#[no_mangle]
pub extern "C" fn wallet_core_import_wallet(
    handle: *mut WalletHandle,
    mnemonic_or_key: *const c_char,
    password: *const c_char,
) -> SecureResult {
    with_handle(handle, |h| {
        let (input, password) = match (read_input(mnemonic_or_key), read_input(password)) {
            (Ok(input), Ok(password)) => (input, password),
            (Err(code), _) | (_, Err(code)) => return SecureResult::error(code),
        };

        let result = h
            .runtime
            .block_on(h.session.import_wallet(input, password))
            .and_then(|account| Ok(serde_json::to_string(&account)?));
        SecureResult::from_result(result)
    })
}

/// Unlock the stored wallet; returns the account JSON
#[no_mangle]
pub extern "C" fn wallet_core_unlock_wallet(
    handle: *mut WalletHandle,
    password: *const c_char,
) -> SecureResult {
    with_handle(handle, |h| {
        let password = match read_input(password) {
            Ok(s) => s,
            Err(code) => return SecureResult::error(code),
        };

        let result = h
            .runtime
            .block_on(h.session.unlock_wallet(password))
            .and_then(|account| Ok(serde_json::to_string(account)?));
        SecureResult::from_result(result)
    })
}

#[no_mangle]
pub extern "C" fn wallet_core_lock_wallet(handle: *mut WalletHandle) -> SecureResult {
    with_handle(handle, |h| {
        SecureResult::from_result(h.session.lock_wallet().map(|_| "locked".to_string()))
    })
}

#[no_mangle]
pub extern "C" fn wallet_core_delete_wallet(handle: *mut WalletHandle) -> SecureResult {
    with_handle(handle, |h| {
        SecureResult::from_result(h.session.delete_wallet().map(|_| "deleted".to_string()))
    })
}

#[no_mangle]
pub extern "C" fn wallet_core_export_mnemonic(handle: *mut WalletHandle) -> SecureResult {
    with_handle(handle, |h| match h.session.export_mnemonic() {
        Ok(mnemonic) => SecureResult::success(mnemonic.as_bytes()),
        Err(e) => SecureResult::error(e.error_code()),
    })
}

#[no_mangle]
pub extern "C" fn wallet_core_export_private_key(handle: *mut WalletHandle) -> SecureResult {
    with_handle(handle, |h| match h.session.export_private_key() {
        Ok(key) => SecureResult::success(key.as_bytes()),
        Err(e) => SecureResult::error(e.error_code()),
    })
}

/// Sign the bytes of a C string; returns the signature JSON
#[no_mangle]
pub extern "C" fn wallet_core_sign_message(
    handle: *mut WalletHandle,
    message: *const c_char,
) -> SecureResult {
    with_handle(handle, |h| {
        if message.is_null() {
            return SecureResult::error(ERROR_INVALID_INPUT);
        }
        let message = unsafe { CStr::from_ptr(message) }.to_bytes();

        let result = h
            .session
            .sign_message(message)
            .and_then(|signature| Ok(serde_json::to_string(&signature)?));
        SecureResult::from_result(result)
    })
}

/// Free a SecureResult, wiping its data first
#[no_mangle]
pub extern "C" fn wallet_core_free_result(result: *mut SecureResult) {
    if let Some(result_ref) = unsafe { result.as_mut() } {
        if !result_ref.data.is_null() {
            let data = unsafe { CString::from_raw(result_ref.data) };
            data.into_bytes().zeroize();
            result_ref.data = ptr::null_mut();
        }
    }
}
