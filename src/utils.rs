use std::fs::File;
use std::io::Read;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{AppError, ConfigError};

pub fn read_file_as_str(file_path: &str) -> Result<String, ConfigError> {
    let to_config_error = |source| ConfigError::Io { path: file_path.to_string(), source };
    let mut buf: String = String::new();
    let mut file = File::open(file_path).map_err(to_config_error)?;
    file.read_to_string(&mut buf).map_err(to_config_error)?;
    Ok(buf)
}

/// Presence check for a submitted form field. Blank values count as missing.
pub fn required(value: Option<String>, field: &'static str) -> Result<String, AppError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::MissingField(field)),
    }
}

// the guarded data is plain lists that are never left half-written, so a
// poisoned lock is still safe to use
pub fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
