//! Binary database file format.
//!
//! A `passwords.db` file has this layout:
//!
//! ```text
//! [PWDB: 4 bytes][version: 1 byte][secrets block][timestamps block]
//!
//! block := [payload_len: 4 bytes LE][payload JSON]
//! ```
//!
//! - **Magic** (`PWDB`): identifies the file as a password database.
//! - **Version**: format version (currently `1`).
//! - **Secrets block**: JSON array of `[keyword, password]` pairs.
//! - **Timestamps block**: JSON array of `[keyword, last_modified]` pairs.
//!
//! Each block carries its own length, so the two can be read back to back.
//! Pairs are kept in insertion order.  An empty mapping is `[]`.
//!
//! A file that does not yield two complete blocks with the same keyword
//! set is reported as [`PwdManagerError::Corrupt`].  Callers discard it
//! whole; salvaging one block would leave keywords without timestamps.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

use super::entry::{validate_key, SecretEntry};
use crate::errors::{PwdManagerError, Result};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Magic bytes at the start of every database file.
const MAGIC: &[u8; 4] = b"PWDB";

/// Current binary format version.
pub const CURRENT_VERSION: u8 = 1;

/// Fixed-size prefix: 4 (magic) + 1 (version).
const PREFIX_LEN: usize = 5;

/// Size of the little-endian length field in front of each block.
const LEN_FIELD: usize = 4;

/// One attribute column as written to disk.
type Column = Vec<(String, String)>;

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// The `keyword -> password` pairs that make up the first block.
pub fn secrets_column(entries: &[SecretEntry]) -> Vec<(&str, &str)> {
    entries
        .iter()
        .map(|e| (e.key.as_str(), e.secret.as_str()))
        .collect()
}

/// The `keyword -> last modified` pairs that make up the second block.
pub fn timestamps_column(entries: &[SecretEntry]) -> Vec<(&str, &str)> {
    entries
        .iter()
        .map(|e| (e.key.as_str(), e.last_modified.as_str()))
        .collect()
}

/// Serialize entries into the full file contents.
pub fn encode(entries: &[SecretEntry]) -> Result<Vec<u8>> {
    let secrets = secrets_column(entries);
    let timestamps = timestamps_column(entries);

    let secrets_bytes = serde_json::to_vec(&secrets)
        .map_err(|e| PwdManagerError::SerializationError(format!("secrets: {e}")))?;
    let timestamps_bytes = serde_json::to_vec(&timestamps)
        .map_err(|e| PwdManagerError::SerializationError(format!("timestamps: {e}")))?;

    let total = PREFIX_LEN + 2 * LEN_FIELD + secrets_bytes.len() + timestamps_bytes.len();
    let mut buf = Vec::with_capacity(total);

    buf.extend_from_slice(MAGIC); // 4 bytes
    buf.push(CURRENT_VERSION); // 1 byte
    push_block(&mut buf, &secrets_bytes, "secrets")?;
    push_block(&mut buf, &timestamps_bytes, "timestamps")?;

    Ok(buf)
}

fn push_block(buf: &mut Vec<u8>, payload: &[u8], name: &str) -> Result<()> {
    let len = u32::try_from(payload.len()).map_err(|_| {
        PwdManagerError::SerializationError(format!(
            "{name} block length {} exceeds u32::MAX",
            payload.len()
        ))
    })?;
    buf.extend_from_slice(&len.to_le_bytes());
    buf.extend_from_slice(payload);
    Ok(())
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Parse full file contents back into entries.
pub fn decode(data: &[u8]) -> Result<Vec<SecretEntry>> {
    if data.len() < PREFIX_LEN {
        return Err(corrupt("file too small to be a password database"));
    }
    if &data[0..4] != MAGIC {
        return Err(corrupt("missing PWDB magic bytes"));
    }
    let version = data[4];
    if version != CURRENT_VERSION {
        return Err(corrupt(&format!(
            "unsupported version {version}, expected {CURRENT_VERSION}"
        )));
    }

    let mut reader = BlockReader {
        data,
        pos: PREFIX_LEN,
    };
    let secrets_bytes = reader.next_block("secrets")?;
    let timestamps_bytes = reader.next_block("timestamps")?;
    if reader.pos != data.len() {
        return Err(corrupt("unexpected bytes after the timestamps block"));
    }

    let secrets = parse_column(secrets_bytes, "secrets")?;
    let timestamps = parse_column(timestamps_bytes, "timestamps")?;
    join_columns(secrets, timestamps)
}

/// Walks length-prefixed blocks.
struct BlockReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BlockReader<'a> {
    fn next_block(&mut self, name: &str) -> Result<&'a [u8]> {
        let len_bytes = self
            .take(LEN_FIELD)
            .ok_or_else(|| corrupt(&format!("{name} block is missing")))?;
        let len_u32 = u32::from_le_bytes(
            len_bytes
                .try_into()
                .map_err(|_| corrupt(&format!("bad {name} block length")))?,
        );
        let len = usize::try_from(len_u32)
            .map_err(|_| corrupt(&format!("{name} block length {len_u32} is too large")))?;
        self.take(len)
            .ok_or_else(|| corrupt(&format!("{name} block is truncated")))
    }

    fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(n)?;
        let slice = self.data.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }
}

fn parse_column(bytes: &[u8], name: &str) -> Result<Column> {
    serde_json::from_slice(bytes).map_err(|e| corrupt(&format!("{name} block: {e}")))
}

/// Zip the two columns by keyword, keeping the order of the secrets block.
///
/// Both columns must hold exactly the same keywords, each once.
fn join_columns(secrets: Column, timestamps: Column) -> Result<Vec<SecretEntry>> {
    if secrets.len() != timestamps.len() {
        return Err(corrupt(&format!(
            "{} passwords but {} timestamps",
            secrets.len(),
            timestamps.len()
        )));
    }

    let mut stamps: HashMap<String, String> = HashMap::with_capacity(timestamps.len());
    for (key, stamp) in timestamps {
        if stamps.contains_key(&key) {
            return Err(corrupt(&format!("keyword '{key}' repeated in timestamps")));
        }
        stamps.insert(key, stamp);
    }

    let mut seen = HashSet::with_capacity(secrets.len());
    let mut entries = Vec::with_capacity(secrets.len());
    for (key, secret) in secrets {
        validate_key(&key).map_err(|e| corrupt(&e.to_string()))?;
        if !seen.insert(key.clone()) {
            return Err(corrupt(&format!("keyword '{key}' repeated in passwords")));
        }
        let last_modified = stamps
            .remove(&key)
            .ok_or_else(|| corrupt(&format!("keyword '{key}' has no timestamp")))?;
        entries.push(SecretEntry {
            key,
            secret,
            last_modified,
        });
    }

    Ok(entries)
}

fn corrupt(detail: &str) -> PwdManagerError {
    PwdManagerError::Corrupt(detail.to_string())
}

// ---------------------------------------------------------------------------
// File I/O
// ---------------------------------------------------------------------------

/// Read the database file at `path`.
///
/// Returns `Ok(None)` when the file does not exist, `Corrupt` when it
/// exists but cannot be decoded, and `StorageUnavailable` for any other
/// I/O failure.
pub fn read_store(path: &Path) -> Result<Option<Vec<SecretEntry>>> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(PwdManagerError::storage(path, e)),
    };

    tracing::debug!(path = %path.display(), bytes = data.len(), "read password database");
    decode(&data).map(Some)
}

/// Write the database file **atomically**.
///
/// The contents go to a temp file in the same directory which is then
/// renamed over `path`, so a crash never leaves a half-written database.
pub fn write_store(path: &Path, entries: &[SecretEntry]) -> Result<()> {
    let buf = encode(entries)?;

    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, &buf).map_err(|e| PwdManagerError::storage(path, e))?;

    // Passwords are stored in plain text; keep the file owner-only.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o600);
        let _ = fs::set_permissions(&tmp_path, perms);
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(PwdManagerError::storage(path, e));
    }

    tracing::debug!(path = %path.display(), entries = entries.len(), "wrote password database");
    Ok(())
}
