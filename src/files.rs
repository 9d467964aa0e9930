//! Single-value hex files: group parameters, test vectors and derived keys.
//!
//! A group directory holds `prime.txt` and `generator.txt`; a vector directory holds
//! `test_xA.txt`, `test_yA.txt`, `test_xB.txt`, `test_yB.txt` and `test_Z.txt`. Each
//! file contains one hexadecimal number, possibly wrapped across lines.

use std::fs;
use std::path::Path;

use log::debug;
use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::parse::{parse_hex_digits, to_hex};
use crate::vectors::TestVectorSet;

pub const PRIME_FILE: &str = "prime.txt";
pub const GENERATOR_FILE: &str = "generator.txt";

const VECTOR_FILES: [&str; 5] = [
    "test_xA.txt",
    "test_yA.txt",
    "test_xB.txt",
    "test_yB.txt",
    "test_Z.txt",
];

/// Reads one hexadecimal number from `path`.
pub fn read_hex_file(path: impl AsRef<Path>) -> Result<BigUint> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    debug!("read {} bytes from {}", text.len(), path.display());
    parse_hex_digits(&text)
}

/// Writes `value` as `0x`-prefixed hex, creating parent directories as needed.
pub fn write_hex_file(path: impl AsRef<Path>, value: &BigUint) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, to_hex(value)).map_err(|e| Error::io(path, e))
}

/// Reads the unvalidated `(prime, generator)` pair stored in `dir`.
pub fn read_group_dir(dir: impl AsRef<Path>) -> Result<(BigUint, BigUint)> {
    let dir = dir.as_ref();
    let prime = read_hex_file(dir.join(PRIME_FILE))?;
    let generator = read_hex_file(dir.join(GENERATOR_FILE))?;
    Ok((prime, generator))
}

/// Reads a [`TestVectorSet`] stored in `dir`.
pub fn read_test_vectors_dir(dir: impl AsRef<Path>) -> Result<TestVectorSet> {
    let dir = dir.as_ref();
    let [x_a, y_a, x_b, y_b, z] = VECTOR_FILES.map(|name| read_hex_file(dir.join(name)));
    Ok(TestVectorSet {
        x_a: x_a?,
        y_a: y_a?,
        x_b: x_b?,
        y_b: y_b?,
        z: z?,
    })
}
