// crates/citymap-core/src/store.rs

//! # Store
//!
//! File-backed persistence for a [`CityRegistry`] in the text store format.
//! With the `compact` feature, paths ending in `.gz` are transparently
//! gzip-compressed.

use crate::error::{CityMapError, Result};
use crate::registry::CityRegistry;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Loads a registry from `path`. A missing file is [`CityMapError::NotFound`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<CityRegistry> {
    let path = path.as_ref();
    log::info!("reading store {}", path.display());
    Ok(CityRegistry::load(&read_text(path)?))
}

/// Raw store content, decompressed if needed.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let mut reader = open_stream(path.as_ref())?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// Loads from `path` when given and present, otherwise falls back to the
/// built-in sample dataset.
pub fn load_or_sample(path: Option<&Path>) -> Result<CityRegistry> {
    match path {
        Some(p) => match load_from_path(p) {
            Err(CityMapError::NotFound(msg)) => {
                log::info!("{msg}; using sample data");
                Ok(CityRegistry::sample())
            }
            other => other,
        },
        None => Ok(CityRegistry::sample()),
    }
}

/// Writes the registry to `path`, replacing any previous content.
pub fn save_to_path(registry: &CityRegistry, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let text = registry.save();
    let mut writer = BufWriter::new(File::create(path)?);

    #[cfg(feature = "compact")]
    if is_gzip(path) {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        encoder.write_all(text.as_bytes())?;
        encoder.finish()?.flush()?;
        log::info!("saved {} cities to {} (gzip)", registry.len(), path.display());
        return Ok(());
    }

    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    log::info!("saved {} cities to {}", registry.len(), path.display());
    Ok(())
}

#[cfg(feature = "compact")]
fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the path
/// asks for one.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            CityMapError::NotFound(format!("store not found at {}: {}", path.display(), e))
        }
        _ => CityMapError::Io(e),
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if is_gzip(path) {
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}
