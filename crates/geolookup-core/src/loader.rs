// crates/geolookup-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) for the bundled city
//! dataset and its binary cache. The embedded dataset is parsed once per
//! process and served from a [`OnceCell`].

use crate::error::{GeoError, Result};
use crate::model::{CityIndex, DefaultBackend};
#[cfg(feature = "json")]
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

#[cfg(feature = "json")]
static CITY_INDEX_CACHE: OnceCell<CityIndex<DefaultBackend>> = OnceCell::new();

/// Suffix appended to a dataset filename to name its binary cache.
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = ".idx.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = ".comp.idx.bin";

/// The bundled city reference dataset, embedded at compile time.
#[cfg(feature = "json")]
const EMBEDDED_DATASET: &str = include_str!("../data/cities.json");

impl CityIndex<DefaultBackend> {
    /// Directory holding the bundled dataset inside this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "cities.json"
    }

    /// Load the embedded dataset, parsing it at most once per process.
    ///
    /// Subsequent calls clone the cached index; the underlying data is
    /// never re-read or mutated.
    #[cfg(feature = "json")]
    pub fn load() -> Result<Self> {
        CITY_INDEX_CACHE
            .get_or_try_init(|| Self::from_json_str(EMBEDDED_DATASET))
            .cloned()
    }

    /// Parse a dataset from a JSON string.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: crate::raw::CitiesRaw = serde_json::from_str(s)?;
        Ok(crate::raw::build_index(raw))
    }

    /// Load a dataset from a JSON file on disk.
    ///
    /// With the `compact` feature, files with a `.gz` extension are
    /// transparently decompressed.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = open_stream(path.as_ref())?;
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::from_json_str(&data)
    }

    /// Cache file path for a given dataset path (dataset name + [`CACHE_SUFFIX`]).
    pub fn cache_path_for(dataset_path: &Path) -> PathBuf {
        let filename = dataset_path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| Self::default_dataset_filename().to_owned());
        dataset_path.with_file_name(format!("{filename}{CACHE_SUFFIX}"))
    }

    /// Write the index as a binary cache (gzipped under `compact`).
    pub fn save_cache(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = bincode::serialize(self)?;
        let file = File::create(path.as_ref())?;

        #[cfg(feature = "compact")]
        {
            let mut encoder = GzEncoder::new(file, Compression::default());
            encoder.write_all(&bytes)?;
            encoder.finish()?;
        }

        #[cfg(not(feature = "compact"))]
        {
            let mut file = file;
            file.write_all(&bytes)?;
        }

        Ok(())
    }

    /// Read an index back from a binary cache written by [`Self::save_cache`].
    pub fn load_cache(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            GeoError::NotFound(format!("Cache not found at {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);

        let mut bytes = Vec::new();

        #[cfg(feature = "compact")]
        {
            let mut decoder = GzDecoder::new(reader);
            decoder.read_to_end(&mut bytes)?;
        }

        #[cfg(not(feature = "compact"))]
        {
            let mut reader = reader;
            reader.read_to_end(&mut bytes)?;
        }

        Ok(bincode::deserialize(&bytes)?)
    }
}

// -----------------------------------------------------------------------
// INTERNAL TRANSPORT HELPER
// -----------------------------------------------------------------------

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the
/// extension asks for one. Returns a generic reader so the caller doesn't
/// care about the compression.
#[cfg(feature = "json")]
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|ext| ext == "gz") {
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}
