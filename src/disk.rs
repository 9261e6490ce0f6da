use std::{fmt::Debug, fs, path::PathBuf};

use directories::BaseDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::{
    api::PriceBar,
    error::{Error, Result},
};

pub enum FileFormat {
    Toml,
    Json,
}

pub trait DiskInterface
where
    Self: Sized + Debug + Default + Serialize + DeserializeOwned,
{
    const FILE_NAME: &'static str;
    const FORMAT: FileFormat;

    /// Get the path to the file
    fn path() -> Result<PathBuf> {
        let dirs = BaseDirs::new().ok_or(Error::BaseDirsFailed)?;
        Ok(dirs
            .home_dir()
            .join(".nifty")
            .join(Self::FILE_NAME)
            .with_extension(match Self::FORMAT {
                FileFormat::Toml => "toml",
                FileFormat::Json => "json",
            }))
    }

    /// Load the content from the file, falling back to defaults when the file
    /// is absent or unreadable.
    fn load() -> Self {
        let Ok(path) = Self::path() else {
            return Self::default();
        };

        if path.exists() {
            let content = fs::read_to_string(&path).unwrap_or_default();
            match Self::FORMAT {
                FileFormat::Toml => toml::from_str(&content).unwrap_or_default(),
                FileFormat::Json => serde_json::from_str(&content).unwrap_or_default(),
            }
        } else {
            Self::default()
        }
    }

    /// Save the content to the file
    fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok(); // Ensure config directory exists
        }

        let content = match Self::FORMAT {
            FileFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::TomlFormattingFailed(format!("{self:?}"), e))?,
            FileFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| Error::JsonFormattingFailed(format!("{self:?}"), e))?,
        };

        fs::write(&path, content).map_err(|e| Error::FileWriteFailed(path, e))
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Config {
    /// Base URL of the data service that exposes `/api/nifty`.
    pub endpoint: String,
    /// Port that `nifty serve` binds to.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".to_string(),
            port: 8000,
        }
    }
}

impl DiskInterface for Config {
    const FILE_NAME: &'static str = "config";
    const FORMAT: FileFormat = FileFormat::Toml;
}

impl Config {
    pub fn endpoint_url(&self) -> Result<Url> {
        self.endpoint
            .parse()
            .map_err(|e| Error::UrlParsingFailed(self.endpoint.clone(), e))
    }
}

/// On-disk OHLC history for the index, kept sorted by time ascending. This is
/// what `GET /api/nifty` serves from.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct BarStore {
    bars: Vec<PriceBar>,
}

impl DiskInterface for BarStore {
    const FILE_NAME: &'static str = "bars";
    const FORMAT: FileFormat = FileFormat::Json;
}

impl BarStore {
    /// Merge freshly fetched bars into the store. A bar with a timestamp that
    /// is already present replaces the stored one, so a refetch of an open
    /// interval updates it instead of duplicating it. Returns the number of
    /// timestamps that were not present before.
    pub fn merge(&mut self, new_bars: Vec<PriceBar>) -> usize {
        let mut inserted = 0;
        for bar in new_bars {
            match self.bars.iter_mut().find(|b| b.time == bar.time) {
                Some(existing) => *existing = bar,
                None => {
                    self.bars.push(bar);
                    inserted += 1;
                }
            }
        }
        self.bars.sort_by_key(|b| b.time);
        inserted
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn into_bars(self) -> Vec<PriceBar> {
        self.bars
    }
}
