//! CSV file implementation of the fan repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::entities::{Fan, NewFan};
use crate::domain::repositories::FanRepository;
use crate::error::AppError;
use crate::utils::cpf::normalize_cpf;

/// Birth date format used in the CSV file.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// One CSV row, column names as they appear in the header.
#[derive(Debug, Serialize, Deserialize)]
struct FanRow {
    #[serde(rename = "Nome")]
    name: String,
    #[serde(rename = "CPF")]
    cpf: String,
    #[serde(rename = "Data de Nascimento")]
    birth_date: String,
    #[serde(rename = "Endereço")]
    address: String,
    #[serde(rename = "Instagram")]
    instagram: Option<String>,
    #[serde(rename = "Twitter")]
    twitter: Option<String>,
    #[serde(rename = "TikTok")]
    tiktok: Option<String>,
    #[serde(rename = "Interesses")]
    interests: String,
    #[serde(rename = "Eventos")]
    events: String,
    #[serde(rename = "Compras")]
    purchases: String,
}

impl From<&Fan> for FanRow {
    fn from(fan: &Fan) -> Self {
        Self {
            name: fan.name.clone(),
            cpf: fan.cpf.clone(),
            birth_date: fan.birth_date.format(DATE_FORMAT).to_string(),
            address: fan.address.clone(),
            instagram: fan.instagram.clone(),
            twitter: fan.twitter.clone(),
            tiktok: fan.tiktok.clone(),
            interests: fan.interests.clone(),
            events: fan.events.clone(),
            purchases: fan.purchases.clone(),
        }
    }
}

impl TryFrom<FanRow> for Fan {
    type Error = AppError;

    fn try_from(row: FanRow) -> Result<Self, Self::Error> {
        let birth_date = NaiveDate::parse_from_str(&row.birth_date, DATE_FORMAT).map_err(|e| {
            AppError::internal(
                "Malformed birth date in record store",
                json!({ "value": row.birth_date, "reason": e.to_string() }),
            )
        })?;

        Ok(Self {
            name: row.name,
            cpf: row.cpf,
            birth_date,
            address: row.address,
            instagram: row.instagram.filter(|s| !s.is_empty()),
            twitter: row.twitter.filter(|s| !s.is_empty()),
            tiktok: row.tiktok.filter(|s| !s.is_empty()),
            interests: row.interests,
            events: row.events,
            purchases: row.purchases,
        })
    }
}

/// Append-only CSV record store.
///
/// The file is created with a header row on first insert. A missing file
/// reads as an empty store. Inserts hold a lock across the duplicate check and
/// the append so concurrent registrations cannot interleave rows.
pub struct CsvFanRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvFanRepository {
    /// Creates a repository backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the raw file, `None` if it does not exist yet.
    async fn read_file(&self) -> Result<Option<Vec<u8>>, AppError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn parse(bytes: &[u8]) -> Result<Vec<Fan>, AppError> {
        let mut reader = csv::Reader::from_reader(bytes);
        reader
            .deserialize::<FanRow>()
            .map(|row| Fan::try_from(row?))
            .collect()
    }

    async fn load(&self) -> Result<Vec<Fan>, AppError> {
        match self.read_file().await? {
            Some(bytes) => Self::parse(&bytes),
            None => Ok(Vec::new()),
        }
    }

    fn contains_cpf(fans: &[Fan], cpf: &str) -> bool {
        let digits = normalize_cpf(cpf);
        fans.iter().any(|f| f.cpf_digits() == digits)
    }

    /// Serializes a single row, with the header when the file is new.
    fn encode_row(fan: &Fan, with_header: bool) -> Result<Vec<u8>, AppError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(with_header)
            .from_writer(Vec::new());
        writer.serialize(FanRow::from(fan))?;
        writer
            .into_inner()
            .map_err(|e| AppError::internal("Failed to encode record", json!({ "reason": e.to_string() })))
    }
}

#[async_trait]
impl FanRepository for CsvFanRepository {
    async fn list(&self) -> Result<Vec<Fan>, AppError> {
        self.load().await
    }

    async fn exists_by_cpf(&self, cpf: &str) -> Result<bool, AppError> {
        let fans = self.load().await?;
        Ok(Self::contains_cpf(&fans, cpf))
    }

    async fn insert(&self, new_fan: NewFan) -> Result<Fan, AppError> {
        let _guard = self.write_lock.lock().await;

        let existing = self.read_file().await?.unwrap_or_default();
        let is_new_file = existing.is_empty();

        let fans = Self::parse(&existing)?;
        if Self::contains_cpf(&fans, &new_fan.cpf) {
            return Err(AppError::conflict(
                "This CPF is already registered",
                json!({ "field": "cpf" }),
            ));
        }

        let fan = Fan::from(new_fan);
        let row = Self::encode_row(&fan, is_new_file)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&row).await?;
        file.flush().await?;

        tracing::debug!(path = %self.path.display(), "Appended fan record");

        Ok(fan)
    }
}
