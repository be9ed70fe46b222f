use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{Record, ZoneRecord};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（Linode 使用 HTTP 状态码）
    pub code: Option<String>,
    /// 出错的请求字段（Linode 的校验错误会带 field）
    pub field: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            field: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            code: Some(status.to_string()),
            field: None,
            message: message.into(),
        }
    }

    pub fn with_field(mut self, field: Option<String>) -> Self {
        self.field = field;
        self
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录名称（用于 `MissingRecordId` 等错误）
    pub record_name: Option<String>,
    /// 记录 ID（用于 `RecordNotFound` 等错误）
    pub record_id: Option<String>,
    /// 域名（用于 `DomainNotFound` 等错误）
    pub domain: Option<String>,
}

impl ErrorContext {
    pub fn for_domain(domain: &str) -> Self {
        Self {
            domain: Some(domain.to_string()),
            ..Self::default()
        }
    }

    pub fn for_record(domain: &str, record_name: &str) -> Self {
        Self {
            record_name: Some(record_name.to_string()),
            domain: Some(domain.to_string()),
            ..Self::default()
        }
    }

    pub fn with_record_id(mut self, record_id: u64) -> Self {
        self.record_id = Some(record_id.to_string());
        self
    }
}

/// Provider 错误映射 Trait（内部使用）
/// Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Zone record management operations against a DNS hosting provider.
///
/// All four verbs take the zone by DNS name (a single trailing root-label dot
/// is tolerated and stripped) and operate on sequences of neutral records.
/// Multi-record operations process items sequentially and fail fast: the
/// first failure aborts the loop and is returned, with earlier items already
/// committed on the provider side. Callers that need to know the surviving
/// state after a partial failure should issue a fresh
/// [`get_records`](Self::get_records).
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Provider identifier (e.g. `"linode"`).
    fn id(&self) -> &'static str;

    /// Verify the configured credentials against the remote API.
    ///
    /// Returns `Ok(false)` for rejected credentials; errors are reserved for
    /// transport-level failures.
    async fn validate_credentials(&self) -> Result<bool>;

    /// List all records in the zone.
    ///
    /// Every returned [`ZoneRecord`] carries the provider-assigned id, ready
    /// to be passed back to [`set_records`](Self::set_records) or
    /// [`delete_records`](Self::delete_records). A single unmappable record
    /// aborts the whole call.
    async fn get_records(&self, zone: &str) -> Result<Vec<ZoneRecord>>;

    /// Create the given records in the zone, unconditionally.
    ///
    /// No existence check is performed. Returns the created records with
    /// their newly assigned ids, in input order.
    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<ZoneRecord>>;

    /// Create or update the given records, keyed on caller-supplied identity.
    ///
    /// A record carrying an id is updated in place; a record without one is
    /// created. This is an upsert on the provider id only — no matching by
    /// name or type is attempted.
    async fn set_records(&self, zone: &str, records: &[ZoneRecord]) -> Result<Vec<ZoneRecord>>;

    /// Delete the given records from the zone.
    ///
    /// Every record must carry a provider id; a missing id fails with
    /// [`ProviderError::MissingRecordId`] before any remote call is made for
    /// that item. Returns the deleted records.
    async fn delete_records(&self, zone: &str, records: &[ZoneRecord]) -> Result<Vec<ZoneRecord>>;
}
