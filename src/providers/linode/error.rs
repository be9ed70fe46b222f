//! Linode error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::LinodeProvider;

/// Linode error mapping
///
/// Linode has no machine-readable error codes; the envelope only carries a
/// human `reason` and, for validation failures, the offending `field`. We
/// classify on the HTTP status (carried in `raw.code`) plus that field.
/// Reference: <https://techdocs.akamai.com/linode-api/reference/errors>
impl ProviderErrorMapper for LinodeProvider {
    fn provider_name(&self) -> &'static str {
        "linode"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        // 校验错误带 field，优先映射为字段错误；detail 附上出错的记录名
        if let Some(field) = &raw.field {
            let detail = match &context.record_name {
                Some(name) => format!("{} (record '{name}')", raw.message),
                None => raw.message,
            };
            return ProviderError::InvalidFieldValue {
                provider: self.provider_name().to_string(),
                field: field.clone(),
                detail,
            };
        }

        match raw.code.as_deref() {
            // 401: token 无效；403: token 缺少 domains 权限
            Some("401" | "403") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 404: 按上下文区分记录还是 zone
            Some("404") => match context.record_id {
                Some(record_id) => ProviderError::RecordNotFound {
                    provider: self.provider_name().to_string(),
                    record_id,
                    raw_message: Some(raw.message),
                },
                None => ProviderError::DomainNotFound {
                    provider: self.provider_name().to_string(),
                    domain: context.domain.unwrap_or_else(|| "<unknown>".to_string()),
                    raw_message: Some(raw.message),
                },
            },

            // 其他错误 fallback
            _ => self.unknown_error(raw),
        }
    }
}
