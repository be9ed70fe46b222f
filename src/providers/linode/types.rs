//! Linode API 类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Linode API 分页响应信封
#[derive(Debug, Deserialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub pages: u32,
    #[allow(dead_code)]
    pub results: u32,
}

/// Linode Domain（zone）结构
#[derive(Debug, Deserialize)]
pub struct Domain {
    pub id: u64,
    pub domain: String,
}

/// Linode Domain Record 结构（响应）
///
/// `name` 为相对名称，zone 顶点返回空字符串。SRV/CAA/MX 的附加字段
/// 对其他记录类型返回 null。
#[derive(Debug, Clone, Deserialize)]
pub struct DomainRecord {
    pub id: u64,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub target: String,
    pub ttl_sec: u32,
    pub priority: Option<u16>,
    pub weight: Option<u16>,
    pub port: Option<u16>,
    pub service: Option<String>,
    pub protocol: Option<String>,
    pub tag: Option<String>,
    #[serde(default, with = "crate::utils::datetime")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    pub updated: Option<DateTime<Utc>>,
}

/// Domain Record 创建/更新请求体（POST 与 PUT 共用）
#[derive(Debug, Clone, Serialize)]
pub struct DomainRecordRequest {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub target: String,
    pub ttl_sec: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Linode API 错误响应信封
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub reason: String,
    /// 校验错误会标明出错的请求字段
    pub field: Option<String>,
}

/// GET /profile 响应（仅用于凭证校验）
#[derive(Debug, Deserialize)]
pub struct Profile {
    #[allow(dead_code)]
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_paged_domains() {
        let json = r#"{
            "data": [{"id": 1234, "domain": "example.com", "status": "active"}],
            "page": 1,
            "pages": 1,
            "results": 1
        }"#;
        let paged: PagedResponse<Domain> = serde_json::from_str(json).unwrap();
        assert_eq!(paged.data.len(), 1);
        assert_eq!(paged.data[0].id, 1234);
        assert_eq!(paged.data[0].domain, "example.com");
    }

    #[test]
    fn deserialize_record_with_nulls() {
        let json = r#"{
            "id": 42, "type": "TXT", "name": "test", "target": "hello",
            "ttl_sec": 300, "priority": null, "weight": null, "port": null,
            "service": null, "protocol": null, "tag": null,
            "created": "2018-01-01T00:01:01", "updated": null
        }"#;
        let rec: DomainRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.record_type, "TXT");
        assert_eq!(rec.target, "hello");
        assert!(rec.priority.is_none());
        assert!(rec.created.is_some());
        assert!(rec.updated.is_none());
    }

    #[test]
    fn request_omits_null_fields() {
        let req = DomainRecordRequest {
            record_type: "TXT".to_string(),
            name: "test".to_string(),
            target: "hello".to_string(),
            ttl_sec: 300,
            priority: None,
            weight: None,
            port: None,
            service: None,
            protocol: None,
            tag: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""type":"TXT""#));
        assert!(!json.contains("priority"));
        assert!(!json.contains("service"));
    }

    #[test]
    fn deserialize_error_envelope() {
        let json = r#"{"errors": [{"reason": "Not found"}, {"reason": "Invalid target", "field": "target"}]}"#;
        let resp: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.errors.len(), 2);
        assert!(resp.errors[0].field.is_none());
        assert_eq!(resp.errors[1].field.as_deref(), Some("target"));
    }
}
