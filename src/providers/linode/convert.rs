//! Linode wire 格式与中立记录模型的互转
//!
//! 纯函数，不做任何 IO。转换规则：
//! - 名称：服务端用空字符串表示 zone 顶点，对外统一为 "@"；写入时 "@"
//!   展开为 zone 名
//! - TTL：`Duration` 与整秒互转，写入时截断亚秒部分
//! - CAA：Linode 无 flags 字段，写入丢弃，读取补 0
//! - PTR：以 [`RecordData::Raw`] 原样透传

use std::net::IpAddr;

use crate::error::{ProviderError, Result};
use crate::providers::common::{name_from_provider, name_to_provider, ttl_from_seconds, ttl_to_seconds};
use crate::types::{Record, RecordData, ZoneRecord};

use super::{DomainRecord, DomainRecordRequest};

const PROVIDER: &str = "linode";

/// 将 Linode 记录转换为中立 [`Record`]
pub(crate) fn record_from_wire(wire: &DomainRecord) -> Result<Record> {
    let data = match wire.record_type.as_str() {
        "A" | "AAAA" => {
            let address: IpAddr =
                wire.target
                    .parse()
                    .map_err(|e| ProviderError::InvalidFieldValue {
                        provider: PROVIDER.to_string(),
                        field: "target".to_string(),
                        detail: format!("invalid IP address {}: {e}", wire.target),
                    })?;
            RecordData::Address { address }
        }
        "CNAME" => RecordData::Cname {
            target: wire.target.clone(),
        },
        "MX" => RecordData::Mx {
            preference: wire.priority.unwrap_or(0),
            target: wire.target.clone(),
        },
        "TXT" => RecordData::Txt {
            text: wire.target.clone(),
        },
        "NS" => RecordData::Ns {
            target: wire.target.clone(),
        },
        "SRV" => RecordData::Srv {
            service: wire.service.clone().unwrap_or_default(),
            transport: wire.protocol.clone().unwrap_or_default(),
            priority: wire.priority.unwrap_or(0),
            weight: wire.weight.unwrap_or(0),
            port: wire.port.unwrap_or(0),
            target: wire.target.clone(),
        },
        "CAA" => RecordData::Caa {
            // Linode 无 flags 字段，读取补 0
            flags: 0,
            tag: wire.tag.clone().unwrap_or_default(),
            value: wire.target.clone(),
        },
        "PTR" => RecordData::Raw {
            record_type: "PTR".to_string(),
            value: wire.target.clone(),
        },
        other => {
            return Err(ProviderError::UnsupportedRecordType {
                provider: PROVIDER.to_string(),
                record_type: other.to_string(),
            });
        }
    };

    Ok(Record {
        name: name_from_provider(&wire.name),
        ttl: ttl_from_seconds(wire.ttl_sec),
        data,
    })
}

/// 将 Linode 记录转换为携带 ID 和时间戳的 [`ZoneRecord`]
pub(crate) fn zone_record_from_wire(wire: DomainRecord) -> Result<ZoneRecord> {
    let record = record_from_wire(&wire)?;
    Ok(ZoneRecord {
        record,
        id: Some(wire.id),
        created_at: wire.created,
        updated_at: wire.updated,
    })
}

/// 将中立 [`Record`] 转换为 Linode 创建/更新请求体
pub(crate) fn record_to_wire(record: &Record, zone: &str) -> DomainRecordRequest {
    let mut req = DomainRecordRequest {
        record_type: record.data.record_type().to_string(),
        name: name_to_provider(&record.name, zone),
        target: String::new(),
        ttl_sec: ttl_to_seconds(record.ttl),
        priority: None,
        weight: None,
        port: None,
        service: None,
        protocol: None,
        tag: None,
    };

    match &record.data {
        RecordData::Address { address } => {
            req.target = address.to_string();
        }
        RecordData::Cname { target } => {
            // CNAME 目标同样支持 "@" 展开
            req.target = name_to_provider(target, zone);
        }
        RecordData::Mx { preference, target } => {
            req.priority = Some(*preference);
            req.target = target.clone();
        }
        RecordData::Txt { text } => {
            req.target = text.clone();
        }
        RecordData::Ns { target } => {
            req.target = target.clone();
        }
        RecordData::Srv {
            service,
            transport,
            priority,
            weight,
            port,
            target,
        } => {
            req.service = Some(service.clone());
            req.protocol = Some(transport.clone());
            req.priority = Some(*priority);
            req.weight = Some(*weight);
            req.port = Some(*port);
            req.target = name_to_provider(target, zone);
        }
        RecordData::Caa { tag, value, .. } => {
            // flags 无处可放，写入丢弃
            req.tag = Some(tag.clone());
            req.target = name_to_provider(value, zone);
        }
        RecordData::Raw { value, .. } => {
            req.target = value.clone();
        }
    }

    req
}
