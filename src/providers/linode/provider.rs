//! Linode DnsProvider trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::normalize_zone_name;
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{Record, ZoneRecord};

use super::convert::{record_to_wire, zone_record_from_wire};
use super::{Domain, DomainRecord, LinodeProvider, Profile};

impl LinodeProvider {
    /// 解析 zone 名称为 Linode 的数字 domain ID
    ///
    /// 每次操作都重新解析，不做缓存。使用 X-Filter 精确匹配，
    /// 结果仍逐条比对以防服务端过滤语义变化。
    pub(crate) async fn resolve_zone_id(&self, zone: &str) -> Result<u64> {
        let filter = serde_json::json!({ "domain": zone }).to_string();
        let domains: Vec<Domain> = self
            .get_paginated("/domains", Some(&filter), ErrorContext::for_domain(zone))
            .await?;

        domains
            .into_iter()
            .find(|d| d.domain == zone)
            .map(|d| d.id)
            .ok_or_else(|| ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                domain: zone.to_string(),
                raw_message: None,
            })
    }
}

#[async_trait]
impl DnsProvider for LinodeProvider {
    fn id(&self) -> &'static str {
        "linode"
    }

    async fn validate_credentials(&self) -> Result<bool> {
        // 凭证被拒返回 Ok(false)，传输层失败仍作为错误上抛
        match self
            .get::<Profile>("/profile", ErrorContext::default())
            .await
        {
            Ok(_) => Ok(true),
            Err(ProviderError::InvalidCredentials { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn get_records(&self, zone: &str) -> Result<Vec<ZoneRecord>> {
        let zone = normalize_zone_name(zone);
        let domain_id = self.resolve_zone_id(zone).await?;

        let wire_records: Vec<DomainRecord> = self
            .get_paginated(
                &format!("/domains/{domain_id}/records"),
                None,
                ErrorContext::for_domain(zone),
            )
            .await?;

        log::debug!(
            "[{}] {} 条记录，zone={zone}",
            self.provider_name(),
            wire_records.len()
        );

        // 单条无法映射的记录使整个调用失败
        wire_records.into_iter().map(zone_record_from_wire).collect()
    }

    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<ZoneRecord>> {
        let zone = normalize_zone_name(zone);
        let domain_id = self.resolve_zone_id(zone).await?;
        let path = format!("/domains/{domain_id}/records");

        let mut created = Vec::with_capacity(records.len());
        for record in records {
            let body = record_to_wire(record, zone);
            let wire: DomainRecord = self
                .post(&path, &body, ErrorContext::for_record(zone, &record.name))
                .await?;
            created.push(zone_record_from_wire(wire)?);
        }
        Ok(created)
    }

    async fn set_records(&self, zone: &str, records: &[ZoneRecord]) -> Result<Vec<ZoneRecord>> {
        let zone = normalize_zone_name(zone);
        let domain_id = self.resolve_zone_id(zone).await?;

        let mut result = Vec::with_capacity(records.len());
        for zone_record in records {
            let body = record_to_wire(&zone_record.record, zone);
            let context = ErrorContext::for_record(zone, &zone_record.record.name);

            // 有 ID 就地更新，无 ID 新建；不按名称或类型匹配
            let wire: DomainRecord = match zone_record.id {
                Some(id) => {
                    self.put(
                        &format!("/domains/{domain_id}/records/{id}"),
                        &body,
                        context.with_record_id(id),
                    )
                    .await?
                }
                None => {
                    self.post(&format!("/domains/{domain_id}/records"), &body, context)
                        .await?
                }
            };
            result.push(zone_record_from_wire(wire)?);
        }
        Ok(result)
    }

    async fn delete_records(&self, zone: &str, records: &[ZoneRecord]) -> Result<Vec<ZoneRecord>> {
        let zone = normalize_zone_name(zone);
        let domain_id = self.resolve_zone_id(zone).await?;

        let mut deleted = Vec::with_capacity(records.len());
        for zone_record in records {
            let id = zone_record
                .id
                .ok_or_else(|| ProviderError::MissingRecordId {
                    provider: self.provider_name().to_string(),
                    record_name: zone_record.record.name.clone(),
                })?;

            self.delete(
                &format!("/domains/{domain_id}/records/{id}"),
                ErrorContext::for_record(zone, &zone_record.record.name).with_record_id(id),
            )
            .await?;
            deleted.push(zone_record.clone());
        }
        Ok(deleted)
    }
}
