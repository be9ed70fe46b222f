//! Linode HTTP 请求方法
//!
//! 所有方法在请求期间持有 provider 的互斥锁：既保证客户端的延迟初始化
//! 只发生一次，也使对 Linode API 的远程调用串行执行。

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{ApiErrorResponse, LinodeProvider, MAX_PAGE_SIZE, PagedResponse};

impl LinodeProvider {
    /// 执行 GET 请求
    pub(crate) async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{}{path}", self.api_base);
        let mut handle = self.handle.lock().await;
        let request = handle
            .client()
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_token));

        let (status, body) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;
        self.handle_response(status, &body, context)
    }

    /// 执行 GET 请求（拉取所有分页）
    ///
    /// `filter` 若提供则作为 X-Filter 头发送（Linode 的精确匹配过滤语法）
    pub(crate) async fn get_paginated<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        filter: Option<&str>,
        context: ErrorContext,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1u32;

        loop {
            let url = format!(
                "{}{path}?page={page}&page_size={MAX_PAGE_SIZE}",
                self.api_base
            );
            let mut handle = self.handle.lock().await;
            let mut request = handle
                .client()
                .get(&url)
                .header("Authorization", format!("Bearer {}", self.api_token));
            if let Some(filter) = filter {
                request = request.header("X-Filter", filter);
            }

            let (status, body) =
                HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;
            drop(handle);

            let paged: PagedResponse<T> = self.handle_response(status, &body, context.clone())?;
            items.extend(paged.data);

            if paged.page >= paged.pages {
                break;
            }
            page = paged.page + 1;
        }

        Ok(items)
    }

    /// 执行 POST 请求
    pub(crate) async fn post<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{}{path}", self.api_base);
        let mut handle = self.handle.lock().await;
        let request = handle
            .client()
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(body);

        let (status, text) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", &url).await?;
        self.handle_response(status, &text, context)
    }

    /// 执行 PUT 请求
    pub(crate) async fn put<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{}{path}", self.api_base);
        let mut handle = self.handle.lock().await;
        let request = handle
            .client()
            .put(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(body);

        let (status, text) =
            HttpUtils::execute_request(request, self.provider_name(), "PUT", &url).await?;
        self.handle_response(status, &text, context)
    }

    /// 执行 DELETE 请求（成功时响应体为空对象，忽略）
    pub(crate) async fn delete(&self, path: &str, context: ErrorContext) -> Result<()> {
        let url = format!("{}{path}", self.api_base);
        let mut handle = self.handle.lock().await;
        let request = handle
            .client()
            .delete(&url)
            .header("Authorization", format!("Bearer {}", self.api_token));

        let (status, text) =
            HttpUtils::execute_request(request, self.provider_name(), "DELETE", &url).await?;

        if (200..300).contains(&status) {
            return Ok(());
        }
        Err(self.error_from_body(status, &text, context))
    }

    /// 按状态码分流：2xx 解析为 T，其余解析错误信封并映射
    fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        status: u16,
        body: &str,
        context: ErrorContext,
    ) -> Result<T> {
        if (200..300).contains(&status) {
            return HttpUtils::parse_json(body, self.provider_name());
        }
        Err(self.error_from_body(status, body, context))
    }

    /// 从错误响应体构造统一错误
    ///
    /// Linode 错误信封: `{"errors": [{"reason": "...", "field": "..."}]}`，
    /// 只取第一条。信封解析失败时退化为携带原始响应体的错误。
    fn error_from_body(
        &self,
        status: u16,
        body: &str,
        context: ErrorContext,
    ) -> crate::error::ProviderError {
        let raw = match serde_json::from_str::<ApiErrorResponse>(body) {
            Ok(resp) => match resp.errors.into_iter().next() {
                Some(e) => RawApiError::with_status(status, e.reason).with_field(e.field),
                None => RawApiError::with_status(status, "Unknown error"),
            },
            Err(_) => RawApiError::with_status(status, body),
        };
        log::error!("[{}] API 错误: {}", self.provider_name(), raw.message);
        self.map_error(raw, context)
    }
}
