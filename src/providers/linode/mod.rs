//! Linode DNS Provider

mod convert;
mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;
use tokio::sync::Mutex;

use crate::providers::common::create_http_client;

pub(crate) use types::{
    ApiErrorResponse, Domain, DomainRecord, DomainRecordRequest, PagedResponse, Profile,
};

pub(crate) const LINODE_API_BASE: &str = "https://api.linode.com/v4";
/// Linode API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE: u32 = 500;

/// Linode DNS Provider
///
/// Authenticates with a personal access token (`Authorization: Bearer`).
/// The underlying HTTP client is created lazily on first use and guarded by
/// a mutex that also serializes remote calls.
pub struct LinodeProvider {
    pub(crate) api_token: String,
    pub(crate) api_base: String,
    pub(crate) handle: Mutex<ApiHandle>,
}

/// 延迟初始化的 HTTP 客户端句柄
pub(crate) struct ApiHandle {
    client: Option<Client>,
}

impl ApiHandle {
    /// 获取 HTTP 客户端，首次调用时创建
    pub(crate) fn client(&mut self) -> &Client {
        self.client.get_or_insert_with(create_http_client)
    }
}

impl LinodeProvider {
    pub fn new(api_token: String) -> Self {
        Self::with_api_base(api_token, LINODE_API_BASE.to_string())
    }

    /// Build a provider against a non-default API base URL (e.g. a test
    /// server). The production endpoint is [`LINODE_API_BASE`].
    pub fn with_api_base(api_token: String, api_base: String) -> Self {
        Self {
            api_token,
            api_base,
            handle: Mutex::new(ApiHandle { client: None }),
        }
    }
}
