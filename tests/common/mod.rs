//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::time::Duration;

use linode_dns_provider::{DnsProvider, LinodeProvider, Record, RecordData, ZoneRecord};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 构造 TXT 测试记录
pub fn txt_record(name: &str, text: &str, ttl_secs: u64) -> Record {
    Record {
        name: name.to_string(),
        ttl: Duration::from_secs(ttl_secs),
        data: RecordData::Txt {
            text: text.to_string(),
        },
    }
}

/// 测试上下文 - 封装 Provider 和测试 zone
pub struct TestContext {
    pub provider: LinodeProvider,
    pub zone: String,
}

impl TestContext {
    /// 从环境变量创建 Linode 测试上下文
    pub fn linode() -> Option<Self> {
        let api_token = env::var("LINODE_API_TOKEN").ok()?;
        let zone = env::var("TEST_ZONE").ok()?;

        Some(Self {
            provider: LinodeProvider::new(api_token),
            zone,
        })
    }

    /// 清理测试记录（忽略失败）
    pub async fn cleanup_records(&self, records: &[ZoneRecord]) {
        let _ = self.provider.delete_records(&self.zone, records).await;
    }

    /// 查找并清理所有残留测试记录（以 _test- 开头的记录）
    pub async fn cleanup_all_test_records(&self) {
        if let Ok(records) = self.provider.get_records(&self.zone).await {
            let leftovers: Vec<ZoneRecord> = records
                .into_iter()
                .filter(|r| r.record.name.starts_with("_test-"))
                .collect();
            if !leftovers.is_empty() {
                let _ = self.provider.delete_records(&self.zone, &leftovers).await;
            }
        }
    }
}
