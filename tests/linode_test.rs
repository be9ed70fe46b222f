//! Linode Provider 集成测试
//!
//! 运行方式:
//! ```bash
//! LINODE_API_TOKEN=xxx TEST_ZONE=example.com \
//!     cargo test --test linode_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::{TestContext, generate_test_record_name, txt_record};
use linode_dns_provider::{DnsProvider, RecordData, ZoneRecord};

// ============ 基础测试 ============

#[tokio::test]
#[ignore]
async fn test_linode_validate_credentials() {
    skip_if_no_credentials!("LINODE_API_TOKEN", "TEST_ZONE");

    let ctx = require_some!(TestContext::linode(), "创建测试上下文失败");
    let valid = require_ok!(ctx.provider.validate_credentials().await);
    assert!(valid, "凭证应该有效");

    println!("✓ validate_credentials 测试通过");
}

#[tokio::test]
#[ignore]
async fn test_linode_get_records() {
    skip_if_no_credentials!("LINODE_API_TOKEN", "TEST_ZONE");

    let ctx = require_some!(TestContext::linode(), "创建测试上下文失败");
    let records = require_ok!(ctx.provider.get_records(&ctx.zone).await);

    for record in &records {
        assert!(record.id.is_some(), "列表记录应携带 ID: {record:?}");
    }

    println!("✓ get_records 测试通过，共 {} 条记录", records.len());
}

#[tokio::test]
#[ignore]
async fn test_linode_get_records_trailing_dot() {
    skip_if_no_credentials!("LINODE_API_TOKEN", "TEST_ZONE");

    let ctx = require_some!(TestContext::linode(), "创建测试上下文失败");

    // FQDN 写法（带末尾点）应与普通写法等价
    let fqdn = format!("{}.", ctx.zone);
    let records = require_ok!(ctx.provider.get_records(&fqdn).await);

    println!("✓ 带末尾点的 zone 名称测试通过，共 {} 条记录", records.len());
}

#[tokio::test]
#[ignore]
async fn test_linode_unknown_zone_not_found() {
    skip_if_no_credentials!("LINODE_API_TOKEN", "TEST_ZONE");

    let ctx = require_some!(TestContext::linode(), "创建测试上下文失败");
    let result = ctx
        .provider
        .get_records("does-not-exist-4f6a1b.example")
        .await;

    let err = result.expect_err("不存在的 zone 应该报错");
    assert!(
        matches!(err, linode_dns_provider::ProviderError::DomainNotFound { .. }),
        "期望 DomainNotFound，实际: {err:?}"
    );

    println!("✓ zone 不存在测试通过");
}

// ============ 记录生命周期测试 ============

#[tokio::test]
#[ignore]
async fn test_linode_txt_record_lifecycle() {
    skip_if_no_credentials!("LINODE_API_TOKEN", "TEST_ZONE");

    let ctx = require_some!(TestContext::linode(), "创建测试上下文失败");
    let record_name = generate_test_record_name();
    println!("测试 TXT 记录: {record_name}");

    // 1. 创建
    let to_create = vec![txt_record(&record_name, "lifecycle-test-1", 300)];
    let created = require_ok!(
        ctx.provider.append_records(&ctx.zone, &to_create).await,
        "append_records 失败"
    );
    assert_eq!(created.len(), 1);
    let record_id = require_some!(created[0].id, "新建记录应携带 ID");
    println!("  ✓ 创建成功，id={record_id}");

    // 2. 列表中可见
    let listed = require_ok!(ctx.provider.get_records(&ctx.zone).await);
    let found = listed
        .iter()
        .find(|r| r.id == Some(record_id))
        .cloned();
    let found = require_some!(found, "新建记录应出现在列表中");
    assert_eq!(found.record.name, record_name);
    assert_eq!(
        found.record.data,
        RecordData::Txt {
            text: "lifecycle-test-1".to_string()
        }
    );
    println!("  ✓ 列表可见");

    // 3. 带 ID 更新（set 应就地修改而非新建）
    let mut to_update = created.clone();
    to_update[0].record.data = RecordData::Txt {
        text: "lifecycle-test-2".to_string(),
    };
    let updated = require_ok!(
        ctx.provider.set_records(&ctx.zone, &to_update).await,
        "set_records 失败"
    );
    assert_eq!(updated[0].id, Some(record_id), "更新不应改变记录 ID");
    println!("  ✓ 更新成功");

    // 4. 删除
    let deleted = require_ok!(
        ctx.provider.delete_records(&ctx.zone, &updated).await,
        "delete_records 失败"
    );
    assert_eq!(deleted.len(), 1);

    // 5. 确认消失
    let after = require_ok!(ctx.provider.get_records(&ctx.zone).await);
    assert!(
        !after.iter().any(|r| r.id == Some(record_id)),
        "删除后记录不应出现在列表中"
    );
    println!("  ✓ 删除成功");
    println!("✓ TXT 生命周期测试通过");
}

#[tokio::test]
#[ignore]
async fn test_linode_set_without_id_creates() {
    skip_if_no_credentials!("LINODE_API_TOKEN", "TEST_ZONE");

    let ctx = require_some!(TestContext::linode(), "创建测试上下文失败");
    let record_name = generate_test_record_name();

    // 无 ID 的 set 应新建记录
    let bare = vec![ZoneRecord::new(txt_record(&record_name, "set-creates", 300))];
    let result = require_ok!(ctx.provider.set_records(&ctx.zone, &bare).await);
    assert!(result[0].id.is_some(), "set 新建的记录应携带 ID");

    ctx.cleanup_records(&result).await;
    println!("✓ set 无 ID 新建测试通过");
}

#[tokio::test]
#[ignore]
async fn test_linode_delete_without_id_fails() {
    skip_if_no_credentials!("LINODE_API_TOKEN", "TEST_ZONE");

    let ctx = require_some!(TestContext::linode(), "创建测试上下文失败");
    let bare = vec![ZoneRecord::new(txt_record("_test-no-id", "x", 300))];

    let err = ctx
        .provider
        .delete_records(&ctx.zone, &bare)
        .await
        .expect_err("无 ID 的删除应该报错");
    assert!(
        matches!(err, linode_dns_provider::ProviderError::MissingRecordId { .. }),
        "期望 MissingRecordId，实际: {err:?}"
    );

    println!("✓ delete 无 ID 报错测试通过");
}

// ============ 清理测试 ============

/// 清理所有残留的测试记录（手动运行）
#[tokio::test]
#[ignore]
async fn test_linode_cleanup_test_records() {
    skip_if_no_credentials!("LINODE_API_TOKEN", "TEST_ZONE");

    let ctx = require_some!(TestContext::linode(), "创建测试上下文失败");
    ctx.cleanup_all_test_records().await;
    println!("✓ 清理完成");
}
