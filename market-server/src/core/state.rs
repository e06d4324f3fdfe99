use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::StoreInfo;

use crate::auth::{AdminRegistry, JwtService};
use crate::basket::BasketStore;
use crate::blob::{BlobStore, LocalBlobStore};
use crate::catalog::CatalogService;
use crate::core::{Config, Result, ServerError};
use crate::payment::{HttpPaymentProcessor, PaymentConfigStore, PaymentProcessor};

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是集市节点的核心数据结构，持有所有服务的共享引用。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | CatalogService | 分类/商品/价格下限/批量上传 |
/// | baskets | BasketStore | 按调用者隔离的购物篮 |
/// | admins | AdminRegistry | 管理员注册表 |
/// | store_info | StoreInfo | 店铺信息 (单例) |
/// | payment_config | PaymentConfigStore | 支付配置 (set-once) |
/// | payment | dyn PaymentProcessor | 外部支付处理器 |
/// | blobs | dyn BlobStore | Blob 存储 |
/// | jwt_service | JwtService | JWT 认证服务 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 分类与商品目录服务
    pub catalog: Arc<CatalogService>,
    /// 购物篮存储
    pub baskets: Arc<BasketStore>,
    /// 管理员注册表
    pub admins: Arc<AdminRegistry>,
    /// 店铺信息 (单例)
    pub store_info: Arc<RwLock<StoreInfo>>,
    /// 支付配置
    pub payment_config: Arc<PaymentConfigStore>,
    /// 支付处理器客户端
    pub payment: Arc<dyn PaymentProcessor>,
    /// Blob 存储
    pub blobs: Arc<dyn BlobStore>,
    /// JWT 认证服务
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 根据配置初始化所有服务
    pub fn initialize(config: &Config) -> Result<Self> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| ServerError::Config(format!("Failed to create work dir: {}", e)))?;

        let blobs = Arc::new(LocalBlobStore::new(config.blobs_dir()));
        let payment = Arc::new(HttpPaymentProcessor::new(config.payment_api_url.clone()));
        let admins = Arc::new(AdminRegistry::new(config.bootstrap_admins.clone()));

        if admins.is_empty() {
            tracing::warn!("No bootstrap admins configured, admin operations will be unreachable");
        }

        Ok(Self::assemble(config.clone(), blobs, payment, admins))
    }

    /// 手动装配状态，测试中用自定义的 blob/payment 实现替换
    pub fn assemble(
        config: Config,
        blobs: Arc<dyn BlobStore>,
        payment: Arc<dyn PaymentProcessor>,
        admins: Arc<AdminRegistry>,
    ) -> Self {
        let jwt_service = Arc::new(JwtService::new(config.jwt.clone()));

        Self {
            config,
            catalog: Arc::new(CatalogService::new()),
            baskets: Arc::new(BasketStore::new()),
            admins,
            store_info: Arc::new(RwLock::new(StoreInfo::default())),
            payment_config: Arc::new(PaymentConfigStore::new()),
            payment,
            blobs,
            jwt_service,
        }
    }
}
