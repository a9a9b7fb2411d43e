//! 产品存储抽象

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::info;

use super::model::{NewProduct, Product};
use crate::core::error::CoreError;

/// 产品的持久化接口
///
/// 未知 id 一律返回 `CoreError::NotFound`，且不修改存储。
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 全部产品，按名称升序（同名按 id 升序）
    async fn list_all(&self) -> Result<Vec<Product>, CoreError>;

    async fn get(&self, id: i64) -> Result<Product, CoreError>;

    /// 保存新产品并分配 id
    async fn create(&self, fields: NewProduct) -> Result<Product, CoreError>;

    /// 整体替换三个字段
    async fn update(&self, id: i64, fields: NewProduct) -> Result<Product, CoreError>;

    async fn delete(&self, id: i64) -> Result<(), CoreError>;
}

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

/// 内存中的产品存储，id 从 1 开始递增且不复用
#[derive(Default)]
pub struct MemoryProductStore {
    table: RwLock<Table>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list_all(&self) -> Result<Vec<Product>, CoreError> {
        let table = self.table.read().await;
        let mut products: Vec<Product> = table.rows.values().cloned().collect();
        // rows 已按 id 排序，稳定排序保证同名按 id 升序
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn get(&self, id: i64) -> Result<Product, CoreError> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or(CoreError::NotFound(id))
    }

    async fn create(&self, fields: NewProduct) -> Result<Product, CoreError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let product = fields.into_product(table.last_id);
        table.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, fields: NewProduct) -> Result<Product, CoreError> {
        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&id).ok_or(CoreError::NotFound(id))?;
        *row = fields.into_product(id);
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), CoreError> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(CoreError::NotFound(id))
    }
}

/// 存储为空时写入示例产品，返回写入的数量
pub async fn seed_if_empty(store: &dyn ProductStore) -> Result<usize, CoreError> {
    if !store.list_all().await?.is_empty() {
        info!("Store already contains products, skipping seed");
        return Ok(0);
    }

    let samples = [
        ("Mug", "Ceramic mug, 350 ml", 10),
        ("Notebook", "A5 dotted notebook", 7),
        ("Pencil", "HB graphite pencil", 1),
        ("Tote bag", "Organic cotton tote", 15),
    ];

    for (name, description, price) in samples {
        store.create(NewProduct::new(name, description, price)).await?;
    }

    info!("Seeded {} sample products", samples.len());
    Ok(samples.len())
}
