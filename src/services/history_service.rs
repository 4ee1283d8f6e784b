use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::error::AppResult;
use crate::models::{CollectionStats, HistoryItem, TeaTitle};
use crate::storage::HistoryStorage;

/// 开盒历史服务。历史是唯一的共享可变状态,
/// 只能通过 append 单条追加, 没有修改或删除操作。
#[derive(Clone)]
pub struct HistoryService {
    storage: Arc<dyn HistoryStorage>,
    log: Arc<Mutex<Vec<HistoryItem>>>,
}

impl HistoryService {
    /// 启动时读取一次历史。内容缺失或解析失败都降级为空历史,
    /// 记一条警告, 不阻塞开盒流程。
    pub fn new(storage: Arc<dyn HistoryStorage>) -> Self {
        let log = match storage.load() {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryItem>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("Failed to parse saved history, starting empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to read saved history, starting empty: {e}");
                Vec::new()
            }
        };

        Self {
            storage,
            log: Arc::new(Mutex::new(log)),
        }
    }

    /// 追加一条记录并整体重写落盘; 写入完成后才返回。
    /// 编排器的 in-flight 标志保证追加是串行的。
    pub fn append(&self, item: HistoryItem) -> AppResult<()> {
        let mut log = self.log.lock().expect("history lock poisoned");
        log.push(item);
        let raw = serde_json::to_string(&*log)?;
        self.storage.save(&raw)?;
        Ok(())
    }

    /// 当前历史的只读快照, 按插入顺序
    pub fn snapshot(&self) -> Vec<HistoryItem> {
        self.log.lock().expect("history lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.log.lock().expect("history lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 从历史派生收集统计。纯函数, 无副作用。
pub fn stats(log: &[HistoryItem], catalog_size: usize) -> CollectionStats {
    let unique: HashSet<&str> = log.iter().map(|h| h.prize_id.as_str()).collect();
    let unique_count = unique.len();
    CollectionStats {
        unique_count,
        rate: unique_count as f64 / catalog_size as f64,
        title: TeaTitle::from_unique_count(unique_count),
    }
}
