use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::AppResult;

/// 历史记录持久化端口。实现方只负责单一槽位的原始字符串读写,
/// 序列化格式由 HistoryService 决定。
pub trait HistoryStorage: Send + Sync {
    /// 读取已保存的内容, 槽位不存在时返回 None
    fn load(&self) -> AppResult<Option<String>>;
    /// 整体覆盖写入
    fn save(&self, raw: &str) -> AppResult<()>;
}

/// 单文件存储 — 对应浏览器 localStorage 里的一个 key
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryStorage for FileStorage {
    fn load(&self) -> AppResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, raw: &str) -> AppResult<()> {
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// 内存存储 — 测试与临时会话使用
#[derive(Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用指定内容初始化槽位 (测试中模拟已有/损坏的历史)
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: Mutex::new(Some(raw.to_string())),
        }
    }
}

impl HistoryStorage for MemoryStorage {
    fn load(&self) -> AppResult<Option<String>> {
        Ok(self.slot.lock().expect("storage lock poisoned").clone())
    }

    fn save(&self, raw: &str) -> AppResult<()> {
        *self.slot.lock().expect("storage lock poisoned") = Some(raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("history.json"));

        // 文件尚不存在
        assert!(storage.load().unwrap().is_none());

        storage.save("[{\"id\":\"1\"}]").unwrap();
        assert_eq!(storage.load().unwrap().unwrap(), "[{\"id\":\"1\"}]");

        // 覆盖写入
        storage.save("[]").unwrap();
        assert_eq!(storage.load().unwrap().unwrap(), "[]");
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());
        storage.save("hello").unwrap();
        assert_eq!(storage.load().unwrap().unwrap(), "hello");
    }
}
