//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! folderlist-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use folderlist_domain::{folder::Folder, organization::OrganizationId};

use crate::{error::InfraError, repository::FolderRepository};

// ===== MockFolderRepository =====

/// 呼び出し回数の記録と障害注入ができる FolderRepository
#[derive(Clone, Default)]
pub struct MockFolderRepository {
    folders:     Arc<Mutex<Vec<Folder>>>,
    unavailable: Arc<Mutex<Option<String>>>,
    calls:       Arc<AtomicUsize>,
}

impl MockFolderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_folders(folders: Vec<Folder>) -> Self {
        let mock = Self::new();
        *mock.folders.lock().unwrap() = folders;
        mock
    }

    pub fn add_folder(&self, folder: Folder) {
        self.folders.lock().unwrap().push(folder);
    }

    /// 以降の呼び出しをすべて Unavailable エラーにする
    pub fn set_unavailable(&self, message: impl Into<String>) {
        *self.unavailable.lock().unwrap() = Some(message.into());
    }

    /// `find_all_by_organization` が呼ばれた回数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FolderRepository for MockFolderRepository {
    async fn find_all_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<Folder>, InfraError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self.unavailable.lock().unwrap().as_ref() {
            return Err(InfraError::unavailable(message.clone()));
        }

        Ok(self
            .folders
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.belongs_to(organization_id))
            .cloned()
            .collect())
    }
}
