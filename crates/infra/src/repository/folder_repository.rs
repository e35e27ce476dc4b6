//! # FolderRepository
//!
//! 組織に所属するフォルダの取得を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **順序の安定性**: 同一プロセス内で繰り返し呼び出しても同じ順序で返す。
//!   ページトークンは位置（オフセット）だけを保持するため、この性質が前提になる
//! - **空は正常**: フォルダを持たない組織には空の Vec を返し、エラーにしない
//! - **差し替え可能**: ユースケースは `Arc<dyn FolderRepository>` で受け取るため、
//!   インメモリ実装を実ストア実装に置き換えてもページネーション側は変わらない

use std::path::Path;

use async_trait::async_trait;
use folderlist_domain::{
    folder::{Folder, FolderId, FolderName},
    organization::OrganizationId,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::InfraError, sample_data};

/// フォルダリポジトリトレイト
#[async_trait]
pub trait FolderRepository: Send + Sync {
    /// 組織の全フォルダを安定した順序で取得する
    async fn find_all_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<Folder>, InfraError>;
}

/// JSON データセット上のフォルダレコード
///
/// ```json
/// [{ "id": "...", "name": "noble-vixen", "org_id": "...", "deleted": false }]
/// ```
#[derive(Debug, Deserialize)]
struct FolderRecord {
    id:      Uuid,
    name:    String,
    org_id:  Uuid,
    #[serde(default)]
    deleted: bool,
}

impl FolderRecord {
    fn into_folder(self) -> Result<Folder, InfraError> {
        let name = FolderName::new(self.name)
            .map_err(|e| InfraError::invalid_data(format!("フォルダ {}: {e}", self.id)))?;
        Ok(Folder::new(
            FolderId::from_uuid(self.id),
            name,
            OrganizationId::from_uuid(self.org_id),
            self.deleted,
        ))
    }
}

/// インメモリ実装の FolderRepository
///
/// 保持しているデータセットを組織 ID でフィルタリングして返す。
/// データセット内の順序をそのまま保つ。
#[derive(Debug, Clone, Default)]
pub struct InMemoryFolderRepository {
    folders: Vec<Folder>,
}

impl InMemoryFolderRepository {
    /// 任意のデータセットからリポジトリを作成する
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }

    /// 組み込みのサンプルデータセットからリポジトリを作成する
    pub fn sample() -> Self {
        Self::new(sample_data::sample_folders())
    }

    /// JSON 文字列からリポジトリを作成する
    #[tracing::instrument(skip_all, level = "debug")]
    pub fn from_json_str(json: &str) -> Result<Self, InfraError> {
        let records: Vec<FolderRecord> = serde_json::from_str(json)?;
        let folders = records
            .into_iter()
            .map(FolderRecord::into_folder)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = folders.len(), "フォルダデータセットを読み込みました");
        Ok(Self::new(folders))
    }

    /// JSON ファイルからリポジトリを作成する
    #[tracing::instrument(skip_all, level = "debug", fields(path = %path.as_ref().display()))]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, InfraError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// データセット全体の件数
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// データセットが空か
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

#[async_trait]
impl FolderRepository for InMemoryFolderRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%organization_id))]
    async fn find_all_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<Folder>, InfraError> {
        let folders: Vec<Folder> = self
            .folders
            .iter()
            .filter(|f| f.belongs_to(organization_id))
            .cloned()
            .collect();

        tracing::debug!(count = folders.len(), "組織のフォルダを取得しました");
        Ok(folders)
    }
}
