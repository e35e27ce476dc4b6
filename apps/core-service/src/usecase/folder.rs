//! フォルダ一覧ユースケース
//!
//! 組織のフォルダを全件取得する API と、トークンベースでページ分割して取得する
//! API を提供する。
//!
//! ページ分割はリポジトリから毎回全件を取得し、メモリ上で切り出す。
//! 状態を持たないため、複数の呼び出し元から同時に使ってよい。
//! ただしトラバース中に元データが変わると、フォルダの欠落や重複が起こりうる。

pub mod page_token;
pub mod page_window;

use std::{num::NonZeroUsize, sync::Arc};

use folderlist_domain::{folder::Folder, organization::OrganizationId};
use folderlist_infra::repository::FolderRepository;
use folderlist_shared::PaginatedResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use self::{
    page_token::{decode_page_token, encode_page_token},
    page_window::{DEFAULT_PAGE_SIZE, PageWindow, resolve_page_size},
};
use crate::error::CoreError;

/// ページ分割取得の入力
///
/// - `page_token`: 前ページの `next_token`。`None` または空文字列なら先頭から
/// - `page_size`: `None`・0・負数ならデフォルトのページサイズ
#[derive(Debug, Clone)]
pub struct ListFoldersPageInput {
    pub organization_id: OrganizationId,
    pub page_token:      Option<String>,
    pub page_size:       Option<i32>,
}

/// フォルダの 1 ページ
///
/// `next_token` が `None` なら組織の全フォルダの末尾まで到達している。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPage {
    pub folders:    Vec<Folder>,
    pub next_token: Option<String>,
}

impl FolderPage {
    /// レスポンス形式に変換する
    pub fn into_response<T>(self, f: impl FnMut(Folder) -> T) -> PaginatedResponse<T> {
        PaginatedResponse::new(self.folders.into_iter().map(f).collect(), self.next_token)
    }
}

/// フォルダ DTO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolderDto {
    pub id:      Uuid,
    pub name:    String,
    pub org_id:  Uuid,
    pub deleted: bool,
}

impl From<Folder> for FolderDto {
    fn from(folder: Folder) -> Self {
        Self {
            id:      *folder.id().as_uuid(),
            name:    folder.name().as_str().to_string(),
            org_id:  *folder.organization_id().as_uuid(),
            deleted: folder.is_deleted(),
        }
    }
}

/// フォルダ一覧ユースケース
pub struct FolderUseCaseImpl {
    folder_repository: Arc<dyn FolderRepository>,
    default_page_size: NonZeroUsize,
}

impl FolderUseCaseImpl {
    pub fn new(folder_repository: Arc<dyn FolderRepository>) -> Self {
        Self::with_default_page_size(folder_repository, DEFAULT_PAGE_SIZE)
    }

    pub fn with_default_page_size(
        folder_repository: Arc<dyn FolderRepository>,
        default_page_size: NonZeroUsize,
    ) -> Self {
        Self {
            folder_repository,
            default_page_size,
        }
    }

    /// 組織の全フォルダを取得する
    ///
    /// リポジトリのエラーはそのまま返す。
    #[tracing::instrument(skip_all, level = "debug", fields(%organization_id))]
    pub async fn list_folders(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<Folder>, CoreError> {
        let folders = self
            .folder_repository
            .find_all_by_organization(organization_id)
            .await?;
        Ok(folders)
    }

    /// 組織のフォルダを 1 ページ分取得する
    ///
    /// 1. 組織の全フォルダを取得（失敗はそのまま返す）
    /// 2. ページサイズを決定
    /// 3. ページトークンを開始オフセットにデコード（失敗は `InvalidPageToken`）
    /// 4. `[start, min(start + page_size, 全件数))` を切り出す
    /// 5. 残りがあれば終端オフセットを次ページのトークンにする
    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(organization_id = %input.organization_id, page_size = ?input.page_size)
    )]
    pub async fn list_folders_paginated(
        &self,
        input: ListFoldersPageInput,
    ) -> Result<FolderPage, CoreError> {
        let mut folders = self
            .folder_repository
            .find_all_by_organization(&input.organization_id)
            .await?;

        let page_size = resolve_page_size(input.page_size, self.default_page_size);

        let start = match input.page_token.as_deref() {
            None | Some("") => 0,
            Some(token) => decode_page_token(token).inspect_err(|e| {
                tracing::warn!(error = %e, "不正なページトークンを拒否しました");
            })?,
        };

        let window = PageWindow::compute(start, page_size, folders.len());
        tracing::debug!(
            start = window.start,
            end = window.end,
            total = window.total,
            page_size,
            "ページ範囲を決定しました"
        );

        folders.truncate(window.end);
        let page = folders.split_off(window.start);

        Ok(FolderPage {
            folders:    page,
            next_token: window.next_offset().map(encode_page_token),
        })
    }
}
