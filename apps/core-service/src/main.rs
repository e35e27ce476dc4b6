//! # フォルダ一覧サービス
//!
//! 設定された組織のフォルダを、ページトークンを辿って全ページ取得する。
//!
//! ## 動作
//!
//! 1. `.env` と環境変数から設定を読み込み、トレーシングを初期化する
//! 2. フォルダデータを読み込む（`FOLDER_SAMPLE_DATA_PATH` 未設定なら組み込みサンプル）
//! 3. `next_token` がなくなるまでページを取得し、各ページを JSON でログ出力する
//! 4. 取得したフォルダ列が全件取得の結果と一致することを確認する
//!
//! 環境変数は [`config`](folderlist_service::config) を参照。
//!
//! ## 起動方法
//!
//! ```bash
//! FOLDER_PAGE_SIZE=5 LOG_FORMAT=json cargo run -p folderlist-service
//! ```

use std::sync::Arc;

use folderlist_infra::repository::{FolderRepository, InMemoryFolderRepository};
use folderlist_service::{
    config::CoreConfig,
    usecase::{FolderDto, FolderUseCaseImpl, ListFoldersPageInput},
};
use folderlist_shared::observability::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let config = CoreConfig::from_env()?;

    init_tracing(TracingConfig::new("folderlist-service", config.log_format));

    let dataset = match &config.sample_data_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "フォルダデータを読み込みます");
            InMemoryFolderRepository::from_json_file(path)?
        }
        None => {
            tracing::info!("組み込みのサンプルデータを使用します");
            InMemoryFolderRepository::sample()
        }
    };
    if dataset.is_empty() {
        tracing::warn!("フォルダデータが 0 件です");
    } else {
        tracing::info!(count = dataset.len(), "フォルダデータを読み込みました");
    }

    let repository: Arc<dyn FolderRepository> = Arc::new(dataset);
    let usecase = FolderUseCaseImpl::with_default_page_size(repository, config.default_page_size);

    let mut traversed: Vec<FolderDto> = Vec::new();
    let mut page_token: Option<String> = None;
    let mut page_number = 0usize;

    loop {
        let page = usecase
            .list_folders_paginated(ListFoldersPageInput {
                organization_id: config.organization_id.clone(),
                page_token:      page_token.take(),
                page_size:       config.page_size,
            })
            .await?;
        page_number += 1;

        let response = page.into_response(FolderDto::from);
        tracing::info!(
            page = page_number,
            count = response.data.len(),
            body = %serde_json::to_string(&response)?,
            "ページを取得しました"
        );

        let is_last_page = response.is_last_page();
        page_token = response.next_cursor;
        traversed.extend(response.data);
        if is_last_page {
            break;
        }
    }

    let all: Vec<FolderDto> = usecase
        .list_folders(&config.organization_id)
        .await?
        .into_iter()
        .map(FolderDto::from)
        .collect();

    anyhow::ensure!(
        traversed == all,
        "ページ分割の結果が全件取得と一致しません（ページ分割: {} 件, 全件: {} 件）",
        traversed.len(),
        all.len()
    );

    tracing::info!(
        organization_id = %config.organization_id,
        pages = page_number,
        folders = all.len(),
        "全ページの取得が完了しました"
    );

    Ok(())
}
