//! # Core Service 設定
//!
//! 環境変数からフォルダ一覧サービスの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `FOLDER_DEFAULT_PAGE_SIZE` | No | デフォルトのページサイズ（デフォルト: `10`） |
//! | `FOLDER_SAMPLE_DATA_PATH` | No | フォルダデータの JSON ファイル（未設定で組み込みサンプル） |
//! | `FOLDER_ORGANIZATION_ID` | No | 一覧を取得する組織 ID（デフォルト: サンプルのデフォルト組織） |
//! | `FOLDER_PAGE_SIZE` | No | 1 ページあたりの件数（未設定でデフォルトのページサイズ） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! 不正な値は [`ConfigError`] として返す。黙ってデフォルト値に置き換えない。

use std::{env, num::NonZeroUsize, path::PathBuf};

use folderlist_domain::organization::OrganizationId;
use folderlist_infra::sample_data::default_organization_id;
use folderlist_shared::observability::LogFormat;
use thiserror::Error;
use uuid::Uuid;

use crate::usecase::folder::page_window::DEFAULT_PAGE_SIZE;

/// 設定の読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} が不正です: {value:?}（{reason}）")]
    InvalidValue {
        name:   &'static str,
        value:  String,
        reason: String,
    },
}

/// Core Service の設定
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// デフォルトのページサイズ
    pub default_page_size: NonZeroUsize,
    /// フォルダデータの JSON ファイル
    pub sample_data_path:  Option<PathBuf>,
    /// 一覧を取得する組織
    pub organization_id:   OrganizationId,
    /// 1 ページあたりの件数
    pub page_size:         Option<i32>,
    /// ログ出力形式
    pub log_format:        LogFormat,
}

impl CoreConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default_page_size = match lookup("FOLDER_DEFAULT_PAGE_SIZE") {
            Some(value) => value
                .parse::<NonZeroUsize>()
                .map_err(|e| invalid("FOLDER_DEFAULT_PAGE_SIZE", value, e))?,
            None => DEFAULT_PAGE_SIZE,
        };

        let organization_id = match lookup("FOLDER_ORGANIZATION_ID") {
            Some(value) => Uuid::parse_str(&value)
                .map(OrganizationId::from_uuid)
                .map_err(|e| invalid("FOLDER_ORGANIZATION_ID", value, e))?,
            None => default_organization_id(),
        };

        let page_size = lookup("FOLDER_PAGE_SIZE")
            .map(|value| {
                value
                    .parse::<i32>()
                    .map_err(|e| invalid("FOLDER_PAGE_SIZE", value, e))
            })
            .transpose()?;

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value
                .parse::<LogFormat>()
                .map_err(|e| invalid("LOG_FORMAT", value, e))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            default_page_size,
            sample_data_path: lookup("FOLDER_SAMPLE_DATA_PATH").map(PathBuf::from),
            organization_id,
            page_size,
            log_format,
        })
    }
}

fn invalid(name: &'static str, value: String, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        name,
        value,
        reason: reason.to_string(),
    }
}
