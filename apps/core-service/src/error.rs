//! # Core Service エラー定義
//!
//! フォルダ一覧ユースケースで発生するエラーを定義する。
//!
//! 呼び出し元は [`CoreError::is_client_error`] で「入力の誤り」と
//! 「データソースの障害」を区別できる。リトライ判断は呼び出し元に委ねる。

use folderlist_infra::InfraError;
use thiserror::Error;

use crate::usecase::folder::page_token::PageTokenError;

/// Core Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
    /// ページトークンが非負整数にデコードできない
    ///
    /// 同じリクエストを再送しても必ず同じ結果になる。
    #[error("不正なページトークンです: {0}")]
    InvalidPageToken(#[from] PageTokenError),

    /// フォルダの取得に失敗した
    ///
    /// リポジトリのエラーをそのまま保持する。
    #[error(transparent)]
    Fetch(#[from] InfraError),
}

impl CoreError {
    /// クライアント入力に起因するエラーか
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidPageToken(_))
    }
}
