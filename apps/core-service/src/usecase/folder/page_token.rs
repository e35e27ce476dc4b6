//! # ページトークン
//!
//! 次ページの開始位置（組織の全フォルダ列に対する 0 始まりのオフセット）と
//! 不透明な文字列トークンを相互変換する。
//!
//! ## 形式
//!
//! オフセットの 10 進表記を base64（URL-safe, パディングなし）でエンコードする。
//! 例: `10` → `"MTA"`
//!
//! トークンは組織 ID もチェックサムも含まない。有効性は
//! 「非負整数にデコードできること」だけで判定する。
//! 全件数を超えるオフセットはデコードエラーではなく、空ページとして扱われる。

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use thiserror::Error;

/// ページトークンのデコード失敗
#[derive(Debug, Error)]
pub enum PageTokenError {
    #[error("base64 としてデコードできません: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("UTF-8 文字列ではありません: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("非負整数のオフセットではありません: {0}")]
    Offset(#[from] std::num::ParseIntError),
}

/// オフセットをページトークンにエンコードする
///
/// 同じオフセットは常に同じトークンになる。
pub fn encode_page_token(offset: usize) -> String {
    URL_SAFE_NO_PAD.encode(offset.to_string())
}

/// ページトークンをオフセットにデコードする
///
/// 呼び出し元は空文字列を渡さないこと（トークンなしは常にオフセット 0）。
pub fn decode_page_token(token: &str) -> Result<usize, PageTokenError> {
    let bytes = URL_SAFE_NO_PAD.decode(token)?;
    let text = String::from_utf8(bytes)?;
    Ok(text.parse::<usize>()?)
}
