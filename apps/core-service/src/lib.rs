//! # Core Service ライブラリ
//!
//! フォルダ一覧のユースケースと設定を公開する。

pub mod config;
pub mod error;
pub mod usecase;
