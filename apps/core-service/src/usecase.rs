//! # ユースケース層
//!
//! Core Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **状態を持たない**: 呼び出し間でキャッシュやカーソル位置を保持しない
//!
//! ## モジュール構成
//!
//! - `folder`: フォルダ一覧（全件・ページ分割）

pub mod folder;

pub use folder::{FolderDto, FolderPage, FolderUseCaseImpl, ListFoldersPageInput};
