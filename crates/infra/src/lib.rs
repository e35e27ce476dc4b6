//! # FolderList インフラ層
//!
//! フォルダデータの取得を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはユースケースが依存するインターフェース（リポジトリトレイト）と
//! その具体的な実装を提供する。データソースの詳細をカプセル化し、
//! ページネーションなどの上位ロジックをデータソースの変更から保護する。
//!
//! ## 責務
//!
//! - **リポジトリ**: 組織単位のフォルダ取得（[`repository::FolderRepository`]）
//! - **サンプルデータ**: 開発・テスト用の固定データセット
//!
//! ## 依存関係
//!
//! ```text
//! core-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装
//! - [`sample_data`] - サンプルデータセット
//!
//! ## 使用例
//!
//! ```rust
//! use folderlist_infra::{
//!     repository::{FolderRepository, InMemoryFolderRepository},
//!     sample_data::default_organization_id,
//! };
//!
//! # async fn example() -> Result<(), folderlist_infra::InfraError> {
//! let repository = InMemoryFolderRepository::sample();
//! let folders = repository
//!     .find_all_by_organization(&default_organization_id())
//!     .await?;
//! assert_eq!(folders.len(), 25);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod repository;
pub mod sample_data;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::{InfraError, InfraErrorKind};
