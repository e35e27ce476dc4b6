//! # FolderList ドメイン層
//!
//! フォルダ一覧機能の中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（例: Folder）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（例: OrganizationId,
//!   FolderName）
//! - **ドメインエラー**: ルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! core-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（データソース、外部サービス）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`folder`] - フォルダエンティティと値オブジェクト
//! - [`organization`] - マルチテナントのための組織識別子

#[macro_use]
mod macros;

pub mod error;
pub mod folder;
pub mod organization;

pub use error::DomainError;
