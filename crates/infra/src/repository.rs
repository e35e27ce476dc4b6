//! # リポジトリ実装
//!
//! ユースケースが依存するデータ取得インターフェースと、その具体的な実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケースはトレイトにのみ依存する
//! - **データソース抽象化**: 保存媒体の詳細をカプセル化する
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod folder_repository;

pub use folder_repository::{FolderRepository, InMemoryFolderRepository};
