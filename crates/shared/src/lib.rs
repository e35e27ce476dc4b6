//! # FolderList 共有ユーティリティ
//!
//! このクレートは、ワークスペース全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレートから依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える

pub mod observability;
pub mod paginated_response;

pub use paginated_response::PaginatedResponse;
