//! # 組織
//!
//! フォルダの所属先となる組織（テナント）の識別子。
//!
//! ## マルチテナント
//!
//! すべてのフォルダはいずれか 1 つの組織に所属する。
//! フォルダ一覧の取得は常に組織単位で行い、他組織のフォルダは返さない。
//!
//! ## 使用例
//!
//! ```rust
//! use folderlist_domain::organization::OrganizationId;
//! use uuid::Uuid;
//!
//! // 外部から受け取った UUID から復元
//! let uuid = Uuid::parse_str("c1556e17-b7c0-45a3-a6ae-9546248fb17a").unwrap();
//! let organization_id = OrganizationId::from_uuid(uuid);
//!
//! // ログ出力
//! println!("組織: {}", organization_id);
//! ```

define_uuid_id! {
    /// 組織の一意識別子
    ///
    /// フォルダの所属先を識別するために使用する。
    /// `Uuid` の Newtype であり、`FolderId` などとの取り違えをコンパイラが検出する。
    pub struct OrganizationId;
}
