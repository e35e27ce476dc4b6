//! # フォルダ
//!
//! 組織に所属するフォルダのドメインモデル。
//!
//! フォルダ一覧 API は読み取り専用であり、このモデルは組織によるフィルタリングと
//! 同一性の比較に必要な項目だけを持つ。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use folderlist_domain::{
//!     folder::{Folder, FolderId, FolderName},
//!     organization::OrganizationId,
//! };
//!
//! let organization_id = OrganizationId::new();
//! let folder = Folder::new(
//!     FolderId::new(),
//!     FolderName::new("noble-vixen")?,
//!     organization_id.clone(),
//!     false,
//! );
//!
//! assert!(folder.belongs_to(&organization_id));
//! # Ok(())
//! # }
//! ```

use crate::organization::OrganizationId;

define_uuid_id! {
    /// フォルダの一意識別子
    pub struct FolderId;
}

/// フォルダ名の最大文字数
const MAX_FOLDER_NAME_LENGTH: usize = 255;

define_validated_string! {
    /// フォルダ名（値オブジェクト）
    ///
    /// # 不変条件
    ///
    /// - 空文字列ではない（前後の空白はトリミング）
    /// - 最大 255 文字
    pub struct FolderName {
        label: "フォルダ名",
        max_length: MAX_FOLDER_NAME_LENGTH,
    }
}

/// フォルダエンティティ
///
/// # 不変条件
///
/// - `organization_id` は生成後に変わらない
/// - 同一性は `id` で判定する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    id:              FolderId,
    name:            FolderName,
    organization_id: OrganizationId,
    deleted:         bool,
}

impl Folder {
    /// フォルダを作成する
    pub fn new(
        id: FolderId,
        name: FolderName,
        organization_id: OrganizationId,
        deleted: bool,
    ) -> Self {
        Self {
            id,
            name,
            organization_id,
            deleted,
        }
    }

    /// 指定した組織に所属しているか
    pub fn belongs_to(&self, organization_id: &OrganizationId) -> bool {
        &self.organization_id == organization_id
    }

    // --- ゲッター ---

    pub fn id(&self) -> &FolderId {
        &self.id
    }

    pub fn name(&self) -> &FolderName {
        &self.name
    }

    pub fn organization_id(&self) -> &OrganizationId {
        &self.organization_id
    }

    /// 論理削除フラグ
    ///
    /// 一覧取得では除外しない。表示側で扱う。
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    // =========================================================================
    // FolderName のテスト
    // =========================================================================

    #[test]
    fn test_フォルダ名は正常な名前を受け入れる() {
        let name = FolderName::new("creative-blackheart");
        assert!(name.is_ok());
        assert_eq!(name.unwrap().as_str(), "creative-blackheart");
    }

    #[test]
    fn test_フォルダ名は前後の空白をトリミングする() {
        let name = FolderName::new("  経費精算  ").unwrap();
        assert_eq!(name.as_str(), "経費精算");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_フォルダ名は空の名前を拒否する(#[case] value: &str) {
        assert!(FolderName::new(value).is_err());
    }

    #[test]
    fn test_フォルダ名は255文字以内を受け入れる() {
        let name = "a".repeat(255);
        assert!(FolderName::new(name).is_ok());
    }

    #[test]
    fn test_フォルダ名は255文字超を拒否する() {
        let name = "a".repeat(256);
        assert!(FolderName::new(name).is_err());
    }

    // =========================================================================
    // Folder のテスト
    // =========================================================================

    #[test]
    fn test_belongs_toは所属組織でのみtrueを返す() {
        let organization_id = OrganizationId::new();
        let sut = Folder::new(
            FolderId::new(),
            FolderName::new("folder").unwrap(),
            organization_id.clone(),
            false,
        );

        assert!(sut.belongs_to(&organization_id));
        assert!(!sut.belongs_to(&OrganizationId::new()));
    }

    #[test]
    fn test_newで渡した値がゲッターから取得できる() {
        let id = FolderId::new();
        let organization_id = OrganizationId::new();
        let name = FolderName::new("deleted-folder").unwrap();

        let sut = Folder::new(id.clone(), name.clone(), organization_id.clone(), true);

        assert_eq!(sut.id(), &id);
        assert_eq!(sut.name(), &name);
        assert_eq!(sut.organization_id(), &organization_id);
        assert!(sut.is_deleted());
    }
}
