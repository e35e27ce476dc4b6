//! # サンプルフォルダデータ
//!
//! 開発・テスト用の固定データセット。
//! [`InMemoryFolderRepository::sample`](crate::repository::InMemoryFolderRepository::sample)
//! のバックエンドとして使用する。
//!
//! データセットは常に同じ順序・同じ ID で生成されるため、プロセスを跨いでも
//! ページトークンの位置がずれない。
//!
//! | 組織 | フォルダ数 |
//! |------|-----------|
//! | [`DEFAULT_ORGANIZATION_ID`] | 25 |
//! | [`SECONDARY_ORGANIZATION_ID`] | 3 |

use folderlist_domain::{
    folder::{Folder, FolderId, FolderName},
    organization::OrganizationId,
};
use uuid::Uuid;

use self::SampleOrganization::{Default as D, Secondary as S};

/// サンプルデータのデフォルト組織 ID
pub const DEFAULT_ORGANIZATION_ID: &str = "c1556e17-b7c0-45a3-a6ae-9546248fb17a";

/// サンプルデータの 2 つ目の組織 ID
pub const SECONDARY_ORGANIZATION_ID: &str = "4212d618-66ff-468a-862d-ea49fef5e183";

/// フォルダ ID の上位ビット（下位にデータセット内の連番を入れる）
const SAMPLE_FOLDER_ID_BASE: u128 = 0x5a3f_0000_0000_4000_8000_0000_0000_0000;

/// 所属組織
#[derive(Clone, Copy)]
enum SampleOrganization {
    Default,
    Secondary,
}

/// (フォルダ名, 所属組織, 論理削除フラグ)
const SAMPLE_FOLDERS: &[(&str, SampleOrganization, bool)] = &[
    ("noble-vixen", D, false),
    ("creative-blackheart", D, false),
    ("helped-darkstar", D, true),
    ("crack-morph", D, false),
    ("moved-nightcrawler", D, false),
    ("renewed-toxin", S, false),
    ("smart-iron-man", D, false),
    ("gentle-kang", D, false),
    ("clear-spectre", D, true),
    ("settled-cable", D, false),
    ("boss-ultron", D, false),
    ("organic-jigsaw", D, false),
    ("mint-carnage", D, false),
    ("ready-magneto", S, true),
    ("present-onslaught", D, false),
    ("glorious-mysterio", D, false),
    ("robust-sentry", D, false),
    ("trusty-havok", D, true),
    ("musical-hulk", D, false),
    ("sharp-apocalypse", D, false),
    ("famous-banshee", D, false),
    ("steady-ghost-rider", S, false),
    ("enabled-nova", D, false),
    ("cosmic-wasp", D, false),
    ("united-cyclops", D, false),
    ("driven-hydra", D, false),
    ("saving-mojo", D, false),
    ("fine-thanos", D, false),
];

/// デフォルト組織 ID を取得する
pub fn default_organization_id() -> OrganizationId {
    OrganizationId::from_uuid(
        Uuid::parse_str(DEFAULT_ORGANIZATION_ID).expect("定数の UUID は常に有効"),
    )
}

/// 2 つ目の組織 ID を取得する
pub fn secondary_organization_id() -> OrganizationId {
    OrganizationId::from_uuid(
        Uuid::parse_str(SECONDARY_ORGANIZATION_ID).expect("定数の UUID は常に有効"),
    )
}

/// サンプルデータセットを生成する
///
/// 両組織のフォルダが混在した状態で、定義順に返す。
pub fn sample_folders() -> Vec<Folder> {
    let default_org = default_organization_id();
    let secondary_org = secondary_organization_id();

    SAMPLE_FOLDERS
        .iter()
        .enumerate()
        .map(|(index, &(name, organization, deleted))| {
            let organization_id = match organization {
                SampleOrganization::Default => default_org.clone(),
                SampleOrganization::Secondary => secondary_org.clone(),
            };
            Folder::new(
                FolderId::from_uuid(Uuid::from_u128(SAMPLE_FOLDER_ID_BASE + index as u128 + 1)),
                // 定数テーブルの名前はすべて空でなく 255 文字以内
                FolderName::new(name).expect("サンプルのフォルダ名は常に有効"),
                organization_id,
                deleted,
            )
        })
        .collect()
}
