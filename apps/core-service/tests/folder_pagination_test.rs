//! フォルダ一覧ページ分割の統合テスト
//!
//! 組み込みサンプルデータ（デフォルト組織 25 件、別組織 3 件）に対して
//! トークンを辿るトラバースの振る舞いを検証する。

use std::{num::NonZeroUsize, sync::Arc};

use folderlist_domain::{folder::Folder, organization::OrganizationId};
use folderlist_infra::{
    repository::InMemoryFolderRepository,
    sample_data::{default_organization_id, secondary_organization_id},
};
use folderlist_service::{
    error::CoreError,
    usecase::{FolderPage, FolderUseCaseImpl, ListFoldersPageInput},
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn sut() -> FolderUseCaseImpl {
    FolderUseCaseImpl::new(Arc::new(InMemoryFolderRepository::sample()))
}

fn input(
    organization_id: OrganizationId,
    page_token: Option<&str>,
    page_size: Option<i32>,
) -> ListFoldersPageInput {
    ListFoldersPageInput {
        organization_id,
        page_token: page_token.map(str::to_string),
        page_size,
    }
}

/// `next_token` がなくなるまでページを辿る
async fn traverse(
    sut: &FolderUseCaseImpl,
    organization_id: &OrganizationId,
    page_size: Option<i32>,
) -> Vec<FolderPage> {
    let mut pages = Vec::new();
    let mut page_token: Option<String> = None;
    loop {
        let page = sut
            .list_folders_paginated(ListFoldersPageInput {
                organization_id: organization_id.clone(),
                page_token: page_token.take(),
                page_size,
            })
            .await
            .unwrap();
        page_token = page.next_token.clone();
        pages.push(page);
        if page_token.is_none() {
            return pages;
        }
    }
}

#[tokio::test]
async fn test_初回ページはデフォルトの10件と次ページトークンを返す() {
    // Arrange
    let sut = sut();

    // Act
    let page = sut
        .list_folders_paginated(input(default_organization_id(), None, None))
        .await
        .unwrap();

    // Assert
    assert_eq!(page.folders.len(), 10);
    assert_eq!(page.next_token.as_deref(), Some("MTA"));
}

#[tokio::test]
async fn test_25件をデフォルトサイズで辿ると10件_10件_5件の3ページになる() {
    // Arrange
    let sut = sut();

    // Act
    let pages = traverse(&sut, &default_organization_id(), None).await;

    // Assert
    let sizes: Vec<usize> = pages.iter().map(|p| p.folders.len()).collect();
    let tokens: Vec<Option<&str>> = pages.iter().map(|p| p.next_token.as_deref()).collect();
    assert_eq!(sizes, vec![10, 10, 5]);
    assert_eq!(tokens, vec![Some("MTA"), Some("MjA"), None]);
}

#[rstest]
#[case::サイズ1(Some(1))]
#[case::サイズ3(Some(3))]
#[case::サイズ7(Some(7))]
#[case::全件と同じ(Some(25))]
#[case::全件より大きい(Some(100))]
#[case::デフォルト(None)]
#[tokio::test]
async fn test_全ページを連結すると全件取得と同じ順序になる(#[case] page_size: Option<i32>) {
    // Arrange
    let sut = sut();
    let organization_id = default_organization_id();
    let expected = sut.list_folders(&organization_id).await.unwrap();

    // Act
    let pages = traverse(&sut, &organization_id, page_size).await;

    // Assert
    let concatenated: Vec<Folder> = pages.into_iter().flat_map(|p| p.folders).collect();
    assert_eq!(concatenated, expected);
}

#[tokio::test]
async fn test_最終ページ以外はページサイズちょうどの件数になる() {
    // Arrange
    let sut = sut();

    // Act
    let pages = traverse(&sut, &default_organization_id(), Some(4)).await;

    // Assert
    let (last, rest) = pages.split_last().unwrap();
    assert!(rest.iter().all(|p| p.folders.len() == 4));
    assert!(!last.folders.is_empty() && last.folders.len() <= 4);
    assert_eq!(pages.len(), 7);
}

#[tokio::test]
async fn test_他組織のフォルダは含まれない() {
    // Arrange
    let sut = sut();
    let organization_id = secondary_organization_id();

    // Act
    let pages = traverse(&sut, &organization_id, Some(2)).await;

    // Assert
    let folders: Vec<Folder> = pages.into_iter().flat_map(|p| p.folders).collect();
    assert_eq!(folders.len(), 3);
    assert!(folders.iter().all(|f| f.belongs_to(&organization_id)));
}

#[tokio::test]
async fn test_フォルダのない組織は空ページを1つ返す() {
    // Arrange
    let sut = sut();

    // Act
    let pages = traverse(&sut, &OrganizationId::new(), None).await;

    // Assert
    assert_eq!(pages.len(), 1);
    assert!(pages[0].folders.is_empty());
    assert_eq!(pages[0].next_token, None);
}

#[tokio::test]
async fn test_フォルダのない組織の全件取得は空になる() {
    // Arrange
    let sut = sut();

    // Act
    let folders = sut.list_folders(&OrganizationId::new()).await.unwrap();

    // Assert
    assert!(folders.is_empty());
}

#[rstest]
#[case::base64でない("invalid_token")]
#[case::数値でない("YWJj")]
#[case::負数("LTE")]
#[tokio::test]
async fn test_不正なトークンはinvalid_page_tokenになる(#[case] token: &str) {
    // Arrange
    let sut = sut();

    // Act
    let result = sut
        .list_folders_paginated(input(default_organization_id(), Some(token), None))
        .await;

    // Assert
    assert!(matches!(result, Err(CoreError::InvalidPageToken(_))));
}

#[rstest]
#[case::ゼロ(Some(0))]
#[case::負数(Some(-5))]
#[tokio::test]
async fn test_0以下のページサイズはデフォルトのページサイズになる(
    #[case] page_size: Option<i32>,
) {
    // Arrange
    let sut = sut();

    // Act
    let page = sut
        .list_folders_paginated(input(default_organization_id(), None, page_size))
        .await
        .unwrap();

    // Assert
    assert_eq!(page.folders.len(), 10);
    assert_eq!(page.next_token.as_deref(), Some("MTA"));
}

#[tokio::test]
async fn test_範囲外のトークンは空ページで終端になる() {
    // Arrange
    let sut = sut();

    // Act
    // "MTAw" は 100
    let page = sut
        .list_folders_paginated(input(default_organization_id(), Some("MTAw"), None))
        .await
        .unwrap();

    // Assert
    assert!(page.folders.is_empty());
    assert_eq!(page.next_token, None);
}

#[tokio::test]
async fn test_同じ入力には同じページを返す() {
    // Arrange
    let sut = sut();
    let request = input(default_organization_id(), Some("MTA"), Some(5));

    // Act
    let first = sut.list_folders_paginated(request.clone()).await.unwrap();
    let second = sut.list_folders_paginated(request).await.unwrap();

    // Assert
    assert_eq!(first, second);
    assert_eq!(first.next_token.as_deref(), Some("MTU"));
}

#[tokio::test]
async fn test_設定したデフォルトのページサイズで分割される() {
    // Arrange
    let sut = FolderUseCaseImpl::with_default_page_size(
        Arc::new(InMemoryFolderRepository::sample()),
        NonZeroUsize::new(20).unwrap(),
    );

    // Act
    let pages = traverse(&sut, &default_organization_id(), None).await;

    // Assert
    let sizes: Vec<usize> = pages.iter().map(|p| p.folders.len()).collect();
    assert_eq!(sizes, vec![20, 5]);
}
