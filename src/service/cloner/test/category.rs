use super::*;

fn channels_only() -> CloneOptions {
    CloneOptions {
        clone_channels: true,
        ..no_phases()
    }
}

/// Tests that categories are created in ascending position order.
///
/// Verifies that each category carries its source position as a hint and that the
/// phase is announced.
///
/// Expected: Info (0), Voice (1), Archive (2) created in that order
#[tokio::test]
async fn creates_categories_in_position_order() {
    let mut source = fixture::guild(SOURCE_ID, "Source");
    source.channels.push(fixture::category(22, "Archive", 2));
    source.channels.push(fixture::category(20, "Info", 0));
    source.channels.push(fixture::category(21, "Voice", 1));
    let directory = Arc::new(InMemoryGuildDirectory::new(vec![
        source,
        fixture::guild(TARGET_ID, "Target"),
    ]));
    let log = RecordingLog::default();

    let stats = cloner(&directory, FakeAssetFetcher::default())
        .clone_server(SOURCE_ID, TARGET_ID, &channels_only(), &log)
        .await
        .unwrap();

    let calls = directory.calls();
    let positions: Vec<_> = calls
        .iter()
        .filter_map(|call| match call {
            DirectoryCall::CreateChannel { param, .. } => {
                Some((param.name.as_str(), param.position, param.settings.clone()))
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        positions,
        vec![
            ("Info", 0, ChannelSettings::Category),
            ("Voice", 1, ChannelSettings::Category),
            ("Archive", 2, ChannelSettings::Category),
        ]
    );
    assert_eq!(stats.categories_created, 3);
    assert!(log.contains("📁 Cloning categories..."));
    assert!(log.contains("Created category: Archive"));
}

/// Tests that category overwrites are translated into the target's id space.
///
/// Verifies the role map path for a role created in this run and the name fallback
/// for `@everyone`, which is never recreated.
///
/// Expected: overwrites reference the created role and the target's `@everyone`
#[tokio::test]
async fn translates_category_overwrites() {
    let mut source = fixture::guild(SOURCE_ID, "Source");
    source.roles.push(fixture::role(10, "Staff", 1));
    source.channels.push(fixture::with_overwrites(
        fixture::category(20, "Staff Only", 0),
        vec![role_overwrite(SOURCE_ID), role_overwrite(10)],
    ));
    let directory = Arc::new(InMemoryGuildDirectory::new(vec![
        source,
        fixture::guild(TARGET_ID, "Target"),
    ]));
    let options = CloneOptions {
        clone_roles: true,
        clone_channels: true,
        ..no_phases()
    };

    cloner(&directory, FakeAssetFetcher::default())
        .clone_server(SOURCE_ID, TARGET_ID, &options, &RecordingLog::default())
        .await
        .unwrap();

    let target = directory.snapshot(TARGET_ID);
    let staff = target.roles.iter().find(|r| r.name == "Staff").unwrap();
    let category = target.channels.iter().find(|c| c.name == "Staff Only").unwrap();
    let subjects: Vec<_> = category.overwrites.iter().map(|o| o.subject).collect();
    assert_eq!(
        subjects,
        vec![
            OverwriteSubject::Role(TARGET_ID),
            OverwriteSubject::Role(staff.role_id)
        ]
    );
}

/// Tests that a failed target role read does not stop category creation.
///
/// Verifies that role overwrites which cannot be resolved without the target's roles
/// are dropped rather than failing the category.
///
/// Expected: category created without overwrites
#[tokio::test]
async fn failed_role_read_drops_unmapped_overwrites() {
    let mut source = fixture::guild(SOURCE_ID, "Source");
    source.channels.push(fixture::with_overwrites(
        fixture::category(20, "Info", 0),
        vec![role_overwrite(SOURCE_ID)],
    ));
    let directory = Arc::new(
        InMemoryGuildDirectory::new(vec![source, fixture::guild(TARGET_ID, "Target")])
            .fail_reads(),
    );
    let log = RecordingLog::default();

    let stats = cloner(&directory, FakeAssetFetcher::default())
        .clone_server(SOURCE_ID, TARGET_ID, &channels_only(), &log)
        .await
        .unwrap();

    assert_eq!(stats.categories_created, 1);
    assert!(directory.snapshot(TARGET_ID).channels[0].overwrites.is_empty());
    assert!(log
        .lines()
        .iter()
        .any(|l| l.starts_with("Failed to fetch target roles:")));
}

/// Tests that a failed category is counted and the next one still created.
///
/// Expected: 1 category created, 1 failure
#[tokio::test]
async fn failed_category_counts_and_continues() {
    let mut source = fixture::guild(SOURCE_ID, "Source");
    source.channels.push(fixture::category(20, "Info", 0));
    source.channels.push(fixture::category(21, "Voice", 1));
    let directory = Arc::new(
        InMemoryGuildDirectory::new(vec![source, fixture::guild(TARGET_ID, "Target")])
            .fail_on("Info"),
    );
    let log = RecordingLog::default();

    let stats = cloner(&directory, FakeAssetFetcher::default())
        .clone_server(SOURCE_ID, TARGET_ID, &channels_only(), &log)
        .await
        .unwrap();

    assert_eq!(stats.categories_created, 1);
    assert_eq!(stats.failed, 1);
    assert!(log
        .lines()
        .iter()
        .any(|l| l.starts_with("Failed to create category Info:")));
}

/// Tests a stop request arriving while the first category is being created.
///
/// Expected: only Info is created, nothing after it, and the stop is reported
#[tokio::test]
async fn stop_mid_phase_creates_no_further_categories() {
    let mut source = fixture::guild(SOURCE_ID, "Source");
    source.channels.push(fixture::category(20, "Info", 0));
    source.channels.push(fixture::category(21, "Voice", 1));
    source.channels.push(fixture::category(22, "Archive", 2));
    source.channels.push(fixture::text(30, "general", 0, Some(20)));
    let directory = Arc::new(InMemoryGuildDirectory::new(vec![
        source,
        fixture::guild(TARGET_ID, "Target"),
    ]));
    let log = RecordingLog::default();
    let cloner = cloner(&directory, FakeAssetFetcher::default());
    directory.cancel_after(1, cloner.cancellation_flag());

    let stats = cloner
        .clone_server(SOURCE_ID, TARGET_ID, &channels_only(), &log)
        .await
        .unwrap();

    assert_eq!(
        created_channels(&directory.calls()),
        vec![("Info".to_string(), None)]
    );
    assert_eq!(stats.categories_created, 1);
    assert_eq!(stats.channels_created, 0);
    assert!(!log.contains("💬 Cloning channels..."));
    assert!(log.contains("⚠️ Cloning stopped by user."));
}
