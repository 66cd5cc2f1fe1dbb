use repo_utils::types::{BatchSummary, RepoRef, UpdateOutcome, Visibility};

#[test]
fn test_repo_ref_display() {
    let repo = RepoRef::new("octocat", "hello-world");
    assert_eq!(repo.to_string(), "octocat/hello-world");
}

#[test]
fn test_visibility_flag() {
    assert_eq!(Visibility::from_private_flag(true), Visibility::Private);
    assert_eq!(Visibility::from_private_flag(false), Visibility::Public);
    assert!(Visibility::Private.is_private());
    assert!(!Visibility::Public.is_private());
}

#[test]
fn test_outcome_accessors() {
    let outcome = UpdateOutcome::Failure {
        repo: RepoRef::new("octocat", "gone"),
        status: 404,
        message: "Not Found".to_string(),
    };
    assert!(!outcome.is_success());
    assert_eq!(outcome.repo().name, "gone");
}

#[test]
fn test_batch_summary_display() {
    let summary = BatchSummary {
        succeeded: 3,
        total: 5,
        visibility: Visibility::Private,
    };
    assert_eq!(
        summary.to_string(),
        "Completed: 3/5 repositories successfully changed to private"
    );

    let summary = BatchSummary {
        succeeded: 0,
        total: 0,
        visibility: Visibility::Public,
    };
    assert_eq!(
        summary.to_string(),
        "Completed: 0/0 repositories successfully changed to public"
    );
}
