use crate::ReleaseStatus;

use std::str::FromStr;

#[test]
fn test_release_status_as_str() {
    assert_eq!(ReleaseStatus::New.as_str(), "new");
    assert_eq!(ReleaseStatus::Released.as_str(), "released");
}

#[test]
fn test_release_status_from_str() {
    assert_eq!(
        ReleaseStatus::from_str("new").unwrap(),
        ReleaseStatus::New
    );
    assert_eq!(
        ReleaseStatus::from_str("released").unwrap(),
        ReleaseStatus::Released
    );
    assert!(ReleaseStatus::from_str("draft").is_err());
}
