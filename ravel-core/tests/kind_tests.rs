// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ravel_core::{EngineError, PolicyKind};

#[test]
fn display_matches_result_label_names() {
    assert_eq!(PolicyKind::Switch.to_string(), "switch");
    assert_eq!(PolicyKind::Merge.to_string(), "merge");
    assert_eq!(PolicyKind::Concat.to_string(), "concat");
    assert_eq!(PolicyKind::Exhaust.to_string(), "exhaust");
}

#[test]
fn parses_lowercase_names() -> anyhow::Result<()> {
    assert_eq!("switch".parse::<PolicyKind>()?, PolicyKind::Switch);
    assert_eq!("exhaust".parse::<PolicyKind>()?, PolicyKind::Exhaust);
    Ok(())
}

#[test]
fn rejects_unknown_names() {
    let err = "flatMap".parse::<PolicyKind>().unwrap_err();
    assert_eq!(err, EngineError::unknown_policy("flatMap"));
}

#[test]
fn serde_uses_lowercase_names() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&PolicyKind::Concat)?, "\"concat\"");
    let kind: PolicyKind = serde_json::from_str("\"merge\"")?;
    assert_eq!(kind, PolicyKind::Merge);
    Ok(())
}
