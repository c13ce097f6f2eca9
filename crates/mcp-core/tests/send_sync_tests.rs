//! Tests to verify that all public types are Send + Sync as required.

use mcp_toolcheck_core::*;

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_domain_types_are_send_sync() {
    assert_send_sync::<ServerId>();
    assert_send_sync::<ToolName>();
    assert_send_sync::<ServerStatus>();
}

#[test]
fn test_analysis_types_are_send_sync() {
    assert_send_sync::<Analysis>();
    assert_send_sync::<ServerRecord>();
    assert_send_sync::<Recommendations>();
}

#[test]
fn test_error_is_send_sync() {
    assert_send_sync::<Error>();
}
