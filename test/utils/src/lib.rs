/// A v1 session payload the way the legacy store wrote it: sender/text
/// message fields and no ids or timestamps.
pub fn legacy_envelope_fixture() -> &'static str {
    return r#"{
  "version": 1,
  "messages": [
    { "sender": "ai", "text": "hi" },
    { "sender": "user", "text": "hello there" }
  ]
}"#;
}
