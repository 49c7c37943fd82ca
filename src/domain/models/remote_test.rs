use super::RemoteName;

#[test]
fn it_parses_remote_names() {
    assert_eq!(RemoteName::parse("http".to_string()), Some(RemoteName::Http));
    assert_eq!(RemoteName::parse("none".to_string()), Some(RemoteName::None));
    assert_eq!(RemoteName::parse("grpc".to_string()), None);
}

#[test]
fn it_displays_remote_names_lowercase() {
    assert_eq!(RemoteName::Http.to_string(), "http");
    assert_eq!(RemoteName::None.to_string(), "none");
}
