pub(super) const SCROLL_TO_TOP: &str = r#"window.scrollTo({ top: 0, behavior: "smooth" });"#;
