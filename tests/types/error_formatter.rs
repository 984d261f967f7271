use rule_rail::types::{ErrorFormatConfig, ErrorFormatter};
use rule_rail::Error;

fn three() -> Error {
    Error::and(
        Error::and(Error::single("name is empty"), Error::single("age is negative")),
        Error::single("email is invalid"),
    )
}

#[test]
fn default_format_matches_display() {
    assert_eq!(three().formatted().to_string(), three().to_string());
}

#[test]
fn compact_format_uses_pipes() {
    assert_eq!(
        three().formatted().compact().to_string(),
        "name is empty | age is negative | email is invalid"
    );
}

#[test]
fn pretty_format_draws_a_tree() {
    assert_eq!(
        three().formatted().pretty().to_string(),
        "┌ name is empty\n├─ age is negative\n└─ email is invalid"
    );
    assert_eq!(Error::single("alone").formatted().pretty().to_string(), "─ alone");
}

#[test]
fn pretty_tree_keeps_numbering_and_suffix() {
    let config = ErrorFormatConfig {
        numbered: true,
        message_suffix: Some(".".into()),
        ..ErrorFormatConfig::pretty()
    };
    assert_eq!(
        three().formatted().with_config(config.clone()).to_string(),
        "┌ 1. name is empty.\n├─ 2. age is negative.\n└─ 3. email is invalid."
    );
    assert_eq!(Error::single("alone").render(&config), "─ 1. alone.");
}

#[test]
fn bulleted_format_with_header() {
    assert_eq!(
        three().formatted().bulleted().header("Validation failed:").to_string(),
        "Validation failed:\n- name is empty\n- age is negative\n- email is invalid"
    );
}

#[test]
fn numbered_format_counts_from_one() {
    assert_eq!(
        three().formatted().numbered().to_string(),
        "1. name is empty\n2. age is negative\n3. email is invalid"
    );
}

#[test]
fn custom_separator_and_config() {
    assert_eq!(
        three().formatted().with_separator("; ").to_string(),
        "name is empty; age is negative; email is invalid"
    );

    let config = ErrorFormatConfig {
        message_prefix: Some("[".into()),
        message_suffix: Some("]".into()),
        separator: " ".into(),
        ..Default::default()
    };
    assert_eq!(
        Error::or(Error::single("a"), Error::single("b"))
            .formatted()
            .with_config(config)
            .to_string(),
        "[a] [b]"
    );
}

#[test]
fn custom_formatter_trait_impl() {
    struct Shouting;

    impl ErrorFormatter for Shouting {
        fn format_message(&self, message: &str) -> String {
            format!("{}!", message.to_uppercase())
        }

        fn separator(&self) -> &str {
            " "
        }
    }

    assert_eq!(
        Error::and(Error::single("stop"), Error::single("wait")).render(&Shouting),
        "STOP! WAIT!"
    );
}
