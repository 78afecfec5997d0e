//! Prefix-command parsing behavior.

use netherite_bot::{parse, Command, CommandClass};

#[test]
fn messages_without_the_prefix_are_ignored() {
    assert!(parse("/", "hello everyone").is_none());
    assert!(parse("!", "/ping").is_none());
}

#[test]
fn unknown_commands_are_ignored() {
    assert!(parse("/", "/definitelynotacommand").is_none());
    assert!(parse("/", "/").is_none());
}

#[test]
fn command_names_are_case_insensitive() {
    let invocation = parse("/", "/PROFILE Notch").unwrap();
    assert_eq!(invocation.command(), Command::Profile);
}

#[test]
fn arguments_are_split_on_whitespace() {
    let invocation = parse("/", "/server  mc.example.com   25565").unwrap();
    assert_eq!(invocation.command(), Command::JavaServer);
    assert_eq!(invocation.args(), &["mc.example.com", "25565"]);
}

#[test]
fn text_rejoins_arguments() {
    let invocation = parse("/", "/wiki redstone comparator").unwrap();
    assert_eq!(invocation.text(), "redstone comparator");
}

#[test]
fn multi_character_prefixes_work() {
    let invocation = parse("mc!", "mc!creeper").unwrap();
    assert_eq!(invocation.command(), Command::Creeper);
    assert!(invocation.args().is_empty());
}

#[test]
fn networked_commands_use_the_slow_bucket() {
    for name in ["profile", "server", "serverpe", "status", "wyncraft", "mcbug", "wiki"] {
        let command = Command::parse(name).unwrap();
        assert_eq!(command.class(), CommandClass::Networked, "{name}");
    }
}

#[test]
fn local_commands_use_the_fast_bucket() {
    for name in ["enchant", "storage", "ping", "creeper", "licenseinfo"] {
        let command = Command::parse(name).unwrap();
        assert_eq!(command.class(), CommandClass::Local, "{name}");
    }
}
