use std::env;
use crate::config::{default_extension_policy, ExtensionPolicy, EXTENSION_POLICY_ENV_VAR};
use crate::error::Error;

#[test]
fn parse_policy() {
    assert_eq!("PROBE".parse::<ExtensionPolicy>().unwrap(), ExtensionPolicy::Probe);
    assert_eq!(" on ".parse::<ExtensionPolicy>().unwrap(), ExtensionPolicy::Probe);
    assert_eq!("skip".parse::<ExtensionPolicy>().unwrap(), ExtensionPolicy::Skip);
    assert_eq!("Off".parse::<ExtensionPolicy>().unwrap(), ExtensionPolicy::Skip);
    assert!("maybe".parse::<ExtensionPolicy>().is_err());
    assert_eq!(ExtensionPolicy::default(), ExtensionPolicy::Probe);
}

// The only test touching the environment variable.
#[test]
fn policy_from_env() {
    env::remove_var(EXTENSION_POLICY_ENV_VAR);
    assert_eq!(default_extension_policy().unwrap(), ExtensionPolicy::Probe);

    env::set_var(EXTENSION_POLICY_ENV_VAR, "SKIP");
    assert_eq!(default_extension_policy().unwrap(), ExtensionPolicy::Skip);

    env::set_var(EXTENSION_POLICY_ENV_VAR, "sometimes");
    match default_extension_policy() {
        Err(Error::Config(err)) => assert!(err.to_string().contains("'sometimes'")),
        other => panic!("unexpected: {:?}", other),
    }

    env::remove_var(EXTENSION_POLICY_ENV_VAR);
}
