//! Process environment access that tests can substitute.
//!
//! [`Env::real()`] reads `std::env`; [`Env::mock()`] serves a fixed map so
//! config tests never touch the process environment.

use std::collections::HashMap;

/// Source of environment variables for config resolution.
#[derive(Clone, Debug, Default)]
pub struct Env {
    fixed: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the live process environment.
    pub fn real() -> Self {
        Self { fixed: None }
    }

    /// Serve only the given pairs; everything else is unset.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            fixed: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Value of `name`, or `None` when unset or blank.
    pub fn get(&self, name: &str) -> Option<String> {
        let value = match &self.fixed {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_env_reads_cargo_manifest_dir() {
        assert!(Env::real().get("CARGO_MANIFEST_DIR").is_some());
    }

    #[test]
    fn mock_env_serves_only_given_pairs() {
        let env = Env::mock([("USERFETCH_BASE_URL", "http://localhost:1")]);
        assert_eq!(
            env.get("USERFETCH_BASE_URL").as_deref(),
            Some("http://localhost:1")
        );
        assert!(env.get("PATH").is_none());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let env = Env::mock([("USERFETCH_INCLUDE", "   ")]);
        assert!(env.get("USERFETCH_INCLUDE").is_none());
    }

    #[test]
    fn values_are_trimmed() {
        let env = Env::mock([("USERFETCH_TIMEOUT", " 15 \n")]);
        assert_eq!(env.get("USERFETCH_TIMEOUT").as_deref(), Some("15"));
    }
}
