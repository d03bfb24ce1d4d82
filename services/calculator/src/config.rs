use std::collections::BTreeMap;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Replaces the default bindings entirely when set
    pub bindings: BTreeMap<char, i64>,
    pub show_ast: bool,
    pub show_metrics: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bindings: [('a', 5), ('b', 7), ('c', 2), ('d', 4)]
                .iter()
                .cloned()
                .collect(),
            show_ast: false,
            show_metrics: false,
        }
    }
}

/// `Calculator.toml` overridden by `APP_` environment variables, nested keys
/// separated by `__` (e.g. `APP_BINDINGS__X=3`)
pub fn figment() -> Figment {
    Figment::new()
        .merge(Toml::file("Calculator.toml"))
        .merge(Env::prefixed("APP_").split("__"))
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn test_default() {
        Jail::expect_with(|_| {
            let config: Config = figment().extract()?;
            assert_eq!(config.bindings.get(&'a'), Some(&5));
            assert_eq!(config.bindings.get(&'d'), Some(&4));
            assert_eq!(config.bindings.len(), 4);
            assert!(!config.show_ast);
            assert!(!config.show_metrics);
            Ok(())
        });
    }

    #[test]
    fn test_file_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "Calculator.toml",
                r#"
                    show_ast = true

                    [bindings]
                    x = 10
                    Y = -3
                "#,
            )?;
            jail.set_env("APP_SHOW_METRICS", "true");
            jail.set_env("APP_BINDINGS__Z", "0");

            let config: Config = figment().extract()?;
            assert!(config.show_ast);
            assert!(config.show_metrics);
            assert_eq!(config.bindings.get(&'x'), Some(&10));
            assert_eq!(config.bindings.get(&'Y'), Some(&-3));
            // Environment keys are lowercased
            assert_eq!(config.bindings.get(&'z'), Some(&0));
            assert_eq!(config.bindings.get(&'a'), None);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_name() {
        Jail::expect_with(|jail| {
            jail.create_file("Calculator.toml", "[bindings]\nfoo = 1\n")?;
            assert!(figment().extract::<Config>().is_err());
            Ok(())
        });
    }
}
