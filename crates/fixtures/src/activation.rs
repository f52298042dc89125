//! Tenant activation guard.
//!
//! Decides from configuration alone whether a dataset is loaded. Pure; no IO.

use serde::Serialize;

use pdc_infra::SeedConfig;

/// When a dataset applies to a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "rule", content = "domains")]
pub enum ActivationRule {
    /// Loaded on every deployment.
    Always,
    /// Loaded when the configured domain equals or contains one of these.
    Domains(Vec<&'static str>),
}

impl ActivationRule {
    pub fn domains(domains: &[&'static str]) -> Self {
        ActivationRule::Domains(domains.to_vec())
    }
}

/// `true` when the dataset guarded by `rule` should be seeded.
///
/// "Build all fixtures" wins unconditionally. Otherwise a candidate matches
/// when the configured domain is equal to it or contains it. Blank candidates
/// never match, and an absent domain matches nothing.
pub fn should_seed(rule: &ActivationRule, config: &SeedConfig) -> bool {
    if config.build_all_fixtures {
        return true;
    }

    let domains = match rule {
        ActivationRule::Always => return true,
        ActivationRule::Domains(domains) => domains,
    };

    let configured = config.domain();
    domains
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .any(|d| configured == d || configured.contains(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(build_all: bool, domain: Option<&str>) -> SeedConfig {
        SeedConfig {
            build_all_fixtures: build_all,
            domain: domain.map(str::to_string),
            ..SeedConfig::default()
        }
    }

    #[test]
    fn build_all_ignores_domain() {
        let rule = ActivationRule::domains(&["unrelated.example.org"]);
        assert!(should_seed(&rule, &config(true, None)));
        assert!(should_seed(&rule, &config(true, Some(""))));
        assert!(should_seed(&rule, &config(true, Some("zuid-drecht.nl"))));
    }

    #[test]
    fn exact_domain_match_activates() {
        let cfg = config(false, Some("begraven.zaakonline.nl"));
        assert!(should_seed(&ActivationRule::domains(&["begraven.zaakonline.nl"]), &cfg));
        assert!(!should_seed(&ActivationRule::domains(&["unrelated.example.org"]), &cfg));
    }

    #[test]
    fn substring_match_activates() {
        let cfg = config(false, Some("sub.westfriesland.commonground.nu"));
        assert!(should_seed(
            &ActivationRule::domains(&["westfriesland.commonground.nu"]),
            &cfg
        ));
    }

    #[test]
    fn any_listed_domain_is_enough() {
        let rule = ActivationRule::domains(&[
            "begraven.zaakonline.nl",
            "westfriesland.commonground.nu",
            "zuid-drecht.nl",
        ]);
        assert!(should_seed(&rule, &config(false, Some("dev.zuid-drecht.nl"))));
        assert!(!should_seed(&rule, &config(false, Some("utrecht.nl"))));
    }

    #[test]
    fn absent_domain_matches_nothing() {
        let rule = ActivationRule::domains(&["zuid-drecht.nl", ""]);
        assert!(!should_seed(&rule, &config(false, None)));
        assert!(!should_seed(&ActivationRule::Domains(vec![]), &config(false, Some("zuid-drecht.nl"))));
    }

    #[test]
    fn always_rule_activates_without_domain() {
        assert!(should_seed(&ActivationRule::Always, &config(false, None)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: build-all activates any rule for any domain.
            #[test]
            fn build_all_always_activates(domain in proptest::option::of("[a-z.\\-]{0,30}")) {
                let rule = ActivationRule::domains(&["zuid-drecht.nl"]);
                prop_assert!(should_seed(&rule, &config(true, domain.as_deref())));
            }

            /// Property: a domain that embeds the rule anywhere activates it.
            #[test]
            fn embedding_domain_activates(prefix in "[a-z]{0,10}\\.?", suffix in "(\\.[a-z]{1,5})?") {
                let domain = format!("{prefix}zuid-drecht.nl{suffix}");
                let rule = ActivationRule::domains(&["zuid-drecht.nl"]);
                prop_assert!(should_seed(&rule, &config(false, Some(&domain))));
            }
        }
    }
}
