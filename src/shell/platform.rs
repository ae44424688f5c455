//! Platform and environment detection.

/// Environment variables set by common CI providers.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    is_ci_with_env(|key| std::env::var(key).ok())
}

/// Check for CI using a custom env var lookup.
pub fn is_ci_with_env<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    CI_VARS.iter().any(|var| lookup(var).is_some())
}
