use semver::{Version, VersionReq};

/// LatestVersionPolicy for picking the "latest" version of a component
///
/// The latest version is the greatest label, under semver ordering, that
/// satisfies the unconstrained range `*`. Labels that are not valid semver
/// are ignored, and so are pre-releases since `*` never matches them.
pub struct LatestVersionPolicy;

impl LatestVersionPolicy {
    /// Selects the latest label from the declared version labels
    ///
    /// # Returns
    /// The greatest satisfying label, or None if no label qualifies
    pub fn select<'a>(labels: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
        Self::max_satisfying(labels, &VersionReq::STAR)
    }

    /// Returns the greatest label that parses as semver and satisfies `range`
    ///
    /// # Arguments
    /// * `labels` - Version label strings
    /// * `range` - Version requirement to satisfy
    pub fn max_satisfying<'a>(
        labels: impl IntoIterator<Item = &'a str>,
        range: &VersionReq,
    ) -> Option<&'a str> {
        labels
            .into_iter()
            .filter_map(|label| Version::parse(label).ok().map(|version| (version, label)))
            .filter(|(version, _)| range.matches(version))
            .max_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, label)| label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_uses_semver_not_lexical_order() {
        let labels = ["1.9.0", "1.10.0", "1.2.0"];
        assert_eq!(LatestVersionPolicy::select(labels), Some("1.10.0"));
    }

    #[test]
    fn test_select_ignores_invalid_labels() {
        let labels = ["not-a-version", "0.0.1", "latest"];
        assert_eq!(LatestVersionPolicy::select(labels), Some("0.0.1"));
    }

    #[test]
    fn test_select_ignores_prereleases() {
        let labels = ["1.0.0", "2.0.0-beta.1"];
        assert_eq!(LatestVersionPolicy::select(labels), Some("1.0.0"));
    }

    #[test]
    fn test_select_empty() {
        let labels: [&str; 0] = [];
        assert_eq!(LatestVersionPolicy::select(labels), None);
    }

    #[test]
    fn test_select_only_invalid() {
        assert_eq!(LatestVersionPolicy::select(["abc", "1.0"]), None);
    }

    #[test]
    fn test_max_satisfying_with_range() {
        let range = VersionReq::parse("^1").unwrap();
        let labels = ["0.9.0", "1.4.2", "1.5.0", "2.0.0"];
        assert_eq!(
            LatestVersionPolicy::max_satisfying(labels, &range),
            Some("1.5.0")
        );
    }
}
