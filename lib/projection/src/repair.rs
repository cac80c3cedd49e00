use crate::ResourceId;

/// Marks result placeholder resources, e.g., `ex:results_Foo123` stands in for `ex:Foo123`.
pub const PLACEHOLDER_MARKER: &str = "results_";

/// Derives the detailed resource that a result placeholder refers to.
///
/// Producers link a result placeholder to its detailed counterpart only through the naming
/// convention, so the counterpart is found by removing every [`PLACEHOLDER_MARKER`] from the IRI.
/// Returns `None` for blank nodes and for IRIs without the marker.
pub fn detail_candidate(placeholder: &ResourceId) -> Option<ResourceId> {
    let iri = placeholder.as_iri()?;
    iri.contains(PLACEHOLDER_MARKER)
        .then(|| ResourceId::Iri(iri.replace(PLACEHOLDER_MARKER, "")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_marker() {
        let placeholder = ResourceId::iri("http://example.org/ontology#results_Foo123");
        assert_eq!(
            detail_candidate(&placeholder),
            Some(ResourceId::iri("http://example.org/ontology#Foo123"))
        );
    }

    #[test]
    fn strips_every_occurrence() {
        let placeholder = ResourceId::iri("http://ex.org/results_a/results_b");
        assert_eq!(
            detail_candidate(&placeholder),
            Some(ResourceId::iri("http://ex.org/a/b"))
        );
    }

    #[test]
    fn ignores_resources_without_marker() {
        assert_eq!(detail_candidate(&ResourceId::iri("http://ex.org/result_a")), None);
        assert_eq!(detail_candidate(&ResourceId::blank_node("results_a")), None);
    }

    proptest! {
        #[test]
        fn removes_marker_between_prefix_and_suffix(
            prefix in "[a-zA-Z0-9:/#._-]{0,24}",
            suffix in "[a-zA-Z0-9:/#._-]{0,24}",
        ) {
            let iri = format!("{prefix}{PLACEHOLDER_MARKER}{suffix}");
            prop_assume!(iri.matches(PLACEHOLDER_MARKER).count() == 1);

            let candidate = detail_candidate(&ResourceId::iri(iri));

            prop_assert_eq!(candidate, Some(ResourceId::iri(format!("{prefix}{suffix}"))));
        }
    }
}
