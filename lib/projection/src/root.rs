use crate::{Graph, ResourceId};
use tracing::warn;

/// The IRI of the main resource is expected to contain this marker.
pub const INSTANCE_MARKER: &str = "_Instance";

/// What to do if none of the root-typed resources carries the [`INSTANCE_MARKER`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RootFallback {
    /// Select the *second* root-typed resource, skipping the first one. A single candidate is
    /// selected as is.
    ///
    /// This mirrors the behavior of the gateway this service replaces and is kept for
    /// compatibility. Selections made this way are reported as [`RootSelection::Fallback`].
    #[default]
    SecondCandidate,
    /// Select nothing, i.e., only resources with the marker can become the root.
    Reject,
}

/// A root resource together with the rule that selected it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootSelection<'graph> {
    /// The resource carries the [`INSTANCE_MARKER`].
    Instance(&'graph ResourceId),
    /// The resource was picked by [`RootFallback::SecondCandidate`] and callers should not rely
    /// on it being the intended one.
    Fallback(&'graph ResourceId),
}

impl<'graph> RootSelection<'graph> {
    pub fn resource(&self) -> &'graph ResourceId {
        match *self {
            RootSelection::Instance(resource) | RootSelection::Fallback(resource) => resource,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RootSelection::Fallback(_))
    }
}

/// Finds the main resource of `graph` among the resources typed as `root_type`.
///
/// The first candidate whose IRI contains [`INSTANCE_MARKER`] wins. Otherwise, `fallback`
/// decides. `None` means that no root was found.
pub fn resolve_root<'graph>(
    graph: &'graph Graph,
    root_type: &str,
    fallback: RootFallback,
) -> Option<RootSelection<'graph>> {
    let candidates = graph.subjects_of_type(root_type);

    let instance = candidates.iter().copied().find(|candidate| {
        candidate
            .as_iri()
            .is_some_and(|iri| iri.contains(INSTANCE_MARKER))
    });
    if let Some(instance) = instance {
        return Some(RootSelection::Instance(instance));
    }

    match fallback {
        RootFallback::SecondCandidate => {
            let selected = candidates.get(1).or(candidates.first()).copied()?;
            warn!(
                root = %selected,
                candidates = candidates.len(),
                "No root resource contains '{INSTANCE_MARKER}'. Falling back to another candidate."
            );
            Some(RootSelection::Fallback(selected))
        }
        RootFallback::Reject => {
            if !candidates.is_empty() {
                warn!(
                    candidates = candidates.len(),
                    "No root resource contains '{INSTANCE_MARKER}'. Rejecting all candidates."
                );
            }
            None
        }
    }
}
