use crate::{detail_candidate, group_properties, Graph, JsonObject, JsonValue, ResourceId, Value};
use tracing::{debug, warn};

/// Holds the placeholders of the root's results.
pub const RESULTS_PROPERTY: &str = "results";
/// Holds the versions of nested resources.
pub const VERSIONS_PROPERTY: &str = "versions";

const ROOT_ARRAY_PROPERTIES: &[&str] = &[RESULTS_PROPERTY];
const NESTED_ARRAY_PROPERTIES: &[&str] = &[RESULTS_PROPERTY, VERSIONS_PROPERTY];

/// The nesting level of a projected resource. Determines which properties are always arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectionLevel {
    Root,
    Nested,
}

impl ProjectionLevel {
    /// Returns the property names that are projected as arrays even if they have a single value.
    pub fn array_properties(self) -> &'static [&'static str] {
        match self {
            ProjectionLevel::Root => ROOT_ARRAY_PROPERTIES,
            ProjectionLevel::Nested => NESTED_ARRAY_PROPERTIES,
        }
    }

    pub fn forces_array(self, name: &str) -> bool {
        self.array_properties().contains(&name)
    }
}

/// Projects the resources of a [`Graph`] into JSON objects.
///
/// Every property of a resource becomes a field named after the property's local name:
/// - properties of [`ProjectionLevel::array_properties`] always become arrays,
/// - other properties with a single value become the projection of that value,
/// - other properties with multiple values become arrays.
///
/// Literals are projected to strings and resources are projected recursively.
#[derive(Clone, Copy, Debug)]
pub struct ResourceProjector<'graph> {
    graph: &'graph Graph,
}

impl<'graph> ResourceProjector<'graph> {
    pub fn new(graph: &'graph Graph) -> Self {
        Self { graph }
    }

    /// Projects the root resource of a response.
    ///
    /// In contrast to [`Self::project_resource`], empty elements of the root's `results` are
    /// replaced by their detailed counterpart if the graph contains it (see [`detail_candidate`]).
    pub fn project_root(&self, root: &ResourceId) -> JsonObject {
        let mut path = Vec::new();
        self.project_object(root, ProjectionLevel::Root, &mut path)
    }

    /// Projects a resource below the root.
    pub fn project_resource(&self, resource: &ResourceId) -> JsonObject {
        let mut path = Vec::new();
        self.project_object(resource, ProjectionLevel::Nested, &mut path)
    }

    fn project_object<'a>(
        &self,
        resource: &'a ResourceId,
        level: ProjectionLevel,
        path: &mut Vec<&'a ResourceId>,
    ) -> JsonObject
    where
        'graph: 'a,
    {
        if path.contains(&resource) {
            warn!(%resource, "Resource references itself. Projecting the repeated occurrence as an empty object.");
            return JsonObject::new();
        }

        path.push(resource);
        let mut object = JsonObject::new();
        for (name, values) in group_properties(self.graph, resource).iter() {
            let value = if level == ProjectionLevel::Root && name == RESULTS_PROPERTY {
                JsonValue::Array(
                    values
                        .iter()
                        .map(|&value| self.project_result(value, path))
                        .collect(),
                )
            } else if level.forces_array(name) {
                self.project_array(values, path)
            } else if let &[value] = values {
                self.project_value(value, path)
            } else {
                self.project_array(values, path)
            };
            object.insert(name, value);
        }
        path.pop();

        object
    }

    fn project_array<'a>(&self, values: &[&'a Value], path: &mut Vec<&'a ResourceId>) -> JsonValue
    where
        'graph: 'a,
    {
        JsonValue::Array(
            values
                .iter()
                .map(|&value| self.project_value(value, path))
                .collect(),
        )
    }

    fn project_value<'a>(&self, value: &'a Value, path: &mut Vec<&'a ResourceId>) -> JsonValue
    where
        'graph: 'a,
    {
        match value {
            Value::Literal(literal) => JsonValue::Scalar(literal.clone()),
            Value::Resource(resource) => {
                JsonValue::Object(self.project_object(resource, ProjectionLevel::Nested, path))
            }
        }
    }

    /// Projects an element of the root's `results`, resolving empty placeholders.
    fn project_result<'a>(&self, value: &'a Value, path: &mut Vec<&'a ResourceId>) -> JsonValue
    where
        'graph: 'a,
    {
        let Value::Resource(placeholder) = value else {
            return self.project_value(value, path);
        };

        let projected = self.project_object(placeholder, ProjectionLevel::Nested, path);
        if !projected.is_empty() {
            return JsonValue::Object(projected);
        }

        let detailed = detail_candidate(placeholder)
            .as_ref()
            .and_then(|candidate| self.graph.subject(candidate));
        match detailed {
            Some(detailed) => {
                debug!(%placeholder, %detailed, "Replacing empty result with its detailed resource.");
                JsonValue::Object(self.project_object(detailed, ProjectionLevel::Nested, path))
            }
            None => {
                debug!(%placeholder, "Empty result has no detailed resource in the graph.");
                JsonValue::Object(projected)
            }
        }
    }
}
