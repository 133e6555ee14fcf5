/// A witness model from the solver.
///
/// Contains the variable assignments extracted from `(get-model)`
/// output: one `(name, value_string)` pair per declared constant the
/// solver reported. Values are kept as the solver printed them
/// (`"42"`, `"(- 3)"`, `"\"contract\""`); interpretation is left to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Model {
    assignments: Vec<(String, String)>,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model from assignment pairs.
    pub fn with_assignments(assignments: Vec<(String, String)>) -> Self {
        Self { assignments }
    }

    /// Look up a variable's value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in solver order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assignments
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Return the number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Return whether the model is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
