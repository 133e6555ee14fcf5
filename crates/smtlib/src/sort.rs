/// SMT-LIB sort (type) representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sort {
    /// Boolean sort
    Bool,
    /// Mathematical integer sort (unbounded)
    Int,
    /// SMT-LIB string sort
    String,
    /// Uninterpreted sort declared with `(declare-sort name 0)`
    Uninterpreted(std::string::String),
}
