//! Interpretation of witness value strings.
//!
//! The solver layer keeps model values as the engine printed them;
//! this module decodes the two spellings the oracle cares about:
//! integers (`42`, `(- 3)`) and string literals (`"contract"`).

use num_bigint::BigInt;

/// Parse an SMT integer value string into a `BigInt`.
///
/// Handles the unary-minus form `(- n)` the solvers use for negatives.
pub fn parse_int(value: &str) -> Option<BigInt> {
    let value = value.trim();

    if let Some(inner) = value.strip_prefix("(-").and_then(|v| v.strip_suffix(')')) {
        let magnitude: BigInt = inner.trim().parse().ok()?;
        return Some(-magnitude);
    }

    value.parse().ok()
}

/// Strip the quotes from an SMT string value, undoing the doubled-quote
/// escape. Returns `None` when the value is not a string literal.
pub fn unquote(value: &str) -> Option<String> {
    let value = value.trim();
    let inner = value.strip_prefix('"')?.strip_suffix('"')?;
    Some(inner.replace("\"\"", "\""))
}
