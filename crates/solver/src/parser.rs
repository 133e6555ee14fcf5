//! Parsing of solver stdout into a [`SolverResult`].
//!
//! Expected output shape:
//! - first line: `sat`, `unsat`, `unknown`, or `timeout`
//! - on `sat`, the remaining lines carry the `(get-model)` dump, either
//!   wrapped in `(model ...)` (older Z3) or a bare parenthesized list
//!   (Z3 4.15+, CVC5).
//!
//! Only nullary `define-fun` entries (declared constants) are extracted;
//! function interpretations for the uninterpreted mappings are skipped.

use crate::error::SolverError;
use crate::model::Model;
use crate::result::SolverResult;

/// Parse solver stdout/stderr into a `SolverResult`.
pub fn parse_solver_output(stdout: &str, stderr: &str) -> Result<SolverResult, SolverError> {
    let stdout = stdout.trim();

    if stdout.is_empty() {
        if stderr.contains("timeout") {
            return Ok(SolverResult::Unknown("timeout".to_string()));
        }
        return Err(SolverError::ParseError(format!(
            "Empty solver output. stderr: {stderr}"
        )));
    }

    let mut lines = stdout.lines().map(str::trim).filter(|l| !l.is_empty());
    let verdict = lines.next().unwrap_or("");

    match verdict {
        "unsat" => Ok(SolverResult::Unsat),
        "sat" => {
            let rest = &stdout[stdout.find("sat").map(|i| i + 3).unwrap_or(0)..];
            Ok(SolverResult::Sat(parse_model(rest)))
        }
        "unknown" => Ok(SolverResult::Unknown(unknown_reason(lines.next(), stderr))),
        "timeout" => Ok(SolverResult::Unknown("timeout".to_string())),
        other => Err(SolverError::ParseError(format!(
            "Unexpected solver output: {other}"
        ))),
    }
}

/// Reason string for an `unknown` verdict. Z3 sometimes prints it as a
/// parenthesized line after `unknown`; otherwise fall back to stderr.
fn unknown_reason(next_line: Option<&str>, stderr: &str) -> String {
    if let Some(line) = next_line {
        return line
            .trim_start_matches('(')
            .trim_end_matches(')')
            .to_string();
    }
    let stderr = stderr.trim();
    if stderr.is_empty() {
        "unknown".to_string()
    } else {
        stderr.to_string()
    }
}

/// Extract declared-constant assignments from a `(get-model)` dump.
fn parse_model(text: &str) -> Option<Model> {
    let start = text.find('(')?;
    let mut cursor = Cursor::new(&text[start..]);

    // Enter the outer block and drop the optional `model` keyword.
    cursor.enter_list()?;
    cursor.skip_keyword("model");

    let mut assignments = Vec::new();
    while let Some(entry) = cursor.next_sexp() {
        if let Some((name, value)) = parse_define_fun(entry) {
            assignments.push((name, value));
        }
    }

    if assignments.is_empty() {
        None
    } else {
        Some(Model::with_assignments(assignments))
    }
}

/// Parse one `(define-fun name () Sort value)` entry.
///
/// Entries with parameters are interpretations of the uninterpreted
/// mapping functions; they are not witness constants and return `None`.
fn parse_define_fun(entry: &str) -> Option<(String, String)> {
    let inner = entry.strip_prefix('(')?.strip_suffix(')')?;
    let mut cursor = Cursor::new(inner);

    if cursor.next_sexp()? != "define-fun" {
        return None;
    }
    let name = cursor.next_sexp()?.to_string();

    // `()` marks a nullary function, i.e. a constant.
    let params = cursor.next_sexp()?;
    if params.trim_start_matches('(').trim_end_matches(')').trim() != "" {
        return None;
    }

    let _sort = cursor.next_sexp()?;
    let value = cursor.rest().trim();
    if value.is_empty() {
        return None;
    }

    Some((name, normalize_value(value)))
}

/// Collapse the multi-line layout Z3 uses for values. Quoted strings
/// keep their exact spelling.
fn normalize_value(value: &str) -> String {
    if value.starts_with('"') {
        value.to_string()
    } else {
        value.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// A minimal S-expression reader over a string slice. Understands
/// balanced parens, atoms, and SMT-LIB string literals (where `""`
/// escapes a quote), so a string value containing parens does not
/// confuse paren matching.
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Step over the opening paren of a list, positioning the cursor at
    /// its first element.
    fn enter_list(&mut self) -> Option<()> {
        self.skip_whitespace();
        if self.text.as_bytes().get(self.pos) == Some(&b'(') {
            self.pos += 1;
            Some(())
        } else {
            None
        }
    }

    /// Consume `keyword` if it is the next atom.
    fn skip_keyword(&mut self, keyword: &str) {
        let saved = self.pos;
        match self.next_sexp() {
            Some(atom) if atom == keyword => {}
            _ => self.pos = saved,
        }
    }

    /// Unconsumed remainder of the input.
    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Read the next S-expression (list, atom, or string literal).
    /// Returns `None` at end of input or at a closing paren.
    fn next_sexp(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        let bytes = self.text.as_bytes();
        let start = self.pos;

        match bytes.get(self.pos)? {
            b')' => None,
            b'(' => {
                let mut depth = 0usize;
                while self.pos < bytes.len() {
                    match bytes[self.pos] {
                        b'(' => depth += 1,
                        b')' => {
                            depth -= 1;
                            if depth == 0 {
                                self.pos += 1;
                                return Some(&self.text[start..self.pos]);
                            }
                        }
                        b'"' => {
                            self.pos += 1;
                            self.skip_string_body();
                            continue;
                        }
                        _ => {}
                    }
                    self.pos += 1;
                }
                None
            }
            b'"' => {
                self.pos += 1;
                self.skip_string_body();
                Some(&self.text[start..self.pos])
            }
            _ => {
                while self.pos < bytes.len()
                    && !bytes[self.pos].is_ascii_whitespace()
                    && bytes[self.pos] != b'('
                    && bytes[self.pos] != b')'
                {
                    self.pos += 1;
                }
                Some(&self.text[start..self.pos])
            }
        }
    }

    /// Advance past the body of a string literal whose opening quote
    /// has been consumed, leaving the cursor after the closing quote.
    fn skip_string_body(&mut self) {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() {
            if bytes[self.pos] == b'"' {
                // A doubled quote is an escaped quote, not a close.
                if bytes.get(self.pos + 1) == Some(&b'"') {
                    self.pos += 2;
                    continue;
                }
                self.pos += 1;
                return;
            }
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ---- verdict parsing ----

    #[test]
    fn parse_unsat() {
        let result = parse_solver_output("unsat\n", "").unwrap();
        assert_eq!(result, SolverResult::Unsat);
    }

    #[test]
    fn parse_sat_no_model() {
        let result = parse_solver_output("sat\n", "").unwrap();
        assert_eq!(result, SolverResult::Sat(None));
    }

    #[test]
    fn parse_unknown() {
        let result = parse_solver_output("unknown\n", "").unwrap();
        assert_eq!(result, SolverResult::Unknown("unknown".to_string()));
    }

    #[test]
    fn parse_unknown_with_reason() {
        let result = parse_solver_output("unknown\n(timeout)\n", "").unwrap();
        assert_eq!(result, SolverResult::Unknown("timeout".to_string()));
    }

    #[test]
    fn parse_timeout_verdict() {
        let result = parse_solver_output("timeout\n", "").unwrap();
        assert_eq!(result, SolverResult::Unknown("timeout".to_string()));
    }

    #[test]
    fn parse_empty_output_error() {
        assert!(parse_solver_output("", "").is_err());
    }

    #[test]
    fn parse_empty_output_with_timeout_stderr() {
        let result = parse_solver_output("", "timeout reached").unwrap();
        assert_eq!(result, SolverResult::Unknown("timeout".to_string()));
    }

    #[test]
    fn parse_garbage_error() {
        assert!(parse_solver_output("error \"line 3: unknown sort\"\n", "").is_err());
    }

    // ---- model extraction ----

    #[test]
    fn parse_sat_with_model_old_format() {
        let output = "\
sat
(model
  (define-fun amount () Int 0)
  (define-fun gasLeft () Int 5)
)";
        let result = parse_solver_output(output, "").unwrap();
        let model = result.model().unwrap();
        assert_eq!(model.get("amount"), Some("0"));
        assert_eq!(model.get("gasLeft"), Some("5"));
    }

    #[test]
    fn parse_sat_with_model_new_format() {
        let output = "\
sat
(
  (define-fun amountReceived2 () Int
    100)
  (define-fun owner () String
    \"\")
)";
        let result = parse_solver_output(output, "").unwrap();
        let model = result.model().unwrap();
        assert_eq!(model.get("amountReceived2"), Some("100"));
        assert_eq!(model.get("owner"), Some("\"\""));
    }

    #[test]
    fn parse_negative_value() {
        let output = "\
sat
(
  (define-fun gasSpent () Int
    (- 3))
)";
        let result = parse_solver_output(output, "").unwrap();
        assert_eq!(result.model().unwrap().get("gasSpent"), Some("(- 3)"));
    }

    #[test]
    fn parse_string_value_with_parens() {
        let output = "\
sat
(
  (define-fun router1 () String \"(not)(a)(list)\")
  (define-fun amount () Int 7)
)";
        let result = parse_solver_output(output, "").unwrap();
        let model = result.model().unwrap();
        assert_eq!(model.get("router1"), Some("\"(not)(a)(list)\""));
        assert_eq!(model.get("amount"), Some("7"));
    }

    #[test]
    fn parse_sentinel_sized_value() {
        let sentinel =
            "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        let output = format!("sat\n(\n  (define-fun allowance1 () Int\n    {sentinel})\n)");
        let result = parse_solver_output(&output, "").unwrap();
        assert_eq!(result.model().unwrap().get("allowance1"), Some(sentinel));
    }

    #[test]
    fn function_interpretations_are_skipped() {
        let output = "\
sat
(
  (define-fun amount () Int 0)
  (define-fun allowances ((x!0 String) (x!1 String) (x!2 String)) Int
    0)
)";
        let result = parse_solver_output(output, "").unwrap();
        let model = result.model().unwrap();
        assert_eq!(model.len(), 1);
        assert_eq!(model.get("amount"), Some("0"));
        assert_eq!(model.get("allowances"), None);
    }

    // ---- define-fun entry parsing ----

    #[test]
    fn parse_define_fun_one_line() {
        let entry = "(define-fun amount () Int 42)";
        assert_eq!(
            parse_define_fun(entry),
            Some(("amount".to_string(), "42".to_string()))
        );
    }

    #[test]
    fn parse_define_fun_multiline_value() {
        let entry = "(define-fun gasSpent () Int\n    (- 3))";
        assert_eq!(
            parse_define_fun(entry),
            Some(("gasSpent".to_string(), "(- 3)".to_string()))
        );
    }

    #[test]
    fn parse_define_fun_with_params_skipped() {
        let entry = "(define-fun f ((x Int)) Int (+ x 1))";
        assert_eq!(parse_define_fun(entry), None);
    }

    // ---- cursor ----

    #[test]
    fn cursor_reads_atoms_and_lists() {
        let mut cursor = Cursor::new("foo (bar baz) qux");
        assert_eq!(cursor.next_sexp(), Some("foo"));
        assert_eq!(cursor.next_sexp(), Some("(bar baz)"));
        assert_eq!(cursor.next_sexp(), Some("qux"));
        assert_eq!(cursor.next_sexp(), None);
    }

    #[test]
    fn cursor_stops_at_close_paren() {
        let mut cursor = Cursor::new("a ) b");
        assert_eq!(cursor.next_sexp(), Some("a"));
        assert_eq!(cursor.next_sexp(), None);
    }

    #[test]
    fn cursor_reads_escaped_string() {
        let mut cursor = Cursor::new("\"a\"\"b\" tail");
        assert_eq!(cursor.next_sexp(), Some("\"a\"\"b\""));
        assert_eq!(cursor.next_sexp(), Some("tail"));
    }

    proptest! {
        /// Any i64 rendered the way Z3 prints integers parses back to
        /// the same value string.
        #[test]
        fn define_fun_int_values_roundtrip(value: i64) {
            let printed = if value < 0 {
                format!("(- {})", value.unsigned_abs())
            } else {
                value.to_string()
            };
            let output = format!("sat\n(\n  (define-fun x () Int\n    {printed})\n)");
            let result = parse_solver_output(&output, "").unwrap();
            prop_assert_eq!(result.model().unwrap().get("x"), Some(printed.as_str()));
        }

        /// Identifier-like names survive extraction.
        #[test]
        fn define_fun_names_roundtrip(name in "[a-zA-Z_][a-zA-Z0-9_!.]{0,20}") {
            prop_assume!(name != "define-fun" && name != "model");
            let output = format!("sat\n((define-fun {name} () Int 1))");
            let result = parse_solver_output(&output, "").unwrap();
            prop_assert_eq!(result.model().unwrap().get(&name), Some("1"));
        }
    }
}
