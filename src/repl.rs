use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    error::ExpressionError,
    evaluate_infix,
    interpreter::value::Number,
};

/// Prompt for a fresh expression.
pub const PROMPT: &str = ">>> ";
/// Prompt while an expression is being continued.
pub const CONTINUATION_PROMPT: &str = "... ";

/// Printed when the interactive calculator starts.
pub const BANNER: &str = "Welcome to the interactive calculator
An expression can contain
- parentheses: '(' and ')'
- operators: '+', '-', '/', '^', and '*'
- operands: only numerical, for example, '23'

Example:
>>> 1 + 2 * 3
7

An expression can span multiple lines using the line continuation character '\\'
Example:
>>> 1 + 2 * \\
... 3
7

To quit - type 'exit'
---- ---- ---- ----
";

/// Joins input lines that end in `\` into whole expressions.
///
/// # Example
/// ```
/// use shunt::repl::LineAssembler;
///
/// let mut lines = LineAssembler::default();
/// assert_eq!(lines.push("1 + 2 * \\"), None);
/// assert!(lines.is_continuing());
/// assert_eq!(lines.push("3"), Some("1 + 2 * 3".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct LineAssembler {
    pending:    String,
    continuing: bool,
}

impl LineAssembler {
    /// Feeds one line of input.
    ///
    /// # Returns
    /// - `None` if the line ends in `\`; its text (minus the backslash) is
    ///   held until the expression is finished.
    /// - `Some(expression)` once a line without a trailing `\` arrives.
    pub fn push(&mut self, line: &str) -> Option<String> {
        let line = line.trim_end();
        if let Some(head) = line.strip_suffix('\\') {
            self.pending.push_str(head);
            self.continuing = true;
            return None;
        }
        self.pending.push_str(line);
        self.continuing = false;
        Some(std::mem::take(&mut self.pending))
    }

    /// Whether a continued expression is waiting for more lines.
    #[must_use]
    pub const fn is_continuing(&self) -> bool {
        self.continuing
    }

    /// Drops any partially assembled expression.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.continuing = false;
    }

    /// Flushes a continued expression whose input ended early.
    pub fn finish(&mut self) -> Option<String> {
        self.continuing.then(|| {
                           self.continuing = false;
                           std::mem::take(&mut self.pending)
                       })
    }
}

/// Splits a script into logical expressions.
///
/// Lines ending in `\` continue onto the next; blank expressions are skipped.
///
/// # Example
/// ```
/// use shunt::repl::logical_lines;
///
/// let script = "1 + 2\n\n(3 * \\\n 4)\n";
/// assert_eq!(logical_lines(script), ["1 + 2", "(3 *  4)"]);
/// ```
#[must_use]
pub fn logical_lines(source: &str) -> Vec<String> {
    let mut lines = LineAssembler::default();
    let mut expressions: Vec<String> = source.lines().filter_map(|line| lines.push(line)).collect();
    expressions.extend(lines.finish());
    expressions.retain(|expression| !expression.trim().is_empty());
    expressions
}

/// Formats the outcome of an evaluation the way the calculator prints it.
///
/// Every failure, whatever its stage, is reported with the same prefix.
///
/// # Example
/// ```
/// use shunt::{evaluate_infix, repl::render};
///
/// assert_eq!(render(&evaluate_infix("1 + 2 * 3")), "7");
/// assert!(render(&evaluate_infix("1 / 0")).starts_with("Error evaluating expression: "));
/// ```
#[must_use]
pub fn render(outcome: &Result<Number, ExpressionError>) -> String {
    match outcome {
        Ok(value) => value.to_string(),
        Err(err) => format!("Error evaluating expression: {err}"),
    }
}

/// Runs the interactive calculator until `exit` or end of input.
///
/// Ctrl-C abandons the expression being typed.
///
/// # Errors
/// Any terminal error reported by `rustyline` other than Ctrl-C or Ctrl-D.
pub fn run() -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut lines = LineAssembler::default();
    println!("{BANNER}");

    loop {
        let prompt = if lines.is_continuing() { CONTINUATION_PROMPT } else { PROMPT };
        let line = match editor.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                lines.clear();
                continue;
            },
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        };

        let Some(expression) = lines.push(&line) else {
            continue;
        };
        if expression.trim().eq_ignore_ascii_case("exit") {
            break;
        }
        if expression.trim().is_empty() {
            continue;
        }

        editor.add_history_entry(expression.as_str())?;
        println!("{}", render(&evaluate_infix(&expression)));
    }

    Ok(())
}
