/// The environment module implements lexical scopes.
///
/// Environments map names to values and link to their enclosing environment,
/// forming the chain that variable lookup and assignment walk outward.
///
/// # Responsibilities
/// - Defines, reads and assigns bindings.
/// - Keeps captured scopes alive for closures through shared ownership.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and executes
/// statements, manages variable state through the environment chain, and
/// writes printed output. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every expression and statement form.
/// - Handles variables, functions, closures and control flow.
/// - Reports runtime errors such as type mismatches or bad calls.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters, and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme,
///   literal value and line.
/// - Skips whitespace and comments while counting lines.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables later phases to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Reports grammar errors with location info and recovers at statement
///   boundaries.
/// - Desugars `for` loops into `while` loops.
pub mod parser;
/// Keeps deep recursion off the end of the host stack.
///
/// Parsing and evaluation recurse once per nesting level of the source, so
/// deeply nested or deeply recursive programs grow the stack on demand
/// instead of overflowing it.
pub(crate) mod stack;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values a program computes with: `nil`, booleans,
/// numbers, strings and callables. It also provides truthiness, equality and
/// the textual form used by `print`.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Defines user and native callables.
pub mod value;
