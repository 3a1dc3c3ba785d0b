/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Expr` and `Stmt` node enums and `Program`
/// - expressions: Expression node structs and operator kinds
/// - statements: Statement node structs
/// - types: The language's static types
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
