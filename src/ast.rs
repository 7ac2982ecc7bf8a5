/// The root of a parsed source file.
///
/// A program is an ordered list of statements. Evaluating it runs every
/// statement in order and yields the value of the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Top-level statements in source order.
    pub body: Vec<Statement>,
}

/// A statement inside a program or a function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let` or `const` declaration.
    VariableDeclaration {
        /// The name being declared.
        name:        String,
        /// The optional initializer. A missing initializer binds `null`.
        value:       Option<Expr>,
        /// `true` for `const` declarations.
        is_constant: bool,
        /// Line number in the source code.
        line:        usize,
    },
    /// A named function declaration, `fn name(a, b) { ... }`.
    FunctionDeclaration(FunctionDef),
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a user-defined function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The statements executed when the function is called.
    pub body:   Vec<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The set of variants is closed: the evaluator matches on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3` or `2.5`.
    NumericLiteral {
        /// The parsed value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal such as `"hello"`.
    StringLiteral {
        /// The text between the quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Line number in the source code.
        line:  usize,
    },
    /// Assignment, `assignee = value`. Right-associative.
    Assignment {
        /// The assignment target. Only identifiers are valid at runtime.
        assignee: Box<Self>,
        /// The value being assigned.
        value:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Call expression, `callee(arguments...)`.
    Call {
        /// The expression producing the function to call.
        callee:    Box<Self>,
        /// Arguments, evaluated left to right.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Member access, `object.property` or `object[property]`.
    Member {
        /// The receiver.
        object:   Box<Self>,
        /// The property. An identifier when `computed` is `false`.
        property: Box<Self>,
        /// `true` for the bracketed form.
        computed: bool,
        /// Line number in the source code.
        line:     usize,
    },
    /// Object literal, `{ a: 1, b }`.
    ObjectLiteral {
        /// Properties in source order.
        properties: Vec<Property>,
        /// Line number in the source code.
        line:       usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use kestrel::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::NumericLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::Identifier { line, .. }
            | Self::Binary { line, .. }
            | Self::Assignment { line, .. }
            | Self::Call { line, .. }
            | Self::Member { line, .. }
            | Self::ObjectLiteral { line, .. } => *line,
        }
    }
}

/// A single entry of an object literal.
///
/// A property without a value is shorthand: `{ a }` takes the value of the
/// binding `a` from the enclosing scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// The property key.
    pub key:   String,
    /// The explicit value expression, if any.
    pub value: Option<Expr>,
    /// Line number in the source code.
    pub line:  usize,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}
