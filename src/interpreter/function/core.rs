use crate::interpreter::{function::builtin, parser::core::EvalResult};

/// Type alias for builtin function handlers.
///
/// Every builtin takes exactly one already-evaluated argument.
pub type BuiltinFn = fn(f64) -> EvalResult<f64>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a name and a function pointer implementing it.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of every builtin, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

// The last three names are not letter runs, so no identifier can spell them.
builtin_functions! {
    "sqrt" => builtin::sqrt,
    "cbrt" => builtin::cbrt,
    "log"  => builtin::log,
    "sin"  => builtin::sin,
    "cos"  => builtin::cos,
    "tan"  => builtin::tan,
    "asin" => builtin::asin,
    "acos" => builtin::acos,
    "atan" => builtin::atan,
    "!"    => builtin::factorial,
    "%"    => builtin::percent,
    "|x|"  => builtin::abs,
}

/// Finds the builtin registered under `name`.
///
/// # Returns
/// The handler, or `None` if no builtin has that exact name.
///
/// # Example
/// ```
/// use scical::interpreter::function::core::lookup;
///
/// let sqrt = lookup("sqrt").unwrap();
/// assert_eq!(sqrt(16.0).unwrap(), 4.0);
/// assert!(lookup("foo").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<BuiltinFn> {
    BUILTIN_TABLE.iter()
                 .find(|b| b.name == name)
                 .map(|b| b.func)
}

/// Resolves a run of letters to the builtins it spells, outermost first.
///
/// A run that is not itself a builtin name is read as consecutive names, so
/// `sinsqrt` resolves to `sin` followed by `sqrt`. No builtin name is a
/// prefix of another, which makes the split unique.
///
/// # Returns
/// The chain of handlers, or `None` if the run cannot be split into names.
///
/// # Example
/// ```
/// use scical::interpreter::function::core::resolve;
///
/// let chain = resolve("sinsqrt").unwrap();
/// assert_eq!(chain.len(), 2);
/// assert!(resolve("sinfoo").is_none());
/// ```
#[must_use]
pub fn resolve(run: &str) -> Option<Vec<BuiltinFn>> {
    let mut chain = Vec::new();
    let mut rest = run;

    while !rest.is_empty() {
        let def = BUILTIN_TABLE.iter().find(|b| rest.starts_with(b.name))?;
        chain.push(def.func);
        rest = &rest[def.name.len()..];
    }
    Some(chain)
}
