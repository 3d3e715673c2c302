//! Built-in functions

pub mod aggregate;
pub mod text;

use ahash::AHashMap;

/// Maximum number of entries returned by [`suggest_functions`]
pub const MAX_SUGGESTIONS: usize = 5;

/// How a function consumes its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// Two corners of a rectangle; numeric cells inside it are aggregated
    Range,
    /// A single cell's display text; a second operand is accepted and ignored
    Text,
}

/// Function implementation
#[derive(Debug, Clone, Copy)]
pub enum FunctionImpl {
    /// Reduces the numbers found in a range
    Aggregate(fn(&[f64]) -> f64),
    /// Transforms one cell's text
    Text(fn(&str) -> String),
}

/// Function definition
#[derive(Debug, Clone)]
pub struct FunctionDef {
    /// Function name (uppercase)
    pub name: &'static str,
    /// Minimum operands
    pub min_args: usize,
    /// Maximum operands
    pub max_args: usize,
    /// Implementation
    pub implementation: FunctionImpl,
    /// One-line description shown next to suggestions
    pub description: &'static str,
    /// Usage example, e.g. `=SUM(A1,B1)`
    pub syntax: &'static str,
}

impl FunctionDef {
    /// Operand shape of this function
    pub fn kind(&self) -> FunctionKind {
        match self.implementation {
            FunctionImpl::Aggregate(_) => FunctionKind::Range,
            FunctionImpl::Text(_) => FunctionKind::Text,
        }
    }

    /// Check whether `count` operands are allowed
    pub fn accepts_arg_count(&self, count: usize) -> bool {
        (self.min_args..=self.max_args).contains(&count)
    }

    /// Human readable arity, used in error messages
    pub fn arity(&self) -> String {
        if self.min_args == self.max_args {
            self.min_args.to_string()
        } else {
            format!("{} to {}", self.min_args, self.max_args)
        }
    }
}

/// Function registry
///
/// Lookups are case-insensitive. Registration order is kept for the catalog.
#[derive(Debug)]
pub struct FunctionRegistry {
    functions: AHashMap<&'static str, FunctionDef>,
    order: Vec<&'static str>,
}

impl FunctionRegistry {
    /// Create a new registry with all built-in functions
    pub fn new() -> Self {
        let mut registry = Self {
            functions: AHashMap::new(),
            order: Vec::new(),
        };

        registry.register_aggregate_functions();
        registry.register_text_functions();

        registry
    }

    /// Look up a function by name
    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name.to_ascii_uppercase().as_str())
    }

    /// Register a function, replacing any previous definition with the same name
    pub fn register(&mut self, def: FunctionDef) {
        if self.functions.insert(def.name, def.clone()).is_none() {
            self.order.push(def.name);
        }
    }

    /// All functions in registration order
    pub fn catalog(&self) -> impl Iterator<Item = &FunctionDef> {
        self.order.iter().filter_map(|name| self.functions.get(name))
    }

    /// Number of registered functions
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the registry has no functions
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Functions whose name starts with the text typed after a leading `=`
    ///
    /// Returns nothing unless `query` starts with `=`. Matching is
    /// case-insensitive, results follow catalog order and at most
    /// [`MAX_SUGGESTIONS`] are returned.
    pub fn suggest(&self, query: &str) -> Vec<&FunctionDef> {
        let prefix = match query.strip_prefix('=') {
            Some(rest) => rest.trim_start().to_ascii_uppercase(),
            None => return Vec::new(),
        };

        self.catalog()
            .filter(|def| def.name.starts_with(prefix.as_str()))
            .take(MAX_SUGGESTIONS)
            .collect()
    }

    fn register_aggregate_functions(&mut self) {
        // SUM
        self.register(FunctionDef {
            name: "SUM",
            min_args: 2,
            max_args: 2,
            implementation: FunctionImpl::Aggregate(aggregate::sum),
            description: "Adds all numbers in a range",
            syntax: "=SUM(A1,B1)",
        });

        // AVERAGE
        self.register(FunctionDef {
            name: "AVERAGE",
            min_args: 2,
            max_args: 2,
            implementation: FunctionImpl::Aggregate(aggregate::average),
            description: "Calculates the average of numbers in a range",
            syntax: "=AVERAGE(A1,B1)",
        });

        // MAX
        self.register(FunctionDef {
            name: "MAX",
            min_args: 2,
            max_args: 2,
            implementation: FunctionImpl::Aggregate(aggregate::max),
            description: "Returns the largest number in a range",
            syntax: "=MAX(A1,B1)",
        });

        // MIN
        self.register(FunctionDef {
            name: "MIN",
            min_args: 2,
            max_args: 2,
            implementation: FunctionImpl::Aggregate(aggregate::min),
            description: "Returns the smallest number in a range",
            syntax: "=MIN(A1,B1)",
        });

        // COUNT
        self.register(FunctionDef {
            name: "COUNT",
            min_args: 2,
            max_args: 2,
            implementation: FunctionImpl::Aggregate(aggregate::count),
            description: "Counts the cells that contain numbers in a range",
            syntax: "=COUNT(A1,B1)",
        });
    }

    fn register_text_functions(&mut self) {
        // TRIM
        self.register(FunctionDef {
            name: "TRIM",
            min_args: 1,
            max_args: 2,
            implementation: FunctionImpl::Text(text::trim),
            description: "Removes leading and trailing whitespace",
            syntax: "=TRIM(A1)",
        });

        // UPPER
        self.register(FunctionDef {
            name: "UPPER",
            min_args: 1,
            max_args: 2,
            implementation: FunctionImpl::Text(text::upper),
            description: "Converts text to uppercase",
            syntax: "=UPPER(A1)",
        });

        // LOWER
        self.register(FunctionDef {
            name: "LOWER",
            min_args: 1,
            max_args: 2,
            implementation: FunctionImpl::Text(text::lower),
            description: "Converts text to lowercase",
            syntax: "=LOWER(A1)",
        });

        // PROPER
        self.register(FunctionDef {
            name: "PROPER",
            min_args: 1,
            max_args: 2,
            implementation: FunctionImpl::Text(text::proper),
            description: "Capitalizes the first letter of each word",
            syntax: "=PROPER(A1)",
        });
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Suggestions from the built-in registry, see [`FunctionRegistry::suggest`]
pub fn suggest_functions(query: &str) -> Vec<&'static FunctionDef> {
    crate::evaluator::function_registry().suggest(query)
}
