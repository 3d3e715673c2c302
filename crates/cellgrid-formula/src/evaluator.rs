//! Formula evaluator
//!
//! Evaluates formulas against a [`CellStore`] on demand. Nothing is cached
//! between calls and nothing is written back; every call recomputes from the
//! raw values.
//!
//! Referenced formula cells are resolved with an explicit work stack rather
//! than native recursion, so a reference chain may run through every cell of
//! the grid.

use crate::ast::FormulaCall;
use crate::error::{FormulaError, FormulaResult};
use crate::functions::{FunctionDef, FunctionImpl, FunctionRegistry};
use crate::parser::parse_formula;
use ahash::{AHashMap, AHashSet};
use cellgrid_core::{CellAddress, CellStore};
use log::trace;
use std::sync::OnceLock;

/// Display text for any formula that cannot be evaluated
pub const ERROR_SENTINEL: &str = "#ERROR!";

/// Global function registry (lazily initialized)
static FUNCTION_REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();

pub(crate) fn function_registry() -> &'static FunctionRegistry {
    FUNCTION_REGISTRY.get_or_init(FunctionRegistry::new)
}

/// Evaluation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvaluationOptions {
    /// Maximum number of formula cells on a single reference chain
    ///
    /// `None` (the default) imposes no limit beyond the grid itself.
    pub max_depth: Option<usize>,
}

impl EvaluationOptions {
    /// Options with a chain length limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }
}

/// Addresses of the formula cells currently being evaluated
///
/// An address seen twice on the same chain is a cycle. Sibling references to
/// the same cell are fine because each address is removed again once its
/// evaluation finishes.
#[derive(Debug, Clone, Default)]
pub struct RecursionGuard {
    visiting: AHashSet<CellAddress>,
}

impl RecursionGuard {
    /// Create an empty guard
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a guard for evaluating the formula stored at `origin`
    pub fn starting_at(origin: CellAddress) -> Self {
        let mut guard = Self::new();
        guard.visiting.insert(origin);
        guard
    }

    /// Current chain length
    pub fn depth(&self) -> usize {
        self.visiting.len()
    }

    /// Check if `addr` is on the current chain
    pub fn contains(&self, addr: &CellAddress) -> bool {
        self.visiting.contains(addr)
    }

    fn enter(&mut self, addr: CellAddress, max_depth: Option<usize>) -> FormulaResult<()> {
        if self.visiting.contains(&addr) {
            trace!("cycle detected at {}", addr);
            return Err(FormulaError::CircularReference(addr.to_a1_string()));
        }
        if let Some(max) = max_depth {
            if self.visiting.len() >= max {
                return Err(FormulaError::DepthExceeded(max));
            }
        }
        self.visiting.insert(addr);
        Ok(())
    }

    fn leave(&mut self, addr: &CellAddress) {
        self.visiting.remove(addr);
    }
}

/// Results of referenced formula cells, valid for one evaluation
///
/// Only non-fatal results are kept; a fatal error ends the whole evaluation.
type Resolved = AHashMap<CellAddress, FormulaResult<String>>;

/// A formula cell waiting for its own references to resolve
struct Frame {
    addr: CellAddress,
    call: FormulaCall,
    func: &'static FunctionDef,
    /// Formula cells still to resolve, last one first
    pending: Vec<CellAddress>,
}

/// Formula evaluator bound to one store snapshot
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    store: &'a CellStore,
    options: EvaluationOptions,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator with default options
    pub fn new(store: &'a CellStore) -> Self {
        Self::with_options(store, EvaluationOptions::default())
    }

    /// Create an evaluator with custom options
    pub fn with_options(store: &'a CellStore, options: EvaluationOptions) -> Self {
        Self { store, options }
    }

    /// Evaluation options in effect
    pub fn options(&self) -> EvaluationOptions {
        self.options
    }

    /// Display text for a raw value that is not stored in any cell
    pub fn display(&self, raw: &str) -> String {
        self.evaluate(raw, &mut RecursionGuard::new())
            .unwrap_or_else(|_| ERROR_SENTINEL.to_string())
    }

    /// Display text for the cell at `addr`
    ///
    /// Literals come back unchanged, formulas are evaluated and any failure
    /// becomes [`ERROR_SENTINEL`]. Absent cells display as empty text.
    pub fn display_cell(&self, addr: CellAddress) -> String {
        let raw = self.store.raw_value(&addr);
        self.evaluate(raw, &mut RecursionGuard::starting_at(addr))
            .unwrap_or_else(|_| ERROR_SENTINEL.to_string())
    }

    /// Evaluate a raw value
    ///
    /// Returns the raw value unchanged when it is not a formula. The guard
    /// should already contain the address the raw value is stored at, if any.
    /// It is left as it was passed in.
    pub fn evaluate(&self, raw: &str, guard: &mut RecursionGuard) -> FormulaResult<String> {
        if !raw.starts_with('=') {
            return Ok(raw.to_string());
        }

        let (call, func) = self.prepare(raw)?;
        let mut resolved = Resolved::new();
        self.resolve(self.dependencies(&call, func), guard, &mut resolved)?;
        self.apply(&call, func, &resolved)
    }

    /// Parse a formula and check it against the registry and the grid
    fn prepare(&self, raw: &str) -> FormulaResult<(FormulaCall, &'static FunctionDef)> {
        let call = parse_formula(raw)?;
        let func = function_registry()
            .get(&call.name)
            .ok_or_else(|| FormulaError::UnknownFunction(call.name.clone()))?;

        check_arg_count(func, call.operands.len())?;
        match func.implementation {
            FunctionImpl::Aggregate(_) => {
                for operand in &call.operands {
                    self.check_reference(operand)?;
                }
            }
            // Only the first operand of a text function is read
            FunctionImpl::Text(_) => {
                if let Some(target) = call.target() {
                    self.check_reference(&target)?;
                }
            }
        }

        Ok((call, func))
    }

    /// Formula cells a call reads, in reading order
    fn dependencies(&self, call: &FormulaCall, func: &FunctionDef) -> Vec<CellAddress> {
        let is_formula = |addr: &CellAddress| self.store.raw_value(addr).starts_with('=');
        match func.implementation {
            FunctionImpl::Aggregate(_) => call
                .range()
                .map(|range| range.cells().filter(is_formula).collect())
                .unwrap_or_default(),
            FunctionImpl::Text(_) => call.target().filter(is_formula).into_iter().collect(),
        }
    }

    /// Evaluate every formula cell reachable from `roots` into `resolved`
    ///
    /// Depth-first over an explicit stack of [`Frame`]s. A frame is applied
    /// once all of its references are resolved. Cycles and the depth limit
    /// abort the walk with the guard restored.
    fn resolve(
        &self,
        mut roots: Vec<CellAddress>,
        guard: &mut RecursionGuard,
        resolved: &mut Resolved,
    ) -> FormulaResult<()> {
        roots.reverse();
        let mut stack: Vec<Frame> = Vec::new();

        loop {
            let next = match stack.last_mut() {
                Some(frame) => frame.pending.pop(),
                None => match roots.pop() {
                    Some(addr) => Some(addr),
                    None => return Ok(()),
                },
            };

            match next {
                Some(addr) => {
                    if resolved.contains_key(&addr) {
                        continue;
                    }
                    if let Err(e) = guard.enter(addr, self.options.max_depth) {
                        unwind(stack, guard);
                        return Err(e);
                    }
                    match self.prepare(self.store.raw_value(&addr)) {
                        Ok((call, func)) => {
                            let mut pending = self.dependencies(&call, func);
                            pending.reverse();
                            stack.push(Frame {
                                addr,
                                call,
                                func,
                                pending,
                            });
                        }
                        Err(e) => {
                            guard.leave(&addr);
                            resolved.insert(addr, Err(e));
                        }
                    }
                }
                None => {
                    let Some(frame) = stack.pop() else {
                        return Ok(());
                    };
                    guard.leave(&frame.addr);
                    let result = self.apply(&frame.call, frame.func, resolved);
                    if let Err(e) = &result {
                        if e.is_fatal() {
                            let e = e.clone();
                            unwind(stack, guard);
                            return Err(e);
                        }
                    }
                    resolved.insert(frame.addr, result);
                }
            }
        }
    }

    /// Run a call's function once its references are resolved
    fn apply(
        &self,
        call: &FormulaCall,
        func: &FunctionDef,
        resolved: &Resolved,
    ) -> FormulaResult<String> {
        trace!("dispatch {}", call);

        match func.implementation {
            FunctionImpl::Aggregate(aggregate) => {
                let range = call
                    .range()
                    .ok_or_else(|| FormulaError::Parse(format!("{} needs a range", func.name)))?;

                // Absent and non-numeric cells are skipped, as are formula
                // cells whose own evaluation failed
                let mut values = Vec::new();
                for addr in range.cells() {
                    if self.store.get(&addr).is_none() {
                        continue;
                    }
                    let text = match self.cell_text(addr, resolved) {
                        Ok(text) => text,
                        Err(e) if e.is_fatal() => return Err(e),
                        Err(_) => continue,
                    };
                    if let Some(n) = parse_number(&text) {
                        values.push(n);
                    }
                }
                Ok(format_number(aggregate(&values)))
            }
            FunctionImpl::Text(transform) => {
                let target = call
                    .target()
                    .ok_or_else(|| FormulaError::Parse(format!("{} needs a cell", func.name)))?;
                let text = match self.cell_text(target, resolved) {
                    Ok(text) => text,
                    Err(e) if e.is_fatal() => return Err(e),
                    Err(_) => String::new(),
                };
                Ok(transform(&text))
            }
        }
    }

    /// Display text of a referenced cell
    fn cell_text(&self, addr: CellAddress, resolved: &Resolved) -> FormulaResult<String> {
        let raw = self.store.raw_value(&addr);
        if !raw.starts_with('=') {
            return Ok(raw.to_string());
        }
        resolved
            .get(&addr)
            .cloned()
            .unwrap_or_else(|| Err(FormulaError::InvalidReference(addr.to_a1_string())))
    }

    fn check_reference(&self, addr: &CellAddress) -> FormulaResult<()> {
        if self.store.bounds().contains(addr) {
            Ok(())
        } else {
            Err(FormulaError::InvalidReference(addr.to_a1_string()))
        }
    }
}

/// Drop every in-progress frame from the guard
fn unwind(stack: Vec<Frame>, guard: &mut RecursionGuard) {
    for frame in &stack {
        guard.leave(&frame.addr);
    }
}

fn check_arg_count(func: &FunctionDef, actual: usize) -> FormulaResult<()> {
    if func.accepts_arg_count(actual) {
        Ok(())
    } else {
        Err(FormulaError::ArgumentCount {
            function: func.name.to_string(),
            expected: func.arity(),
            actual,
        })
    }
}

/// Evaluate a raw value against `store` with default options
///
/// Convenience wrapper around [`Evaluator::evaluate`].
pub fn evaluate(raw: &str, store: &CellStore, guard: &mut RecursionGuard) -> FormulaResult<String> {
    Evaluator::new(store).evaluate(raw, guard)
}

/// Parse cell text as a number
///
/// Surrounding whitespace is ignored and the rest must be a number in full,
/// so text with a numeric prefix such as `5 apples` is not a number.
/// Infinities and NaN are not numbers either.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Format a number as display text
///
/// Integral values print without a fractional part.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellgrid_core::GridBounds;
    use pretty_assertions::assert_eq;

    fn addr(s: &str) -> CellAddress {
        CellAddress::parse(s).unwrap()
    }

    fn store_with(cells: &[(&str, &str)]) -> CellStore {
        let mut store = CellStore::new();
        for (a, raw) in cells {
            store.set(addr(a), *raw, None).unwrap();
        }
        store
    }

    #[test]
    fn test_literals_unchanged() {
        let store = CellStore::new();
        let eval = Evaluator::new(&store);
        assert_eq!(eval.display("hello"), "hello");
        assert_eq!(eval.display(" 42 "), " 42 ");
        assert_eq!(eval.display(""), "");
    }

    #[test]
    fn test_sum_skips_text() {
        let store = store_with(&[("A1", "1"), ("A2", "x"), ("A3", "3")]);
        let eval = Evaluator::new(&store);
        assert_eq!(eval.display("=SUM(A1,A3)"), "4");
        assert_eq!(eval.display("=SUM(A3,A1)"), "4");
        assert_eq!(eval.display("=COUNT(A1,A3)"), "2");
    }

    #[test]
    fn test_aggregates() {
        let store = store_with(&[("A1", "2"), ("B1", "4.5"), ("A2", "-1"), ("B2", " 8 ")]);
        let eval = Evaluator::new(&store);
        assert_eq!(eval.display("=SUM(A1,B2)"), "13.5");
        assert_eq!(eval.display("=AVERAGE(A1,B2)"), "3.375");
        assert_eq!(eval.display("=MAX(A1,B2)"), "8");
        assert_eq!(eval.display("=MIN(A1,B2)"), "-1");
        assert_eq!(eval.display("=COUNT(A1,B2)"), "4");
    }

    #[test]
    fn test_empty_range_is_zero() {
        let store = store_with(&[("A1", "x"), ("A2", "y")]);
        let eval = Evaluator::new(&store);
        for f in ["SUM", "AVERAGE", "MAX", "MIN", "COUNT"] {
            assert_eq!(eval.display(&format!("={}(A1,A5)", f)), "0", "{}", f);
        }
    }

    #[test]
    fn test_nested_formulas() {
        let store = store_with(&[
            ("A1", "1"),
            ("A2", "2"),
            ("A3", "=SUM(A1,A2)"),
            ("B1", "=SUM(A1,A3)"),
        ]);
        let eval = Evaluator::new(&store);
        assert_eq!(eval.display_cell(addr("A3")), "3");
        assert_eq!(eval.display_cell(addr("B1")), "6");
    }

    #[test]
    fn test_shared_reference_is_not_a_cycle() {
        let store = store_with(&[
            ("A1", "5"),
            ("B1", "=SUM(A1,A1)"),
            ("B2", "=SUM(A1,A1)"),
            ("C1", "=SUM(B1,B2)"),
        ]);
        assert_eq!(Evaluator::new(&store).display_cell(addr("C1")), "10");
    }

    #[test]
    fn test_self_reference() {
        let store = store_with(&[("A1", "=SUM(A1,A1)")]);
        let eval = Evaluator::new(&store);
        assert_eq!(eval.display_cell(addr("A1")), ERROR_SENTINEL);

        let err = eval
            .evaluate("=SUM(A1,A1)", &mut RecursionGuard::starting_at(addr("A1")))
            .unwrap_err();
        assert!(err.is_circular());
    }

    #[test]
    fn test_transitive_cycle() {
        let store = store_with(&[("A1", "=SUM(B1,B1)"), ("B1", "=UPPER(C1)"), ("C1", "=LOWER(A1)")]);
        let eval = Evaluator::new(&store);
        assert_eq!(eval.display_cell(addr("A1")), ERROR_SENTINEL);
        assert_eq!(eval.display_cell(addr("B1")), ERROR_SENTINEL);
        assert_eq!(eval.display_cell(addr("C1")), ERROR_SENTINEL);
    }

    #[test]
    fn test_cycle_outside_range_origin() {
        // D1 is not on the cycle but depends on it
        let store = store_with(&[("A1", "=SUM(A1,A2)"), ("D1", "=SUM(A1,A1)")]);
        assert_eq!(Evaluator::new(&store).display_cell(addr("D1")), ERROR_SENTINEL);
    }

    #[test]
    fn test_broken_formula_in_range_is_skipped() {
        let store = store_with(&[("A1", "1"), ("A2", "=NOPE(A1)"), ("A3", "=SUM(A1)")]);
        let eval = Evaluator::new(&store);
        assert_eq!(eval.display_cell(addr("A2")), ERROR_SENTINEL);
        assert_eq!(eval.display("=SUM(A1,A3)"), "1");
    }

    #[test]
    fn test_text_functions() {
        let store = store_with(&[("A1", "  john  q public  "), ("B1", "MiXeD")]);
        let eval = Evaluator::new(&store);
        assert_eq!(eval.display("=TRIM(A1)"), "john  q public");
        assert_eq!(eval.display("=PROPER(A1)"), "  John  Q Public  ");
        assert_eq!(eval.display("=UPPER(B1)"), "MIXED");
        assert_eq!(eval.display("=LOWER(B1,Z99)"), "mixed");
        assert_eq!(eval.display("=UPPER(C1)"), "");
    }

    #[test]
    fn test_text_of_formula() {
        let store = store_with(&[("A1", "abc"), ("B1", "=UPPER(A1)"), ("C1", "=PROPER(B1)")]);
        assert_eq!(Evaluator::new(&store).display_cell(addr("C1")), "Abc");
    }

    #[test]
    fn test_text_of_error_is_empty() {
        let store = store_with(&[("A1", "=SUM(A1)"), ("B1", "=UPPER(A1)")]);
        assert_eq!(Evaluator::new(&store).display_cell(addr("B1")), "");
    }

    #[test]
    fn test_malformed_formulas() {
        let store = store_with(&[("A1", "1")]);
        let eval = Evaluator::new(&store);
        for raw in ["=", "=SUM(A1", "=SUM(A1)", "=FOO(A1,A2)", "=SUM(A1,A2,A3)", "=1+1"] {
            assert_eq!(eval.display(raw), ERROR_SENTINEL, "{}", raw);
        }
    }

    #[test]
    fn test_error_kinds() {
        let store = CellStore::new();
        let eval = Evaluator::new(&store);
        let mut guard = RecursionGuard::new();

        assert!(matches!(eval.evaluate("=SUM(A1", &mut guard), Err(FormulaError::Parse(_))));
        assert!(matches!(
            eval.evaluate("=FOO(A1)", &mut guard),
            Err(FormulaError::UnknownFunction(name)) if name == "FOO"
        ));
        assert!(matches!(
            eval.evaluate("=SUM(A1)", &mut guard),
            Err(FormulaError::ArgumentCount { actual: 1, .. })
        ));
        assert!(matches!(
            eval.evaluate("=SUM(A1,A101)", &mut guard),
            Err(FormulaError::InvalidReference(r)) if r == "A101"
        ));
        assert_eq!(guard.depth(), 0);
    }

    #[test]
    fn test_out_of_bounds_reference() {
        let mut store = CellStore::with_bounds(GridBounds::new(10, 3));
        store.set(addr("A1"), "1", None).unwrap();
        let eval = Evaluator::new(&store);
        assert_eq!(eval.display("=SUM(A1,C10)"), "1");
        assert_eq!(eval.display("=SUM(A1,D1)"), ERROR_SENTINEL);
        assert_eq!(eval.display("=UPPER(A11)"), ERROR_SENTINEL);
    }

    #[test]
    fn test_long_chain() {
        let mut store = CellStore::new();
        for row in 0..99 {
            let next = CellAddress::new(row + 1, 0);
            store
                .set(CellAddress::new(row, 0), format!("=UPPER({})", next), None)
                .unwrap();
        }
        store.set(CellAddress::new(99, 0), "end", None).unwrap();

        let eval = Evaluator::new(&store);
        assert_eq!(eval.display_cell(addr("A1")), "END");
        assert_eq!(eval.display_cell(addr("A60")), "END");

        let limited = Evaluator::with_options(&store, EvaluationOptions::with_max_depth(16));
        assert_eq!(limited.display_cell(addr("A1")), ERROR_SENTINEL);
        assert_eq!(limited.display_cell(addr("A90")), "END");
    }

    /// Every cell of the grid on one chain, walking rows left to right and
    /// back again
    fn snake_order(bounds: GridBounds) -> Vec<CellAddress> {
        let mut order = Vec::new();
        for row in 0..bounds.rows {
            if row % 2 == 0 {
                order.extend((0..bounds.cols).map(|col| CellAddress::new(row, col)));
            } else {
                order.extend((0..bounds.cols).rev().map(|col| CellAddress::new(row, col)));
            }
        }
        order
    }

    #[test]
    fn test_chain_through_whole_grid() {
        let mut store = CellStore::new();
        let order = snake_order(store.bounds());
        assert_eq!(order.len(), 2600);

        for pair in order.windows(2) {
            store.set(pair[0], format!("=LOWER({})", pair[1]), None).unwrap();
        }
        let last = order[order.len() - 1];
        store.set(last, "End", None).unwrap();

        let eval = Evaluator::new(&store);
        assert_eq!(eval.display_cell(order[0]), "end");

        // Closing the loop turns the whole chain into a cycle
        store.set(last, format!("=LOWER({})", order[0]), None).unwrap();
        let eval = Evaluator::new(&store);
        assert_eq!(eval.display_cell(order[0]), ERROR_SENTINEL);
        assert_eq!(eval.display_cell(order[1300]), ERROR_SENTINEL);
    }

    #[test]
    fn test_wide_fan_out() {
        // Each row sums the whole column above it
        let mut store = CellStore::new();
        store.set(addr("A1"), "1", None).unwrap();
        for row in 1..100 {
            store
                .set(CellAddress::new(row, 0), format!("=SUM(A1,A{})", row), None)
                .unwrap();
        }
        let eval = Evaluator::new(&store);
        assert_eq!(eval.display_cell(addr("A2")), "1");
        assert_eq!(eval.display_cell(addr("A3")), "2");
        assert_eq!(eval.display_cell(addr("A4")), "4");
        assert_eq!(eval.display_cell(addr("A20")), "262144");
    }

    #[test]
    fn test_guard_restored_after_cycle() {
        let store = store_with(&[("A1", "=UPPER(B1)"), ("B1", "=UPPER(C1)"), ("C1", "=UPPER(B1)")]);
        let eval = Evaluator::new(&store);
        let mut guard = RecursionGuard::starting_at(addr("A1"));
        let err = eval.evaluate("=UPPER(B1)", &mut guard).unwrap_err();
        assert!(err.is_circular());
        assert_eq!(guard.depth(), 1);
        assert!(guard.contains(&addr("A1")));
    }

    #[test]
    fn test_text_function_ignores_second_operand() {
        let store = store_with(&[("A1", "MiXeD")]);
        let eval = Evaluator::new(&store);
        assert_eq!(eval.display("=UPPER(A1,A200)"), "MIXED");
        assert_eq!(eval.display("=LOWER(A1,ZZ1)"), "mixed");
        assert_eq!(eval.display("=UPPER(A200,A1)"), ERROR_SENTINEL);
        assert_eq!(eval.display("=SUM(A1,A200)"), ERROR_SENTINEL);
    }

    #[test]
    fn test_numeric_prefix_is_not_a_number() {
        let store = store_with(&[("A1", "5 apples"), ("A2", "2"), ("A3", "1e3"), ("A4", "$4")]);
        let eval = Evaluator::new(&store);
        assert_eq!(eval.display("=SUM(A1,A4)"), "1002");
        assert_eq!(eval.display("=COUNT(A1,A4)"), "2");
        assert_eq!(parse_number("5 apples"), None);
        assert_eq!(parse_number("12px"), None);
    }

    #[test]
    fn test_display_is_idempotent() {
        let store = store_with(&[("A1", "3"), ("A2", "=SUM(A1,A1)"), ("A3", "=AVERAGE(A1,A2)")]);
        let eval = Evaluator::new(&store);
        let first = eval.display_cell(addr("A3"));
        assert_eq!(first, "4.5");
        assert_eq!(eval.display_cell(addr("A3")), first);
    }

    #[test]
    fn test_case_insensitive_formula() {
        let store = store_with(&[("A1", "2"), ("A2", "3")]);
        assert_eq!(Evaluator::new(&store).display("=sum(a1,a2)"), "5");
    }

    #[test]
    fn test_number_helpers() {
        assert_eq!(parse_number(" 1.5 "), Some(1.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);

        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }
}
