//! Rule composition over a file tree.

use crate::diagnostics::EditError;
use crate::tree::FileTree;

/// A single transformation over the tree. Each rule completes its own
/// read, edit, and commit before the next rule runs, so later rules see
/// committed text and never edit against stale offsets.
pub type Rule = Box<dyn FnOnce(&mut dyn FileTree) -> Result<(), EditError>>;

pub fn noop() -> Rule {
    Box::new(|_tree| Ok(()))
}

/// Run rules in order. A failing rule aborts the rest; files committed by
/// earlier rules stay committed, there is no cross-file transaction.
pub fn chain(rules: Vec<Rule>) -> Rule {
    Box::new(move |tree| {
        for (index, rule) in rules.into_iter().enumerate() {
            tracing::debug!(rule = index, "running rule");
            rule(tree)?;
        }
        Ok(())
    })
}

/// Lift a closure into a `Rule`.
pub fn rule(f: impl FnOnce(&mut dyn FileTree) -> Result<(), EditError> + 'static) -> Rule {
    Box::new(f)
}
