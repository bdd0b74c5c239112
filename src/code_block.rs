//! Deferred code fragments with placeholder imports.
//!
//! A generator produces expression text containing placeholder tokens for
//! symbols it wants imported. Rendering against the target file replaces
//! each placeholder with the plain or aliased local name and yields the
//! matching import-insertion changes. A block is consumed by one render;
//! placeholder ids come from the session context, never global state.

use crate::change::Change;
use crate::imports::{insert_import, non_colliding_name};
use crate::source_file::SourceFile;

#[derive(Debug, Clone)]
struct PlaceholderImport {
    token: String,
    symbol: String,
    module: String,
}

/// Session-scoped placeholder allocator. One context per rule invocation.
#[derive(Debug, Default)]
pub struct CodeBlockContext {
    next_id: u32,
    placeholders: Vec<PlaceholderImport>,
}

impl CodeBlockContext {
    pub fn new() -> CodeBlockContext {
        CodeBlockContext::default()
    }

    /// Placeholder token standing in for `symbol` imported from `module`.
    /// Embed the returned token in generated expression text.
    pub fn external(&mut self, symbol: &str, module: &str) -> String {
        let token = format!("@@__PLACEHOLDER_{}__@@", self.next_id);
        self.next_id += 1;
        self.placeholders.push(PlaceholderImport {
            token: token.clone(),
            symbol: symbol.to_string(),
            module: module.to_string(),
        });
        token
    }
}

/// Rendered result: final expression text plus the import insertions the
/// target file needs for it.
#[derive(Debug)]
pub struct RenderedCodeBlock {
    pub expression: String,
    pub imports: Vec<Change>,
}

/// A fragment whose imports are not resolved yet.
#[derive(Debug)]
pub struct PendingCodeBlock {
    expression: String,
    context: CodeBlockContext,
}

impl PendingCodeBlock {
    pub fn new(expression: impl Into<String>, context: CodeBlockContext) -> PendingCodeBlock {
        PendingCodeBlock { expression: expression.into(), context }
    }

    /// Substitute placeholders against `target` and emit the import
    /// changes. Consumes the block; offsets in the changes are only valid
    /// for the target's current text.
    pub fn render(self, target: &SourceFile) -> RenderedCodeBlock {
        let mut expression = self.expression;
        let mut imports = Vec::new();
        for placeholder in &self.context.placeholders {
            let local = non_colliding_name(target, &placeholder.symbol, &placeholder.module);
            let alias = (local != placeholder.symbol).then_some(local.as_str());
            imports.push(insert_import(target, &placeholder.symbol, &placeholder.module, false, alias));
            expression = expression.replace(&placeholder.token, &local);
        }
        RenderedCodeBlock { expression, imports }
    }
}
