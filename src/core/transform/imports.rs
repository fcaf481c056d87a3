use serde::Serialize;
use swc_ecma_ast::{Expr, ExprStmt, ImportDecl, Lit, Module, ModuleDecl, ModuleItem, Stmt};

use super::{TranslationBinding, edits::EditList};
use crate::core::parsers::script::ParsedScript;
use crate::utils::contains_cjk;

/// How the translation binding was made available to a transformed script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImportOutcome {
    /// Nothing was rewritten, so no binding is required.
    #[default]
    NotNeeded,
    /// The script already imports the translation module; the binding is assumed present.
    AlreadyImported,
    /// An import and a binding-acquisition statement were added.
    Injected,
}

/// Per-call "translation hook present" flag.
#[derive(Debug, Default)]
pub struct ImportState {
    outcome: ImportOutcome,
}

impl ImportState {
    pub fn is_satisfied(&self) -> bool {
        self.outcome != ImportOutcome::NotNeeded
    }

    pub fn outcome(&self) -> ImportOutcome {
        self.outcome
    }

    /// Make sure the translation binding exists, recording any needed edits.
    ///
    /// The import goes after any shebang line and directive prologue; the binding follows
    /// the leading run of imports. Only the first call does any work.
    pub fn ensure(
        &mut self,
        script: &ParsedScript,
        source: &str,
        binding: &TranslationBinding,
        edits: &mut EditList,
    ) {
        if self.is_satisfied() {
            return;
        }

        if has_translation_import(&script.module, &binding.module) {
            tracing::debug!(module = %binding.module, "translation module already imported");
            self.outcome = ImportOutcome::AlreadyImported;
            return;
        }

        let (at, line_start) = header_end(script, source);
        let import = binding.import_statement();
        let statement = binding.binding_statement();
        if line_start {
            edits.insert(at, format!("{}\n", import));
        } else {
            edits.insert(at, format!("\n{}", import));
        }

        match leading_imports(&script.module).last() {
            Some(last) => {
                let at = script.offset(last.span.hi);
                edits.insert(at, format!("\n{}", statement));
            }
            None if line_start => edits.insert(at, format!("{}\n", statement)),
            None => edits.insert(at, format!("\n{}", statement)),
        }

        tracing::debug!(module = %binding.module, "injected translation import");
        self.outcome = ImportOutcome::Injected;
    }
}

/// Offset where injected statements start, and whether it is the start of a line.
///
/// Skips a shebang line and the directive prologue (`"use strict";` and the like), which
/// must stay first to keep their meaning.
fn header_end(script: &ParsedScript, source: &str) -> (usize, bool) {
    if let Some(last) = directive_prologue(&script.module).last() {
        return (script.offset(last.span.hi), false);
    }
    if script.module.shebang.is_some() {
        return match source.find('\n') {
            Some(newline) => (newline + 1, true),
            None => (source.len(), false),
        };
    }
    (0, true)
}

/// Leading string-literal statements. A string with CJK text is rewritten, so it ends
/// the prologue.
fn directive_prologue(module: &Module) -> impl Iterator<Item = &ExprStmt> {
    module.body.iter().map_while(|item| match item {
        ModuleItem::Stmt(Stmt::Expr(stmt)) => match &*stmt.expr {
            Expr::Lit(Lit::Str(s)) if !s.value.as_str().is_some_and(contains_cjk) => Some(stmt),
            _ => None,
        },
        _ => None,
    })
}

/// True if a runtime (non type-only) import of `module` exists at the top level.
fn has_translation_import(module: &Module, source: &str) -> bool {
    module.body.iter().any(|item| match item {
        ModuleItem::ModuleDecl(ModuleDecl::Import(decl)) => {
            !decl.type_only && decl.src.value.as_str() == Some(source)
        }
        _ => false,
    })
}

/// The contiguous run of import declarations at the start of the module, after the
/// directive prologue.
fn leading_imports(module: &Module) -> impl Iterator<Item = &ImportDecl> {
    let prologue = directive_prologue(module).count();
    module.body.iter().skip(prologue).map_while(|item| match item {
        ModuleItem::ModuleDecl(ModuleDecl::Import(decl)) => Some(decl),
        _ => None,
    })
}
