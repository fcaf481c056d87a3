use std::{borrow::Cow, fmt::Write as _};

use swc_common::{BytePos, Spanned};
use swc_ecma_ast::{Expr, Lit, Str, Tpl, TplElement};
use swc_ecma_visit::{Visit, VisitWith};

use super::{LiteralKind, RewrittenLiteral, TransformOptions, TransformState};
use crate::core::parsers::script::ParsedScript;
use crate::utils::contains_cjk;

/// Visits literal expressions and records a replacement for every translatable one.
///
/// The visitor never descends into a literal it has replaced: embedded expressions of a
/// rewritten template are carried over as their original source text.
pub struct LiteralRewriter<'a> {
    script: &'a ParsedScript,
    source: &'a str,
    options: &'a TransformOptions,
    state: &'a mut TransformState,
}

impl<'a> LiteralRewriter<'a> {
    pub fn new(
        script: &'a ParsedScript,
        source: &'a str,
        options: &'a TransformOptions,
        state: &'a mut TransformState,
    ) -> Self {
        Self {
            script,
            source,
            options,
            state,
        }
    }

    pub fn rewrite(mut self) {
        let script = self.script;
        self.visit_module(&script.module);
    }

    fn rewrite_str(&mut self, node: &Str) {
        let Some(value) = node.value.as_str() else {
            return;
        };
        if !contains_cjk(value) {
            return;
        }

        self.ensure_import();
        let id = self.state.records.record(value);
        let call = translation_call(&self.options.binding.function, &id, &[]);
        self.state.edits.replace(self.script.range(node.span), call);
        self.note(id, value, LiteralKind::String, node.span.lo);
    }

    fn rewrite_tpl(&mut self, node: &Tpl) {
        self.ensure_import();

        let (script, source) = (self.script, self.source);
        let args: Vec<Cow<'_, str>> = node
            .exprs
            .iter()
            .map(|expr| argument_text(expr, &source[script.range(expr.span())]))
            .collect();
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let pattern = interpolation_pattern(node);

        let id = self.state.records.record(&pattern);
        let call = translation_call(&self.options.binding.function, &id, &args);
        self.state.edits.replace(script.range(node.span), call);
        self.note(id, &pattern, LiteralKind::Template, node.span.lo);
    }

    fn ensure_import(&mut self) {
        let state = &mut *self.state;
        state
            .import
            .ensure(self.script, self.source, &self.options.binding, &mut state.edits);
    }

    fn note(&mut self, id: String, text: &str, kind: LiteralKind, pos: BytePos) {
        let (line, col) = self.script.line_col(pos);
        tracing::debug!(id = %id, line, col, ?kind, "rewrote literal");
        self.state.literals.push(RewrittenLiteral {
            id,
            text: text.to_owned(),
            kind,
            line,
            col,
        });
    }
}

impl Visit for LiteralRewriter<'_> {
    fn visit_expr(&mut self, node: &Expr) {
        match node {
            Expr::Lit(Lit::Str(s)) => self.rewrite_str(s),
            Expr::Tpl(tpl) if is_translatable_template(tpl) => self.rewrite_tpl(tpl),
            _ => node.visit_children_with(self),
        }
    }
}

/// Text of a template segment for classification: cooked when available, raw otherwise.
fn segment_text(quasi: &TplElement) -> &str {
    quasi
        .cooked
        .as_ref()
        .and_then(|cooked| cooked.as_str())
        .unwrap_or(quasi.raw.as_str())
}

/// A template is translatable when any literal segment (not expression) has CJK text.
pub fn is_translatable_template(tpl: &Tpl) -> bool {
    tpl.quasis.iter().any(|q| contains_cjk(segment_text(q)))
}

/// Flatten a template into `seg0{0}seg1{1}...segN` using raw segment text.
///
/// Braces already present in a segment are copied as-is, so a literal `{0}` in the
/// template text reads the same as a placeholder in the resulting pattern.
pub fn interpolation_pattern(tpl: &Tpl) -> String {
    debug_assert_eq!(
        tpl.quasis.len(),
        tpl.exprs.len() + 1,
        "template must have one more segment than expressions"
    );

    let mut pattern = String::new();
    for (i, quasi) in tpl.quasis.iter().enumerate() {
        pattern.push_str(quasi.raw.as_str());
        if i < tpl.exprs.len() {
            let _ = write!(pattern, "{{{}}}", i);
        }
    }
    pattern
}

/// Source text of an embedded expression as one array element.
///
/// A comma expression is parenthesized; unwrapped it would become several elements.
fn argument_text<'s>(expr: &Expr, text: &'s str) -> Cow<'s, str> {
    match expr {
        Expr::Seq(_) => Cow::Owned(format!("({})", text)),
        _ => Cow::Borrowed(text),
    }
}

/// `t("<id>")`, or `t("<id>", [a, b])` when there are interpolated expressions.
pub fn translation_call(function: &str, id: &str, args: &[&str]) -> String {
    if args.is_empty() {
        format!("{}(\"{}\")", function, id)
    } else {
        format!("{}(\"{}\", [{}])", function, id, args.join(", "))
    }
}
