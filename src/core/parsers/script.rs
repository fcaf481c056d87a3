use std::sync::Arc;

use swc_common::{BytePos, FileName, Globals, SourceFile, SourceMap, Span, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax, error::Error as SwcError};

use crate::core::error::{TransformError, TransformResult};

/// A parsed script together with the file it was parsed from.
///
/// Spans in `module` are relative to `source_file.start_pos`; use
/// [`ParsedScript::offset`] to turn them into byte offsets of the input text.
pub struct ParsedScript {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    pub source_file: Arc<SourceFile>,
}

impl ParsedScript {
    /// Byte offset of `pos` in the original source text.
    pub fn offset(&self, pos: BytePos) -> usize {
        (pos.0 - self.source_file.start_pos.0) as usize
    }

    /// Byte range of `span` in the original source text.
    pub fn range(&self, span: Span) -> std::ops::Range<usize> {
        self.offset(span.lo)..self.offset(span.hi)
    }

    /// 1-based line and column of `pos`.
    pub fn line_col(&self, pos: BytePos) -> (usize, usize) {
        let loc = self.source_map.lookup_char_pos(pos);
        (loc.line, loc.col_display + 1)
    }
}

/// Parse a JS/TS script string into an AST.
///
/// TypeScript syntax is a superset of what script bodies use in practice, so it is
/// always selected; `jsx` additionally enables TSX. Recovered parser errors fail the
/// parse the same way fatal ones do.
pub fn parse_script_source(
    code: String,
    file_path: &str,
    jsx: bool,
    source_map: Arc<SourceMap>,
) -> TransformResult<ParsedScript> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: jsx,
            decorators: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| to_parse_error(&source_map, e))?;

        if let Some(err) = parser.take_errors().into_iter().next() {
            return Err(to_parse_error(&source_map, err));
        }

        Ok(ParsedScript {
            module,
            source_map,
            source_file,
        })
    })
}

fn to_parse_error(source_map: &SourceMap, err: SwcError) -> TransformError {
    let loc = source_map.lookup_char_pos(err.span().lo);
    TransformError::Parse {
        line: loc.line,
        col: loc.col_display + 1,
        message: err.kind().msg().into_owned(),
    }
}
