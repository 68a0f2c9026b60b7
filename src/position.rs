//! Source position resolution for elements and comment nodes.

use text_size::TextSize;
use tracing::warn;

use crate::base::{DocTreeId, ElementId, LineIndex, POS_FAILED, SourcePosition};
use crate::host::Host;

/// Position of `node` in the doc comment of `element`, or of the comment
/// itself when `node` is `None`.
///
/// Without a compilation unit or a doc comment the result is
/// [`SourcePosition::unknown`]. A negative host offset is passed through
/// as the line number. An unreadable file or an offset past its end gives
/// line [`POS_FAILED`].
pub fn resolve(host: &dyn Host, element: ElementId, node: Option<DocTreeId>) -> SourcePosition {
    let Some(unit) = host.compilation_unit(element) else {
        return SourcePosition::unknown();
    };
    if host.doc_comment(element).is_none() {
        return SourcePosition::unknown();
    }
    let file = host.unit_name(unit);
    let offset = host.start_position(element, node);
    if offset < 0 {
        let code = i32::try_from(offset).unwrap_or(POS_FAILED);
        return SourcePosition::new(file, code, 0);
    }
    let content = match host.unit_content(unit) {
        Ok(content) => content,
        Err(err) => {
            warn!(file = %file, error = %err, "cannot read compilation unit");
            return SourcePosition::new(file, POS_FAILED, 0);
        }
    };
    let line_col = u32::try_from(offset)
        .ok()
        .and_then(|offset| LineIndex::new(&content).line_col(TextSize::new(offset)));
    match line_col {
        Some(lc) => SourcePosition::new(file, lc.line as i32, lc.col as i32),
        None => {
            warn!(file = %file, offset, "offset past end of compilation unit");
            SourcePosition::new(file, POS_FAILED, 0)
        }
    }
}
