use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

const ELLIPSIS: &str = "...";
const ELLIPSIS_GRAPHEMES: usize = 3;

/// Shorten `input` to at most `max_graphemes`, marking the cut with `...`.
pub(super) fn truncate_with_ellipsis(input: &str, max_graphemes: usize) -> Cow<'_, str> {
    if max_graphemes == 0 {
        return Cow::Owned(String::new());
    }

    let graphemes = input.graphemes(true);
    if graphemes.clone().nth(max_graphemes).is_none() {
        return Cow::Borrowed(input);
    }

    if max_graphemes <= ELLIPSIS_GRAPHEMES {
        return Cow::Owned(graphemes.take(max_graphemes).collect());
    }

    let mut truncated: String = graphemes.take(max_graphemes - ELLIPSIS_GRAPHEMES).collect();
    truncated.push_str(ELLIPSIS);
    Cow::Owned(truncated)
}
