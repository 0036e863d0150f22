use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConvertError;
use crate::node::HtmlNode;

/// `![label](destination)`, the label free of brackets and the
/// destination free of parentheses.
static IMAGE_PATTERN: LazyLock<PairPattern> = LazyLock::new(|| PairPattern {
    regex: Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap(),
    skip_bang_prefixed: false,
});

/// `[label](destination)` with the same exclusions, but not the tail of
/// an image.
static LINK_PATTERN: LazyLock<PairPattern> = LazyLock::new(|| PairPattern {
    regex: Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap(),
    skip_bang_prefixed: true,
});

/// Classification of one inline run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// One inline run: the text it covers and, for links and images, a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
    pub url: Option<String>,
}

impl Span {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Span {
            kind,
            text: text.into(),
            url: None,
        }
    }

    /// A link or image span pointing at `url`.
    pub fn with_url(kind: SpanKind, text: impl Into<String>, url: impl Into<String>) -> Self {
        Span {
            kind,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    /// Lower the span to its HTML leaf.
    ///
    /// Image labels become alt-less `<img>` leaves with an empty value;
    /// only the source URL survives lowering.
    pub fn to_html_node(&self) -> HtmlNode {
        match self.kind {
            SpanKind::Plain => HtmlNode::text(self.text.clone()),
            SpanKind::Bold => HtmlNode::leaf("b", self.text.clone()),
            SpanKind::Italic => HtmlNode::leaf("i", self.text.clone()),
            SpanKind::Code => HtmlNode::leaf("code", self.text.clone()),
            SpanKind::Link => HtmlNode::leaf_with_attrs(
                "a",
                self.text.clone(),
                vec![("href".to_string(), self.url.clone().unwrap_or_default())],
            ),
            SpanKind::Image => HtmlNode::leaf_with_attrs(
                "img",
                "",
                vec![("src".to_string(), self.url.clone().unwrap_or_default())],
            ),
        }
    }
}

/// Split every Plain span on one pair of `delimiter` occurrences.
///
/// The text between the pair becomes a span of `kind`, kept even when
/// empty. Surrounding text stays Plain; empty before/after pieces are
/// dropped. One pair per span per pass is the whole contract: a delimiter
/// that never closes, or any occurrence left over once the pair is
/// consumed, is malformed input and aborts the conversion.
pub(crate) fn split_on(
    spans: Vec<Span>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<Span>, ConvertError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }
        let Some(open) = span.text.find(delimiter) else {
            out.push(span);
            continue;
        };
        let content_start = open + delimiter.len();
        let Some(close) = span.text[content_start..].find(delimiter) else {
            return Err(ConvertError::MalformedDelimiter {
                delimiter,
                text: span.text,
            });
        };
        let content_end = content_start + close;
        let trailing_start = content_end + delimiter.len();
        if span.text[trailing_start..].contains(delimiter) {
            return Err(ConvertError::MalformedDelimiter {
                delimiter,
                text: span.text,
            });
        }
        if open > 0 {
            out.push(Span::new(SpanKind::Plain, &span.text[..open]));
        }
        out.push(Span::new(kind, &span.text[content_start..content_end]));
        if trailing_start < span.text.len() {
            out.push(Span::new(SpanKind::Plain, &span.text[trailing_start..]));
        }
    }
    Ok(out)
}

/// A label/destination pattern with the scan rule that keeps the link
/// pass off image syntax.
pub(crate) struct PairPattern {
    regex: Regex,
    /// Reject candidates whose opening bracket directly follows `!`; those
    /// are the tail of an image. Stands in for the negative lookbehind the
    /// `regex` crate does not support.
    skip_bang_prefixed: bool,
}

impl PairPattern {
    pub(crate) fn image() -> &'static PairPattern {
        &IMAGE_PATTERN
    }

    pub(crate) fn link() -> &'static PairPattern {
        &LINK_PATTERN
    }

    /// First acceptable match in `text`: its byte range, label and
    /// destination.
    fn find<'t>(&self, text: &'t str) -> Option<(Range<usize>, &'t str, &'t str)> {
        let mut from = 0;
        while let Some(caps) = self.regex.captures_at(text, from) {
            let whole = caps.get(0)?;
            if self.skip_bang_prefixed
                && whole.start() > 0
                && text.as_bytes()[whole.start() - 1] == b'!'
            {
                from = whole.start() + 1;
                continue;
            }
            return Some((whole.range(), caps.get(1)?.as_str(), caps.get(2)?.as_str()));
        }
        None
    }
}

/// Split spans on every occurrence of a label/destination pattern.
///
/// Text between matches stays Plain and each match becomes a span of
/// `kind`, its text taken from the label and its URL from the
/// destination. A span without a single match passes through untouched,
/// whatever its kind.
pub(crate) fn split_on_regex(spans: Vec<Span>, pattern: &PairPattern, kind: SpanKind) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let mut pieces = Vec::new();
        let mut rest: &str = &span.text;
        while let Some((range, label, destination)) = pattern.find(rest) {
            if range.start > 0 {
                pieces.push(Span::new(SpanKind::Plain, &rest[..range.start]));
            }
            pieces.push(Span::with_url(kind, label, destination));
            rest = &rest[range.end..];
        }
        if pieces.is_empty() {
            out.push(span);
        } else {
            if !rest.is_empty() {
                pieces.push(Span::new(SpanKind::Plain, rest));
            }
            out.append(&mut pieces);
        }
    }
    out
}

/// Parse one run of text into its ordered inline spans.
///
/// Styling passes run in a fixed order over Plain text only, so styles
/// never nest. Images split before links; the link pattern would
/// otherwise claim the bracketed half of every image.
pub fn text_to_spans(text: &str) -> Result<Vec<Span>, ConvertError> {
    let spans = vec![Span::new(SpanKind::Plain, text)];
    let spans = split_on(spans, "**", SpanKind::Bold)?;
    let spans = split_on(spans, "_", SpanKind::Italic)?;
    let spans = split_on(spans, "`", SpanKind::Code)?;
    let spans = split_on_regex(spans, PairPattern::image(), SpanKind::Image);
    Ok(split_on_regex(spans, PairPattern::link(), SpanKind::Link))
}

/// Inline-parse `text` and lower every span to its HTML leaf.
pub(crate) fn text_to_nodes(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    Ok(text_to_spans(text)?.iter().map(Span::to_html_node).collect())
}
