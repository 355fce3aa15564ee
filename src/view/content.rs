//! Blog post body: line-prefix markup parsed into typed blocks
//!
//! `# `, `## `, `### ` start headings of level 1 to 3 and a whole line of
//! `** text **` is a level 4 heading. `- ` starts a list item and `N. ` an
//! ordered item. Other lines form paragraphs, ended by a blank line or by a
//! prefixed line. Inside any block `**text**` is strong and `*text*` is
//! emphasis.

use serde::Serialize;

/// Inline run of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "camelCase")]
pub enum Span {
    Text(String),
    Strong(String),
    Emphasis(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Heading { level: u8, spans: Vec<Span> },
    ListItem { spans: Vec<Span> },
    OrderedItem { number: u32, spans: Vec<Span> },
    Paragraph { spans: Vec<Span> },
}

pub fn parse(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in content.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            continue;
        }
        match prefixed_block(line) {
            Some(block) => {
                flush_paragraph(&mut paragraph, &mut blocks);
                blocks.push(block);
            }
            None => paragraph.push(line),
        }
    }
    flush_paragraph(&mut paragraph, &mut blocks);
    blocks
}

fn flush_paragraph(lines: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if lines.is_empty() {
        return;
    }
    blocks.push(Block::Paragraph {
        spans: spans(&lines.join(" ")),
    });
    lines.clear();
}

fn heading(level: u8, text: &str) -> Block {
    Block::Heading {
        level,
        spans: spans(text),
    }
}

fn prefixed_block(line: &str) -> Option<Block> {
    for (prefix, level) in [("### ", 3), ("## ", 2), ("# ", 1)] {
        if let Some(text) = line.strip_prefix(prefix).filter(|t| !t.is_empty()) {
            return Some(heading(level, text));
        }
    }
    if let Some(text) = line
        .strip_prefix("** ")
        .and_then(|rest| rest.strip_suffix(" **"))
        .filter(|t| !t.is_empty())
    {
        return Some(heading(4, text));
    }
    if let Some(text) = line.strip_prefix("- ").filter(|t| !t.is_empty()) {
        return Some(Block::ListItem { spans: spans(text) });
    }
    ordered_item(line)
}

/// `12. text`
fn ordered_item(line: &str) -> Option<Block> {
    let (number, text) = line.split_once(". ")?;
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) || text.is_empty() {
        return None;
    }
    Some(Block::OrderedItem {
        number: number.parse().ok()?,
        spans: spans(text),
    })
}

fn spans(text: &str) -> Vec<Span> {
    let mut out = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some((inner, tail)) = delimited(rest, "**") {
            push_plain(&mut plain, &mut out);
            out.push(Span::Strong(inner.to_string()));
            rest = tail;
            continue;
        }
        if let Some((inner, tail)) = delimited(rest, "*") {
            push_plain(&mut plain, &mut out);
            out.push(Span::Emphasis(inner.to_string()));
            rest = tail;
            continue;
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            plain.push(c);
        }
        rest = chars.as_str();
    }
    push_plain(&mut plain, &mut out);
    out
}

/// `<marker>inner<marker>` at the start of `text`; `inner` holds no `*`
fn delimited<'a>(text: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    let after = text.strip_prefix(marker)?;
    let end = after.find('*')?;
    if end == 0 || !after[end..].starts_with(marker) {
        return None;
    }
    Some((&after[..end], &after[end + marker.len()..]))
}

fn push_plain(plain: &mut String, out: &mut Vec<Span>) {
    if !plain.is_empty() {
        out.push(Span::Text(std::mem::take(plain)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Vec<Span> {
        vec![Span::Text(s.to_string())]
    }

    #[test]
    fn test_heading_levels() {
        let blocks = parse("# One\n## Two\n### Three\n** Four **");
        let levels: Vec<u8> = blocks
            .iter()
            .map(|b| match b {
                Block::Heading { level, .. } => *level,
                other => panic!("Expected heading, got {:?}", other),
            })
            .collect();
        assert_eq!(levels, [1, 2, 3, 4]);
        assert_eq!(
            blocks[3],
            Block::Heading {
                level: 4,
                spans: text("Four")
            }
        );
    }

    #[test]
    fn test_hash_without_space_is_text() {
        assert_eq!(parse("#hashtag"), vec![Block::Paragraph { spans: text("#hashtag") }]);
    }

    #[test]
    fn test_list_items() {
        assert_eq!(
            parse("- Deburring\n2. Anodize"),
            vec![
                Block::ListItem {
                    spans: text("Deburring")
                },
                Block::OrderedItem {
                    number: 2,
                    spans: text("Anodize")
                },
            ]
        );
    }

    #[test]
    fn test_non_numeric_ordered_prefix_is_text() {
        assert_eq!(parse("v2. draft"), vec![Block::Paragraph { spans: text("v2. draft") }]);
    }

    #[test]
    fn test_blank_line_splits_paragraphs() {
        let blocks = parse("First line\nsame paragraph\n\nSecond");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph {
                    spans: text("First line same paragraph")
                },
                Block::Paragraph {
                    spans: text("Second")
                },
            ]
        );
    }

    #[test]
    fn test_prefixed_line_ends_paragraph() {
        let blocks = parse("Intro\n- item");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], Block::Paragraph { .. }));
        assert!(matches!(blocks[1], Block::ListItem { .. }));
    }

    #[test]
    fn test_inline_spans() {
        assert_eq!(
            spans("Hold **±0.0001\"** with *care* always"),
            vec![
                Span::Text("Hold ".to_string()),
                Span::Strong("±0.0001\"".to_string()),
                Span::Text(" with ".to_string()),
                Span::Emphasis("care".to_string()),
                Span::Text(" always".to_string()),
            ]
        );
    }

    #[test]
    fn test_unclosed_markers_stay_literal() {
        assert_eq!(spans("5 * 3 = 15"), text("5 * 3 = 15"));
        assert_eq!(spans("**open"), text("**open"));
    }

    #[test]
    fn test_spans_serialize_tagged() {
        let value = serde_json::to_value(parse("- **Bold** move")).unwrap();
        assert_eq!(value[0]["type"], "listItem");
        assert_eq!(value[0]["spans"][0]["kind"], "strong");
        assert_eq!(value[0]["spans"][0]["text"], "Bold");
    }
}
