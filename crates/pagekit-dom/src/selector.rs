//! CSS selector subset
//!
//! Supports selector groups, compound steps (tag, `*`, `#id`, `.class`,
//! attribute conditions) and descendant / child combinators. That is
//! everything the page behaviors and typical `data-bs-target` values use.

use crate::{DomError, DomResult, DomTree, NodeId};

/// Parsed selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    groups: Vec<Vec<SelectorPart>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SelectorPart {
    step: Step,
    // Relation to the part on the left
    combinator: Option<Combinator>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Step {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrCondition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals,
    Prefix,
    Suffix,
    Substring,
    Includes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrCondition {
    name: String,
    op: AttrOp,
    value: String,
}

impl Selector {
    /// Parse a selector list such as `input, select, textarea`
    pub fn parse(selector: &str) -> DomResult<Self> {
        let invalid = || DomError::InvalidSelector(selector.to_string());
        let mut groups = Vec::new();
        for group in split_outside(selector, ',') {
            let parts = parse_chain(group.trim()).ok_or_else(invalid)?;
            groups.push(parts);
        }
        if groups.is_empty() {
            return Err(invalid());
        }
        Ok(Self { groups })
    }

    /// Check whether an element matches any group
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        self.groups
            .iter()
            .any(|parts| match_from(tree, node, parts, parts.len() - 1))
    }
}

fn match_from(tree: &DomTree, node: NodeId, parts: &[SelectorPart], idx: usize) -> bool {
    let part = &parts[idx];
    if !part.step.matches(tree, node) {
        return false;
    }
    let Some(combinator) = part.combinator else {
        return true;
    };
    match combinator {
        Combinator::Child => tree
            .parent(node)
            .is_some_and(|p| match_from(tree, p, parts, idx - 1)),
        Combinator::Descendant => tree
            .ancestors(node)
            .any(|a| match_from(tree, a, parts, idx - 1)),
    }
}

impl Step {
    fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        let Some(el) = tree.element(node) else {
            return false;
        };
        if let Some(tag) = &self.tag {
            if el.tag() != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.id() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|cond| {
            let Some(actual) = el.get_attr(&cond.name) else {
                return false;
            };
            let expected = cond.value.as_str();
            match cond.op {
                AttrOp::Exists => true,
                AttrOp::Equals => actual == expected,
                AttrOp::Prefix => !expected.is_empty() && actual.starts_with(expected),
                AttrOp::Suffix => !expected.is_empty() && actual.ends_with(expected),
                AttrOp::Substring => !expected.is_empty() && actual.contains(expected),
                AttrOp::Includes => actual.split_ascii_whitespace().any(|t| t == expected),
            }
        })
    }
}

/// Split on `sep` when it is outside brackets and quotes
fn split_outside(src: &str, sep: char) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, ch) in src.char_indices() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '[') => depth += 1,
            (None, ']') => depth = depth.saturating_sub(1),
            (None, c) if c == sep && depth == 0 => {
                out.push(&src[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    out.push(&src[start..]);
    out
}

fn parse_chain(selector: &str) -> Option<Vec<SelectorPart>> {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for ch in selector.chars() {
        if let Some(q) = quote {
            current.push(ch);
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' if depth > 0 => {
                quote = Some(ch);
                current.push(ch);
            }
            '[' => {
                depth += 1;
                current.push(ch);
            }
            ']' => {
                depth = depth.checked_sub(1)?;
                current.push(ch);
            }
            c if depth == 0 && (c.is_whitespace() || c == '>') => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                if c == '>' {
                    tokens.push(">".to_string());
                }
            }
            c => current.push(c),
        }
    }
    if quote.is_some() || depth != 0 {
        return None;
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    let mut parts: Vec<SelectorPart> = Vec::new();
    let mut pending: Option<Combinator> = None;
    for token in tokens {
        if token == ">" {
            if pending.is_some() || parts.is_empty() {
                return None;
            }
            pending = Some(Combinator::Child);
            continue;
        }
        let step = parse_step(&token)?;
        let combinator = if parts.is_empty() {
            None
        } else {
            Some(pending.take().unwrap_or(Combinator::Descendant))
        };
        parts.push(SelectorPart { step, combinator });
    }
    if parts.is_empty() || pending.is_some() {
        return None;
    }
    Some(parts)
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

fn take_ident(chars: &[char], pos: &mut usize) -> Option<String> {
    let start = *pos;
    while *pos < chars.len() && is_ident_char(chars[*pos]) {
        *pos += 1;
    }
    (*pos > start).then(|| chars[start..*pos].iter().collect())
}

fn parse_step(token: &str) -> Option<Step> {
    let chars: Vec<char> = token.chars().collect();
    let mut pos = 0;
    let mut step = Step::default();

    if chars.first() == Some(&'*') {
        pos = 1;
    } else if chars.first().is_some_and(|&c| is_ident_char(c)) {
        step.tag = Some(take_ident(&chars, &mut pos)?.to_ascii_lowercase());
    }

    while pos < chars.len() {
        match chars[pos] {
            '#' => {
                pos += 1;
                step.id = Some(take_ident(&chars, &mut pos)?);
            }
            '.' => {
                pos += 1;
                step.classes.push(take_ident(&chars, &mut pos)?);
            }
            '[' => {
                let close = chars[pos..].iter().position(|&c| c == ']')? + pos;
                let inner: String = chars[pos + 1..close].iter().collect();
                step.attrs.push(parse_attr(&inner)?);
                pos = close + 1;
            }
            _ => return None,
        }
    }
    Some(step)
}

fn parse_attr(inner: &str) -> Option<AttrCondition> {
    let inner = inner.trim();
    let op_at = inner.find(&['=', '^', '$', '*', '~'][..]);
    let Some(op_at) = op_at else {
        let name = inner.to_ascii_lowercase();
        return (!name.is_empty() && name.chars().all(is_ident_char)).then_some(AttrCondition {
            name,
            op: AttrOp::Exists,
            value: String::new(),
        });
    };

    let name = inner[..op_at].trim().to_ascii_lowercase();
    let rest = &inner[op_at..];
    let (op, value) = if let Some(v) = rest.strip_prefix('=') {
        (AttrOp::Equals, v)
    } else if let Some(v) = rest.strip_prefix("^=") {
        (AttrOp::Prefix, v)
    } else if let Some(v) = rest.strip_prefix("$=") {
        (AttrOp::Suffix, v)
    } else if let Some(v) = rest.strip_prefix("*=") {
        (AttrOp::Substring, v)
    } else if let Some(v) = rest.strip_prefix("~=") {
        (AttrOp::Includes, v)
    } else {
        return None;
    };

    if name.is_empty() || !name.chars().all(is_ident_char) {
        return None;
    }
    let value = value.trim();
    let value = match value.chars().next() {
        Some(q @ ('"' | '\'')) => value.strip_prefix(q)?.strip_suffix(q)?.to_string(),
        _ if value.chars().all(is_ident_char) => value.to_string(),
        _ => return None,
    };
    Some(AttrCondition { name, op, value })
}
