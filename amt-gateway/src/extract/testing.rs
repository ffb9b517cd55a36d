//! Hand-built markup trees for extractor tests.

use super::markup::{Markup, Tag};

#[derive(Debug)]
pub enum FakeNode {
    Element { tag: Tag, children: Vec<FakeNode> },
    Text(String),
}

impl FakeNode {
    pub fn element(tag: Tag, children: Vec<FakeNode>) -> Self {
        FakeNode::Element { tag, children }
    }

    pub fn text(s: &str) -> Self {
        FakeNode::Text(s.to_string())
    }

    pub fn cell(s: &str) -> Self {
        Self::element(Tag::Cell, vec![Self::text(s)])
    }

    pub fn bold(s: &str) -> Self {
        Self::element(Tag::Bold, vec![Self::text(s)])
    }

    fn children(&self) -> &[FakeNode] {
        match self {
            FakeNode::Element { children, .. } => children,
            FakeNode::Text(_) => &[],
        }
    }

    fn collect<'a>(&'a self, tag: Tag, out: &mut Vec<&'a FakeNode>) {
        for child in self.children() {
            if matches!(child, FakeNode::Element { tag: t, .. } if *t == tag) {
                out.push(child);
            }
            child.collect(tag, out);
        }
    }

    fn push_text(&self, out: &mut String) {
        match self {
            FakeNode::Text(s) => out.push_str(s),
            FakeNode::Element { children, .. } => {
                for child in children {
                    child.push_text(out);
                }
            }
        }
    }
}

impl<'a> Markup for &'a FakeNode {
    fn find_all(&self, tag: Tag) -> Vec<Self> {
        let node: &'a FakeNode = *self;
        let mut out = Vec::new();
        node.collect(tag, &mut out);
        out
    }

    fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out.trim().to_string()
    }
}
