//! Immutable rope used for string constants.
//!
//! Folding `"a" + "b"` over long strings concatenates ropes instead of
//! copying buffers. The flat text is only produced on demand.

use std::fmt;
use std::sync::Arc;

/// An immutable string built from shared chunks.
#[derive(Clone)]
pub struct Rope(Arc<Node>);

enum Node {
    Leaf(Arc<str>),
    Concat { left: Rope, right: Rope, len: usize },
}

impl Rope {
    /// The empty rope.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_str_chunk(Arc::from(""))
    }

    fn from_str_chunk(text: Arc<str>) -> Self {
        Self(Arc::new(Node::Leaf(text)))
    }

    /// Concatenate two ropes without copying either.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        Self(Arc::new(Node::Concat {
            left: self.clone(),
            right: other.clone(),
            len: self.len() + other.len(),
        }))
    }

    /// Length in UTF-8 bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        match &*self.0 {
            Node::Leaf(text) => text.len(),
            Node::Concat { len, .. } => *len,
        }
    }

    /// Whether the rope holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length in UTF-16 code units.
    #[must_use]
    pub fn len_utf16(&self) -> usize {
        self.chunks().map(|chunk| chunk.encode_utf16().count()).sum()
    }

    /// Iterate over the rope's chunks from left to right.
    #[must_use]
    pub fn chunks(&self) -> Chunks<'_> {
        Chunks { stack: vec![self] }
    }

    /// Copy the rope into one contiguous string.
    #[must_use]
    pub fn to_flat_string(&self) -> String {
        let mut out = String::with_capacity(self.len());
        for chunk in self.chunks() {
            out.push_str(chunk);
        }
        out
    }

    /// Whether both ropes denote the same text.
    #[must_use]
    pub fn content_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .chunks()
                .flat_map(str::bytes)
                .eq(other.chunks().flat_map(str::bytes))
    }
}

impl From<&str> for Rope {
    fn from(text: &str) -> Self {
        Self::from_str_chunk(Arc::from(text))
    }
}

impl From<String> for Rope {
    fn from(text: String) -> Self {
        Self::from_str_chunk(Arc::from(text))
    }
}

impl From<Arc<str>> for Rope {
    fn from(text: Arc<str>) -> Self {
        Self::from_str_chunk(text)
    }
}

impl PartialEq for Rope {
    fn eq(&self, other: &Self) -> bool {
        self.content_eq(other)
    }
}

impl Eq for Rope {}

impl fmt::Display for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chunks().try_for_each(|chunk| f.write_str(chunk))
    }
}

impl fmt::Debug for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rope({:?})", self.to_flat_string())
    }
}

/// Left-to-right iterator over rope chunks.
///
/// Traversal keeps an explicit stack so deeply nested ropes do not recurse.
pub struct Chunks<'a> {
    stack: Vec<&'a Rope>,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(rope) = self.stack.pop() {
            match &*rope.0 {
                Node::Leaf(text) if text.is_empty() => {}
                Node::Leaf(text) => return Some(text.as_ref()),
                Node::Concat { left, right, .. } => {
                    self.stack.push(right);
                    self.stack.push(left);
                }
            }
        }
        None
    }
}
