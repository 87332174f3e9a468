//! The glyph trie: a map from byte sequences to glyphs.
//!
//! Keys are UTF-8 encoded text of any length, so a single glyph can stand
//! for a whole grapheme cluster or combining sequence. Lookups use the
//! longest key that is a prefix of the input.
//!
//! Nodes live in an arena owned by the [`Unimap`]. Each node stores a sorted
//! list of edges, one per byte value in use; an edge can both end a key (it
//! has a glyph) and continue into a child node.

use alloc::vec::Vec;

use types::GlyphId;

use crate::read::ReadError;

/// A byte-keyed trie mapping text to glyphs.
#[derive(Clone, Debug)]
pub struct Unimap {
    nodes: Vec<Node>,
    len: usize,
}

/// A reference to a node in a [`Unimap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A key path that has been built but not yet assigned a glyph.
///
/// This is produced by [`Unimap::insert_incomplete`]: every byte of the key
/// except the last has a node, and the last byte is held here until the key
/// is either extended or [finalized](Unimap::finalize).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingKey {
    node: NodeId,
    last: u8,
}

/// The result of a successful lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlyphMatch {
    /// The glyph to draw.
    pub glyph: GlyphId,
    /// The number of bytes of text covered by the glyph.
    pub len: usize,
}

#[derive(Clone, Debug, Default)]
struct Node {
    // sorted by byte
    edges: Vec<Edge>,
}

#[derive(Clone, Copy, Debug)]
struct Edge {
    byte: u8,
    child: Option<NodeId>,
    glyph: Option<GlyphId>,
}

impl Node {
    fn edge(&self, byte: u8) -> Option<&Edge> {
        self.edges
            .binary_search_by_key(&byte, |edge| edge.byte)
            .ok()
            .map(|ix| &self.edges[ix])
    }
}

impl Default for Unimap {
    fn default() -> Self {
        Self::new()
    }
}

impl Unimap {
    /// Create a map containing no keys.
    pub fn new() -> Self {
        let mut nodes = Vec::new();
        nodes.push(Node::default());
        Unimap { nodes, len: 0 }
    }

    /// The number of keys in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if no keys have been finalized.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of nodes allocated, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Map `key` to `glyph`, returning the glyph it was previously mapped to.
    pub fn insert(&mut self, key: &[u8], glyph: GlyphId) -> Result<Option<GlyphId>, ReadError> {
        let pending = self.insert_incomplete(key)?;
        self.finalize(pending, glyph)
    }

    /// Build the path for every byte of `key` but the last.
    ///
    /// Missing nodes are created as needed. An empty key is an error: a
    /// glyph cannot be selected by no text at all.
    pub fn insert_incomplete(&mut self, key: &[u8]) -> Result<PendingKey, ReadError> {
        self.walk_from(NodeId::ROOT, key)
    }

    /// Extend a pending key with more bytes.
    ///
    /// The held byte of `pending` gets a child node (if it does not already
    /// have one), and `key` continues from there.
    pub fn extend_incomplete(
        &mut self,
        pending: PendingKey,
        key: &[u8],
    ) -> Result<PendingKey, ReadError> {
        let node = self.child_or_insert(pending.node, pending.last)?;
        self.walk_from(node, key)
    }

    /// Assign `glyph` to a pending key.
    ///
    /// If the key already had a glyph it is replaced, and the old glyph is
    /// returned. Real fonts do contain duplicate entries, so this is not
    /// treated as an error.
    pub fn finalize(
        &mut self,
        pending: PendingKey,
        glyph: GlyphId,
    ) -> Result<Option<GlyphId>, ReadError> {
        let edge = self.edge_or_insert(pending.node, pending.last)?;
        let previous = edge.glyph.replace(glyph);
        match previous {
            None => self.len += 1,
            Some(old) if old != glyph => log::debug!("mapping for {old} replaced by {glyph}"),
            Some(_) => (),
        }
        Ok(previous)
    }

    /// Return the glyph mapped to exactly `key`.
    pub fn get(&self, key: &[u8]) -> Option<GlyphId> {
        let (&last, prefix) = key.split_last()?;
        let mut node = NodeId::ROOT;
        for &byte in prefix {
            node = self.nodes[node.index()].edge(byte)?.child?;
        }
        self.nodes[node.index()].edge(last)?.glyph
    }

    /// Find the longest key that is a prefix of `text`.
    ///
    /// Walks the trie one byte at a time, remembering the last position at
    /// which a key ended. The walk stops at the end of the text or when no
    /// longer key can match.
    pub fn longest_match(&self, text: &[u8]) -> Option<GlyphMatch> {
        let mut node = NodeId::ROOT;
        let mut best = None;
        for (i, &byte) in text.iter().enumerate() {
            let Some(edge) = self.nodes[node.index()].edge(byte) else {
                break;
            };
            if let Some(glyph) = edge.glyph {
                best = Some(GlyphMatch { glyph, len: i + 1 });
            }
            match edge.child {
                Some(child) => node = child,
                None => break,
            }
        }
        best
    }

    /// Iterate over all `(key, glyph)` pairs, in byte order of the keys.
    pub fn iter(&self) -> Mappings<'_> {
        let mut stack = Vec::new();
        stack.push((NodeId::ROOT, 0));
        Mappings {
            map: self,
            stack,
            key: Vec::new(),
        }
    }

    fn walk_from(&mut self, mut node: NodeId, key: &[u8]) -> Result<PendingKey, ReadError> {
        let (&last, prefix) = key
            .split_last()
            .ok_or(ReadError::MalformedData("empty mapping sequence"))?;
        for &byte in prefix {
            node = self.child_or_insert(node, byte)?;
        }
        Ok(PendingKey { node, last })
    }

    fn edge_or_insert(&mut self, node: NodeId, byte: u8) -> Result<&mut Edge, ReadError> {
        let edges = &mut self.nodes[node.index()].edges;
        let ix = match edges.binary_search_by_key(&byte, |edge| edge.byte) {
            Ok(ix) => ix,
            Err(ix) => {
                edges.try_reserve(1).map_err(|_| ReadError::OutOfMemory)?;
                edges.insert(
                    ix,
                    Edge {
                        byte,
                        child: None,
                        glyph: None,
                    },
                );
                ix
            }
        };
        Ok(&mut edges[ix])
    }

    fn child_or_insert(&mut self, node: NodeId, byte: u8) -> Result<NodeId, ReadError> {
        let next_id = NodeId(
            u32::try_from(self.nodes.len())
                .map_err(|_| ReadError::MalformedData("too many mapping nodes"))?,
        );
        // reserve before linking the edge
        self.nodes
            .try_reserve(1)
            .map_err(|_| ReadError::OutOfMemory)?;
        let edge = self.edge_or_insert(node, byte)?;
        if let Some(child) = edge.child {
            return Ok(child);
        }
        edge.child = Some(next_id);
        self.nodes.push(Node::default());
        Ok(next_id)
    }
}

/// Builds keys incrementally from a sequence of encoded characters.
///
/// This holds the pending end of the key currently being built: each call
/// to [`push`](Self::push) extends it, and [`commit`](Self::commit) assigns
/// it a glyph and starts over at the root.
pub struct SequenceBuilder<'a> {
    map: &'a mut Unimap,
    pending: Option<PendingKey>,
}

impl<'a> SequenceBuilder<'a> {
    pub fn new(map: &'a mut Unimap) -> Self {
        SequenceBuilder { map, pending: None }
    }

    /// Append bytes to the current key.
    pub fn push(&mut self, bytes: &[u8]) -> Result<(), ReadError> {
        let pending = match self.pending {
            Some(pending) => self.map.extend_incomplete(pending, bytes)?,
            None => self.map.insert_incomplete(bytes)?,
        };
        self.pending = Some(pending);
        Ok(())
    }

    /// `true` if nothing has been pushed since the last commit.
    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }

    /// Map the current key to `glyph`, and start a new key.
    ///
    /// Committing an empty key is an error.
    pub fn commit(&mut self, glyph: GlyphId) -> Result<Option<GlyphId>, ReadError> {
        let pending = self
            .pending
            .take()
            .ok_or(ReadError::MalformedData("empty mapping sequence"))?;
        self.map.finalize(pending, glyph)
    }
}

/// An iterator over the keys and glyphs of a [`Unimap`].
///
/// See [`Unimap::iter`].
#[derive(Clone)]
pub struct Mappings<'a> {
    map: &'a Unimap,
    // (node, next edge to visit)
    stack: Vec<(NodeId, usize)>,
    // the bytes leading to the node on top of the stack
    key: Vec<u8>,
}

impl Iterator for Mappings<'_> {
    type Item = (Vec<u8>, GlyphId);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, next_edge) = self.stack.last_mut()?;
            let Some(edge) = self.map.nodes[node.index()].edges.get(*next_edge).copied() else {
                self.stack.pop();
                self.key.pop();
                continue;
            };
            *next_edge += 1;
            let mut key = self.key.clone();
            key.push(edge.byte);
            if let Some(child) = edge.child {
                self.stack.push((child, 0));
                self.key.push(edge.byte);
            }
            if let Some(glyph) = edge.glyph {
                return Some((key, glyph));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gid(raw: u32) -> GlyphId {
        GlyphId::new(raw)
    }

    #[test]
    fn longest_match_prefers_combining_sequence() {
        let mut map = Unimap::new();
        map.insert("e\u{301}".as_bytes(), gid(5)).unwrap();
        map.insert(b"e", gid(2)).unwrap();

        let text = "e\u{301}x".as_bytes();
        assert_eq!(
            map.longest_match(text),
            Some(GlyphMatch {
                glyph: gid(5),
                len: 3
            })
        );
        assert_eq!(
            map.longest_match(b"ex"),
            Some(GlyphMatch {
                glyph: gid(2),
                len: 1
            })
        );
        // a partial combining sequence falls back to the shorter key
        assert_eq!(
            map.longest_match(b"e\xCC"),
            Some(GlyphMatch {
                glyph: gid(2),
                len: 1
            })
        );
        assert_eq!(map.longest_match(b"x"), None);
        assert_eq!(map.longest_match(b""), None);
    }

    #[test]
    fn no_match_without_terminal() {
        let mut map = Unimap::new();
        map.insert("\u{E9}".as_bytes(), gid(1)).unwrap();
        // the first byte of the key alone is not a key
        assert_eq!(map.longest_match(b"\xC3"), None);
        assert_eq!(map.get(b"\xC3"), None);
        assert_eq!(map.get("\u{E9}".as_bytes()), Some(gid(1)));
    }

    #[test]
    fn empty_key_is_rejected() {
        let mut map = Unimap::new();
        assert!(matches!(
            map.insert(b"", gid(0)),
            Err(ReadError::MalformedData(_))
        ));
        let mut builder = SequenceBuilder::new(&mut map);
        assert!(builder.is_empty());
        assert!(builder.commit(gid(0)).is_err());
        assert!(map.is_empty());
    }

    #[test]
    fn duplicate_key_last_write_wins() {
        let mut map = Unimap::new();
        assert_eq!(map.insert(b"A", gid(1)).unwrap(), None);
        assert_eq!(map.insert(b"A", gid(7)).unwrap(), Some(gid(1)));
        assert_eq!(map.get(b"A"), Some(gid(7)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn two_phase_insert() {
        let mut map = Unimap::new();
        let pending = map.insert_incomplete(b"ab").unwrap();
        // nothing is visible until the key is finalized
        assert_eq!(map.get(b"ab"), None);
        let pending = map.extend_incomplete(pending, b"cd").unwrap();
        map.finalize(pending, gid(3)).unwrap();
        assert_eq!(map.get(b"abcd"), Some(gid(3)));
        assert_eq!(map.get(b"ab"), None);
        // root, a, b, c
        assert_eq!(map.node_count(), 4);
    }

    #[test]
    fn builder_commits_and_restarts() {
        let mut map = Unimap::new();
        let mut builder = SequenceBuilder::new(&mut map);
        builder.push(b"A").unwrap();
        builder.push("\u{30A}".as_bytes()).unwrap();
        builder.commit(gid(9)).unwrap();
        assert!(builder.is_empty());
        builder.push("\u{212B}".as_bytes()).unwrap();
        builder.commit(gid(9)).unwrap();

        assert_eq!(map.get("A\u{30A}".as_bytes()), Some(gid(9)));
        assert_eq!(map.get("\u{212B}".as_bytes()), Some(gid(9)));
        assert_eq!(map.get(b"A"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn iterates_in_key_order() {
        let mut map = Unimap::new();
        map.insert(b"b", gid(2)).unwrap();
        map.insert(b"ab", gid(3)).unwrap();
        map.insert(b"a", gid(1)).unwrap();
        map.insert(b"abc", gid(4)).unwrap();
        map.insert(b"c\x80", gid(5)).unwrap();

        let all: Vec<_> = map.iter().collect();
        assert_eq!(
            all,
            vec![
                (b"a".to_vec(), gid(1)),
                (b"ab".to_vec(), gid(3)),
                (b"abc".to_vec(), gid(4)),
                (b"b".to_vec(), gid(2)),
                (b"c\x80".to_vec(), gid(5)),
            ]
        );
        assert_eq!(all.len(), map.len());
    }
}
