//! Singly linked list inventory
//!
//! Nodes are stored in an arena and linked by index. The list keeps `head`
//! and `tail` indices for O(1) append and a `size` counter that is updated on
//! every structural change. Slots freed by deletion are reused by later
//! appends.
//!
//! # Invariants
//!
//! - `head` is `None` exactly when `tail` is `None` and `size == 0`
//! - following `next` from `head` visits `size` nodes and ends at `tail`

use super::{Inventory, Variant};
use crate::record::InventoryItem;
use tracing::debug;

type NodeId = usize;

#[derive(Debug, Clone)]
struct Node {
    data: InventoryItem,
    next: Option<NodeId>,
}

/// Linked list of records
#[derive(Debug, Clone, Default)]
pub struct LinkedListInventory {
    nodes: Vec<Option<Node>>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    size: usize,
}

/// Iterator following `next` links from the head
pub struct Iter<'a> {
    list: &'a LinkedListInventory,
    current: Option<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a InventoryItem;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.current?)?;
        self.current = node.next;
        Some(&node.data)
    }
}

impl LinkedListInventory {
    pub fn new() -> Self {
        LinkedListInventory::default()
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id).and_then(Option::as_mut)
    }

    fn allocate(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    pub fn links(&self) -> Iter<'_> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    /// Append a record after the current tail
    pub fn add_to_end(&mut self, item: InventoryItem) {
        let id = self.allocate(Node {
            data: item,
            next: None,
        });

        match self.tail {
            Some(tail) => {
                if let Some(tail_node) = self.node_mut(tail) {
                    tail_node.next = Some(id);
                }
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.size += 1;
    }

    /// Unlink and return the first record whose engine number matches
    pub fn delete_by_engine_number(&mut self, engine_number: &str) -> Option<InventoryItem> {
        let mut previous: Option<NodeId> = None;
        let mut current = self.head;

        while let Some(id) = current {
            let node = self.node(id)?;
            let next = node.next;

            if node.data.matches_engine_number(engine_number) {
                match previous {
                    None => self.head = next,
                    Some(prev) => {
                        if let Some(prev_node) = self.node_mut(prev) {
                            prev_node.next = next;
                        }
                    }
                }
                if next.is_none() {
                    self.tail = previous;
                }

                let removed = self.nodes[id].take()?;
                self.free.push(id);
                self.size -= 1;
                debug!(engine_number, remaining = self.size, "deleted list node");
                return Some(removed.data);
            }

            previous = Some(id);
            current = next;
        }

        None
    }

    /// Record at a 1-based position; `None` outside `1..=len`
    pub fn get_at_position(&self, position: usize) -> Option<&InventoryItem> {
        if position < 1 || position > self.size {
            return None;
        }
        self.links().nth(position - 1)
    }

    pub fn first(&self) -> Option<&InventoryItem> {
        self.head.and_then(|id| self.node(id)).map(|node| &node.data)
    }

    pub fn last(&self) -> Option<&InventoryItem> {
        self.tail.and_then(|id| self.node(id)).map(|node| &node.data)
    }
}

impl Inventory for LinkedListInventory {
    fn variant(&self) -> Variant {
        Variant::LinkedList
    }

    fn len(&self) -> usize {
        self.size
    }

    fn insert(&mut self, item: InventoryItem) -> bool {
        self.add_to_end(item);
        true
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &InventoryItem> + '_> {
        Box::new(self.links())
    }
}
