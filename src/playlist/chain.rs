//! Chain : arène indexée de noeuds remplaçant les pointeurs bruts
//!
//! Chaque noeud vit dans un slot de l'arène et les liens `prev`/`next` sont
//! des indices (`NodeId`), jamais des références. L'arène est l'unique
//! propriétaire des noeuds : un slot est libéré exactement une fois, et les
//! indices libérés sont recyclés via une free list.

use crate::error::ContractViolation;
use crate::song::SongName;

/// Indice d'un noeud dans l'arène
pub(crate) type NodeId = usize;

/// Un maillon de la chaîne
#[derive(Debug)]
pub(crate) struct Node {
    pub name: SongName,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
}

/// Compteurs d'allocation de noeuds
///
/// Tenus par l'arène et exposés via
/// [`PlayList::alloc_stats`](crate::PlayList::alloc_stats). Ils permettent aux
/// tests de vérifier qu'une insertion alloue exactement un noeud et qu'une
/// suppression libère exactement le noeud retiré, sans instrumenter
/// l'allocateur global.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocStats {
    /// Nombre total de noeuds alloués depuis la création de la liste
    pub allocated: u64,
    /// Nombre total de noeuds libérés depuis la création de la liste
    pub released: u64,
}

impl AllocStats {
    /// Nombre de noeuds actuellement vivants
    pub fn live(&self) -> u64 {
        self.allocated - self.released
    }
}

/// Arène de noeuds avec free list
#[derive(Debug, Default)]
pub(crate) struct Chain {
    slots: Vec<Option<Node>>,
    free: Vec<NodeId>,
    stats: AllocStats,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alloue un noeud et retourne son indice
    pub fn alloc(&mut self, name: SongName, prev: Option<NodeId>, next: Option<NodeId>) -> NodeId {
        self.stats.allocated += 1;
        let node = Node { name, prev, next };
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Libère un noeud ; le slot redevient réutilisable
    ///
    /// Libérer un slot déjà vacant est une violation de contrat : chaque
    /// noeud est libéré exactement une fois.
    #[track_caller]
    pub fn release(&mut self, id: NodeId) {
        let live = self
            .slots
            .get_mut(id)
            .map_or(false, |slot| slot.take().is_some());
        if !live {
            ContractViolation::InvalidNode(id).fail();
        }
        self.free.push(id);
        self.stats.released += 1;
    }

    #[track_caller]
    pub fn node(&self, id: NodeId) -> &Node {
        match self.slots.get(id) {
            Some(Some(node)) => node,
            _ => ContractViolation::InvalidNode(id).fail(),
        }
    }

    #[track_caller]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match self.slots.get_mut(id) {
            Some(Some(node)) => node,
            _ => ContractViolation::InvalidNode(id).fail(),
        }
    }

    /// Échange les valeurs de deux noeuds sans toucher à leurs liens
    #[track_caller]
    pub fn swap_names(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (left, right) = self.slots.split_at_mut(hi);
        match (left.get_mut(lo), right.first_mut()) {
            (Some(Some(lo_node)), Some(Some(hi_node))) => {
                std::mem::swap(&mut lo_node.name, &mut hi_node.name);
            }
            _ => ContractViolation::InvalidNode(hi).fail(),
        }
    }

    /// Nombre de noeuds vivants
    pub fn len(&self) -> usize {
        self.stats.live() as usize
    }

    pub fn stats(&self) -> AllocStats {
        self.stats
    }
}
