//! PlayList : chaîne doublement liée et curseur de lecture

pub(crate) mod chain;

use self::chain::{AllocStats, Chain, NodeId};
use crate::error::ContractViolation;
use crate::song::SongName;
use std::io;

/// Une playlist doublement chaînée avec curseur de lecture
///
/// La chaîne est non circulaire : le premier noeud n'a pas de précédent, le
/// dernier n'a pas de suivant. Le curseur (`playing`) désigne un noeud de la
/// chaîne par identité ; il est établi par la première insertion, suit les
/// liens existants via [`play_next`]/[`play_previous`], et est re-ancré sur la
/// tête quand le noeud qu'il désigne est supprimé.
///
/// Après chaque opération publique :
/// - les liens `prev`/`next` sont cohérents dans les deux sens ;
/// - `first` est `None` si et seulement si la chaîne est vide ;
/// - `playing` est `None` si et seulement si la chaîne est vide, sinon il
///   désigne un noeud présent dans la chaîne.
///
/// [`play_next`]: PlayList::play_next
/// [`play_previous`]: PlayList::play_previous
#[derive(Debug, Default)]
pub struct PlayList {
    chain: Chain,
    first: Option<NodeId>,
    playing: Option<NodeId>,
}

impl PlayList {
    /// Crée une playlist vide
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
            first: None,
            playing: None,
        }
    }

    /// Nombre de chansons dans la playlist
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Vérifie si la playlist est vide
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Insère une chanson en tête de la chaîne
    ///
    /// Si la liste était vide, la nouvelle chanson devient la chanson en
    /// cours de lecture. O(1).
    ///
    /// # Panics
    ///
    /// Panique si le nom dépasse [`MAX_NAME_LENGTH`](crate::MAX_NAME_LENGTH).
    #[track_caller]
    pub fn insert_at_front(&mut self, name: &str) {
        let name = SongName::new(name);
        tracing::debug!(song = %name, "insert at front");
        self.push_front(name);
        debug_assert!(self.is_consistent());
    }

    /// Insère une chanson en queue de la chaîne
    ///
    /// Si la liste était vide, la nouvelle chanson devient la chanson en
    /// cours de lecture. Un seul noeud est alloué dans tous les cas. O(n).
    ///
    /// # Panics
    ///
    /// Panique si le nom dépasse [`MAX_NAME_LENGTH`](crate::MAX_NAME_LENGTH).
    #[track_caller]
    pub fn insert_at_end(&mut self, name: &str) {
        let name = SongName::new(name);
        tracing::debug!(song = %name, "insert at end");
        self.push_back(name);
        debug_assert!(self.is_consistent());
    }

    /// Insère une chanson à sa place alphabétique
    ///
    /// Si la chaîne est déjà triée, elle le reste. Une chanson de même nom
    /// qu'une chanson existante est placée après toutes les occurrences
    /// existantes. O(n).
    ///
    /// # Panics
    ///
    /// Panique si le nom dépasse [`MAX_NAME_LENGTH`](crate::MAX_NAME_LENGTH).
    #[track_caller]
    pub fn insert_in_order(&mut self, name: &str) {
        let name = SongName::new(name);
        tracing::debug!(song = %name, "insert in order");

        let mut previous = None;
        let mut current = self.first;
        while let Some(id) = current {
            if self.chain.node(id).name > name {
                break;
            }
            previous = Some(id);
            current = self.chain.node(id).next;
        }

        match (previous, current) {
            (None, _) => self.push_front(name),
            (Some(_), None) => self.push_back(name),
            (Some(prev_id), Some(next_id)) => {
                let id = self.chain.alloc(name, Some(prev_id), Some(next_id));
                self.chain.node_mut(prev_id).next = Some(id);
                self.chain.node_mut(next_id).prev = Some(id);
            }
        }
        debug_assert!(self.is_consistent());
    }

    /// Insère une chanson juste après la première occurrence de `target`
    ///
    /// Retourne `false` sans rien modifier si `target` est absente. O(n).
    ///
    /// # Panics
    ///
    /// Panique si le nom dépasse [`MAX_NAME_LENGTH`](crate::MAX_NAME_LENGTH).
    #[track_caller]
    pub fn insert_after(&mut self, target: &str, name: &str) -> bool {
        let name = SongName::new(name);
        let Some(target_id) = self.find(target) else {
            tracing::debug!(target, "insert after: target not found");
            return false;
        };
        tracing::debug!(song = %name, target, "insert after");

        let next = self.chain.node(target_id).next;
        let id = self.chain.alloc(name, Some(target_id), next);
        self.chain.node_mut(target_id).next = Some(id);
        if let Some(next_id) = next {
            self.chain.node_mut(next_id).prev = Some(id);
        }
        debug_assert!(self.is_consistent());
        true
    }

    /// Insère une chanson juste avant la première occurrence de `target`
    ///
    /// Retourne `false` sans rien modifier si `target` est absente. Met à
    /// jour la tête de chaîne si `target` était la première chanson. O(n).
    ///
    /// # Panics
    ///
    /// Panique si le nom dépasse [`MAX_NAME_LENGTH`](crate::MAX_NAME_LENGTH).
    #[track_caller]
    pub fn insert_before(&mut self, target: &str, name: &str) -> bool {
        let name = SongName::new(name);
        let Some(target_id) = self.find(target) else {
            tracing::debug!(target, "insert before: target not found");
            return false;
        };
        tracing::debug!(song = %name, target, "insert before");

        let previous = self.chain.node(target_id).prev;
        let id = self.chain.alloc(name, previous, Some(target_id));
        match previous {
            Some(prev_id) => self.chain.node_mut(prev_id).next = Some(id),
            None => self.first = Some(id),
        }
        self.chain.node_mut(target_id).prev = Some(id);
        debug_assert!(self.is_consistent());
        true
    }

    /// Supprime la chanson en tête de la chaîne
    ///
    /// Si la tête était la chanson en cours de lecture, le curseur avance
    /// sur la nouvelle tête (ou disparaît si la liste devient vide). O(1).
    ///
    /// # Panics
    ///
    /// Panique si la playlist est vide.
    #[track_caller]
    pub fn delete_from_front(&mut self) {
        let Some(head) = self.first else {
            ContractViolation::EmptyPlaylist.fail()
        };
        tracing::debug!(song = %self.chain.node(head).name, "delete from front");

        self.first = self.chain.node(head).next;
        if let Some(next_id) = self.first {
            self.chain.node_mut(next_id).prev = None;
        }
        if self.playing == Some(head) {
            self.playing = self.first;
        }
        self.chain.release(head);
        debug_assert!(self.is_consistent());
    }

    /// Supprime la première occurrence de `name`
    ///
    /// Retourne `false` sans rien modifier si la chanson est absente. Si la
    /// chanson supprimée était en cours de lecture, le curseur est re-ancré
    /// sur la tête de la chaîne (ou disparaît si la liste devient vide). O(n).
    pub fn delete_song(&mut self, name: &str) -> bool {
        let Some(id) = self.find(name) else {
            tracing::debug!(song = name, "delete song: not found");
            return false;
        };
        tracing::debug!(song = name, "delete song");

        let previous = self.chain.node(id).prev;
        let next = self.chain.node(id).next;
        match previous {
            Some(prev_id) => self.chain.node_mut(prev_id).next = next,
            None => self.first = next,
        }
        if let Some(next_id) = next {
            self.chain.node_mut(next_id).prev = previous;
        }
        if self.playing == Some(id) {
            self.playing = self.first;
        }
        self.chain.release(id);
        debug_assert!(self.is_consistent());
        true
    }

    /// Supprime toutes les chansons
    ///
    /// Chaque noeud est libéré, puis la tête et le curseur sont remis à
    /// zéro. O(n).
    pub fn delete_all(&mut self) {
        tracing::debug!(count = self.len(), "delete all");
        let mut current = self.first;
        while let Some(id) = current {
            current = self.chain.node(id).next;
            self.chain.release(id);
        }
        self.first = None;
        self.playing = None;
        debug_assert!(self.is_consistent());
    }

    /// Retourne une copie du nom de la chanson en cours de lecture
    ///
    /// `None` si la playlist est vide. La copie est indépendante du stockage
    /// interne. O(1).
    pub fn playing_song(&self) -> Option<SongName> {
        self.playing.map(|id| self.chain.node(id).name.clone())
    }

    /// Avance le curseur sur la chanson suivante
    ///
    /// Sans effet si la chanson en cours est la dernière. O(1).
    pub fn play_next(&mut self) {
        if let Some(id) = self.playing {
            if let Some(next_id) = self.chain.node(id).next {
                tracing::trace!(song = %self.chain.node(next_id).name, "play next");
                self.playing = Some(next_id);
            }
        }
        debug_assert!(self.is_consistent());
    }

    /// Recule le curseur sur la chanson précédente
    ///
    /// Sans effet si la chanson en cours est la première. O(1).
    pub fn play_previous(&mut self) {
        if let Some(id) = self.playing {
            if let Some(prev_id) = self.chain.node(id).prev {
                tracing::trace!(song = %self.chain.node(prev_id).name, "play previous");
                self.playing = Some(prev_id);
            }
        }
        debug_assert!(self.is_consistent());
    }

    /// Trie la playlist par ordre alphabétique, en place
    ///
    /// Tri à bulles échangeant uniquement les valeurs : les liens et le
    /// curseur ne bougent pas. Le curseur désignant un noeud par identité,
    /// la chanson rapportée comme en cours de lecture après le tri est celle
    /// qui occupe désormais cette position dans la chaîne. La borne de
    /// parcours se resserre sur le dernier échange de chaque passe et le tri
    /// s'arrête dès qu'une passe n'échange rien. O(n²).
    pub fn sort(&mut self) {
        let mut boundary = self.last();
        while let Some(stop) = boundary {
            let Some(mut current) = self.first else {
                break;
            };
            let mut last_swap = None;
            while current != stop {
                let Some(next) = self.chain.node(current).next else {
                    break;
                };
                if self.chain.node(current).name > self.chain.node(next).name {
                    self.chain.swap_names(current, next);
                    last_swap = Some(current);
                }
                current = next;
            }
            tracing::trace!(swapped = last_swap.is_some(), "sort pass");
            boundary = last_swap;
        }
        debug_assert!(self.is_consistent());
    }

    /// Itère sur les noms de chansons, de la tête vers la queue
    pub fn songs(&self) -> Songs<'_> {
        Songs {
            list: self,
            current: self.first,
        }
    }

    /// Écrit les noms de chansons, un par ligne, dans l'ordre de la chaîne
    ///
    /// Une playlist vide ne produit aucune sortie.
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        for name in self.songs() {
            writeln!(writer, "{name}")?;
        }
        Ok(())
    }

    /// Affiche la playlist sur la sortie standard
    pub fn print(&self) {
        let stdout = io::stdout();
        if let Err(error) = self.write_to(&mut stdout.lock()) {
            tracing::warn!("failed to write playlist to stdout: {error}");
        }
    }

    /// Compteurs d'allocation de noeuds depuis la création de la liste
    pub fn alloc_stats(&self) -> AllocStats {
        self.chain.stats()
    }

    /// Insère `name` en tête (établit le curseur si la liste était vide)
    fn push_front(&mut self, name: SongName) {
        let id = self.chain.alloc(name, None, self.first);
        match self.first {
            Some(old_head) => self.chain.node_mut(old_head).prev = Some(id),
            None => self.playing = Some(id),
        }
        self.first = Some(id);
    }

    /// Insère `name` en queue (établit le curseur si la liste était vide)
    fn push_back(&mut self, name: SongName) {
        match self.last() {
            Some(last_id) => {
                let id = self.chain.alloc(name, Some(last_id), None);
                self.chain.node_mut(last_id).next = Some(id);
            }
            None => self.push_front(name),
        }
    }

    /// Premier noeud dont le nom vaut `name`
    fn find(&self, name: &str) -> Option<NodeId> {
        let mut current = self.first;
        while let Some(id) = current {
            if self.chain.node(id).name == *name {
                return Some(id);
            }
            current = self.chain.node(id).next;
        }
        None
    }

    /// Dernier noeud de la chaîne
    fn last(&self) -> Option<NodeId> {
        let mut current = self.first?;
        while let Some(next_id) = self.chain.node(current).next {
            current = next_id;
        }
        Some(current)
    }

    /// Vérifie les invariants structurels de la liste
    ///
    /// Parcourt la chaîne vers l'avant en contrôlant la cohérence des liens
    /// `prev`, puis la reparcourt vers l'arrière : les deux parcours doivent
    /// retracer exactement les mêmes noeuds. Contrôle aussi que le curseur
    /// désigne un noeud de la chaîne, et qu'il est absent si et seulement si
    /// la chaîne est vide.
    pub(crate) fn is_consistent(&self) -> bool {
        let mut forward = Vec::new();
        let mut previous = None;
        let mut current = self.first;
        while let Some(id) = current {
            if forward.len() > self.chain.len() {
                return false; // cycle
            }
            let node = self.chain.node(id);
            if node.prev != previous {
                return false;
            }
            forward.push(id);
            previous = Some(id);
            current = node.next;
        }

        if forward.len() != self.chain.len() {
            return false;
        }

        // Retraçage arrière
        let mut backward = Vec::new();
        let mut current = forward.last().copied();
        while let Some(id) = current {
            if backward.len() > forward.len() {
                return false;
            }
            backward.push(id);
            current = self.chain.node(id).prev;
        }
        backward.reverse();
        if backward != forward {
            return false;
        }

        match self.playing {
            None => self.first.is_none(),
            Some(id) => forward.contains(&id),
        }
    }
}

/// Itérateur avant sur les noms de chansons d'une [`PlayList`]
pub struct Songs<'a> {
    list: &'a PlayList,
    current: Option<NodeId>,
}

impl<'a> Iterator for Songs<'a> {
    type Item = &'a SongName;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.chain.node(id);
        self.current = node.next;
        Some(&node.name)
    }
}
