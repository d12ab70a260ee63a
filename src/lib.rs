//! # playchain - Playlist doublement chaînée avec curseur de lecture
//!
//! Cette crate fournit une playlist simple fidèle au modèle classique :
//! - Chaîne doublement liée, non circulaire, de noms de chansons bornés
//! - Curseur de lecture (`playing`) indépendant de la position dans la chaîne
//! - Insertions en tête, en queue, en ordre alphabétique, avant/après une cible
//! - Suppressions par position ou par nom, avec re-ancrage du curseur
//! - Tri à bulles en place qui échange les valeurs sans toucher aux liens
//!
//! # Architecture
//!
//! - **PlayList** : la structure publique (chaîne + curseur)
//! - **Chain** : arène indexée interne remplaçant les pointeurs bruts ;
//!   les liens `prev`/`next` sont des indices, jamais des références partagées
//! - **SongName** : nom de chanson borné à [`MAX_NAME_LENGTH`] octets
//!
//! Les violations de contrat (nom trop long, liste vide là où une liste non
//! vide est requise) sont fatales : elles paniquent avec un
//! [`ContractViolation`] typé. L'absence d'une chanson recherchée est, elle,
//! un résultat normal rapporté par un booléen.
//!
//! # Exemple d'utilisation
//!
//! ```
//! use playchain::PlayList;
//!
//! let mut list = PlayList::new();
//! list.insert_at_front("Purple Rain");
//! list.insert_at_end("Like a Rolling Stone");
//! list.insert_in_order("Jumping Jack Flash");
//!
//! // Le curseur est resté sur la première chanson insérée
//! assert_eq!(list.playing_song().unwrap().as_str(), "Purple Rain");
//!
//! list.play_previous();
//! assert_eq!(list.playing_song().unwrap().as_str(), "Jumping Jack Flash");
//! ```

mod error;
mod playlist;
mod song;

// Réexports publics
pub use error::ContractViolation;
pub use playlist::chain::AllocStats;
pub use playlist::{PlayList, Songs};
pub use song::{SongName, MAX_NAME_LENGTH};
