//! Types d'erreurs pour playchain

/// Violation de contrat : erreur de programmation chez l'appelant, fatale
///
/// Ces cas ne sont jamais tolérés silencieusement ni réessayés : l'opération
/// panique avant toute mutation de la chaîne ou du curseur. L'absence d'une
/// chanson recherchée n'est PAS une violation de contrat, elle est rapportée
/// par un booléen par les opérations de recherche.
#[derive(Debug, thiserror::Error)]
pub enum ContractViolation {
    #[error("song name is too long ({len} bytes, max {max}): {name:?}")]
    NameTooLong {
        name: String,
        len: usize,
        max: usize,
    },

    #[error("operation requires a non-empty playlist")]
    EmptyPlaylist,

    #[error("node slot {0} is vacant or out of bounds")]
    InvalidNode(usize),
}

impl ContractViolation {
    /// Termine le programme avec le message de la violation
    #[track_caller]
    pub(crate) fn fail(self) -> ! {
        panic!("{self}")
    }
}
