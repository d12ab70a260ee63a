//! SongName : nom de chanson borné, immuable une fois construit

use crate::error::ContractViolation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longueur maximale d'un nom de chanson, en octets
pub const MAX_NAME_LENGTH: usize = 30;

/// Un nom de chanson borné à [`MAX_NAME_LENGTH`] octets
///
/// La valeur est immuable une fois construite. Le constructeur [`new`] traite
/// un nom trop long comme une violation de contrat (l'entrée est supposée
/// validée par l'appelant) ; [`try_new`] est la variante faillible utilisée
/// aux frontières où l'entrée n'est pas de confiance (désérialisation).
///
/// L'ordre dérivé est l'ordre lexicographique sur les octets, celui utilisé
/// par [`PlayList::insert_in_order`](crate::PlayList::insert_in_order) et
/// [`PlayList::sort`](crate::PlayList::sort).
///
/// [`new`]: SongName::new
/// [`try_new`]: SongName::try_new
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SongName(String);

impl SongName {
    /// Construit un nom de chanson
    ///
    /// # Panics
    ///
    /// Panique si le nom dépasse [`MAX_NAME_LENGTH`] octets.
    #[track_caller]
    pub fn new<S: Into<String>>(name: S) -> Self {
        match Self::try_new(name) {
            Ok(name) => name,
            Err(violation) => violation.fail(),
        }
    }

    /// Construit un nom de chanson en validant la borne de longueur
    pub fn try_new<S: Into<String>>(name: S) -> Result<Self, ContractViolation> {
        let name = name.into();
        if name.len() > MAX_NAME_LENGTH {
            return Err(ContractViolation::NameTooLong {
                len: name.len(),
                max: MAX_NAME_LENGTH,
                name,
            });
        }
        Ok(Self(name))
    }

    /// Retourne le nom sous forme de `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SongName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for SongName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SongName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for SongName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SongName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SongName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        SongName::try_new(value).map_err(serde::de::Error::custom)
    }
}
