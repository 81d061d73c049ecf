//! Icon keys for project and skill cards.
//!
//! The frontend maps each key to a glyph from its icon library. The set is
//! closed: anything the sanitizer does not recognize becomes
//! [`IconKey::Server`].

use serde::{Deserialize, Serialize};

/// A recognized icon key.
///
/// Serialized as the camelCase key used by the frontend icon library
/// (e.g. `"fileText"`, `"hardDrive"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconKey {
    Activity,
    Boxes,
    Briefcase,
    Cloud,
    Database,
    FileText,
    Globe,
    HardDrive,
    Lock,
    Monitor,
    Network,
    Phone,
    #[default]
    Server,
    Shield,
    Wifi,
}

/// One entry of the icon picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconOption {
    pub value: IconKey,
    pub label: &'static str,
}

impl IconKey {
    /// Picker order.
    pub const ALL: [IconKey; 15] = [
        IconKey::Server,
        IconKey::Database,
        IconKey::Network,
        IconKey::Phone,
        IconKey::Shield,
        IconKey::Monitor,
        IconKey::Boxes,
        IconKey::Wifi,
        IconKey::Lock,
        IconKey::Globe,
        IconKey::FileText,
        IconKey::Cloud,
        IconKey::HardDrive,
        IconKey::Activity,
        IconKey::Briefcase,
    ];

    /// The JSON spelling of this key.
    pub fn as_key(self) -> &'static str {
        match self {
            IconKey::Activity => "activity",
            IconKey::Boxes => "boxes",
            IconKey::Briefcase => "briefcase",
            IconKey::Cloud => "cloud",
            IconKey::Database => "database",
            IconKey::FileText => "fileText",
            IconKey::Globe => "globe",
            IconKey::HardDrive => "hardDrive",
            IconKey::Lock => "lock",
            IconKey::Monitor => "monitor",
            IconKey::Network => "network",
            IconKey::Phone => "phone",
            IconKey::Server => "server",
            IconKey::Shield => "shield",
            IconKey::Wifi => "wifi",
        }
    }

    /// Look up a key by its exact JSON spelling.
    pub fn from_key(key: &str) -> Option<IconKey> {
        IconKey::ALL.into_iter().find(|icon| icon.as_key() == key)
    }

    /// Total mapping from an untrusted value to a key; unknown or missing
    /// input yields the default icon.
    pub fn or_default(key: Option<&str>) -> IconKey {
        key.and_then(IconKey::from_key).unwrap_or_default()
    }

    /// Picker label shown in the admin dashboard.
    pub fn label(self) -> &'static str {
        match self {
            IconKey::Server => "Serveur",
            IconKey::Database => "Base de données",
            IconKey::Network => "Réseau",
            IconKey::Phone => "Téléphonie",
            IconKey::Shield => "Sécurité",
            IconKey::Monitor => "Systèmes",
            IconKey::Boxes => "Virtualisation",
            IconKey::Wifi => "Wi-Fi",
            IconKey::Lock => "Sécurité (Lock)",
            IconKey::Globe => "Réseau global",
            IconKey::FileText => "Fichiers & ITSM",
            IconKey::Cloud => "Cloud",
            IconKey::HardDrive => "Sauvegarde",
            IconKey::Activity => "Monitoring",
            IconKey::Briefcase => "Portefeuille",
        }
    }

    /// All picker entries, in picker order.
    pub fn options() -> Vec<IconOption> {
        IconKey::ALL
            .into_iter()
            .map(|value| IconOption {
                value,
                label: value.label(),
            })
            .collect()
    }
}
