use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Which rows a shopping list regeneration removes.
#[derive(
    EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReplaceScope {
    /// Every item of the user, manual ones included.
    #[default]
    All,
    /// Only items written by a previous generation.
    Generated,
}
