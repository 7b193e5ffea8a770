//! Clientbound messages.

pub mod game;

use serde::Serialize;

use game::{CConfigState, CContainerSetContent, CGameMessage, CInventoryOverlay, CUpdateWeight};

/// Every message the presentation layer can receive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ClientboundMessage {
    /// Chatbox text.
    GameMessage(CGameMessage),
    /// Opens an interface next to the inventory overlay.
    InventoryOverlay(CInventoryOverlay),
    /// Replaces the contents of an item display.
    ContainerSetContent(CContainerSetContent),
    /// Updates a client state variable.
    ConfigState(CConfigState),
    /// Updates the carried weight display.
    UpdateWeight(CUpdateWeight),
}

macro_rules! impl_from_packet {
    ($($variant:ident => $packet:ty),* $(,)?) => {
        $(
            impl From<$packet> for ClientboundMessage {
                fn from(packet: $packet) -> Self {
                    Self::$variant(packet)
                }
            }
        )*
    };
}

impl_from_packet! {
    GameMessage => CGameMessage,
    InventoryOverlay => CInventoryOverlay,
    ContainerSetContent => CContainerSetContent,
    ConfigState => CConfigState,
    UpdateWeight => CUpdateWeight,
}
