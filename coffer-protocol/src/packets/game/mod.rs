//! Play-state clientbound messages.

mod c_config_state;
mod c_container_set_content;
mod c_game_message;
mod c_inventory_overlay;
mod c_update_weight;
mod slot_data;

pub use c_config_state::CConfigState;
pub use c_container_set_content::CContainerSetContent;
pub use c_game_message::CGameMessage;
pub use c_inventory_overlay::CInventoryOverlay;
pub use c_update_weight::CUpdateWeight;
pub use slot_data::SlotData;
