pub mod verify;
pub mod vk_info;
