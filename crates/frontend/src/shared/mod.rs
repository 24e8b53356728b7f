pub mod api_client;
pub mod components;
pub mod editor_mode;
pub mod icons;
pub mod list_paging;
pub mod modal;
pub mod request_seq;
pub mod toast;
