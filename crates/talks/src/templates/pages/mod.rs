pub mod home;
pub mod not_found;
pub mod talk_detail;
pub mod talk_list;
pub mod talk_selection;

pub use home::homepage_page;
pub use not_found::not_found_page;
pub use talk_detail::{talk_detail_page, TalkPage};
pub use talk_list::talk_list_page;
pub use talk_selection::talk_selection_page;
