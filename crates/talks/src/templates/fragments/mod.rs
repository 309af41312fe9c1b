mod month_section;
mod talk_card;

pub use month_section::month_section;
pub use talk_card::talk_card;
