pub mod clock;
pub mod db;
pub mod homepage;
pub mod presentation;
mod routes;
mod startup;
pub mod templates;
mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use db::{month_label, parse_month, Cue, Database, Resource, Talk, TalkRepository};
pub use homepage::{homepage_months, select_months, HomepageMonths, MonthBucket, MonthWindow};
pub use presentation::{DocumentRoot, PresentationFiles};
pub use routes::*;
pub use startup::*;
pub use utils::*;
