//! Project presentation: cards, the filterable listing and the detail view.

mod card;
mod detail;
mod list;

pub use card::ProjectCard;
pub use detail::ProjectDetail;
pub use list::ProjectList;
