//! Presentational components. They take data as props and never fetch.

mod about;
mod confirm_dialog;
mod contact;
mod error_banner;
mod experience_list;
mod header;
mod hero;
mod loading;
mod project_card;
mod tech_tags;

pub use about::About;
pub use confirm_dialog::ConfirmDialog;
pub use contact::Contact;
pub use error_banner::ErrorBanner;
pub use experience_list::ExperienceList;
pub use header::Header;
pub use hero::Hero;
pub use loading::Loading;
pub use project_card::ProjectCard;
pub use tech_tags::TechTags;
