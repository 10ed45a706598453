mod blog;
mod event;
mod event_category;
mod festival_event;
mod participant;
mod school;
mod speaker;
mod sponsor;
mod stored;
mod user;

pub use blog::BlogPost;
pub use event::EventListing;
pub use event_category::{EventCategory, EventCategoryLink};
pub use festival_event::FestivalEvent;
pub use participant::{NewParticipant, Participant};
pub use school::{NewSchool, School};
pub use speaker::Speaker;
pub use sponsor::Sponsor;
pub use stored::Stored;
pub use user::UserProfile;
