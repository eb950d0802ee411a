//! Page components for the Learner's Point site.

mod contact;
mod enroll;
mod home;

pub use contact::ContactPage;
pub use enroll::Enroll;
pub use home::Home;
