pub mod application;
pub mod challenge;
pub mod donator;
pub mod techfugee;

pub use application::Entity as Application;
pub use challenge::Entity as Challenge;
pub use donator::Entity as Donator;
pub use techfugee::Entity as Techfugee;
