pub mod human;

pub use human::PlaySession;
