pub mod health;
pub mod recommendations;
pub mod screenings;
