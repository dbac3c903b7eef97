pub mod blood_sugar;
pub mod patient;
pub mod risk;
pub mod screening;
