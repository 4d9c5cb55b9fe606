pub mod calendar;
pub mod roster;
pub mod grid;
pub mod schedule;
