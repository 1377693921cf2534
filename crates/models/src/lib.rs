pub mod errors;
pub mod db;
pub mod validation;
pub mod record;
pub mod menu_item;
pub mod task;
pub mod restaurant;

#[cfg(test)]
mod tests;
