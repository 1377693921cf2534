/// Restaurant table round trips against in-memory SQLite
pub mod restaurant_tests;
