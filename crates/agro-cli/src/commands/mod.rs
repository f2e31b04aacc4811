pub mod dispatch;
pub mod exercise;
pub mod find;
pub mod list;
pub mod menu;
pub mod search;
pub mod show;
pub mod sorted;
pub mod stats;
