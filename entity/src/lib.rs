//! # Entity 模块
//!
//! 包含所有 Sea-ORM 实体定义

pub mod users;
pub mod projects;
pub mod devices;
pub mod engineers;
pub mod inspections;
pub mod repairs;

pub use users::Entity as Users;
pub use projects::Entity as Projects;
pub use devices::Entity as Devices;
pub use engineers::Entity as Engineers;
pub use inspections::Entity as Inspections;
pub use repairs::Entity as Repairs;

#[cfg(test)]
mod tests;
