//! Data models: database rows and their wire representations.
//!
//! Row structs derive [`sqlx::FromRow`] against snake_case columns; everything
//! serialized to a client is renamed to the camelCase names the API exposes.

mod developer;
mod project;
mod technology;

pub use developer::{
    Developer, DeveloperInfo, DeveloperInfoSummary, DeveloperPatch, DeveloperWithInfo,
    NewDeveloper, NewDeveloperInfo, PreferredOs,
};
pub use project::{NewProject, Project, ProjectPatch, ProjectWithTechnologies};
pub use technology::{ProjectTechnologyLink, Technology, TechnologyName, TechnologyRef};
