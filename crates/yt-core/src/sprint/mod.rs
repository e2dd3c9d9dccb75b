pub mod sprint_plan;
pub mod sprint_resolver;
