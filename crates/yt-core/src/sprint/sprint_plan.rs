/// First half of sprint resolution: either a name is already known or the board must be searched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SprintPlan {
    Named(String),
    Discover { board: String },
}
