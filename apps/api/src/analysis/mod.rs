// Assessment narrative parsing.
// Turns free-text AI career assessments into a phased roadmap plus strengths/gaps lists.
// Pure and synchronous; persistence of the results lives elsewhere.

pub mod fallback;
pub mod handlers;
pub mod hours;
pub mod models;
pub mod phases;
pub mod priority;
pub mod resources;
pub mod roadmap;
pub mod sections;
pub mod task_line;
