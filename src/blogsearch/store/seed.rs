use super::RecordStore;
use crate::model::Record;

/// (id, title, category, content)
const SEED_POSTS: [(u32, &str, &str, &str); 14] = [
    (1, "React Basics", "React", "Learn React basics step by step."),
    (2, "JavaScript Tips", "JavaScript", "Tips and tricks for JavaScript."),
    (3, "Responsive Design", "CSS", "How to create mobile-friendly designs."),
    (4, "State Management", "React", "Understanding state in React."),
    (5, "Advanced CSS", "CSS", "Dive deep into Flexbox and Grid layouts."),
    (6, "NodeJS Basics", "NodeJS", "Learn the fundamentals of NodeJS."),
    (7, "Building APIs", "NodeJS", "A guide to creating REST APIs with NodeJS."),
    (8, "Animations in CSS", "CSS", "Make your pages come alive with CSS animations."),
    (9, "JavaScript ES6+", "JavaScript", "Master modern JavaScript syntax."),
    (10, "Hooks in React", "React", "Understanding React hooks and their uses."),
    (11, "Deploying Apps", "NodeJS", "Step-by-step guide to deploying apps."),
    (12, "GraphQL Basics", "React", "Learn the fundamentals of GraphQL."),
    (13, "Web Accessibility", "CSS", "Tips for creating accessible web apps."),
    (14, "Modern JavaScript", "JavaScript", "Discover the latest features in JS."),
];

/// The built-in collection of blog posts.
#[derive(Debug, Clone)]
pub struct SeedStore {
    records: Vec<Record>,
}

impl SeedStore {
    pub fn new() -> Self {
        let records = SEED_POSTS
            .iter()
            .map(|(id, title, category, content)| Record::new(*id, *title, *category, *content))
            .collect();
        Self { records }
    }
}

impl Default for SeedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for SeedStore {
    fn records(&self) -> &[Record] {
        &self.records
    }
}
