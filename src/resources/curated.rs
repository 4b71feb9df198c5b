// src/resources/curated.rs — Hand-curated fallback resources

use super::store::{Resource, ResourceKind};

/// Static list served when the store is empty. Five entries spanning the
/// topics learners most commonly struggle with.
pub fn curated_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "curated-arrays".into(),
            title: "Arrays and Strings Crash Course".into(),
            url: Some("https://www.freecodecamp.org/learn/coding-interview-prep".into()),
            kind: ResourceKind::Course,
            description: "Foundational array manipulation, two pointers, and sliding windows."
                .into(),
            tags: vec!["arrays".into(), "strings".into(), "two pointers".into()],
            embedding: None,
        },
        Resource {
            id: "curated-structures".into(),
            title: "VisuAlgo: Data Structures, Animated".into(),
            url: Some("https://visualgo.net/en".into()),
            kind: ResourceKind::Interactive,
            description: "Step-through animations for sorting, trees, heaps, and hash tables."
                .into(),
            tags: vec!["data structures".into(), "sorting".into(), "trees".into()],
            embedding: None,
        },
        Resource {
            id: "curated-dp".into(),
            title: "Dynamic Programming Patterns".into(),
            url: Some("https://leetcode.com/discuss/general-discussion/458695".into()),
            kind: ResourceKind::Article,
            description: "Recognizing overlapping subproblems, memoization, and tabulation."
                .into(),
            tags: vec![
                "dynamic programming".into(),
                "recursion".into(),
                "memoization".into(),
            ],
            embedding: None,
        },
        Resource {
            id: "curated-graphs".into(),
            title: "Graph Algorithms for Technical Interviews".into(),
            url: Some("https://www.youtube.com/watch?v=tWVWeAqZ0WU".into()),
            kind: ResourceKind::Video,
            description: "BFS, DFS, topological sort, and shortest paths from scratch.".into(),
            tags: vec!["graphs".into(), "bfs".into(), "dfs".into()],
            embedding: None,
        },
        Resource {
            id: "curated-sql".into(),
            title: "SQLBolt: Interactive SQL Lessons".into(),
            url: Some("https://sqlbolt.com".into()),
            kind: ResourceKind::Documentation,
            description: "Hands-on SQL querying from SELECT basics to joins and aggregates."
                .into(),
            tags: vec!["sql".into(), "databases".into(), "queries".into()],
            embedding: None,
        },
    ]
}
