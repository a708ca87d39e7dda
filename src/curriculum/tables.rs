//! Curriculum lookup tables
//!
//! Immutable reference data. A coordinate missing from a table falls back
//! to the generic entry below it; see `resolver`.

use crate::types::Coordinate;

// =============================================================================
// Week tables
// =============================================================================

/// Theme per week, indexed by `week - 1`
pub const WEEK_THEMES: &[&str] = &[
    "Foundation and GitOps Fundamentals",
    "Development Environment and Basic Tools",
    "Kubernetes Resource Management",
    "Building the Core Drift Detection Engine",
    "Git Integration and Source Management",
    "Implementing Basic Policy Controls",
    "Notification and Alerting",
    "Advanced Drift Analysis",
    "Multi-Cluster Support - Part 1",
    "Multi-Cluster Support - Part 2",
    "Error Handling and Resilience",
    "Scaling and Performance",
    "Security Hardening",
    "Monitoring and Observability",
    "API Design and Development",
    "Third-Party Integrations",
    "Authentication and Authorization",
    "Data Management and Retention",
    "Multi-Tenancy Implementation",
    "Billing and Usage Tracking",
    "User Management and Onboarding",
    "Service Level Objectives",
    "Documentation and User Guides",
    "Demonstration and Presentation",
];

pub const WEEK_OBJECTIVES: &[(u32, [&str; 5])] = &[
    (
        1,
        [
            "Understand GitOps principles and configuration drift concepts",
            "Set up development environment with necessary tools",
            "Learn basic Kubernetes resource management",
            "Create a simple drift detection mechanism",
            "Document the foundation of our approach",
        ],
    ),
    (
        2,
        [
            "Set up comprehensive development environment",
            "Master Git workflow for the project",
            "Understand Kubernetes API interactions",
            "Implement basic resource comparison utilities",
            "Create test harness for drift detection",
        ],
    ),
];

pub const GENERIC_WEEK_OBJECTIVES: &[&str] = &[
    "Continue developing the Detect_Drift project",
    "Master relevant DevOps/SRE concepts and tools",
    "Implement and test new features",
    "Document progress and decisions",
    "Prepare for the next phase of development",
];

// =============================================================================
// Day tables
// =============================================================================

pub const DAY_TITLES: &[(Coordinate, &str)] = &[
    (
        Coordinate::new(1, 1),
        "Introduction to GitOps and Configuration Drift",
    ),
    (
        Coordinate::new(1, 2),
        "Setting Up Your Development Environment",
    ),
    (
        Coordinate::new(1, 3),
        "Understanding Kubernetes Resources and State",
    ),
    (
        Coordinate::new(1, 4),
        "Introduction to Drift Detection Approaches",
    ),
    (Coordinate::new(1, 5), "Building Your First Drift Detector"),
    (Coordinate::new(2, 1), "Advanced Kubernetes Environment Setup"),
    (Coordinate::new(2, 2), "Git Workflows and Repository Structure"),
    (
        Coordinate::new(2, 3),
        "Using the Kubernetes API for State Retrieval",
    ),
    (
        Coordinate::new(2, 4),
        "Implementing Resource Comparison Algorithms",
    ),
    (
        Coordinate::new(2, 5),
        "Testing Drift Detection with Various Resources",
    ),
];

pub const WHY_THIS_MATTERS: &[(Coordinate, &str)] = &[(
    Coordinate::new(1, 1),
    "Configuration drift is one of the most common yet challenging problems in modern infrastructure management. When live environments don't match their declared state in version control, it leads to inconsistent environments, failed deployments, security vulnerabilities, and difficult-to-diagnose production issues.",
)];

pub const GENERIC_WHY_THIS_MATTERS: &str = "This topic is essential for building a comprehensive drift detection solution and developing critical DevOps/SRE skills.";

pub const CONNECTION_TO_PROJECT: &[(Coordinate, &str)] = &[(
    Coordinate::new(1, 1),
    "Today establishes the foundation for our Detect_Drift tool by understanding the problem space, exploring existing approaches, and defining our unique value proposition. Without this conceptual foundation, we can't build an effective solution.",
)];

pub const GENERIC_CONNECTION_TO_PROJECT: &str = "This day's work builds on previous components and adds essential functionality to our Detect_Drift solution.";

pub const LEARNING_OBJECTIVES: &[(Coordinate, [&str; 5])] = &[(
    Coordinate::new(1, 1),
    [
        "Explain the concept of configuration drift and its impact on DevOps practices",
        "Describe the principles of GitOps and how they relate to drift detection",
        "Compare at least three existing approaches to drift detection and their limitations",
        "Set up a basic local Kubernetes environment with a Git repository",
        "Manually create and detect a simple case of configuration drift",
    ],
)];

pub const GENERIC_LEARNING_OBJECTIVES: &[&str] = &[
    "Implement new functionality for the Detect_Drift tool",
    "Master relevant DevOps concepts and technologies",
    "Apply best practices to ensure code quality and testability",
    "Document implementation decisions and architecture",
    "Validate solution against real-world scenarios",
];

pub const PREREQUISITES: &[(Coordinate, [&str; 5])] = &[(
    Coordinate::new(1, 1),
    [
        "Computer with at least 8GB RAM, 4 CPU cores, and 20GB free disk space",
        "Basic understanding of Git (cloning, committing, pushing)",
        "Familiarity with YAML syntax",
        "Terminal/command-line basics",
        "Administrator access to install software",
    ],
)];

pub const GENERIC_PREREQUISITES: &[&str] = &[
    "Completion of previous day's tasks",
    "Working development environment",
    "Understanding of concepts covered previously",
    "Access to project repository",
    "Required tools and dependencies installed",
];

/// Exact-match lookup in a coordinate table
pub fn lookup<T>(table: &[(Coordinate, T)], coord: Coordinate) -> Option<&T> {
    table
        .iter()
        .find(|(key, _)| *key == coord)
        .map(|(_, value)| value)
}
