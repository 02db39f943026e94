//! Sample portfolio data for a fresh store

use tracing::info;

use crate::domain::project::{NewProject, ProjectRepository, ProjectValidationError};
use crate::domain::DomainError;

struct SampleProject {
    title: &'static str,
    description: &'static str,
    tech_stack: &'static [&'static str],
    link: &'static str,
}

const SAMPLE_PROJECTS: &[SampleProject] = &[
    SampleProject {
        title: "E-Commerce Platform",
        description: "A full-featured e-commerce platform with product management, shopping cart, and secure payment integration. Built with modern web technologies for optimal performance.",
        tech_stack: &["React", "Node.js", "PostgreSQL", "Stripe", "Docker"],
        link: "https://github.com/example/ecommerce",
    },
    SampleProject {
        title: "Real-Time Chat Application",
        description: "A scalable real-time chat application with support for group chats, file sharing, and end-to-end encryption. Implemented WebSocket for instant messaging.",
        tech_stack: &["React", "TypeScript", "Socket.io", "MongoDB", "Redis"],
        link: "https://github.com/example/chat-app",
    },
    SampleProject {
        title: "Task Management System",
        description: "An intuitive project management tool with kanban boards, team collaboration features, and time tracking. Designed for agile development teams.",
        tech_stack: &["Next.js", "Fastify", "PostgreSQL", "Tailwind CSS"],
        link: "https://github.com/example/task-manager",
    },
    SampleProject {
        title: "Social Media Analytics Dashboard",
        description: "A comprehensive analytics dashboard for social media metrics with data visualization, trend analysis, and automated reporting features.",
        tech_stack: &["React", "D3.js", "Python", "FastAPI", "PostgreSQL"],
        link: "https://github.com/example/analytics",
    },
    SampleProject {
        title: "Weather Forecast App",
        description: "A beautiful weather application with real-time forecasts, location-based services, and interactive weather maps. Responsive design for all devices.",
        tech_stack: &["React Native", "TypeScript", "OpenWeather API", "Redux"],
        link: "https://github.com/example/weather-app",
    },
    SampleProject {
        title: "Blogging Platform",
        description: "A feature-rich blogging platform with markdown support, SEO optimization, and content management. Includes comment system and social sharing.",
        tech_stack: &["React", "Node.js", "MongoDB", "Express", "AWS S3"],
        link: "https://github.com/example/blog-platform",
    },
];

/// The sample projects, in insertion order
pub fn sample_projects() -> Result<Vec<NewProject>, ProjectValidationError> {
    SAMPLE_PROJECTS
        .iter()
        .map(|sample| {
            NewProject::new(sample.title, sample.description)?
                .with_tech_stack(sample.tech_stack.iter().copied())
                .with_link(sample.link)
        })
        .collect()
}

/// Insert the sample projects when the store has none
///
/// Returns the number of projects inserted; zero when any project exists.
pub async fn seed_projects(repository: &dyn ProjectRepository) -> Result<usize, DomainError> {
    let existing = repository.count().await?;

    if existing > 0 {
        info!(existing, "Projects already present, skipping seed");
        return Ok(0);
    }

    let samples = sample_projects().map_err(|e| DomainError::internal(e.to_string()))?;
    let total = samples.len();

    for project in samples {
        repository.create(project).await?;
    }

    info!(inserted = total, "Sample projects inserted");

    Ok(total)
}
